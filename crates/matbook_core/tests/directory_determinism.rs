// Directory synthesis fixtures: identical inputs yield identical
// entries, tier caps hold, and national distributors gate on tier and
// division breadth.

use matbook_core::{
    consultants_for, suppliers_for, Material, ProjectLocation, SupplierRating, Tier,
};

fn material(name: &str, number: &str, division: &str, tier: u8) -> Material {
    Material {
        name: name.to_string(),
        description: String::new(),
        properties: Vec::new(),
        tier: Tier::try_from(tier).expect("tier"),
        reasoning: String::new(),
        csi_division: division.to_string(),
        csi_number: number.to_string(),
        sustainability: None,
        alternatives: Vec::new(),
        code_note: None,
    }
}

fn portland() -> ProjectLocation {
    ProjectLocation {
        input: "100 Main St, Portland OR".to_string(),
        lat: 45.52,
        lon: -122.68,
        jurisdiction: Some("Portland, OR".to_string()),
        building_code: Some("Oregon Structural Specialty Code".to_string()),
    }
}

#[test]
fn repeated_calls_produce_identical_directories() {
    let divisions = vec!["Concrete".to_string(), "Openings".to_string()];
    assert_eq!(
        consultants_for(&divisions, Tier::RequiresCustomization),
        consultants_for(&divisions, Tier::RequiresCustomization)
    );

    let materials = vec![
        material("Slab", "03", "Concrete", 1),
        material("Custom Skylight", "08", "Openings", 2),
    ];
    let location = portland();
    assert_eq!(
        suppliers_for(&materials, Some(&location), Tier::RequiresCustomization),
        suppliers_for(&materials, Some(&location), Tier::RequiresCustomization)
    );
}

#[test]
fn consultant_counts_cap_per_tier() {
    // Five divisions contribute more specialties than any tier admits.
    let divisions = vec![
        "Concrete".to_string(),
        "Metals".to_string(),
        "Openings".to_string(),
        "Finishes".to_string(),
        "Electrical".to_string(),
    ];
    assert_eq!(consultants_for(&divisions, Tier::ReadilyAvailable).len(), 3);
    assert_eq!(consultants_for(&divisions, Tier::RequiresCustomization).len(), 4);
    assert_eq!(consultants_for(&divisions, Tier::CustomDevelopment).len(), 5);
}

#[test]
fn specialties_deduplicate_across_repeated_divisions() {
    let divisions = vec![
        "Concrete".to_string(),
        "Concrete".to_string(),
        "Concrete".to_string(),
    ];
    let consultants = consultants_for(&divisions, Tier::CustomDevelopment);
    assert_eq!(consultants.len(), 2);
    assert_ne!(consultants[0].specialty, consultants[1].specialty);
}

#[test]
fn tier_one_firms_are_associates() {
    let consultants = consultants_for(&["Masonry".to_string()], Tier::ReadilyAvailable);
    assert!(!consultants.is_empty());
    for c in &consultants {
        assert!(c.firm.ends_with("Associates"));
        assert_eq!(c.disciplines, vec![c.specialty.clone()]);
    }
}

#[test]
fn local_suppliers_embed_the_region_label() {
    let materials = vec![material("Roof Membrane", "07", "Thermal and Moisture Protection", 1)];
    let location = portland();
    let suppliers = suppliers_for(&materials, Some(&location), Tier::ReadilyAvailable);

    assert!(!suppliers.is_empty());
    for s in &suppliers {
        assert_eq!(s.rating, SupplierRating::Local);
        assert!(s.company.starts_with("Portland "));
        assert_eq!(s.location, "Portland");
        assert!(s.email.starts_with("sales@portland"));
    }
}

#[test]
fn missing_location_defaults_to_local_area() {
    let materials = vec![material("Slab", "03", "Concrete", 1)];
    let suppliers = suppliers_for(&materials, None, Tier::ReadilyAvailable);
    assert!(!suppliers.is_empty());
    assert!(suppliers[0].company.starts_with("Local Area "));
}

#[test]
fn nationals_append_after_locals_for_tier_two() {
    let materials = vec![
        material("Slab", "03", "Concrete", 2),
        material("Storefront", "08", "Openings", 2),
    ];
    let location = portland();
    let suppliers = suppliers_for(&materials, Some(&location), Tier::RequiresCustomization);

    let first_national = suppliers
        .iter()
        .position(|s| s.rating == SupplierRating::National)
        .expect("national suppliers present");
    assert!(suppliers[..first_national]
        .iter()
        .all(|s| s.rating == SupplierRating::Local));
    assert!(suppliers[first_national..]
        .iter()
        .all(|s| s.rating == SupplierRating::National));

    let nationals: Vec<_> = suppliers
        .iter()
        .filter(|s| s.rating == SupplierRating::National)
        .collect();
    assert!(nationals.len() <= 3);
    for s in &nationals {
        assert_eq!(s.location, "National Distribution");
        assert!(s.phone.starts_with("(800) "));
    }
}

#[test]
fn nationals_also_trigger_on_broad_division_coverage() {
    let materials = vec![
        material("Slab", "03", "Concrete", 1),
        material("Brick", "04", "Masonry", 1),
        material("Beam", "05", "Metals", 1),
        material("Glulam", "06", "Wood, Plastics, and Composites", 1),
    ];
    let suppliers = suppliers_for(&materials, None, Tier::ReadilyAvailable);
    assert!(suppliers.iter().any(|s| s.rating == SupplierRating::National));
}

#[test]
fn tier_one_narrow_coverage_stays_local() {
    let materials = vec![
        material("Slab", "03", "Concrete", 1),
        material("Brick", "04", "Masonry", 1),
    ];
    let suppliers = suppliers_for(&materials, None, Tier::ReadilyAvailable);
    assert!(suppliers.iter().all(|s| s.rating == SupplierRating::Local));
}

#[test]
fn unknown_division_falls_back_to_generic_category() {
    let materials = vec![material("Mystery Product", "99", "Unknown Things", 1)];
    let suppliers = suppliers_for(&materials, None, Tier::ReadilyAvailable);
    assert_eq!(suppliers.len(), 1);
    assert_eq!(suppliers[0].material_types, vec!["General Building Materials"]);
}
