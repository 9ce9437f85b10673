// Canonical ordering fixtures: division buckets ascend by numeric code
// with encounter order breaking ties, tiers render 1 then 2 then 3, and
// input order survives inside a tier.

use matbook_core::{
    distinct_divisions, division_key, divisions_with_tier, group_materials, tier_counts,
    Material, Tier,
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

#[test]
fn divisions_sort_by_numeric_code() {
    let materials = vec![
        material("Membrane", "07", "Thermal and Moisture Protection", 1),
        material("Slab", "03", "Concrete", 1),
        material("Sprinkler Main", "21", "Fire Suppression", 1),
        material("Roof Panel", "07", "Thermal and Moisture Protection", 1),
    ];
    let groups = group_materials(&materials);

    let numbers: Vec<&str> = groups.iter().map(|g| g.number.as_str()).collect();
    assert_eq!(numbers, vec!["03", "07", "21"]);

    // Both "07" materials share one bucket, original relative order kept.
    let seven = &groups[1];
    assert_eq!(seven.key, "07 - Thermal and Moisture Protection");
    let names: Vec<&str> = seven.tier1.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Membrane", "Roof Panel"]);
}

#[test]
fn tiers_emit_one_two_three_with_stable_order_within_a_tier() {
    let materials = vec![
        material("Custom Louver", "08", "Openings", 2),
        material("Storefront", "08", "Openings", 1),
        material("Electrochromic Unit", "08", "Openings", 3),
        material("Hollow Metal Door", "08", "Openings", 1),
    ];
    let groups = group_materials(&materials);
    assert_eq!(groups.len(), 1);

    let rendered: Vec<(&str, u8)> = groups[0]
        .ordered()
        .map(|m| (m.name.as_str(), m.tier.rank()))
        .collect();
    assert_eq!(
        rendered,
        vec![
            ("Storefront", 1),
            ("Hollow Metal Door", 1),
            ("Custom Louver", 2),
            ("Electrochromic Unit", 3),
        ]
    );
}

#[test]
fn division_name_typos_bucket_separately() {
    let materials = vec![
        material("Slab", "03", "Concrete", 1),
        material("Precast Panel", "03", "Concret", 1),
    ];
    let groups = group_materials(&materials);
    assert_eq!(groups.len(), 2);
    assert_ne!(division_key(&materials[0]), division_key(&materials[1]));
    // Tie on the numeric code: first-encounter order decides.
    assert_eq!(groups[0].name, "Concrete");
    assert_eq!(groups[1].name, "Concret");
}

#[test]
fn unparsable_division_numbers_sort_last() {
    let materials = vec![
        material("Mystery Product", "??", "Unknown Things", 1),
        material("Slab", "03", "Concrete", 1),
    ];
    let groups = group_materials(&materials);
    assert_eq!(groups[0].number, "03");
    assert_eq!(groups[1].number, "??");
}

#[test]
fn counts_and_tier_division_listing() {
    let materials = vec![
        material("Slab", "03", "Concrete", 1),
        material("Roof Panel", "07", "Thermal and Moisture Protection", 1),
        material("Custom Skylight", "08", "Openings", 2),
        material("Adaptive Facade", "08", "Openings", 3),
    ];
    let counts = tier_counts(&materials);
    assert_eq!((counts.tier1, counts.tier2, counts.tier3), (2, 1, 1));
    assert_eq!(counts.total(), 4);

    let groups = group_materials(&materials);
    assert_eq!(
        divisions_with_tier(&groups, Tier::ReadilyAvailable),
        vec!["Concrete", "Thermal and Moisture Protection"]
    );
    assert_eq!(divisions_with_tier(&groups, Tier::CustomDevelopment), vec!["Openings"]);

    assert_eq!(
        distinct_divisions(&materials),
        vec!["Concrete", "Thermal and Moisture Protection", "Openings"]
    );
}
