//! Synthetic consultant and supplier directory. Entries are fabricated
//! from fixed name pools and arithmetic offsets, a pure function of
//! (specialty, index, tier): the same inputs always yield the same
//! directory. No randomness anywhere, or repeat renders would diverge.

use crate::model::{Consultant, Material, ProjectLocation, Supplier, SupplierRating, Tier};
use crate::taxonomy::{
    specialties_for_division, supplier_categories_for_division, GENERIC_SPECIALTY,
    GENERIC_SUPPLIER_CATEGORY,
};

const FIRST_NAMES: &[&str] = &[
    "Sarah", "Michael", "Jennifer", "David", "Lisa", "Robert", "Amanda", "James",
];

const LAST_NAMES: &[&str] = &[
    "Chen", "Rodriguez", "Thompson", "Patel", "Nakamura", "Williams", "Okafor", "Larsen",
];

fn slug(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn push_unique(list: &mut Vec<String>, label: &str) {
    if !list.iter().any(|existing| existing == label) {
        list.push(label.to_string());
    }
}

/// Deduplicated, insertion-ordered specialty union across divisions.
/// Unknown divisions contribute the generic label once.
fn specialty_union(divisions: &[String]) -> Vec<String> {
    let mut specialties: Vec<String> = Vec::new();
    for division in divisions {
        let mapped = specialties_for_division(division);
        if mapped.is_empty() {
            push_unique(&mut specialties, GENERIC_SPECIALTY);
        } else {
            for label in mapped {
                push_unique(&mut specialties, label);
            }
        }
    }
    specialties
}

fn firm_name(last: &str, tier: Tier) -> String {
    match tier {
        Tier::ReadilyAvailable => format!("{last} Associates"),
        Tier::RequiresCustomization => format!("{last} Custom Solutions"),
        Tier::CustomDevelopment => format!("{last} Innovation Lab"),
    }
}

fn tier_disciplines(tier: Tier) -> &'static [&'static str] {
    match tier {
        Tier::ReadilyAvailable => &[],
        Tier::RequiresCustomization => &["Custom Fabrication"],
        Tier::CustomDevelopment => &["Materials R&D", "Innovation Consulting"],
    }
}

fn consultant_entry(specialty: &str, index: usize, tier: Tier) -> Consultant {
    let first = FIRST_NAMES[index % FIRST_NAMES.len()];
    let last = LAST_NAMES[(index + tier.rank() as usize) % LAST_NAMES.len()];
    let firm = firm_name(last, tier);
    let firm_slug = slug(&firm);

    let mut disciplines = vec![specialty.to_string()];
    for extra in tier_disciplines(tier) {
        disciplines.push((*extra).to_string());
    }

    Consultant {
        name: format!("{first} {last}"),
        firm: firm.clone(),
        specialty: specialty.to_string(),
        email: format!(
            "{}.{}@{}.com",
            first.to_ascii_lowercase(),
            last.to_ascii_lowercase(),
            firm_slug
        ),
        phone: format!(
            "(555) {:03}-{:04}",
            210 + 10 * index + tier.rank() as usize,
            1400 + 37 * index
        ),
        website: if index % 2 == 0 {
            Some(format!("https://www.{firm_slug}.com"))
        } else {
            None
        },
        disciplines,
    }
}

fn consultant_cap(tier: Tier) -> usize {
    match tier {
        Tier::ReadilyAvailable => 3,
        Tier::RequiresCustomization => 4,
        Tier::CustomDevelopment => 5,
    }
}

/// Synthesize consultants for the given divisions at the given tier.
/// One entry per specialty, capped per tier (3, 4, or 5).
pub fn consultants_for(divisions: &[String], tier: Tier) -> Vec<Consultant> {
    specialty_union(divisions)
        .iter()
        .take(consultant_cap(tier))
        .enumerate()
        .map(|(index, specialty)| consultant_entry(specialty, index, tier))
        .collect()
}

/// Deduplicated, insertion-ordered supplier categories across the
/// divisions present in `materials`, at most two per division.
fn category_union(materials: &[Material]) -> Vec<String> {
    let mut divisions: Vec<&str> = Vec::new();
    for material in materials {
        if !divisions.contains(&material.csi_division.as_str()) {
            divisions.push(&material.csi_division);
        }
    }

    let mut categories: Vec<String> = Vec::new();
    for division in &divisions {
        let mapped = supplier_categories_for_division(division);
        if mapped.is_empty() {
            push_unique(&mut categories, GENERIC_SUPPLIER_CATEGORY);
        } else {
            for label in mapped.iter().take(2) {
                push_unique(&mut categories, label);
            }
        }
    }
    categories
}

fn local_supplier(region: &str, category: &str, index: usize) -> Supplier {
    let first = FIRST_NAMES[(index + 3) % FIRST_NAMES.len()];
    let last = LAST_NAMES[(index + 5) % LAST_NAMES.len()];
    let company = format!("{region} {category} Supply");

    Supplier {
        contact: format!("{first} {last}"),
        company: company.clone(),
        location: region.to_string(),
        material_types: vec![category.to_string()],
        email: format!("sales@{}.com", slug(&company)),
        phone: format!("(555) {:03}-{:04}", 300 + 7 * index, 2100 + 53 * index),
        website: if index % 2 == 0 {
            Some(format!("https://www.{}.com", slug(&company)))
        } else {
            None
        },
        rating: SupplierRating::Local,
        specialties: vec!["Contractor Sales".to_string()],
    }
}

fn national_supplier(category: &str, index: usize) -> Supplier {
    let first = FIRST_NAMES[(index + 1) % FIRST_NAMES.len()];
    let last = LAST_NAMES[(index + 2) % LAST_NAMES.len()];
    let company = format!("National {category} Distributors");

    Supplier {
        contact: format!("{first} {last}"),
        company: company.clone(),
        location: "National Distribution".to_string(),
        material_types: vec![category.to_string()],
        email: format!("orders@{}.com", slug(&company)),
        phone: format!("(800) {:03}-{:04}", 555, 8000 + 91 * index),
        website: Some(format!("https://www.{}.com", slug(&company))),
        rating: SupplierRating::National,
        specialties: vec!["Volume Distribution".to_string()],
    }
}

/// Tier argument the renderers pass to [`suppliers_for`]: customization
/// work dominates the sourcing strategy whenever any tier-2 material is
/// present.
pub fn supplier_tier(materials: &[Material]) -> Tier {
    if materials.iter().any(|m| m.tier == Tier::RequiresCustomization) {
        Tier::RequiresCustomization
    } else {
        Tier::ReadilyAvailable
    }
}

/// Synthesize suppliers for the divisions present in `materials`.
///
/// One local supplier per category, region label embedded in the company
/// name. National distributors (up to 3) are appended after all locals
/// when the tier is 2 or more than three distinct divisions are present.
/// Never fails: a missing location degrades to the `Local Area` region.
pub fn suppliers_for(
    materials: &[Material],
    location: Option<&ProjectLocation>,
    tier: Tier,
) -> Vec<Supplier> {
    let region = location
        .map(ProjectLocation::region_label)
        .unwrap_or_else(|| "Local Area".to_string());

    let categories = category_union(materials);
    let mut suppliers: Vec<Supplier> = categories
        .iter()
        .enumerate()
        .map(|(index, category)| local_supplier(&region, category, index))
        .collect();

    let division_count = crate::grouping::distinct_divisions(materials).len();
    if tier == Tier::RequiresCustomization || division_count > 3 {
        for (index, category) in categories.iter().take(3).enumerate() {
            suppliers.push(national_supplier(category, index));
        }
    }

    suppliers
}
