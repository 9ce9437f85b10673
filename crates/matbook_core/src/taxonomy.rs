//! Static CSI MasterFormat taxonomy: division name to consulting
//! specialties, and division name to supplier categories. Pure lookup,
//! no logic. Division names that do not match any table entry fall back
//! to the generic labels.

pub const GENERIC_SPECIALTY: &str = "General Consulting";
pub const GENERIC_SUPPLIER_CATEGORY: &str = "General Building Materials";

/// Consulting specialties associated with a CSI division name.
/// Returns an empty slice for unknown divisions; callers substitute
/// [`GENERIC_SPECIALTY`].
pub fn specialties_for_division(division: &str) -> &'static [&'static str] {
    match division {
        "Concrete" => &["Structural Engineering", "Concrete Technology"],
        "Masonry" => &["Masonry Engineering", "Restoration Consulting"],
        "Metals" => &["Structural Steel Design", "Metallurgical Consulting"],
        "Wood, Plastics, and Composites" => &["Timber Engineering", "Composite Materials"],
        "Thermal and Moisture Protection" => &["Building Envelope", "Roofing Systems"],
        "Openings" => &["Facade Engineering", "Glazing Systems"],
        "Finishes" => &["Interior Architecture", "Acoustical Consulting"],
        "Specialties" => &["Architectural Specialties"],
        "Furnishings" => &["Interior Design"],
        "Fire Suppression" => &["Fire Protection Engineering"],
        "Plumbing" => &["Plumbing Engineering"],
        "Heating, Ventilating, and Air Conditioning (HVAC)" => &["Mechanical Engineering"],
        "Electrical" => &["Electrical Engineering", "Lighting Design"],
        "Earthwork" => &["Geotechnical Engineering"],
        "Exterior Improvements" => &["Landscape Architecture", "Civil Engineering"],
        _ => &[],
    }
}

/// Supplier category labels for a CSI division name, at most two per
/// division. Returns an empty slice for unknown divisions; callers
/// substitute [`GENERIC_SUPPLIER_CATEGORY`].
pub fn supplier_categories_for_division(division: &str) -> &'static [&'static str] {
    match division {
        "Concrete" => &["Ready-Mix Concrete", "Concrete Admixtures"],
        "Masonry" => &["Brick and Block", "Natural Stone"],
        "Metals" => &["Structural Steel", "Architectural Metals"],
        "Wood, Plastics, and Composites" => &["Lumber and Timber", "Composite Panels"],
        "Thermal and Moisture Protection" => &["Roofing and Waterproofing", "Insulation"],
        "Openings" => &["Windows and Glazing", "Doors and Hardware"],
        "Finishes" => &["Flooring", "Wall and Ceiling Finishes"],
        "Specialties" => &["Architectural Specialties"],
        "Furnishings" => &["Contract Furnishings"],
        "Fire Suppression" => &["Fire Protection Equipment"],
        "Plumbing" => &["Plumbing Fixtures"],
        "Heating, Ventilating, and Air Conditioning (HVAC)" => &["HVAC Equipment"],
        "Electrical" => &["Electrical Distribution", "Lighting"],
        "Earthwork" => &["Aggregates and Fill"],
        "Exterior Improvements" => &["Site Furnishings", "Paving"],
        _ => &[],
    }
}
