//! Core data model and deterministic derivation logic for material
//! analysis reports: the analysis snapshot types, the canonical
//! division/tier ordering, the CSI taxonomy tables, and the synthetic
//! consultant/supplier directory.

mod directory;
mod grouping;
mod model;
mod taxonomy;

pub use directory::{consultants_for, suppliers_for, supplier_tier};
pub use grouping::{
    distinct_divisions, division_key, divisions_with_tier, group_materials, has_tier,
    tier_counts, DivisionGroup, TierCounts,
};
pub use model::{
    Analysis, AnalysisImage, Consultant, Material, MaterialAlternative, ProjectBrief,
    ProjectLocation, Supplier, SupplierRating, Tier,
};
pub use taxonomy::{
    specialties_for_division, supplier_categories_for_division, GENERIC_SPECIALTY,
    GENERIC_SUPPLIER_CATEGORY,
};
