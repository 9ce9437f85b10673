//! Shared report outline: the single intermediate representation both
//! renderers walk. Grouping, appendix synthesis, and every conditional
//! section decision happen here exactly once, so the two output formats
//! cannot drift apart.

use matbook_core::{
    consultants_for, divisions_with_tier, group_materials, supplier_tier, suppliers_for,
    tier_counts, Analysis, Consultant, DivisionGroup, Material, MaterialAlternative, Supplier,
    SupplierRating, Tier, TierCounts,
};

pub(crate) const REPORT_TITLE: &str = "Building Material Analysis Report";
pub(crate) const PRODUCT_NAME: &str = "Matbook Material Analysis";

/// A raw brief longer than this is omitted when no extracted intent is
/// available.
const MAX_INLINE_BRIEF: usize = 280;

pub(crate) struct ReportOutline<'a> {
    pub analysis: &'a Analysis,
    pub groups: Vec<DivisionGroup<'a>>,
    pub counts: TierCounts,
    /// One entry per non-empty tier, in tier order.
    pub consultant_sections: Vec<(Tier, Vec<Consultant>)>,
    /// Empty unless a tier-1 or tier-2 material exists and a location is
    /// set. Locals first, nationals appended after.
    pub suppliers: Vec<Supplier>,
    pub recommendations: Vec<String>,
}

impl<'a> ReportOutline<'a> {
    pub fn new(analysis: &'a Analysis) -> Self {
        let groups = group_materials(&analysis.materials);
        let counts = tier_counts(&analysis.materials);

        let mut consultant_sections = Vec::new();
        for tier in Tier::ALL {
            if counts.get(tier) == 0 {
                continue;
            }
            let divisions = divisions_with_tier(&groups, tier);
            consultant_sections.push((tier, consultants_for(&divisions, tier)));
        }

        // Sourcing appendix covers only materials that can actually be
        // bought: tiers 1 and 2, and only with a location to source from.
        let sourcing: Vec<Material> = analysis
            .materials
            .iter()
            .filter(|m| m.tier != Tier::CustomDevelopment)
            .cloned()
            .collect();
        let suppliers = if !sourcing.is_empty() && analysis.location.is_some() {
            suppliers_for(&sourcing, analysis.location.as_ref(), supplier_tier(&sourcing))
        } else {
            Vec::new()
        };

        let mut recommendations = Vec::new();
        if counts.tier1 > 0 {
            recommendations.push(
                "Specify Tier 1 materials directly; they move through standard distribution channels."
                    .to_string(),
            );
        }
        if counts.tier2 > 0 {
            recommendations.push(
                "Engage fabricators early for Tier 2 materials; customization adds procurement lead time."
                    .to_string(),
            );
        }
        if counts.tier3 > 0 {
            recommendations.push(
                "Treat Tier 3 materials as development partnerships; prototype and validate before committing the schedule."
                    .to_string(),
            );
        }
        if let Some(location) = &analysis.location {
            recommendations.push(format!(
                "Verify local amendments with the {} building authority.",
                location.jurisdiction.as_deref().unwrap_or("local")
            ));
            recommendations.push(
                "Confirm regional supplier stock before finalizing the procurement schedule."
                    .to_string(),
            );
        }

        ReportOutline {
            analysis,
            groups,
            counts,
            consultant_sections,
            suppliers,
            recommendations,
        }
    }

    /// Timestamp line for the title block. Falls back to the raw
    /// snapshot string when it does not parse as RFC 3339.
    pub fn generated_label(&self) -> String {
        match chrono::DateTime::parse_from_rfc3339(&self.analysis.created_at) {
            Ok(t) => t
                .with_timezone(&chrono::Utc)
                .format("%Y-%m-%d %H:%M UTC")
                .to_string(),
            Err(_) => self.analysis.created_at.clone(),
        }
    }

    /// Brief body: the extracted intent when present, otherwise the raw
    /// text if short enough. `None` means the section is omitted.
    pub fn brief_text(&self) -> Option<&str> {
        let brief = self.analysis.brief.as_ref()?;
        if let Some(intent) = &brief.intent {
            return Some(intent);
        }
        if brief.text.len() <= MAX_INLINE_BRIEF {
            Some(&brief.text)
        } else {
            None
        }
    }

    pub fn show_compliance(&self) -> bool {
        self.analysis.location.is_some()
    }

    pub fn show_suppliers(&self) -> bool {
        !self.suppliers.is_empty()
    }

    pub fn code_reference(&self) -> String {
        self.analysis
            .location
            .as_ref()
            .and_then(|l| l.building_code.clone())
            .unwrap_or_else(|| "the locally adopted building code".to_string())
    }

    pub fn jurisdiction_label(&self) -> &str {
        self.analysis
            .location
            .as_ref()
            .and_then(|l| l.jurisdiction.as_deref())
            .unwrap_or("local")
    }

    pub fn local_suppliers(&self) -> impl Iterator<Item = &Supplier> {
        self.suppliers
            .iter()
            .filter(|s| s.rating == SupplierRating::Local)
    }

    pub fn national_suppliers(&self) -> impl Iterator<Item = &Supplier> {
        self.suppliers
            .iter()
            .filter(|s| s.rating == SupplierRating::National)
    }

    pub fn sustainability_for<'m>(&self, material: &'m Material) -> Option<&'m str> {
        if self.analysis.include_sustainability {
            material.sustainability.as_deref()
        } else {
            None
        }
    }

    pub fn alternatives_for<'m>(&self, material: &'m Material) -> &'m [MaterialAlternative] {
        if self.analysis.include_alternatives {
            &material.alternatives
        } else {
            &[]
        }
    }
}
