//! Flowing-text rendering of an analysis. Walks the shared outline in
//! the fixed section order; repeated calls on the same snapshot produce
//! byte-identical output.

use matbook_core::{Analysis, Material, Tier};

use crate::outline::{ReportOutline, PRODUCT_NAME, REPORT_TITLE};

pub(crate) fn render_markdown(analysis: &Analysis) -> String {
    let outline = ReportOutline::new(analysis);
    let mut out = String::new();

    out.push_str(&format!("# {REPORT_TITLE}\n\n"));
    out.push_str(&format!("Generated: {}\n", outline.generated_label()));
    if analysis.images.len() > 1 {
        out.push_str(&format!("Images analyzed: {}\n", analysis.images.len()));
    }
    out.push('\n');

    if let Some(brief) = outline.brief_text() {
        out.push_str("## Project Brief\n\n");
        out.push_str(brief.trim());
        out.push_str("\n\n");
    }

    if let Some(location) = &analysis.location {
        out.push_str("## Project Location\n\n");
        out.push_str(&format!("- Address: {}\n", location.input));
        if let Some(jurisdiction) = &location.jurisdiction {
            out.push_str(&format!("- Jurisdiction: {jurisdiction}\n"));
        }
        if let Some(code) = &location.building_code {
            out.push_str(&format!("- Building Code: {code}\n"));
        }
        out.push('\n');
    }

    out.push_str("## Project Summary\n\n");
    out.push_str(&format!("- Materials identified: {}\n", outline.counts.total()));
    out.push_str(&format!("- Divisions covered: {}\n", outline.groups.len()));
    for tier in Tier::ALL {
        let count = outline.counts.get(tier);
        if count > 0 {
            out.push_str(&format!("- {}: {} materials\n", tier.summary_label(), count));
        }
    }
    out.push('\n');

    for group in &outline.groups {
        out.push_str(&format!("## Division {}\n\n", group.key));
        for tier in Tier::ALL {
            let bucket = group.tier_bucket(tier);
            if bucket.is_empty() {
                continue;
            }
            out.push_str(&format!("### {}\n\n", tier.heading()));
            for material in bucket {
                render_material(&mut out, &outline, material);
            }
        }
    }

    if outline.counts.total() > 0 {
        out.push_str("## Feasibility Overview\n\n");
        for tier in Tier::ALL {
            if outline.counts.get(tier) == 0 {
                continue;
            }
            out.push_str(&format!("### {}\n\n", tier.heading()));
            for group in &outline.groups {
                let bucket = group.tier_bucket(tier);
                if bucket.is_empty() {
                    continue;
                }
                let names: Vec<&str> = bucket.iter().map(|m| m.name.as_str()).collect();
                out.push_str(&format!("- Division {}: {}\n", group.key, names.join(", ")));
            }
            out.push('\n');
        }
    }

    if outline.show_compliance() {
        out.push_str("## Code Compliance Summary\n\n");
        out.push_str(&format!(
            "All identified materials should be verified against {}.\n",
            outline.code_reference()
        ));
        out.push_str(&format!(
            "Confirm amendments and interpretations with the {} building authority before specification.\n",
            outline.jurisdiction_label()
        ));
        out.push_str(
            "Structural, fire, and energy provisions take precedence over manufacturer guidance.\n\n",
        );
    }

    if !outline.recommendations.is_empty() {
        out.push_str("## Recommendations\n\n");
        for line in &outline.recommendations {
            out.push_str(&format!("- {line}\n"));
        }
        out.push('\n');
    }

    if !outline.consultant_sections.is_empty() {
        out.push_str("## Appendix A: Recommended Consultants\n\n");
        for (tier, consultants) in &outline.consultant_sections {
            out.push_str(&format!("### Tier {} Consultants\n\n", tier.rank()));
            for c in consultants {
                out.push_str(&format!("- {} ({})\n", c.name, c.firm));
                out.push_str(&format!("  - Specialty: {}\n", c.specialty));
                out.push_str(&format!("  - Email: {}\n", c.email));
                out.push_str(&format!("  - Phone: {}\n", c.phone));
                if let Some(site) = &c.website {
                    out.push_str(&format!("  - Website: {site}\n"));
                }
                out.push_str(&format!("  - Disciplines: {}\n", c.disciplines.join(", ")));
            }
            out.push('\n');
        }
    }

    if outline.show_suppliers() {
        out.push_str("## Appendix B: Material Suppliers\n\n");
        for supplier in outline.local_suppliers() {
            render_supplier(&mut out, supplier);
        }
        out.push('\n');

        if outline.national_suppliers().next().is_some() {
            out.push_str("### National Distributors\n\n");
            for supplier in outline.national_suppliers() {
                render_supplier(&mut out, supplier);
            }
            out.push('\n');
        }
    }

    out.push_str("---\n\n");
    out.push_str(&format!("*Generated by {PRODUCT_NAME}*\n"));
    out
}

fn render_material(out: &mut String, outline: &ReportOutline<'_>, material: &Material) {
    out.push_str(&format!("#### {}\n\n", material.name));
    out.push_str(&format!(
        "CSI Reference: Division {} - {}\n\n",
        material.csi_number, material.csi_division
    ));
    out.push_str(material.description.trim());
    out.push_str("\n\n");

    if !material.properties.is_empty() {
        out.push_str("Key Properties:\n\n");
        for property in &material.properties {
            out.push_str(&format!("- {property}\n"));
        }
        out.push('\n');
    }

    out.push_str(&format!("Feasibility: {}\n\n", material.reasoning.trim()));

    if let Some(notes) = outline.sustainability_for(material) {
        out.push_str(&format!("Sustainability Notes: {}\n\n", notes.trim()));
    }
    if let Some(note) = &material.code_note {
        out.push_str(&format!("Code Compliance: {}\n\n", note.trim()));
    }

    let alternatives = outline.alternatives_for(material);
    if !alternatives.is_empty() {
        out.push_str("Alternatives:\n\n");
        for alt in alternatives {
            out.push_str(&format!(
                "- {}: {} Tradeoffs: {}\n",
                alt.name,
                alt.description.trim(),
                alt.tradeoffs.trim()
            ));
        }
        out.push('\n');
    }
}

fn render_supplier(out: &mut String, supplier: &matbook_core::Supplier) {
    out.push_str(&format!("- {} ({})\n", supplier.company, supplier.location));
    out.push_str(&format!("  - Contact: {}\n", supplier.contact));
    out.push_str(&format!("  - Materials: {}\n", supplier.material_types.join(", ")));
    out.push_str(&format!("  - Email: {}\n", supplier.email));
    out.push_str(&format!("  - Phone: {}\n", supplier.phone));
    if let Some(site) = &supplier.website {
        out.push_str(&format!("  - Website: {site}\n"));
    }
    out.push_str(&format!("  - Specialties: {}\n", supplier.specialties.join(", ")));
}
