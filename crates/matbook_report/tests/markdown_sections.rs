// Section-level fixtures for the flowing-text renderer: fixed section
// order, conditional inclusion, and byte-stable output.

use matbook_core::{
    Analysis, Material, MaterialAlternative, ProjectBrief, ProjectLocation, Tier,
};
use matbook_report::{build_markdown, report_filename, ReportFormat};

fn material(name: &str, number: &str, division: &str, tier: u8) -> Material {
    Material {
        name: name.to_string(),
        description: format!("{name} panel system."),
        properties: vec!["Durable".to_string(), "Field proven".to_string()],
        tier: Tier::try_from(tier).expect("tier"),
        reasoning: "Assessed from the captured facade imagery.".to_string(),
        csi_division: division.to_string(),
        csi_number: number.to_string(),
        sustainability: Some("High recycled content.".to_string()),
        alternatives: vec![MaterialAlternative {
            name: format!("{name} substitute"),
            description: "Comparable assembly.".to_string(),
            tradeoffs: "Longer lead time.".to_string(),
        }],
        code_note: None,
    }
}

fn scenario_analysis() -> Analysis {
    Analysis {
        images: Vec::new(),
        materials: vec![
            Material {
                sustainability: None,
                alternatives: Vec::new(),
                ..material("Standing Seam Metal Roof", "07", "Thermal and Moisture Protection", 1)
            },
            Material {
                sustainability: None,
                alternatives: Vec::new(),
                ..material("Photochromic Glass Panel", "08", "Openings", 3)
            },
        ],
        created_at: "2026-08-06T14:00:00Z".to_string(),
        include_sustainability: false,
        include_alternatives: false,
        location: None,
        brief: None,
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

fn heading_count(markdown: &str, heading: &str) -> usize {
    markdown.lines().filter(|line| *line == heading).count()
}

#[test]
fn two_material_scenario_renders_the_expected_sections() {
    let markdown = build_markdown(&scenario_analysis());

    assert_eq!(
        heading_count(&markdown, "## Division 07 - Thermal and Moisture Protection"),
        1
    );
    assert_eq!(heading_count(&markdown, "## Division 08 - Openings"), 1);
    assert_eq!(
        markdown
            .lines()
            .filter(|l| l.starts_with('#') && l.contains("Division 07"))
            .count(),
        1
    );

    assert!(markdown.contains("Tier 1 (Readily Available): 1 materials"));
    assert!(markdown.contains("Tier 3 (Custom Development): 1 materials"));
    assert!(!markdown.contains("Tier 2 (Requires Customization)"));

    assert!(markdown.contains("### Tier 1 Consultants"));
    assert!(markdown.contains("### Tier 3 Consultants"));
    assert!(!markdown.contains("### Tier 2 Consultants"));

    // No location: no suppliers appendix, no compliance summary.
    assert!(!markdown.contains("## Appendix B: Material Suppliers"));
    assert!(!markdown.contains("## Code Compliance Summary"));
}

#[test]
fn section_order_is_fixed() {
    let mut analysis = scenario_analysis();
    analysis.location = Some(portland());
    analysis.brief = Some(ProjectBrief {
        text: "Community library addition.".to_string(),
        intent: Some("Library addition with a focus on daylight.".to_string()),
    });
    let markdown = build_markdown(&analysis);

    let order = [
        "# Building Material Analysis Report",
        "## Project Brief",
        "## Project Location",
        "## Project Summary",
        "## Division 07 - Thermal and Moisture Protection",
        "## Division 08 - Openings",
        "## Feasibility Overview",
        "## Code Compliance Summary",
        "## Recommendations",
        "## Appendix A: Recommended Consultants",
        "## Appendix B: Material Suppliers",
        "*Generated by Matbook Material Analysis*",
    ];
    let mut cursor = 0;
    for marker in order {
        let found = markdown[cursor..]
            .find(marker)
            .unwrap_or_else(|| panic!("missing or out of order: {marker}"));
        cursor += found + marker.len();
    }
}

#[test]
fn renders_are_byte_identical() {
    let mut analysis = scenario_analysis();
    analysis.location = Some(portland());
    assert_eq!(build_markdown(&analysis), build_markdown(&analysis));
}

#[test]
fn alternatives_render_only_when_the_flag_is_on() {
    let mut analysis = Analysis {
        materials: vec![material("Brick Veneer", "04", "Masonry", 1)],
        ..scenario_analysis()
    };

    let markdown = build_markdown(&analysis);
    assert!(!markdown.contains("Alternatives:"));
    assert!(!markdown.contains("Brick Veneer substitute"));

    analysis.include_alternatives = true;
    let markdown = build_markdown(&analysis);
    assert!(markdown.contains("Alternatives:"));
    assert!(markdown.contains("Brick Veneer substitute"));
}

#[test]
fn sustainability_notes_render_only_when_the_flag_is_on() {
    let mut analysis = Analysis {
        materials: vec![material("Brick Veneer", "04", "Masonry", 1)],
        ..scenario_analysis()
    };

    assert!(!build_markdown(&analysis).contains("Sustainability Notes:"));
    analysis.include_sustainability = true;
    assert!(build_markdown(&analysis).contains("Sustainability Notes: High recycled content."));
}

#[test]
fn brief_prefers_intent_and_omits_long_raw_text() {
    let mut analysis = scenario_analysis();
    analysis.brief = Some(ProjectBrief {
        text: "word ".repeat(100),
        intent: None,
    });
    assert!(!build_markdown(&analysis).contains("## Project Brief"));

    analysis.brief = Some(ProjectBrief {
        text: "word ".repeat(100),
        intent: Some("Mixed-use infill project.".to_string()),
    });
    let markdown = build_markdown(&analysis);
    assert!(markdown.contains("## Project Brief"));
    assert!(markdown.contains("Mixed-use infill project."));
}

#[test]
fn image_count_line_appears_only_for_multiple_images() {
    use matbook_core::AnalysisImage;

    let mut analysis = scenario_analysis();
    analysis.images = vec![AnalysisImage {
        name: "one.jpg".to_string(),
        data: Vec::new(),
        path: None,
    }];
    assert!(!build_markdown(&analysis).contains("Images analyzed:"));

    analysis.images.push(AnalysisImage {
        name: "two.jpg".to_string(),
        data: Vec::new(),
        path: None,
    });
    assert!(build_markdown(&analysis).contains("Images analyzed: 2"));
}

#[test]
fn suppliers_appendix_requires_a_sourceable_tier_and_location() {
    // Tier 3 only, with a location: nothing to source.
    let mut analysis = Analysis {
        materials: vec![material("Photochromic Glass Panel", "08", "Openings", 3)],
        location: Some(portland()),
        ..scenario_analysis()
    };
    assert!(!build_markdown(&analysis).contains("## Appendix B: Material Suppliers"));

    // Add a tier-1 material: the appendix appears with local entries.
    analysis
        .materials
        .push(material("Standing Seam Metal Roof", "07", "Thermal and Moisture Protection", 1));
    let markdown = build_markdown(&analysis);
    assert!(markdown.contains("## Appendix B: Material Suppliers"));
    assert!(markdown.contains("Portland Roofing and Waterproofing Supply"));
    // Single tier-1 division: national distributors stay out.
    assert!(!markdown.contains("### National Distributors"));
}

#[test]
fn national_distributor_block_appears_for_tier_two_sourcing() {
    let analysis = Analysis {
        materials: vec![material("Custom Curtain Wall", "08", "Openings", 2)],
        location: Some(portland()),
        ..scenario_analysis()
    };
    let markdown = build_markdown(&analysis);
    assert!(markdown.contains("### National Distributors"));
    assert!(markdown.contains("National Distribution"));
    assert!(markdown.contains("(800) "));
}

#[test]
fn compliance_summary_names_the_adopted_code() {
    let analysis = Analysis {
        location: Some(portland()),
        ..scenario_analysis()
    };
    let markdown = build_markdown(&analysis);
    assert!(markdown
        .contains("All identified materials should be verified against Oregon Structural Specialty Code."));
    assert!(markdown.contains("Confirm amendments and interpretations with the Portland, OR building authority"));
}

#[test]
fn filenames_derive_from_the_analysis_timestamp() {
    let mut analysis = scenario_analysis();
    assert_eq!(
        report_filename(&analysis, ReportFormat::Pdf),
        "material-report-20260806-140000.pdf"
    );
    assert_eq!(
        report_filename(&analysis, ReportFormat::Markdown),
        "material-report-20260806-140000.md"
    );

    analysis.created_at = "not a timestamp".to_string();
    assert_eq!(
        report_filename(&analysis, ReportFormat::Markdown),
        "material-report-not-a-timestamp.md"
    );
}

#[test]
fn location_recommendations_extend_the_tier_advice() {
    let mut analysis = scenario_analysis();
    let base = build_markdown(&analysis);
    let base_recs = base
        .lines()
        .skip_while(|l| *l != "## Recommendations")
        .take_while(|l| !l.starts_with("## Appendix"))
        .filter(|l| l.starts_with("- "))
        .count();

    analysis.location = Some(portland());
    let with_location = build_markdown(&analysis);
    let extended_recs = with_location
        .lines()
        .skip_while(|l| *l != "## Recommendations")
        .take_while(|l| !l.starts_with("## Appendix"))
        .filter(|l| l.starts_with("- "))
        .count();

    assert_eq!(extended_recs, base_recs + 2);
}
