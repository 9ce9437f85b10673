//! Paginated rendering of an analysis. Walks the shared outline in the
//! same section order as the markdown renderer, field for field; the
//! only structural addition is the leading representative image.

use image::GenericImageView;
use pdf_writer::{Filter, Name, Pdf, Rect, Ref};

use matbook_core::{Analysis, Material, Tier};

use crate::layout::{
    stamp_footer, FontKind, PageWriter, CONTENT_WIDTH, INDENT, PAGE_HEIGHT, PAGE_WIDTH,
};
use crate::outline::{ReportOutline, PRODUCT_NAME, REPORT_TITLE};
use crate::ReportError;

const IMAGE_NAME: Name<'static> = Name(b"Im1");
const IMAGE_MAX_HEIGHT: f32 = 240.0;

const TITLE_SIZE: f32 = 20.0;
const SECTION_SIZE: f32 = 14.0;
const SUBSECTION_SIZE: f32 = 12.0;
const CARD_SIZE: f32 = 11.0;
const BODY_SIZE: f32 = 10.0;

/// First image of the snapshot, prepared for embedding. JPEG bytes pass
/// through untouched under a DCT filter; everything else is decoded to
/// raw RGB8.
struct PreparedImage {
    data: Vec<u8>,
    dct: bool,
    width: u32,
    height: u32,
}

fn prepare_image(bytes: &[u8]) -> Result<PreparedImage, String> {
    if bytes.is_empty() {
        return Err("empty image data".to_string());
    }
    let format = image::guess_format(bytes).map_err(|e| format!("unrecognized image: {e}"))?;
    let decoded = image::load_from_memory(bytes).map_err(|e| format!("decode failed: {e}"))?;
    let (width, height) = decoded.dimensions();
    if format == image::ImageFormat::Jpeg {
        Ok(PreparedImage {
            data: bytes.to_vec(),
            dct: true,
            width,
            height,
        })
    } else {
        Ok(PreparedImage {
            data: decoded.to_rgb8().into_raw(),
            dct: false,
            width,
            height,
        })
    }
}

/// Scale pixel dimensions into the content box, preserving aspect ratio.
fn fit_box(width: u32, height: u32, max_width: f32, max_height: f32) -> (f32, f32) {
    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    let scale = (max_width / w).min(max_height / h).min(1.0);
    (w * scale, h * scale)
}

pub(crate) fn render_pdf(analysis: &Analysis) -> Result<Vec<u8>, ReportError> {
    let outline = ReportOutline::new(analysis);
    let mut writer = PageWriter::new();

    writer.heading(REPORT_TITLE, TITLE_SIZE);
    writer.text_line(
        &format!("Generated: {}", outline.generated_label()),
        FontKind::Regular,
        BODY_SIZE,
        0.0,
    );
    if analysis.images.len() > 1 {
        writer.text_line(
            &format!("Images analyzed: {}", analysis.images.len()),
            FontKind::Regular,
            BODY_SIZE,
            0.0,
        );
    }
    writer.gap(8.0);

    // Representative image: the first one only. Decoding must settle,
    // successfully or not, before layout continues past this slot.
    let mut embedded: Option<PreparedImage> = None;
    if let Some(first) = analysis.images.first() {
        match prepare_image(&first.data) {
            Ok(prepared) => {
                let (w, h) =
                    fit_box(prepared.width, prepared.height, CONTENT_WIDTH, IMAGE_MAX_HEIGHT);
                writer.image(IMAGE_NAME, w, h);
                embedded = Some(prepared);
            }
            Err(_) => {
                writer.text_line(
                    "[Image preview unavailable]",
                    FontKind::Regular,
                    BODY_SIZE,
                    0.0,
                );
                writer.gap(4.0);
            }
        }
    }

    if let Some(brief) = outline.brief_text() {
        writer.heading("Project Brief", SECTION_SIZE);
        writer.paragraph(brief.trim(), FontKind::Regular, BODY_SIZE, 0.0);
    }

    if let Some(location) = &analysis.location {
        writer.heading("Project Location", SECTION_SIZE);
        writer.field("Address", &location.input, BODY_SIZE, 0.0);
        if let Some(jurisdiction) = &location.jurisdiction {
            writer.field("Jurisdiction", jurisdiction, BODY_SIZE, 0.0);
        }
        if let Some(code) = &location.building_code {
            writer.field("Building Code", code, BODY_SIZE, 0.0);
        }
    }

    writer.heading("Project Summary", SECTION_SIZE);
    writer.bullet(
        &format!("Materials identified: {}", outline.counts.total()),
        BODY_SIZE,
        0.0,
    );
    writer.bullet(
        &format!("Divisions covered: {}", outline.groups.len()),
        BODY_SIZE,
        0.0,
    );
    for tier in Tier::ALL {
        let count = outline.counts.get(tier);
        if count > 0 {
            writer.bullet(
                &format!("{}: {} materials", tier.summary_label(), count),
                BODY_SIZE,
                0.0,
            );
        }
    }

    for group in &outline.groups {
        writer.heading(&format!("Division {}", group.key), SECTION_SIZE);
        for tier in Tier::ALL {
            let bucket = group.tier_bucket(tier);
            if bucket.is_empty() {
                continue;
            }
            writer.heading(&tier.heading(), SUBSECTION_SIZE);
            for material in bucket {
                render_material(&mut writer, &outline, material);
            }
        }
    }

    if outline.counts.total() > 0 {
        writer.heading("Feasibility Overview", SECTION_SIZE);
        for tier in Tier::ALL {
            if outline.counts.get(tier) == 0 {
                continue;
            }
            writer.heading(&tier.heading(), SUBSECTION_SIZE);
            for group in &outline.groups {
                let bucket = group.tier_bucket(tier);
                if bucket.is_empty() {
                    continue;
                }
                let names: Vec<&str> = bucket.iter().map(|m| m.name.as_str()).collect();
                writer.bullet(
                    &format!("Division {}: {}", group.key, names.join(", ")),
                    BODY_SIZE,
                    0.0,
                );
            }
        }
    }

    if outline.show_compliance() {
        writer.heading("Code Compliance Summary", SECTION_SIZE);
        writer.paragraph(
            &format!(
                "All identified materials should be verified against {}.",
                outline.code_reference()
            ),
            FontKind::Regular,
            BODY_SIZE,
            0.0,
        );
        writer.paragraph(
            &format!(
                "Confirm amendments and interpretations with the {} building authority before specification.",
                outline.jurisdiction_label()
            ),
            FontKind::Regular,
            BODY_SIZE,
            0.0,
        );
        writer.paragraph(
            "Structural, fire, and energy provisions take precedence over manufacturer guidance.",
            FontKind::Regular,
            BODY_SIZE,
            0.0,
        );
    }

    if !outline.recommendations.is_empty() {
        writer.heading("Recommendations", SECTION_SIZE);
        for line in &outline.recommendations {
            writer.bullet(line, BODY_SIZE, 0.0);
        }
    }

    if !outline.consultant_sections.is_empty() {
        writer.heading("Appendix A: Recommended Consultants", SECTION_SIZE);
        for (tier, consultants) in &outline.consultant_sections {
            writer.heading(&format!("Tier {} Consultants", tier.rank()), SUBSECTION_SIZE);
            for c in consultants {
                writer.paragraph(
                    &format!("{} ({})", c.name, c.firm),
                    FontKind::Bold,
                    CARD_SIZE,
                    0.0,
                );
                writer.field("Specialty", &c.specialty, BODY_SIZE, INDENT);
                writer.field("Email", &c.email, BODY_SIZE, INDENT);
                writer.field("Phone", &c.phone, BODY_SIZE, INDENT);
                if let Some(site) = &c.website {
                    writer.field("Website", site, BODY_SIZE, INDENT);
                }
                writer.field("Disciplines", &c.disciplines.join(", "), BODY_SIZE, INDENT);
                writer.gap(5.0);
            }
        }
    }

    if outline.show_suppliers() {
        writer.heading("Appendix B: Material Suppliers", SECTION_SIZE);
        for supplier in outline.local_suppliers() {
            render_supplier(&mut writer, supplier);
        }
        if outline.national_suppliers().next().is_some() {
            writer.heading("National Distributors", SUBSECTION_SIZE);
            for supplier in outline.national_suppliers() {
                render_supplier(&mut writer, supplier);
            }
        }
    }

    writer.gap(10.0);
    writer.text_line(
        &format!("Generated by {PRODUCT_NAME}"),
        FontKind::Regular,
        BODY_SIZE,
        0.0,
    );

    let mut pages = writer.finish();
    let total = pages.len();
    for (index, page) in pages.iter_mut().enumerate() {
        stamp_footer(page, index + 1, total);
    }

    Ok(assemble(pages, embedded))
}

fn render_material(writer: &mut PageWriter, outline: &ReportOutline<'_>, material: &Material) {
    writer.paragraph(&material.name, FontKind::Bold, CARD_SIZE, 0.0);
    writer.field(
        "CSI Reference",
        &format!("Division {} - {}", material.csi_number, material.csi_division),
        BODY_SIZE,
        INDENT,
    );
    writer.paragraph(material.description.trim(), FontKind::Regular, BODY_SIZE, INDENT);

    if !material.properties.is_empty() {
        writer.text_line("Key Properties:", FontKind::Bold, BODY_SIZE, INDENT);
        for property in &material.properties {
            writer.bullet(property, BODY_SIZE, INDENT);
        }
    }

    writer.field("Feasibility", material.reasoning.trim(), BODY_SIZE, INDENT);

    if let Some(notes) = outline.sustainability_for(material) {
        writer.field("Sustainability Notes", notes.trim(), BODY_SIZE, INDENT);
    }
    if let Some(note) = &material.code_note {
        writer.field("Code Compliance", note.trim(), BODY_SIZE, INDENT);
    }

    let alternatives = outline.alternatives_for(material);
    if !alternatives.is_empty() {
        writer.text_line("Alternatives:", FontKind::Bold, BODY_SIZE, INDENT);
        for alt in alternatives {
            writer.bullet(
                &format!(
                    "{}: {} Tradeoffs: {}",
                    alt.name,
                    alt.description.trim(),
                    alt.tradeoffs.trim()
                ),
                BODY_SIZE,
                INDENT,
            );
        }
    }
    writer.gap(6.0);
}

fn render_supplier(writer: &mut PageWriter, supplier: &matbook_core::Supplier) {
    writer.paragraph(
        &format!("{} ({})", supplier.company, supplier.location),
        FontKind::Bold,
        CARD_SIZE,
        0.0,
    );
    writer.field("Contact", &supplier.contact, BODY_SIZE, INDENT);
    writer.field(
        "Materials",
        &supplier.material_types.join(", "),
        BODY_SIZE,
        INDENT,
    );
    writer.field("Email", &supplier.email, BODY_SIZE, INDENT);
    writer.field("Phone", &supplier.phone, BODY_SIZE, INDENT);
    if let Some(site) = &supplier.website {
        writer.field("Website", site, BODY_SIZE, INDENT);
    }
    writer.field(
        "Specialties",
        &supplier.specialties.join(", "),
        BODY_SIZE,
        INDENT,
    );
    writer.gap(5.0);
}

/// Assemble the finished content streams into a PDF document.
fn assemble(pages: Vec<pdf_writer::Content>, embedded: Option<PreparedImage>) -> Vec<u8> {
    let mut next_id = 1;
    let mut alloc = || {
        let id = Ref::new(next_id);
        next_id += 1;
        id
    };

    let catalog_id = alloc();
    let tree_id = alloc();
    let font_regular_id = alloc();
    let font_bold_id = alloc();
    let image_id = embedded.as_ref().map(|_| alloc());
    let page_refs: Vec<(Ref, Ref)> = pages.iter().map(|_| (alloc(), alloc())).collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id)
        .kids(page_refs.iter().map(|(page_id, _)| *page_id))
        .count(pages.len() as i32);

    for ((page_id, content_id), content) in page_refs.iter().zip(pages) {
        let mut page = pdf.page(*page_id);
        page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
        page.parent(tree_id);
        page.contents(*content_id);
        {
            let mut resources = page.resources();
            {
                let mut fonts = resources.fonts();
                fonts.pair(Name(b"F1"), font_regular_id);
                fonts.pair(Name(b"F2"), font_bold_id);
            }
            if let Some(image_id) = image_id {
                resources.x_objects().pair(IMAGE_NAME, image_id);
            }
        }
        drop(page);
        pdf.stream(*content_id, &content.finish());
    }

    {
        let mut font = pdf.type1_font(font_regular_id);
        font.base_font(Name(b"Helvetica"));
        font.encoding_predefined(Name(b"WinAnsiEncoding"));
    }
    {
        let mut font = pdf.type1_font(font_bold_id);
        font.base_font(Name(b"Helvetica-Bold"));
        font.encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    if let (Some(image_id), Some(prepared)) = (image_id, embedded) {
        let mut xobject = pdf.image_xobject(image_id, &prepared.data);
        if prepared.dct {
            xobject.filter(Filter::DctDecode);
        }
        xobject.width(prepared.width as i32);
        xobject.height(prepared.height as i32);
        xobject.color_space().device_rgb();
        xobject.bits_per_component(8);
    }

    pdf.finish()
}
