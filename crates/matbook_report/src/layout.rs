//! Cursor-tracking page writer. There is no flow-layout engine
//! underneath: every emission primitive measures what it is about to
//! write, checks the remaining vertical space first, and opens a fresh
//! page when the line would not fit. That check-before-write step
//! precedes every line, bullet, and field on every page.

use pdf_writer::{Content, Name, Str};

use crate::outline::PRODUCT_NAME;

pub(crate) const PAGE_WIDTH: f32 = 612.0;
pub(crate) const PAGE_HEIGHT: f32 = 792.0;
pub(crate) const MARGIN: f32 = 54.0;
pub(crate) const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

/// Bottom band reserved for the footer stamp.
const FOOTER_RESERVE: f32 = 28.0;
/// Continuation indent for wrapped field values and bullet bodies.
pub(crate) const INDENT: f32 = 14.0;
const BULLET_HANG: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FontKind {
    Regular,
    Bold,
}

impl FontKind {
    fn resource_name(self) -> Name<'static> {
        match self {
            FontKind::Regular => Name(b"F1"),
            FontKind::Bold => Name(b"F2"),
        }
    }
}

// AFM widths for the base-14 Helvetica faces, glyph space units per
// 1000, covering the printable ASCII range 0x20..=0x7E.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

fn char_width(font: FontKind, c: char) -> u16 {
    let table = match font {
        FontKind::Regular => &HELVETICA_WIDTHS,
        FontKind::Bold => &HELVETICA_BOLD_WIDTHS,
    };
    let code = c as u32;
    if (0x20..=0x7E).contains(&code) {
        table[(code - 0x20) as usize]
    } else if c == '\u{2022}' {
        350
    } else {
        // Latin-1 and anything exotic: a body-glyph estimate keeps
        // wrapping conservative rather than overflowing the margin.
        556
    }
}

pub(crate) fn text_width(font: FontKind, size: f32, text: &str) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(font, c))).sum();
    units as f32 * size / 1000.0
}

/// Encode text for the WinAnsi-encoded base fonts. Characters outside
/// the encoding degrade to `?` instead of corrupting the stream.
fn to_winansi(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        let code = c as u32;
        let byte = match c {
            '\u{2022}' => 0x95,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            _ if (0x20..=0x7E).contains(&code) => code as u8,
            _ if (0xA0..=0xFF).contains(&code) => code as u8,
            _ => b'?',
        };
        out.push(byte);
    }
    out
}

/// Pre-split text into lines no wider than `max_width`. Words that are
/// themselves too wide are hard-split on character boundaries.
pub(crate) fn wrap_text(font: FontKind, size: f32, max_width: f32, text: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            place_word(font, size, max_width, word, &mut lines, &mut line);
            continue;
        }
        let candidate = format!("{line} {word}");
        if text_width(font, size, &candidate) <= max_width {
            line = candidate;
        } else {
            lines.push(std::mem::take(&mut line));
            place_word(font, size, max_width, word, &mut lines, &mut line);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn place_word(
    font: FontKind,
    size: f32,
    max_width: f32,
    word: &str,
    lines: &mut Vec<String>,
    line: &mut String,
) {
    if text_width(font, size, word) <= max_width {
        line.push_str(word);
        return;
    }
    // Hard split: emit full-width chunks, keep the remainder pending.
    let mut chunk = String::new();
    for c in word.chars() {
        chunk.push(c);
        if text_width(font, size, &chunk) > max_width && chunk.chars().count() > 1 {
            chunk.pop();
            lines.push(std::mem::take(&mut chunk));
            chunk.push(c);
        }
    }
    *line = chunk;
}

pub(crate) fn line_height(size: f32) -> f32 {
    size * 1.4
}

/// Accumulates page content streams while tracking the vertical cursor.
pub(crate) struct PageWriter {
    finished: Vec<Content>,
    current: Content,
    /// Baseline origin for the next line, measured from the page bottom.
    y: f32,
}

impl PageWriter {
    pub fn new() -> Self {
        PageWriter {
            finished: Vec::new(),
            current: Content::new(),
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn floor(&self) -> f32 {
        MARGIN + FOOTER_RESERVE
    }

    pub fn break_page(&mut self) {
        let done = std::mem::replace(&mut self.current, Content::new());
        self.finished.push(done);
        self.y = PAGE_HEIGHT - MARGIN;
    }

    /// The check-before-write step. Must run before anything is drawn.
    pub fn ensure_space(&mut self, needed: f32) {
        if self.y - needed < self.floor() {
            self.break_page();
        }
    }

    /// Vertical whitespace. Never forces a page break on its own.
    pub fn gap(&mut self, amount: f32) {
        self.y = (self.y - amount).max(self.floor());
    }

    fn draw_text(&mut self, x: f32, baseline: f32, font: FontKind, size: f32, text: &str) {
        let bytes = to_winansi(text);
        self.current.begin_text();
        self.current.set_font(font.resource_name(), size);
        self.current.next_line(x, baseline);
        self.current.show(Str(&bytes));
        self.current.end_text();
    }

    /// Emit one already-wrapped line at the current cursor.
    pub fn text_line(&mut self, text: &str, font: FontKind, size: f32, indent: f32) {
        let advance = line_height(size);
        self.ensure_space(advance);
        self.draw_text(MARGIN + indent, self.y - size, font, size, text);
        self.y -= advance;
    }

    /// Wrap and emit a paragraph at the given indent.
    pub fn paragraph(&mut self, text: &str, font: FontKind, size: f32, indent: f32) {
        for line in wrap_text(font, size, CONTENT_WIDTH - indent, text) {
            self.text_line(&line, font, size, indent);
        }
    }

    pub fn heading(&mut self, text: &str, size: f32) {
        self.gap(size * 0.7);
        self.paragraph(text, FontKind::Bold, size, 0.0);
        self.gap(size * 0.35);
    }

    /// Bulleted paragraph: marker on the first line, hanging indent on
    /// continuations.
    pub fn bullet(&mut self, text: &str, size: f32, indent: f32) {
        let body_width = CONTENT_WIDTH - indent - BULLET_HANG;
        let lines = wrap_text(FontKind::Regular, size, body_width, text);
        for (i, line) in lines.iter().enumerate() {
            if i == 0 {
                self.text_line(&format!("\u{2022} {line}"), FontKind::Regular, size, indent);
            } else {
                self.text_line(line, FontKind::Regular, size, indent + BULLET_HANG);
            }
        }
    }

    /// Label/value field: bold label, regular value. A value that fits
    /// the remaining line width shares the label's line; a longer value
    /// drops to an indented continuation starting on the next line.
    pub fn field(&mut self, label: &str, value: &str, size: f32, indent: f32) {
        let label_text = format!("{label}: ");
        let label_width = text_width(FontKind::Bold, size, &label_text);
        let rest = CONTENT_WIDTH - indent - label_width;

        if rest > 60.0 && text_width(FontKind::Regular, size, value) <= rest {
            let advance = line_height(size);
            self.ensure_space(advance);
            let baseline = self.y - size;
            self.draw_text(MARGIN + indent, baseline, FontKind::Bold, size, &label_text);
            self.draw_text(
                MARGIN + indent + label_width,
                baseline,
                FontKind::Regular,
                size,
                value,
            );
            self.y -= advance;
            return;
        }

        self.text_line(&format!("{label}:"), FontKind::Bold, size, indent);
        self.paragraph(value, FontKind::Regular, size, indent + INDENT);
    }

    /// Place the representative image, already scaled by the caller.
    pub fn image(&mut self, name: Name<'_>, width: f32, height: f32) {
        self.ensure_space(height + 8.0);
        let bottom = self.y - height;
        self.current.save_state();
        self.current
            .transform([width, 0.0, 0.0, height, MARGIN, bottom]);
        self.current.x_object(name);
        self.current.restore_state();
        self.y -= height + 8.0;
    }

    pub fn finish(mut self) -> Vec<Content> {
        let current = std::mem::replace(&mut self.current, Content::new());
        self.finished.push(current);
        self.finished
    }
}

/// Centered footer stamp, applied once the total page count is known.
pub(crate) fn stamp_footer(content: &mut Content, page: usize, total: usize) {
    let text = format!("Page {page} of {total} - Generated by {PRODUCT_NAME}");
    let size = 9.0;
    let x = (PAGE_WIDTH - text_width(FontKind::Regular, size, &text)) / 2.0;
    let bytes = to_winansi(&text);
    content.begin_text();
    content.set_font(FontKind::Regular.resource_name(), size);
    content.next_line(x, MARGIN / 2.0);
    content.show(Str(&bytes));
    content.end_text();
}
