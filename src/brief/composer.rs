//! fpdf-style page composition over printpdf.
//!
//! printpdf only exposes absolute-position drawing from a bottom-left origin,
//! so this composer keeps the layout state the brief script expects: a cursor
//! measured from the top-left, left/right margins, a running header on every
//! page after the first, and automatic pagination when a primitive would cross
//! the bottom margin. Page-total footers ("Page i/N") are stamped at finalize
//! time, once N is known.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerIndex, PdfLayerReference, PdfPageIndex, Point, Polygon, Rgb,
};

use super::metrics::{text_width_mm, wrap};
use super::style::{FontKind, Rgb8, TextStyle, GRAY};

/// A4 portrait.
pub const PAGE_W: f32 = 210.0;
pub const PAGE_H: f32 = 297.0;

pub const L_MARGIN: f32 = 10.0;
pub const R_MARGIN: f32 = 10.0;
pub const T_MARGIN: f32 = 10.0;

/// Auto page break triggers when content would cross this distance
/// from the bottom edge.
pub const BREAK_MARGIN: f32 = 20.0;

/// Fraction of the line height where the text baseline sits.
const BASELINE: f32 = 0.72;

/// Horizontal alignment within a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
}

/// Cursor-based page builder.
pub struct PageComposer {
    doc: PdfDocumentReference,
    fonts: Fonts,
    pages: Vec<(PdfPageIndex, PdfLayerIndex)>,
    header_drawn: Vec<bool>,
    running_header: Option<String>,
    /// Cursor, millimeters from the top-left corner of the page.
    x: f32,
    y: f32,
}

/// Centered footer text for one page.
pub fn footer_label(page_no: usize, total: usize) -> String {
    format!("Page {page_no}/{total}")
}

fn color(rgb: Rgb8) -> Color {
    let (r, g, b) = rgb;
    Color::Rgb(Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

impl PageComposer {
    pub fn new(title: &str) -> Result<Self> {
        let doc = PdfDocument::empty(title);
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .context("Failed to register Helvetica")?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .context("Failed to register Helvetica-Bold")?;
        let oblique = doc
            .add_builtin_font(BuiltinFont::HelveticaOblique)
            .context("Failed to register Helvetica-Oblique")?;

        Ok(Self {
            doc,
            fonts: Fonts {
                regular,
                bold,
                oblique,
            },
            pages: Vec::new(),
            header_drawn: Vec::new(),
            running_header: None,
            x: L_MARGIN,
            y: T_MARGIN,
        })
    }

    /// Header line drawn on every page except the first.
    pub fn set_running_header(&mut self, text: &str) {
        self.running_header = Some(text.to_string());
    }

    /// Start a new page and move the cursor to its top-left content corner.
    pub fn add_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "content");
        self.pages.push((page, layer));
        self.x = L_MARGIN;
        self.y = T_MARGIN;

        let mut drew_header = false;
        if self.pages.len() > 1 {
            if let Some(header) = self.running_header.clone() {
                let style = TextStyle::oblique(8.0, GRAY);
                let w = text_width_mm(&header, style.font, style.size);
                self.draw_text(&header, &style, (PAGE_W - w) / 2.0, T_MARGIN + 7.0);
                self.y = T_MARGIN + 12.0;
                drew_header = true;
            }
        }
        self.header_drawn.push(drew_header);
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Whether the running header was drawn on the page at `index` (0-based).
    pub fn header_on_page(&self, index: usize) -> bool {
        self.header_drawn.get(index).copied().unwrap_or(false)
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    /// Move the cursor down and back to the left margin.
    pub fn ln(&mut self, h: f32) {
        self.x = L_MARGIN;
        self.y += h;
    }

    fn layer(&self) -> PdfLayerReference {
        let (page, layer) = self.pages[self.pages.len() - 1];
        self.doc.get_page(page).get_layer(layer)
    }

    fn font(&self, kind: FontKind) -> &IndirectFontRef {
        match kind {
            FontKind::Regular => &self.fonts.regular,
            FontKind::Bold => &self.fonts.bold,
            FontKind::Oblique => &self.fonts.oblique,
        }
    }

    /// Break the page if `needed` millimeters of height will not fit.
    fn ensure_room(&mut self, needed: f32) {
        if self.pages.is_empty() || self.y + needed > PAGE_H - BREAK_MARGIN {
            let x = self.x;
            self.add_page();
            self.x = x.max(L_MARGIN);
        }
    }

    fn draw_text(&self, text: &str, style: &TextStyle, x: f32, baseline_from_top: f32) {
        let layer = self.layer();
        layer.set_fill_color(color(style.color));
        layer.use_text(
            text,
            style.size,
            Mm(x),
            Mm(PAGE_H - baseline_from_top),
            self.font(style.font),
        );
    }

    fn fill_rect(&self, x: f32, y_top: f32, w: f32, h: f32, fill: Rgb8) {
        let layer = self.layer();
        layer.set_fill_color(color(fill));
        let ring = vec![
            (Point::new(Mm(x), Mm(PAGE_H - y_top)), false),
            (Point::new(Mm(x + w), Mm(PAGE_H - y_top)), false),
            (Point::new(Mm(x + w), Mm(PAGE_H - y_top - h)), false),
            (Point::new(Mm(x), Mm(PAGE_H - y_top - h)), false),
        ];
        layer.add_polygon(Polygon {
            rings: vec![ring],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
    }

    /// One line of text in a cell of height `h`. A width of `0.0` extends the
    /// cell to the right margin. `ln_after` moves the cursor to the start of
    /// the next line; otherwise it advances past the cell.
    pub fn cell(&mut self, w: f32, h: f32, text: &str, style: &TextStyle, align: Align, ln_after: bool) {
        self.ensure_room(h);
        let w = if w == 0.0 { PAGE_W - R_MARGIN - self.x } else { w };
        let tx = match align {
            Align::Left => self.x,
            Align::Center => self.x + (w - text_width_mm(text, style.font, style.size)) / 2.0,
        };
        self.draw_text(text, style, tx, self.y + h * BASELINE);
        if ln_after {
            self.x = L_MARGIN;
            self.y += h;
        } else {
            self.x += w;
        }
    }

    /// Wrapped multi-line text. A width of `0.0` extends to the right margin.
    /// The cursor ends at the left margin, below the last line.
    pub fn multi_cell(&mut self, w: f32, line_h: f32, text: &str, style: &TextStyle) {
        self.multi_cell_inner(w, line_h, text, style, None);
    }

    /// `multi_cell` with each line's box painted in `fill` first.
    pub fn filled_multi_cell(
        &mut self,
        w: f32,
        line_h: f32,
        text: &str,
        style: &TextStyle,
        fill: Rgb8,
    ) {
        self.multi_cell_inner(w, line_h, text, style, Some(fill));
    }

    fn multi_cell_inner(
        &mut self,
        w: f32,
        line_h: f32,
        text: &str,
        style: &TextStyle,
        fill: Option<Rgb8>,
    ) {
        self.ensure_room(line_h);
        let x = self.x;
        let w = if w == 0.0 { PAGE_W - R_MARGIN - x } else { w };
        for line in wrap(text, style.font, style.size, w) {
            self.ensure_room(line_h);
            if let Some(fill) = fill {
                self.fill_rect(x, self.y, w, line_h, fill);
            }
            self.draw_text(&line, style, x, self.y + line_h * BASELINE);
            self.y += line_h;
        }
        self.x = L_MARGIN;
    }

    /// Inline flowed text starting at the current cursor, wrapping at the
    /// right margin back to the left margin. The cursor stays on the last
    /// line, just past the text, so runs of different weight can continue
    /// each other.
    pub fn write(&mut self, line_h: f32, text: &str, style: &TextStyle) {
        self.ensure_room(line_h);
        let right = PAGE_W - R_MARGIN;
        let mut line = String::new();
        let mut line_x = self.x;

        for word in text.split_whitespace() {
            let candidate = if line.is_empty() {
                word.to_string()
            } else {
                format!("{line} {word}")
            };
            let fits = line_x + text_width_mm(&candidate, style.font, style.size) <= right;
            if fits || (line.is_empty() && line_x <= L_MARGIN) {
                line = candidate;
                continue;
            }
            if !line.is_empty() {
                self.draw_text(&line, style, line_x, self.y + line_h * BASELINE);
                line.clear();
            }
            self.y += line_h;
            self.ensure_room(line_h);
            line_x = L_MARGIN;
            line = word.to_string();
        }

        if !line.is_empty() {
            self.draw_text(&line, style, line_x, self.y + line_h * BASELINE);
        }
        let mut end_x = line_x + text_width_mm(&line, style.font, style.size);
        if text.ends_with(' ') {
            end_x += text_width_mm(" ", style.font, style.size);
        }
        self.x = end_x;
    }

    /// Horizontal rule at the current y position.
    pub fn rule(&mut self, x1: f32, x2: f32, rgb: Rgb8, thickness_pt: f32) {
        let layer = self.layer();
        layer.set_outline_color(color(rgb));
        layer.set_outline_thickness(thickness_pt);
        let y = Mm(PAGE_H - self.y);
        layer.add_line(Line {
            points: vec![
                (Point::new(Mm(x1), y), false),
                (Point::new(Mm(x2), y), false),
            ],
            is_closed: false,
        });
    }

    /// Stamp the page-total footers, serialize, and write the file.
    /// The write goes through a temp file and rename, so the output path
    /// either holds the complete document or is untouched.
    pub fn finalize(self, output: &Path) -> Result<u64> {
        let total = self.pages.len();
        let style = TextStyle::oblique(8.0, GRAY);
        for (i, (page, layer)) in self.pages.iter().enumerate() {
            let label = footer_label(i + 1, total);
            let w = text_width_mm(&label, style.font, style.size);
            let layer = self.doc.get_page(*page).get_layer(*layer);
            layer.set_fill_color(color(style.color));
            layer.use_text(
                label,
                style.size,
                Mm((PAGE_W - w) / 2.0),
                Mm(10.0),
                self.font(style.font),
            );
        }

        let bytes = self
            .doc
            .save_to_bytes()
            .context("Failed to serialize the PDF")?;
        let len = bytes.len() as u64;

        let tmp = output.with_extension("pdf.tmp");
        fs::write(&tmp, &bytes)
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, output)
            .with_context(|| format!("Failed to move the PDF into place at {}", output.display()))?;
        Ok(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brief::style::DARK;

    fn composer() -> PageComposer {
        PageComposer::new("test").unwrap()
    }

    #[test]
    fn test_page_count_matches_explicit_page_starts() {
        let mut pdf = composer();
        let body = TextStyle::regular(10.0, DARK);
        for _ in 0..3 {
            pdf.add_page();
            pdf.cell(0.0, 10.0, "short content", &body, Align::Left, true);
        }
        assert_eq!(pdf.page_count(), 3);
    }

    #[test]
    fn test_running_header_skips_first_page() {
        let mut pdf = composer();
        pdf.set_running_header("Running header");
        pdf.add_page();
        pdf.add_page();
        pdf.add_page();
        assert!(!pdf.header_on_page(0));
        assert!(pdf.header_on_page(1));
        assert!(pdf.header_on_page(2));
    }

    #[test]
    fn test_overflow_starts_a_new_page() {
        let mut pdf = composer();
        let body = TextStyle::regular(10.0, DARK);
        pdf.add_page();
        // Enough 10mm lines to cross the break margin on an A4 page.
        for _ in 0..40 {
            pdf.cell(0.0, 10.0, "line", &body, Align::Left, true);
        }
        assert!(pdf.page_count() > 1);
        // Cursor is on the most recent page, inside the content area.
        assert!(pdf.y() <= PAGE_H - BREAK_MARGIN);
    }

    #[test]
    fn test_ln_returns_to_left_margin() {
        let mut pdf = composer();
        let body = TextStyle::regular(10.0, DARK);
        pdf.add_page();
        pdf.cell(5.0, 5.5, "-", &body, Align::Left, false);
        assert!(pdf.x() > L_MARGIN);
        pdf.ln(5.5);
        assert_eq!(pdf.x(), L_MARGIN);
    }

    #[test]
    fn test_write_advances_cursor_past_text() {
        let mut pdf = composer();
        let bold = TextStyle::bold(10.0, DARK);
        pdf.add_page();
        let before = pdf.x();
        pdf.write(5.5, "Professional headshots ", &bold);
        assert!(pdf.x() > before);
    }

    #[test]
    fn test_footer_label_format() {
        assert_eq!(footer_label(1, 5), "Page 1/5");
        assert_eq!(footer_label(5, 5), "Page 5/5");
    }
}
