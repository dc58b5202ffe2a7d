//! Advance widths for the built-in Helvetica faces.
//!
//! The standard-14 PDF fonts are not embedded, so wrapping has to measure text
//! with the published AFM advance widths (thousandths of an em, WinAnsi range
//! 0x20..=0x7E). Characters outside that range measure as the missing-glyph
//! width of the face.

use super::style::FontKind;

const PT_TO_MM: f32 = 0.352_778;

/// Helvetica, 0x20..=0x7E.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold, 0x20..=0x7E.
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

fn char_units(c: char, font: FontKind) -> u16 {
    let table = match font {
        FontKind::Bold => &HELVETICA_BOLD,
        // Oblique shares the regular metrics.
        FontKind::Regular | FontKind::Oblique => &HELVETICA,
    };
    let code = c as u32;
    if (0x20..=0x7E).contains(&code) {
        table[(code - 0x20) as usize]
    } else {
        table[0]
    }
}

/// Width of `text` in millimeters at the given point size.
pub fn text_width_mm(text: &str, font: FontKind, size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_units(c, font))).sum();
    units as f32 / 1000.0 * size_pt * PT_TO_MM
}

/// Greedy word wrap to `max_mm`. Words wider than a whole line are broken
/// mid-word so a single long token cannot overflow the content box.
pub fn wrap(text: &str, font: FontKind, size_pt: f32, max_mm: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if text_width_mm(&candidate, font, size_pt) <= max_mm {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if text_width_mm(word, font, size_pt) <= max_mm {
            current = word.to_string();
        } else {
            // Hard-break the oversized word.
            let mut piece = String::new();
            for c in word.chars() {
                piece.push(c);
                if text_width_mm(&piece, font, size_pt) > max_mm && piece.chars().count() > 1 {
                    piece.pop();
                    lines.push(std::mem::take(&mut piece));
                    piece.push(c);
                }
            }
            current = piece;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wider_text_measures_wider() {
        let narrow = text_width_mm("il", FontKind::Regular, 10.0);
        let wide = text_width_mm("WM", FontKind::Regular, 10.0);
        assert!(wide > narrow);
    }

    #[test]
    fn test_bold_is_at_least_as_wide() {
        let regular = text_width_mm("Blueprint", FontKind::Regular, 10.0);
        let bold = text_width_mm("Blueprint", FontKind::Bold, 10.0);
        assert!(bold >= regular);
    }

    #[test]
    fn test_wrap_respects_max_width() {
        let text = "Before I build anything I need to run a full competitor analysis \
                    because it is the foundation of everything that follows";
        let lines = wrap(text, FontKind::Regular, 10.0, 60.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width_mm(line, FontKind::Regular, 10.0) <= 60.0, "{line}");
        }
    }

    #[test]
    fn test_wrap_preserves_every_word() {
        let text = "strategy expertise execution of a real game plan";
        let lines = wrap(text, FontKind::Regular, 10.0, 30.0);
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text);
    }

    #[test]
    fn test_wrap_breaks_oversized_word() {
        let lines = wrap("BrotherBrooklynAuthorDotCom", FontKind::Regular, 12.0, 20.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width_mm(line, FontKind::Regular, 12.0) <= 20.0);
        }
    }

    #[test]
    fn test_wrap_empty_text_yields_one_empty_line() {
        let lines = wrap("", FontKind::Regular, 10.0, 50.0);
        assert_eq!(lines, vec![String::new()]);
    }
}
