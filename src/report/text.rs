//! Text measurement for the report renderer
//!
//! Wrapping must be decided before anything is drawn, so widths are
//! computed from embedded AFM metrics for the built-in Helvetica faces
//! instead of asking the PDF backend. `measure` and the draw pass share
//! `wrap_lines`, which keeps the dry-run and the emitted text in lockstep.

use super::BODY_FONT_SIZE;

/// Font faces used in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    Oblique,
}

/// Points to millimeters
pub const PT_TO_MM: f32 = 0.352_778;

/// Glyph advance widths for characters outside the ASCII table (Latin-1
/// accents and symbols), in 1/1000 em
const EXTENDED_WIDTH: u32 = 556;

/// Helvetica advance widths for chars 32..=126, in 1/1000 em (AFM data)
const HELVETICA_WIDTHS: [u32; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, 667, // 'A'..'P'
    778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'Q'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, // 'a'..'p'
    556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'q'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Helvetica-Bold advance widths for chars 32..=126 (AFM data)
const HELVETICA_BOLD_WIDTHS: [u32; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, 667,
    778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611,
    611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// Drop characters the built-in fonts cannot encode.
///
/// Newlines and tabs become spaces; anything outside printable Latin-1 is
/// dropped. The renderer never fails on exotic model output.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
        .filter(|&c| (' '..='~').contains(&c) || ('\u{00A0}'..='\u{00FF}').contains(&c))
        .collect()
}

fn char_width_units(c: char, style: FontStyle) -> u32 {
    let code = c as u32;
    if (32..=126).contains(&code) {
        let idx = (code - 32) as usize;
        match style {
            FontStyle::Bold => HELVETICA_BOLD_WIDTHS[idx],
            // Oblique shares the regular advance widths
            FontStyle::Regular | FontStyle::Oblique => HELVETICA_WIDTHS[idx],
        }
    } else {
        EXTENDED_WIDTH
    }
}

/// Rendered width of a string in millimeters at the given size
pub fn text_width(text: &str, size: f32, style: FontStyle) -> f32 {
    let units: u32 = text.chars().map(|c| char_width_units(c, style)).sum();
    units as f32 / 1000.0 * size * PT_TO_MM
}

/// Greedy word wrap into lines no wider than `max_width` millimeters.
///
/// Words wider than the column are hard-broken by characters. Always
/// returns at least one (possibly empty) line.
pub fn wrap_lines(text: &str, max_width: f32, size: f32, style: FontStyle) -> Vec<String> {
    let clean = sanitize(text);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in clean.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if text_width(&candidate, size, style) <= max_width {
            current = candidate;
        } else if text_width(word, size, style) <= max_width {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let mut piece = String::new();
            for ch in word.chars() {
                let mut next = piece.clone();
                next.push(ch);
                if text_width(&next, size, style) > max_width && !piece.is_empty() {
                    lines.push(piece);
                    piece = ch.to_string();
                } else {
                    piece = next;
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

/// Number of wrapped lines a table cell needs at the given column width
pub fn measure(text: &str, width: f32) -> usize {
    wrap_lines(text, width, BODY_FONT_SIZE, FontStyle::Regular).len()
}
