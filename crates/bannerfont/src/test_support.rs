//! Test support utilities for bannerfont.
//!
//! Helpers for building small synthetic fonts, useful for exercising the
//! layout engine without a full definition file. Not part of the stable
//! API.

use crate::font::{Font, LayoutMode};

/// Build a one-row font from `(char, row)` pairs, with `$` as hardblank.
pub fn one_row_font(layout: LayoutMode, glyphs: &[(char, &str)]) -> Font {
    let max_length = glyphs
        .iter()
        .map(|(_, row)| row.chars().count())
        .max()
        .unwrap_or(1);
    let mut font = Font::new("synthetic", 1, max_length.max(1), layout, '$');
    for (ch, row) in glyphs {
        font.add_glyph(*ch, &[row]);
    }
    font
}

/// Build a fixed-height font from `(char, rows)` pairs.
pub fn font_with_rows(height: usize, layout: LayoutMode, glyphs: &[(char, &[&str])]) -> Font {
    let max_length = glyphs
        .iter()
        .flat_map(|(_, rows)| rows.iter())
        .map(|row| row.chars().count())
        .max()
        .unwrap_or(1);
    let mut font = Font::new("synthetic", height, max_length.max(1), layout, '$');
    for (ch, rows) in glyphs {
        font.add_glyph(*ch, rows);
    }
    font
}

/// Assemble a definition text for parser tests: a standard header, one
/// comment line, then the same `row` repeated for every ASCII glyph,
/// `@`-terminated per the format.
pub fn uniform_definition(height: usize, old_layout: i32, row: &str) -> String {
    let max_length = row.chars().count().max(1);
    let mut out = format!("flf2a$ {height} {height} {max_length} {old_layout} 1\ntest font\n");
    for _ in 32u32..=126 {
        for i in 0..height {
            out.push_str(row);
            out.push('@');
            if i + 1 == height {
                out.push('@');
            }
            out.push('\n');
        }
    }
    out
}
