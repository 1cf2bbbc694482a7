//! Layout engine: appends glyphs to a row accumulator with the column
//! overlap dictated by the layout mode, resolving boundary collisions
//! through the smush rules.

use crate::{
    error::{FontError, Result},
    font::{Font, LayoutMode},
    smush::smush,
};

/// What to do with an input character the font has no glyph for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MissingGlyphPolicy {
    /// Omit the character from the output and report it in
    /// [`Rendering::dropped`].
    #[default]
    Drop,
    /// Fail the render with [`FontError::UnknownChar`].
    Fail,
    /// Substitute the glyph of the given character; drops when that glyph
    /// is missing too.
    Placeholder(char),
}

/// Per-call render configuration. No line wrapping is performed; callers
/// that need a width limit wrap the input themselves.
#[derive(Clone, Debug, Default)]
pub struct RenderOptions {
    /// Override the font's own layout mode; `None` uses the font's.
    pub layout: Option<LayoutMode>,
    pub missing_glyphs: MissingGlyphPolicy,
}

impl RenderOptions {
    pub fn with_layout(layout: LayoutMode) -> Self {
        Self {
            layout: Some(layout),
            ..Self::default()
        }
    }
}

/// Result of a render: the banner text plus every input character that was
/// dropped for lack of a glyph, so callers can warn users.
#[derive(Clone, Debug, PartialEq)]
pub struct Rendering {
    pub text: String,
    pub dropped: Vec<char>,
}

impl Font {
    /// Lay out `text` as multi-row banner art.
    ///
    /// Characters without a glyph are handled per
    /// [`RenderOptions::missing_glyphs`]. Hardblanks become spaces in the
    /// final output. Empty input, or input in which no glyph was placed,
    /// yields an empty string.
    pub fn render(&self, text: &str, options: &RenderOptions) -> Result<Rendering> {
        let mode = options.layout.unwrap_or(self.layout());
        let mut rows: Vec<Vec<char>> = vec![Vec::new(); self.height()];
        let mut placed = false;
        let mut dropped = Vec::new();

        for ch in text.chars() {
            let glyph = match self.glyph(ch) {
                Some(g) => g,
                None => match options.missing_glyphs {
                    MissingGlyphPolicy::Drop => {
                        dropped.push(ch);
                        continue;
                    }
                    MissingGlyphPolicy::Fail => return Err(FontError::UnknownChar(ch)),
                    MissingGlyphPolicy::Placeholder(p) => match self.glyph(p) {
                        Some(g) => g,
                        None => {
                            dropped.push(ch);
                            continue;
                        }
                    },
                },
            };
            let incoming: Vec<Vec<char>> =
                glyph.rows.iter().map(|r| r.chars().collect()).collect();

            if !placed {
                rows = incoming;
                placed = true;
                continue;
            }

            let overlap = match mode {
                LayoutMode::FullWidth => 0,
                LayoutMode::Kerning => kerning_overlap(&rows, &incoming, glyph.width),
                // smushing pushes one column deeper than the shared
                // whitespace, expecting the rules to resolve the collision
                LayoutMode::Smushing => smushing_overlap(&rows, &incoming) + 1,
            };
            merge(&mut rows, &incoming, overlap, self.hardblank());
        }

        if !placed {
            return Ok(Rendering {
                text: String::new(),
                dropped,
            });
        }
        let hardblank = self.hardblank();
        let text = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&c| if c == hardblank { ' ' } else { c })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        Ok(Rendering { text, dropped })
    }
}

/// Minimum trailing-space run across the accumulator rows, forced to zero
/// when any row has solid pixels touching at zero offset.
fn kerning_overlap(rows: &[Vec<char>], incoming: &[Vec<char>], glyph_width: usize) -> usize {
    let mut min = glyph_width;
    for (out, inc) in rows.iter().zip(incoming) {
        if let (Some(&a), Some(&b)) = (out.last(), inc.first()) {
            if a != ' ' && b != ' ' {
                return 0;
            }
        }
        let trailing = out.iter().rev().take_while(|&&c| c == ' ').count();
        min = min.min(trailing);
    }
    min
}

/// Largest column count simultaneously blank on the accumulator's tail and
/// the incoming glyph's head, maximized across rows.
fn smushing_overlap(rows: &[Vec<char>], incoming: &[Vec<char>]) -> usize {
    let mut max = 0;
    for (out, inc) in rows.iter().zip(incoming) {
        if out.is_empty() || inc.is_empty() {
            continue;
        }
        let mut k = 0;
        while k < out.len() && k < inc.len() && out[out.len() - 1 - k] == ' ' && inc[k] == ' ' {
            k += 1;
        }
        max = max.max(k);
    }
    max
}

/// Merge the incoming glyph into the accumulator at the requested overlap.
/// An overlap whose boundary pair no rule resolves is retried one column
/// shallower, down to plain concatenation, so glyph content is never
/// silently deleted.
fn merge(rows: &mut Vec<Vec<char>>, incoming: &[Vec<char>], mut overlap: usize, hardblank: char) {
    while overlap > 0 {
        if let Some(merged) = try_merge(rows, incoming, overlap, hardblank) {
            *rows = merged;
            return;
        }
        overlap -= 1;
    }
    for (out, inc) in rows.iter_mut().zip(incoming) {
        out.extend(inc.iter().copied());
    }
}

fn try_merge(
    rows: &[Vec<char>],
    incoming: &[Vec<char>],
    overlap: usize,
    hardblank: char,
) -> Option<Vec<Vec<char>>> {
    let mut merged = Vec::with_capacity(rows.len());
    for (out, inc) in rows.iter().zip(incoming) {
        // boundary pair; positions past a row's end count as spaces
        let a = if out.len() >= overlap {
            out[out.len() - overlap]
        } else {
            ' '
        };
        let b = if inc.len() >= overlap {
            inc[overlap - 1]
        } else {
            ' '
        };
        let joined = if a == ' ' {
            b
        } else if b == ' ' {
            a
        } else {
            smush(a, b, hardblank)?
        };
        let keep = out.len().saturating_sub(overlap);
        let mut row = out[..keep].to_vec();
        row.push(joined);
        row.extend(inc.iter().skip(overlap).copied());
        merged.push(row);
    }
    Some(merged)
}
