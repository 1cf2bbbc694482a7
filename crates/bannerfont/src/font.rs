//! Font model: a named collection of fixed-height glyphs plus the layout
//! metadata decoded from the definition header.

/// Fallback hardblank when the header signature carries none.
pub(crate) const DEFAULT_HARDBLANK: char = '$';

/// Horizontal layout mode, decoded once at parse time from the legacy
/// `oldLayout` bitmask (bit 0 = kerning, bit 1 = smushing, neither = full
/// width). Other bits are ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutMode {
    /// Glyphs are concatenated with no overlap.
    FullWidth,
    /// Trailing whitespace of the previous glyph is consumed; solid edges
    /// never touch.
    Kerning,
    /// Touching edge columns are merged through the smush rules.
    Smushing,
}

impl LayoutMode {
    pub fn from_old_layout(bits: i32) -> Self {
        if bits & 1 != 0 {
            LayoutMode::Kerning
        } else if bits & 2 != 0 {
            LayoutMode::Smushing
        } else {
            LayoutMode::FullWidth
        }
    }
}

/// One character of a font: `height` row strings with terminator markers
/// already stripped.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyph {
    /// Maximum width in characters of any row in the glyph
    pub width: usize,
    /// Ordered rows, top to bottom
    pub rows: Vec<String>,
}

/// An immutable parsed banner font.
///
/// Glyphs cover printable ASCII 32..=126 and, when the definition provides
/// them, the seven extended-Latin codepoints 196, 214, 220, 228, 246, 252
/// and 223. All supported codepoints fit the 8-bit table.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    name: String,
    height: usize,
    max_length: usize,
    layout: LayoutMode,
    hardblank: char,
    glyphs: Vec<Option<Glyph>>,
}

impl Font {
    pub fn new(
        name: impl Into<String>,
        height: usize,
        max_length: usize,
        layout: LayoutMode,
        hardblank: char,
    ) -> Self {
        Self {
            name: name.into(),
            height,
            max_length,
            layout,
            hardblank,
            glyphs: vec![None; 256],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows in every glyph.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Upper bound on any glyph row's length.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// The font's own layout mode; callers may override it per render.
    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    /// The placeholder character for an intentionally blank cell. Replaced
    /// with a space in final output.
    pub fn hardblank(&self) -> char {
        self.hardblank
    }

    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(ch as usize)?.as_ref()
    }

    pub fn has_char(&self, ch: char) -> bool {
        self.glyph(ch).is_some()
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.iter().filter(|g| g.is_some()).count()
    }

    /// Insert a glyph from raw rows. Rows beyond the font height are
    /// dropped, missing rows are padded empty. Codepoints outside the
    /// 8-bit table are ignored.
    pub fn add_glyph(&mut self, ch: char, rows: &[&str]) {
        if ch as u32 >= 256 {
            return;
        }
        let mut rows: Vec<String> = rows
            .iter()
            .take(self.height)
            .map(|r| (*r).to_string())
            .collect();
        rows.resize(self.height, String::new());
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        self.glyphs[ch as usize] = Some(Glyph { width, rows });
    }
}
