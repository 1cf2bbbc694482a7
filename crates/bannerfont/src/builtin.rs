//! Embedded font catalog, compiled into the binary and registered through
//! [`FontRegistry::with_builtin_fonts`](crate::FontRegistry::with_builtin_fonts).

/// One-row font where every glyph is the character itself. Full-width
/// layout; useful as a baseline and for tests.
pub const MINI: &str = include_str!("../fonts/mini.flf");

/// Two-row font doubling each character, smushing layout.
pub const BLOCK: &str = include_str!("../fonts/block.flf");

/// The `(name, definition)` pairs of every bundled font.
pub fn catalog() -> [(&'static str, &'static str); 2] {
    [("mini", MINI), ("block", BLOCK)]
}
