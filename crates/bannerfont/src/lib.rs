//! bannerfont: FIGlet-style banner font engine.
//!
//! Parses plaintext `.flf` font definitions into an immutable [`Font`],
//! stores fonts in an app-owned [`FontRegistry`], and lays out text as
//! multi-row ASCII banner art, interlocking adjacent glyphs with
//! kerning/smushing rules.
//!
//! ```
//! use bannerfont::{FontRegistry, RenderOptions};
//!
//! let registry = FontRegistry::with_builtin_fonts().unwrap();
//! let banner = registry
//!     .render_text("mini", "Hi", &RenderOptions::default())
//!     .unwrap();
//! assert_eq!(banner, "Hi");
//! ```

pub mod builtin;
mod error;
mod font;
mod layout;
mod parser;
mod registry;
mod smush;

// Test utilities
pub mod test_support;

pub use error::{FontError, Result};
pub use font::{Font, Glyph, LayoutMode};
pub use layout::{MissingGlyphPolicy, RenderOptions, Rendering};
pub use registry::FontRegistry;
pub use smush::smush;
