//! Append-only font store keyed by name.
//!
//! The registry is meant to be filled once at startup and treated as
//! read-only afterwards; `register` is an unguarded insert-if-absent and
//! needs external synchronization if exposed to concurrent writers.

use crate::{
    builtin,
    error::{FontError, Result},
    font::Font,
    layout::{RenderOptions, Rendering},
    parser,
};
use std::collections::HashMap;

#[derive(Default)]
pub struct FontRegistry {
    fonts: HashMap<String, Font>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-loaded with the embedded font catalog.
    pub fn with_builtin_fonts() -> Result<Self> {
        let mut registry = Self::new();
        for (name, definition) in builtin::catalog() {
            registry.parse_font(name, definition)?;
        }
        Ok(registry)
    }

    /// Insert a font under its own name. First registration wins; a later
    /// font under the same name is a no-op. Returns whether it was
    /// inserted.
    pub fn register(&mut self, font: Font) -> bool {
        let name = font.name().to_string();
        if self.fonts.contains_key(&name) {
            log::debug!("font {name} already registered, keeping the first");
            return false;
        }
        self.fonts.insert(name, font);
        true
    }

    /// Parse `definition` and register it under `name`. When `name` is
    /// already taken the definition is not even parsed, matching the
    /// first-wins contract.
    pub fn parse_font(&mut self, name: &str, definition: &str) -> Result<()> {
        if self.fonts.contains_key(name) {
            log::debug!("font {name} already registered, keeping the first");
            return Ok(());
        }
        let font = Font::parse(name, definition)?;
        self.fonts.insert(name.to_string(), font);
        Ok(())
    }

    /// Register every `.flf` entry of a ZIP archive under its file stem.
    /// Returns the number of fonts newly registered.
    pub fn load_archive(&mut self, bytes: &[u8]) -> Result<usize> {
        if !parser::is_zip(bytes) {
            return Err(FontError::Format("not a zip archive".into()));
        }
        let mut count = 0;
        for font in parser::parse_archive(bytes)? {
            if self.register(font) {
                count += 1;
            }
        }
        log::debug!("registered {count} font(s) from archive");
        Ok(count)
    }

    pub fn lookup(&self, name: &str) -> Result<&Font> {
        self.fonts
            .get(name)
            .ok_or_else(|| FontError::FontNotFound(name.into()))
    }

    pub fn font_names(&self) -> impl Iterator<Item = &str> {
        self.fonts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Render `text` with the named font.
    pub fn render(&self, font: &str, text: &str, options: &RenderOptions) -> Result<Rendering> {
        self.lookup(font)?.render(text, options)
    }

    /// Convenience wrapper returning only the banner string.
    pub fn render_text(&self, font: &str, text: &str, options: &RenderOptions) -> Result<String> {
        Ok(self.render(font, text, options)?.text)
    }
}
