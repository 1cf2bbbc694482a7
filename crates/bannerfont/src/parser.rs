//! FIGlet-style `.flf` definition parsing.
//!
//! Header line of space-separated fields (signature/hardblank token,
//! height, baseline, max length, old layout, comment lines, rest ignored),
//! `commentLines` comment lines, then `height` lines per glyph. Every
//! glyph line ends with a terminator character, doubled on the glyph's
//! final row.

use crate::{
    error::{FontError, Result},
    font::{Font, LayoutMode, DEFAULT_HARDBLANK},
};
use std::io::{Cursor, Read};
use std::{fs, path::Path};
use zip::ZipArchive;

/// Extended-Latin codepoints that may follow the ASCII range, in the fixed
/// order the format stores them.
const EXTENDED_CODEPOINTS: [u32; 7] = [196, 214, 220, 228, 246, 252, 223];

impl Font {
    /// Parse a plaintext font definition.
    pub fn parse(name: &str, definition: &str) -> Result<Self> {
        let (header, body) = definition
            .split_once('\n')
            .ok_or_else(|| FontError::Format("missing glyph data after header".into()))?;
        let fields: Vec<&str> = header.split_whitespace().collect();

        let height = int_field::<usize>(&fields, 1, "height")?;
        let max_length = int_field::<usize>(&fields, 3, "max length")?;
        let old_layout = int_field::<i32>(&fields, 4, "old layout")?;
        let comment_lines = int_field::<usize>(&fields, 5, "comment lines")?;
        if height == 0 {
            return Err(FontError::Format("height must be positive".into()));
        }
        if max_length == 0 {
            return Err(FontError::Format("max length must be positive".into()));
        }
        let hardblank = fields
            .first()
            .and_then(|sig| sig.strip_prefix("flf2a"))
            .and_then(|rest| rest.chars().next())
            .unwrap_or(DEFAULT_HARDBLANK);

        let lines: Vec<&str> = body.lines().collect();
        if comment_lines >= lines.len() {
            return Err(FontError::Format(
                "no glyph data after comment lines".into(),
            ));
        }
        let lines = &lines[comment_lines..];
        let terminator = find_terminator(lines)?;

        let mut font = Font::new(name, height, max_length, LayoutMode::from_old_layout(old_layout), hardblank);
        let mut idx = 0;
        for cp in 32u32..=126 {
            if idx + height > lines.len() {
                return Err(FontError::Format(format!(
                    "truncated glyph data at codepoint {cp}"
                )));
            }
            push_glyph(&mut font, cp, &lines[idx..idx + height], terminator, max_length)?;
            idx += height;
        }
        // extended glyphs are optional; stop as soon as the data runs out
        for &cp in &EXTENDED_CODEPOINTS {
            if idx + height > lines.len() {
                break;
            }
            push_glyph(&mut font, cp, &lines[idx..idx + height], terminator, max_length)?;
            idx += height;
        }

        log::debug!(
            "parsed font {name}: height {height}, max length {max_length}, {:?}, {} glyphs",
            font.layout(),
            font.glyph_count()
        );
        Ok(font)
    }

    /// Parse a definition from raw bytes: plain `.flf` text, or a ZIP
    /// archive whose first `.flf` entry is used.
    pub fn from_bytes(name: &str, bytes: &[u8]) -> Result<Self> {
        if bytes.len() >= 2 && bytes[0] == 0x1F && bytes[1] == 0x8B {
            return Err(FontError::Format(
                "gzip compressed .flf not supported; provide plain .flf or a zip archive".into(),
            ));
        }
        if is_zip(bytes) {
            let mut fonts = parse_archive(bytes)?;
            return fonts
                .drain(..)
                .next()
                .ok_or_else(|| FontError::Format("zip archive contained no .flf".into()));
        }
        let content = std::str::from_utf8(bytes)
            .map_err(|e| FontError::Format(format!("utf8 error: {e}")))?;
        Font::parse(name, content)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unnamed");
        let bytes = fs::read(path)?;
        Font::from_bytes(name, &bytes)
    }
}

pub(crate) fn is_zip(bytes: &[u8]) -> bool {
    bytes.len() >= 4 && &bytes[0..4] == b"PK\x03\x04"
}

/// Parse every `.flf` entry of a ZIP archive, each named by its file stem.
pub(crate) fn parse_archive(bytes: &[u8]) -> Result<Vec<Font>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| FontError::Format(format!("zip open error: {e}")))?;
    let mut fonts = Vec::new();
    for i in 0..archive.len() {
        let mut file = archive
            .by_index(i)
            .map_err(|e| FontError::Format(format!("zip entry error: {e}")))?;
        if !file.name().ends_with(".flf") {
            continue;
        }
        let name = Path::new(file.name())
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unnamed")
            .to_string();
        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| FontError::Format(format!("zip read error: {e}")))?;
        fonts.push(Font::parse(&name, &content)?);
    }
    Ok(fonts)
}

/// Locate the glyph end-of-row terminator by scanning backward for a row
/// ending in a doubled non-space character (a glyph's final row doubles
/// its terminator).
fn find_terminator(lines: &[&str]) -> Result<char> {
    for line in lines.iter().rev() {
        let mut tail = line.chars().rev();
        if let (Some(last), Some(prev)) = (tail.next(), tail.next()) {
            if last == prev && !last.is_whitespace() {
                return Ok(last);
            }
        }
    }
    Err(FontError::Format(
        "no consistent glyph terminator found".into(),
    ))
}

fn push_glyph(
    font: &mut Font,
    cp: u32,
    raw: &[&str],
    terminator: char,
    max_length: usize,
) -> Result<()> {
    let mut rows = Vec::with_capacity(raw.len());
    for line in raw {
        let row = match line.find(terminator) {
            Some(pos) => &line[..pos],
            None => line,
        };
        if row.chars().count() > max_length {
            return Err(FontError::Format(format!(
                "glyph row exceeds max length at codepoint {cp}"
            )));
        }
        rows.push(row);
    }
    let ch = char::from_u32(cp)
        .ok_or_else(|| FontError::Format(format!("invalid codepoint {cp}")))?;
    font.add_glyph(ch, &rows);
    Ok(())
}

fn int_field<T: std::str::FromStr>(fields: &[&str], index: usize, what: &str) -> Result<T> {
    fields
        .get(index)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| FontError::Format(format!("header field {index} ({what}) is not an integer")))
}
