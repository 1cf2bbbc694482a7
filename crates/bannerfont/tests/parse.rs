use bannerfont::{builtin, test_support, Font, FontError, FontRegistry, LayoutMode};
use pretty_assertions::assert_eq;
use std::io::Write;

const EXTENDED: [char; 7] = ['Ä', 'Ö', 'Ü', 'ä', 'ö', 'ü', 'ß'];

#[test]
fn builtin_mini_glyphs_are_well_formed() {
    let font = Font::parse("mini", builtin::MINI).unwrap();
    assert_eq!(font.height(), 1);
    assert_eq!(font.layout(), LayoutMode::FullWidth);
    assert_eq!(font.glyph_count(), 95 + EXTENDED.len());
    for cp in 32u32..=126 {
        let glyph = font.glyph(char::from_u32(cp).unwrap()).unwrap();
        assert_eq!(glyph.rows.len(), font.height());
        for row in &glyph.rows {
            assert!(row.chars().count() <= font.max_length());
        }
    }
    for ch in EXTENDED {
        assert!(font.has_char(ch), "missing extended glyph {ch:?}");
    }
}

#[test]
fn builtin_block_has_no_extended_glyphs() {
    let font = Font::parse("block", builtin::BLOCK).unwrap();
    assert_eq!(font.height(), 2);
    assert_eq!(font.layout(), LayoutMode::Smushing);
    assert_eq!(font.glyph_count(), 95);
    assert!(!font.has_char('Ä'));
}

#[test]
fn uniform_definition_parses_every_ascii_glyph() {
    let def = test_support::uniform_definition(2, 2, "##");
    let font = Font::parse("uniform", &def).unwrap();
    assert_eq!(font.glyph_count(), 95);
    let glyph = font.glyph('A').unwrap();
    assert_eq!(glyph.rows, vec!["##".to_string(), "##".to_string()]);
    assert_eq!(glyph.width, 2);
}

#[test]
fn truncated_body_is_a_format_error() {
    let def = test_support::uniform_definition(1, 0, "#");
    let truncated: String = def.lines().take(40).collect::<Vec<_>>().join("\n");
    let err = Font::parse("bad", &truncated).unwrap_err();
    assert!(matches!(err, FontError::Format(_)), "got {err:?}");
}

#[test]
fn unparseable_header_field_is_a_format_error() {
    let def = test_support::uniform_definition(1, 0, "#");
    let broken = def.replacen("flf2a$ 1", "flf2a$ one", 1);
    let err = Font::parse("bad", &broken).unwrap_err();
    assert!(matches!(err, FontError::Format(_)));
}

#[test]
fn zero_height_is_a_format_error() {
    let def = test_support::uniform_definition(1, 0, "#");
    let broken = def.replacen("flf2a$ 1 1", "flf2a$ 0 0", 1);
    assert!(Font::parse("bad", &broken).is_err());
}

#[test]
fn comments_swallowing_the_body_is_a_format_error() {
    let def = "flf2a$ 1 1 3 0 999\na comment\n#@@\n";
    let err = Font::parse("bad", def).unwrap_err();
    assert!(matches!(err, FontError::Format(_)));
}

#[test]
fn missing_terminator_is_a_format_error() {
    let mut def = String::from("flf2a$ 1 1 5 0 0\n");
    for _ in 0..95 {
        def.push_str("xy\n");
    }
    let err = Font::parse("bad", &def).unwrap_err();
    assert!(matches!(err, FontError::Format(_)));
}

#[test]
fn extended_glyphs_truncate_tolerantly() {
    let mut def = test_support::uniform_definition(1, 0, "#");
    // three of the seven extended glyphs present
    def.push_str("Ä@@\nÖ@@\nÜ@@\n");
    let font = Font::parse("partial", &def).unwrap();
    assert_eq!(font.glyph_count(), 95 + 3);
    assert!(font.has_char('Ü'));
    assert!(!font.has_char('ä'));
}

#[test]
fn overlong_row_is_a_format_error() {
    let mut def = String::from("flf2a$ 1 1 2 0 0\n");
    for _ in 0..95 {
        def.push_str("####@@\n");
    }
    let err = Font::parse("bad", &def).unwrap_err();
    assert!(matches!(err, FontError::Format(_)));
}

#[test]
fn hardblank_comes_from_the_signature_token() {
    let def = test_support::uniform_definition(1, 0, "#").replacen("flf2a$", "flf2a#", 1);
    let font = Font::parse("hb", &def).unwrap();
    assert_eq!(font.hardblank(), '#');
}

#[test]
fn old_layout_bits_decode_once() {
    assert_eq!(LayoutMode::from_old_layout(0), LayoutMode::FullWidth);
    assert_eq!(LayoutMode::from_old_layout(1), LayoutMode::Kerning);
    assert_eq!(LayoutMode::from_old_layout(2), LayoutMode::Smushing);
    // kerning takes precedence when both flags are set
    assert_eq!(LayoutMode::from_old_layout(3), LayoutMode::Kerning);
    // unrelated high bits are ignored
    assert_eq!(LayoutMode::from_old_layout(0b1100), LayoutMode::FullWidth);
}

#[test]
fn registry_registration_is_first_wins() {
    let mut registry = FontRegistry::new();
    registry.parse_font("dup", builtin::MINI).unwrap();
    registry.parse_font("dup", builtin::BLOCK).unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.lookup("dup").unwrap().height(), 1);
}

#[test]
fn registry_lookup_miss() {
    let registry = FontRegistry::new();
    let err = registry.lookup("nope").unwrap_err();
    assert!(matches!(err, FontError::FontNotFound(name) if name == "nope"));
}

#[test]
fn with_builtin_fonts_loads_the_catalog() {
    let registry = FontRegistry::with_builtin_fonts().unwrap();
    let mut names: Vec<&str> = registry.font_names().collect();
    names.sort_unstable();
    assert_eq!(names, vec!["block", "mini"]);
}

fn zip_with_entry(name: &str, content: &str) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    writer
        .start_file(name, zip::write::SimpleFileOptions::default())
        .unwrap();
    writer.write_all(content.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

#[test]
fn archive_entries_register_under_their_stem() {
    let bytes = zip_with_entry("fonts/tiny.flf", builtin::MINI);
    let mut registry = FontRegistry::new();
    assert_eq!(registry.load_archive(&bytes).unwrap(), 1);
    assert_eq!(registry.lookup("tiny").unwrap().height(), 1);
    // reloading the same archive is a no-op
    assert_eq!(registry.load_archive(&bytes).unwrap(), 0);
}

#[test]
fn from_bytes_accepts_plain_text_and_archives() {
    let font = Font::from_bytes("mini", builtin::MINI.as_bytes()).unwrap();
    assert_eq!(font.height(), 1);
    let bytes = zip_with_entry("mini.flf", builtin::MINI);
    let font = Font::from_bytes("ignored", &bytes).unwrap();
    assert_eq!(font.name(), "mini");
}

#[test]
fn load_archive_rejects_non_zip_bytes() {
    let mut registry = FontRegistry::new();
    assert!(registry.load_archive(b"not a zip").is_err());
}
