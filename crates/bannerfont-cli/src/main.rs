use anyhow::Result;
use bannerfont::{FontRegistry, LayoutMode, MissingGlyphPolicy, RenderOptions};
use clap::{Parser, Subcommand, ValueEnum};
use std::{fs, path::Path};

#[derive(Parser)]
#[command(name = "bannerfont", about = "Banner font toolkit CLI")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum LayoutArg {
    /// Use the font's own layout mode
    Default,
    /// No overlap between glyphs
    Full,
    /// Remove whitespace overlap only
    Fitted,
    /// Merge touching edges through the smush rules
    Smushed,
}

impl LayoutArg {
    fn to_override(self) -> Option<LayoutMode> {
        match self {
            LayoutArg::Default => None,
            LayoutArg::Full => Some(LayoutMode::FullWidth),
            LayoutArg::Fitted => Some(LayoutMode::Kerning),
            LayoutArg::Smushed => Some(LayoutMode::Smushing),
        }
    }
}

#[derive(Subcommand)]
enum Cmd {
    /// Render text with a font
    Render {
        /// Builtin font name, or a path to a .flf file or zip archive
        #[arg(short, long)]
        font: String,
        #[arg(short, long)]
        text: String,
        #[arg(long, value_enum, default_value = "default")]
        layout: LayoutArg,
        /// Fail on characters the font has no glyph for, instead of
        /// dropping them
        #[arg(long)]
        strict: bool,
    },
    /// Inspect font metadata
    Inspect {
        #[arg(short, long)]
        font: String,
    },
    /// List available builtin fonts
    List,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut registry = FontRegistry::with_builtin_fonts()?;
    match cli.command {
        Cmd::Render {
            font,
            text,
            layout,
            strict,
        } => {
            let name = resolve_font(&mut registry, &font)?;
            let options = RenderOptions {
                layout: layout.to_override(),
                missing_glyphs: if strict {
                    MissingGlyphPolicy::Fail
                } else {
                    MissingGlyphPolicy::Drop
                },
            };
            let rendering = registry.render(&name, &text, &options)?;
            println!("{}", rendering.text);
            if !rendering.dropped.is_empty() {
                log::warn!(
                    "dropped {} character(s) without a glyph: {:?}",
                    rendering.dropped.len(),
                    rendering.dropped
                );
            }
        }
        Cmd::Inspect { font } => {
            let name = resolve_font(&mut registry, &font)?;
            let f = registry.lookup(&name)?;
            println!("font: {}", f.name());
            println!("  height: {}", f.height());
            println!("  max length: {}", f.max_length());
            println!("  layout: {:?}", f.layout());
            println!("  glyphs: {}", f.glyph_count());
        }
        Cmd::List => {
            let mut names: Vec<&str> = registry.font_names().collect();
            names.sort_unstable();
            for name in names {
                println!("{name}");
            }
        }
    }
    Ok(())
}

/// Accept either a builtin font name or a path to font data on disk.
/// Returns the registry name to render with.
fn resolve_font(registry: &mut FontRegistry, spec: &str) -> Result<String> {
    if spec.ends_with(".flf") || spec.ends_with(".zip") {
        let stem = Path::new(spec)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unnamed");
        let bytes = fs::read(spec)?;
        let font = bannerfont::Font::from_bytes(stem, &bytes)?;
        let name = font.name().to_string();
        registry.register(font);
        return Ok(name);
    }
    Ok(spec.to_string())
}
