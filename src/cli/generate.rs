//! Generate command implementation.
//!
//! Builds a palette from a base colour and prints or exports it.

use std::path::{Path, PathBuf};

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::engine::{generate_palette, generate_palette_with_rng};
use crate::error::Result;
use crate::export::{to_json, to_text, write_json, write_swatch_png, write_text, ExportFormat};
use crate::output::{display_path, plural, Printer};
use crate::types::{Palette, PaletteKind};

/// Generate a colour palette from a base colour
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Base colour as 6-digit hex, e.g. "#3498DB" (default from hub.yaml)
    pub base: Option<String>,

    /// Palette kind: monochromatic, analogous, complementary, triadic, random
    #[arg(long, short)]
    pub kind: Option<PaletteKind>,

    /// Output format
    #[arg(long, short, value_enum)]
    pub format: Option<ExportFormat>,

    /// Write the palette to a file instead of stdout (swatch format writes text)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Also write a PNG strip of swatches
    #[arg(long)]
    pub png: Option<PathBuf>,

    /// Seed for random palettes, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Config file (default: ./hub.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::discover(Path::new("."))?,
    };

    let base = args.base.clone().unwrap_or_else(|| config.base.to_hex());
    let kind = args.kind.unwrap_or(config.kind);
    let format = args.format.unwrap_or(config.format);

    if args.seed.is_some() && kind.uses_base() {
        printer.warning("Ignoring", &format!("--seed for {} palettes", kind));
    }

    let palette = match args.seed {
        Some(seed) => generate_palette_with_rng(&base, kind, &mut StdRng::seed_from_u64(seed))?,
        None => generate_palette(&base, kind)?,
    };

    let summary = plural(palette.len(), "colour", "colours");
    if kind.uses_base() {
        printer.status("Generated", &format!("{} palette, {} from {}", kind, summary, base));
    } else {
        printer.status("Generated", &format!("{} palette, {}", kind, summary));
    }

    match &args.output {
        Some(path) => {
            // ANSI swatches make no sense in a file
            match format {
                ExportFormat::Json => write_json(&palette, path)?,
                ExportFormat::Text | ExportFormat::Swatch => write_text(&palette, path)?,
            }
            printer.status("Wrote", &display_path(path));
        }
        None => print!("{}", render(&palette, format, printer)?),
    }

    if let Some(path) = &args.png {
        write_swatch_png(&palette, path, config.swatch_size)?;
        printer.status("Wrote", &display_path(path));
    }

    Ok(())
}

/// Render a palette in the requested format.
pub fn render(palette: &Palette, format: ExportFormat, printer: &Printer) -> Result<String> {
    match format {
        ExportFormat::Swatch => {
            let mut out = String::new();
            for (i, colour) in palette.iter().enumerate() {
                out.push_str(&printer.swatch(i + 1, colour));
                out.push('\n');
            }
            Ok(out)
        }
        ExportFormat::Text => Ok(to_text(palette)),
        ExportFormat::Json => to_json(palette).map(|mut json| {
            json.push('\n');
            json
        }),
    }
}
