//! Command line arguments

use std::{fs, path::PathBuf};

use clap::Parser;

use iconir::metrics::FontConfig;

use crate::Error;

/// What icon font can we build for you today?
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct Args {
    /// SVG icon files, or directories of them
    #[arg(required = true)]
    pub sources: Vec<PathBuf>,

    /// Font family name. Wins over the config file.
    #[arg(short, long)]
    pub font_family: Option<String>,

    /// A yaml file of font settings. Any flag given here wins field by field.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Em square size
    #[arg(long)]
    pub units_per_em: Option<f64>,

    /// Ascent above the baseline, in font units
    #[arg(long)]
    pub ascent: Option<f64>,

    /// Descent below the baseline, in font units
    #[arg(long)]
    pub descent: Option<f64>,

    /// Vertical shift applied to every glyph after scaling, in font units
    #[arg(long)]
    pub offset_y: Option<f64>,

    /// How much of the em height to leave empty as visual margin
    #[arg(long)]
    pub height_decrease: Option<f64>,

    /// Whether to scale against the declared viewBox rather than measured ink
    #[arg(long)]
    pub preserve_viewbox: Option<bool>,

    /// First icon code point, decimal or 0x-prefixed hex
    #[arg(long, value_parser = parse_code_point)]
    pub unicode_base: Option<u32>,

    /// URL the stylesheet loads the woff2 from. Defaults to ./<output>.woff2.
    #[arg(long)]
    pub font_url: Option<String>,

    /// vertical-align value for the base icon class, e.g. middle
    #[arg(long)]
    pub vertical_align: Option<String>,

    /// Working directory for the build process. Artifacts are written here.
    #[arg(short, long)]
    #[clap(default_value = "build")]
    pub build_dir: PathBuf,

    /// Artifact name stem; <output>.svg and <output>.css land in build-dir
    #[arg(short, long)]
    #[clap(default_value = "icons")]
    pub output: String,
}

impl Args {
    /// Font settings merged from the config file and flags; flags win.
    pub fn font_config(&self) -> Result<FontConfig, Error> {
        let mut config = match &self.config {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|source| Error::FileIo {
                    path: path.clone(),
                    source,
                })?;
                serde_yaml::from_str(&raw)?
            }
            None => FontConfig::default(),
        };
        if let Some(font_family) = &self.font_family {
            config.font_family = font_family.clone();
        }
        config.units_per_em = self.units_per_em.or(config.units_per_em);
        config.ascent = self.ascent.or(config.ascent);
        config.descent = self.descent.or(config.descent);
        config.offset_y = self.offset_y.or(config.offset_y);
        config.height_decrease = self.height_decrease.or(config.height_decrease);
        config.preserve_viewbox = self.preserve_viewbox.or(config.preserve_viewbox);
        Ok(config)
    }
}

fn parse_code_point(raw: &str) -> Result<u32, String> {
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => raw.parse(),
    }
    .map_err(|e| format!("'{raw}': {e}"))
}
