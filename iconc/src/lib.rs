//! A compiler for icon fonts.
//!
//! Drives SVG icon sources through IR to the deliverables a web page needs:
//! an SVG font document, optionally compiled and compressed to woff2 through
//! collaborator seams, and the stylesheet binding icon classes to glyphs.

mod args;
mod error;

pub use args::Args;
pub use error::Error;

use std::{
    collections::HashSet,
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use iconbe::{
    compile::{FontCompiler, TtfMetadata, Woff2Compressor},
    svgfont::serialize_svg_font,
};
pub use iconbe::css::{generate_css, CssOptions};
use iconir::{
    glyph::normalize_path,
    ir::Glyph,
    metrics::{code_point_for, FontConfig, FontMetrics, DEFAULT_UNICODE_BASE},
    types::SvgSource,
};
use svg2iconir::source::parse_source;

/// Settings for one webfont build.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WebfontOptions {
    pub font: FontConfig,
    pub metadata: TtfMetadata,
    /// First icon code point. Default [DEFAULT_UNICODE_BASE].
    pub unicode_base: Option<u32>,
}

/// Convert sources to glyphs, in input order.
///
/// Code points are assigned by input position; a source that produces no
/// glyph leaves its code point unused rather than renumbering the rest.
/// Duplicate names are refused outright, before any per-source work.
pub fn build_glyphs(
    sources: &[SvgSource],
    metrics: &FontMetrics,
    unicode_base: u32,
) -> Result<Vec<Glyph>, Error> {
    let mut seen = HashSet::new();
    for source in sources {
        if !seen.insert(&source.name) {
            return Err(Error::DuplicateGlyphName(source.name.clone()));
        }
    }

    let mut glyphs = Vec::with_capacity(sources.len());
    for (index, source) in sources.iter().enumerate() {
        let mut diagnostics = Vec::new();
        let parsed = parse_source(source, &mut diagnostics);
        for diagnostic in &diagnostics {
            warn!("{diagnostic}");
        }
        let parsed = match parsed {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("'{}': no glyph: {e}", source.name);
                continue;
            }
        };
        let Some(unicode) = code_point_for(unicode_base, index) else {
            warn!("'{}': no code point to assign", source.name);
            continue;
        };
        let normalized = match normalize_path(&parsed, metrics) {
            Ok(normalized) => normalized,
            Err(e) => {
                warn!("'{}': no glyph: {e}", source.name);
                continue;
            }
        };
        glyphs.push(Glyph {
            name: source.name.clone(),
            unicode,
            path: normalized.path,
            advance_width: normalized.width,
        });
    }
    debug!("{}/{} sources became glyphs", glyphs.len(), sources.len());
    Ok(glyphs)
}

/// Sources to a complete SVG font document.
pub fn svgs_to_svg_font(sources: &[SvgSource], options: &WebfontOptions) -> Result<String, Error> {
    let metrics = options.font.resolve()?;
    let base = options.unicode_base.unwrap_or(DEFAULT_UNICODE_BASE);
    let glyphs = build_glyphs(sources, &metrics, base)?;
    Ok(serialize_svg_font(&glyphs, &metrics))
}

/// Sources to a binary font via the provided compiler.
pub fn svgs_to_ttf(
    sources: &[SvgSource],
    options: &WebfontOptions,
    compiler: &impl FontCompiler,
) -> Result<Vec<u8>, Error> {
    let svg_font = svgs_to_svg_font(sources, options)?;
    let ttf = compiler
        .compile(&svg_font, &options.metadata)
        .map_err(iconbe::error::Error::Compile)?;
    Ok(ttf)
}

/// Sources all the way to woff2.
pub fn svgs_to_woff2(
    sources: &[SvgSource],
    options: &WebfontOptions,
    compiler: &impl FontCompiler,
    compressor: &impl Woff2Compressor,
) -> Result<Vec<u8>, Error> {
    let ttf = svgs_to_ttf(sources, options, compiler)?;
    let woff2 = compressor
        .compress(&ttf)
        .map_err(iconbe::error::Error::Compress)?;
    Ok(woff2)
}

/// Run the compiler per args; artifacts land in the build dir.
pub fn run(args: Args) -> Result<(), Error> {
    let config = args.font_config()?;
    let metrics = config.resolve()?;
    let sources = load_sources(&args.sources)?;
    info!(
        "Compiling {} icons to '{}'",
        sources.len(),
        args.build_dir.display()
    );

    let base = args.unicode_base.unwrap_or(DEFAULT_UNICODE_BASE);
    let glyphs = build_glyphs(&sources, &metrics, base)?;
    let svg_font = serialize_svg_font(&glyphs, &metrics);
    let font_url = args
        .font_url
        .clone()
        .unwrap_or_else(|| format!("./{}.woff2", args.output));
    let css = generate_css(
        &sources,
        &CssOptions {
            font_family: metrics.font_family.clone(),
            font_url,
            unicode_base: args.unicode_base,
            vertical_align: args.vertical_align.clone(),
        },
    );

    require_dir(&args.build_dir)?;
    write_artifact(&args.build_dir.join(format!("{}.svg", args.output)), &svg_font)?;
    write_artifact(&args.build_dir.join(format!("{}.css", args.output)), &css)?;
    Ok(())
}

fn write_artifact(path: &Path, content: &str) -> Result<(), Error> {
    debug!("write {path:?}");
    fs::write(path, content).map_err(|source| Error::FileIo {
        path: path.to_path_buf(),
        source,
    })
}

fn require_dir(dir: &Path) -> Result<(), Error> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::ExpectedDirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| Error::FileIo {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    debug!("require_dir {:?}", dir);
    Ok(())
}

/// Files stay in the order given; directories contribute their *.svg
/// entries sorted by name.
fn load_sources(paths: &[PathBuf]) -> Result<Vec<SvgSource>, Error> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut entries = Vec::new();
            let dir = fs::read_dir(path).map_err(|source| Error::FileIo {
                path: path.clone(),
                source,
            })?;
            for entry in dir {
                let entry = entry.map_err(|source| Error::FileIo {
                    path: path.clone(),
                    source,
                })?;
                let entry_path = entry.path();
                if entry_path.extension().and_then(OsStr::to_str) == Some("svg") {
                    entries.push(entry_path);
                }
            }
            entries.sort();
            files.extend(entries);
        } else {
            files.push(path.clone());
        }
    }
    files.iter().map(|path| load_source(path)).collect()
}

fn load_source(path: &Path) -> Result<SvgSource, Error> {
    if path.extension().and_then(OsStr::to_str) != Some("svg") {
        return Err(Error::UnrecognizedSource(path.to_path_buf()));
    }
    let name = path
        .file_stem()
        .and_then(OsStr::to_str)
        .ok_or_else(|| Error::UnrecognizedSource(path.to_path_buf()))?;
    let content = fs::read_to_string(path).map_err(|source| Error::FileIo {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SvgSource::new(name, content))
}
