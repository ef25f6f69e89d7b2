use thiserror::Error;

use iconir::types::GlyphName;

/// Why one whole source produced no IR.
#[derive(Debug, Error)]
pub enum Error {
    #[error("markup is not well formed: {0}")]
    Markup(#[from] roxmltree::Error),
    #[error("no convertible elements")]
    NoGeometry,
}

/// Why one shape element could not become path data.
#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("<{tag}> is missing required attribute '{attr}'")]
    MissingAttribute { tag: &'static str, attr: &'static str },
    #[error("<{tag}> attribute '{attr}' is not a finite number: '{value}'")]
    BadNumber {
        tag: &'static str,
        attr: &'static str,
        value: String,
    },
    #[error("'points' holds no coordinate pairs")]
    NoPoints,
}

/// A per-node problem the walker stepped around.
///
/// These never abort a traversal; the walker records them and moves on, and
/// the caller decides what to do with the pile.
#[derive(Debug, Error)]
pub enum Diagnostic {
    #[error("'{glyph}': dropping <{tag}>: {source}")]
    BadShape {
        glyph: GlyphName,
        tag: String,
        #[source]
        source: ShapeError,
    },
    #[error("'{glyph}': ignoring viewBox '{raw}'")]
    BadViewBox { glyph: GlyphName, raw: String },
}
