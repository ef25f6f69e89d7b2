//! Seams to the binary font toolchain.
//!
//! TTF compilation and WOFF2 compression are collaborator concerns; the
//! pipeline only needs something that honors these contracts. Failures
//! cross the seam as boxed errors and are wrapped at the call site.

use std::error::Error as StdError;

/// Name/value metadata stamped into the compiled font's tables.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TtfMetadata {
    pub version: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

/// Compiles an SVG font document to binary TTF.
pub trait FontCompiler {
    fn compile(
        &self,
        svg_font: &str,
        metadata: &TtfMetadata,
    ) -> Result<Vec<u8>, Box<dyn StdError + Send + Sync>>;
}

/// Compresses binary TTF to WOFF2.
pub trait Woff2Compressor {
    fn compress(&self, ttf: &[u8]) -> Result<Vec<u8>, Box<dyn StdError + Send + Sync>>;
}
