//! IR of icons on their way to becoming font glyphs.

use crate::types::GlyphName;

/// The declared canvas of an SVG source, from the root `viewBox` attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Parse a `viewBox` attribute value of exactly four integers.
    ///
    /// Anything else, including fewer or more values, is `None`.
    pub fn parse(raw: &str) -> Option<ViewBox> {
        let values = raw
            .split_whitespace()
            .map(|v| v.parse::<i32>().ok())
            .collect::<Option<Vec<_>>>()?;
        let [x, y, width, height] = values.as_slice() else {
            return None;
        };
        Some(ViewBox {
            x: *x as f64,
            y: *y as f64,
            width: *width as f64,
            height: *height as f64,
        })
    }
}

impl Default for ViewBox {
    fn default() -> Self {
        ViewBox {
            x: 0.0,
            y: 0.0,
            width: 1000.0,
            height: 1000.0,
        }
    }
}

/// Everything usable we found in one SVG source.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSvg {
    /// Path data of every drawable element, joined with single spaces.
    pub path: String,
    /// The root viewBox, when the source declared a usable one.
    pub view_box: Option<ViewBox>,
}

/// One glyph of the icon font.
///
/// The outline is in font units, y-up, anchored at the origin; the code
/// point never changes once assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub name: GlyphName,
    pub unicode: char,
    pub path: String,
    pub advance_width: f64,
}
