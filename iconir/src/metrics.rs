//! Font settings and their resolved form.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Start of the Unicode Private Use Area, the default first icon code point.
pub const DEFAULT_UNICODE_BASE: u32 = 0xE000;

/// The code point assigned to the source at `index`, counting from `base`.
///
/// Assignment is by original input position. Sources that drop out keep their
/// slot, leaving a gap, so glyphs and stylesheet rules derived independently
/// still agree on every code point.
pub fn code_point_for(base: u32, index: usize) -> Option<char> {
    u32::try_from(index)
        .ok()
        .and_then(|i| base.checked_add(i))
        .and_then(char::from_u32)
}

/// User-facing font settings.
///
/// Anything optional has a documented default; [FontConfig::resolve] fills
/// them in exactly once, at the entry point, so nothing downstream has to
/// second-guess a missing value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct FontConfig {
    pub font_family: String,
    /// Em square size. Default 1024.
    pub units_per_em: Option<f64>,
    /// Ascent above the baseline. Default units_per_em.
    pub ascent: Option<f64>,
    /// Descent below the baseline. Default 0.
    pub descent: Option<f64>,
    /// Vertical shift applied to every glyph after scaling, in font units.
    /// Default 0.
    pub offset_y: Option<f64>,
    /// Shrinks the usable glyph height to leave visual margin. Default 0.
    pub height_decrease: Option<f64>,
    /// Scale against the declared viewBox rather than measured ink.
    /// Default true.
    pub preserve_viewbox: Option<bool>,
}

impl FontConfig {
    pub fn new(font_family: impl Into<String>) -> FontConfig {
        FontConfig {
            font_family: font_family.into(),
            ..Default::default()
        }
    }

    /// Fill defaults and validate; fails before any per-source work begins.
    pub fn resolve(&self) -> Result<FontMetrics, Error> {
        if self.font_family.trim().is_empty() {
            return Err(Error::MissingFontFamily);
        }
        let units_per_em = self.units_per_em.unwrap_or(1024.0);
        if !units_per_em.is_finite() || units_per_em <= 0.0 {
            return Err(Error::InvalidUnitsPerEm(units_per_em));
        }
        let height_decrease = self.height_decrease.unwrap_or(0.0);
        if !height_decrease.is_finite() || !(0.0..units_per_em).contains(&height_decrease) {
            return Err(Error::InvalidHeightDecrease {
                units_per_em,
                height_decrease,
            });
        }
        Ok(FontMetrics {
            font_family: self.font_family.clone(),
            units_per_em,
            ascent: self.ascent.unwrap_or(units_per_em),
            descent: self.descent.unwrap_or(0.0),
            offset_y: self.offset_y.unwrap_or(0.0),
            height_decrease,
            preserve_viewbox: self.preserve_viewbox.unwrap_or(true),
        })
    }
}

/// Fully resolved font metrics, as written into the font-face block.
#[derive(Debug, Clone, PartialEq)]
pub struct FontMetrics {
    pub font_family: String,
    pub units_per_em: f64,
    pub ascent: f64,
    pub descent: f64,
    pub offset_y: f64,
    pub height_decrease: f64,
    pub preserve_viewbox: bool,
}
