use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("font_family must not be empty")]
    MissingFontFamily,
    #[error("units_per_em must be a positive finite number, not {0}")]
    InvalidUnitsPerEm(f64),
    #[error("height_decrease {height_decrease} must be at least 0 and less than units_per_em {units_per_em}")]
    InvalidHeightDecrease {
        units_per_em: f64,
        height_decrease: f64,
    },
    #[error("unable to parse path data")]
    UnreadablePath(#[from] kurbo::SvgParseError),
    #[error("no path segments")]
    EmptyPath,
    #[error("cannot scale against reference height {0}")]
    DegenerateBounds(f64),
}
