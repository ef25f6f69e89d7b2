//! Glyph normalization.
//!
//! SVG sources draw y-down from the top left corner; fonts draw y-up on an
//! em square anchored at the origin. Normalization flips each outline about
//! its own bounds, scales it into the em square and re-anchors it, measuring
//! the advance width from the result.

use kurbo::{Affine, BezPath, Rect, Shape};

use crate::{error::Error, ir::ParsedSvg, metrics::FontMetrics};

/// Font-space path data plus the advance width it implies.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPath {
    pub path: String,
    pub width: f64,
}

/// Reflect y about the horizontal midline of the path's own bounding box.
///
/// The bounding box itself is unchanged.
fn flip_y(path: &BezPath) -> BezPath {
    let bbox = path.bounding_box();
    let mut flipped = path.clone();
    flipped.apply_affine(Affine::new([1.0, 0.0, 0.0, -1.0, 0.0, bbox.y0 + bbox.y1]));
    flipped
}

/// Map one parsed source into font space.
///
/// The scale reference is the flipped outline's bounding box, unless the
/// source declared a viewBox and `preserve_viewbox` is set, in which case
/// the declared canvas wins. Scaling is uniform; the vertical fit decides
/// the factor for both axes.
pub fn normalize_path(parsed: &ParsedSvg, metrics: &FontMetrics) -> Result<NormalizedPath, Error> {
    let path = BezPath::from_svg(&parsed.path)?;
    if path.elements().is_empty() {
        return Err(Error::EmptyPath);
    }
    let flipped = flip_y(&path);

    let reference = match (metrics.preserve_viewbox, parsed.view_box) {
        (true, Some(vb)) => Rect::new(vb.x, vb.y, vb.x + vb.width, vb.y + vb.height),
        _ => flipped.bounding_box(),
    };
    // Guard the division; a NaN here would poison every coordinate.
    if !reference.height().is_finite() || reference.height() <= 0.0 {
        return Err(Error::DegenerateBounds(reference.height()));
    }

    let scale = (metrics.units_per_em - metrics.height_decrease) / reference.height();
    let transform = Affine::translate((0.0, metrics.offset_y))
        * Affine::scale(scale)
        * Affine::translate((-reference.x0, -reference.y0));

    let mut normalized = flipped;
    normalized.apply_affine(transform);
    let width = normalized.bounding_box().width();

    Ok(NormalizedPath {
        path: normalized.to_svg(),
        width,
    })
}

#[cfg(test)]
mod tests {
    use kurbo::{BezPath, Shape};
    use pretty_assertions::assert_eq;

    use super::{flip_y, normalize_path};
    use crate::{
        error::Error,
        ir::{ParsedSvg, ViewBox},
        metrics::FontConfig,
    };

    fn metrics(units_per_em: f64) -> crate::metrics::FontMetrics {
        FontConfig {
            units_per_em: Some(units_per_em),
            ..FontConfig::new("icons")
        }
        .resolve()
        .unwrap()
    }

    fn parsed(path: &str) -> ParsedSvg {
        ParsedSvg {
            path: path.to_string(),
            view_box: None,
        }
    }

    #[test]
    fn flip_preserves_bounds() {
        let path = BezPath::from_svg("M0,0 L10,0 L10,4 Z").unwrap();
        assert_eq!(path.bounding_box(), flip_y(&path).bounding_box());
    }

    #[test]
    fn flip_twice_restores_coordinates() {
        let path = BezPath::from_svg("M0,0 L10,0 L10,4 Z").unwrap();
        assert_eq!(path.to_svg(), flip_y(&flip_y(&path)).to_svg());
    }

    #[test]
    fn scales_to_em_height_uniformly() {
        // 250 wide, 500 tall; upem 1000 means everything doubles
        let result = normalize_path(&parsed("M0,0 H250 V500 H0 Z"), &metrics(1000.0)).unwrap();
        assert_eq!("M0,1000 L500,1000 L500,0 L0,0 Z", result.path);
        assert_eq!(500.0, result.width);

        let bbox = BezPath::from_svg(&result.path).unwrap().bounding_box();
        assert_eq!(1000.0, bbox.height());
        assert_eq!(500.0, bbox.width());
    }

    #[test]
    fn height_decrease_shrinks_the_fit() {
        let source = parsed("M0,0 H250 V500 H0 Z");
        let config = FontConfig {
            units_per_em: Some(1000.0),
            height_decrease: Some(500.0),
            ..FontConfig::new("icons")
        };
        let result = normalize_path(&source, &config.resolve().unwrap()).unwrap();
        let bbox = BezPath::from_svg(&result.path).unwrap().bounding_box();
        assert_eq!(500.0, bbox.height());
        assert_eq!(250.0, result.width);
    }

    #[test]
    fn declared_viewbox_wins_as_scale_reference() {
        let source = ParsedSvg {
            path: "M0,0 H10 V10 H0 Z".to_string(),
            view_box: Some(ViewBox {
                x: -5.0,
                y: -5.0,
                width: 20.0,
                height: 20.0,
            }),
        };
        let result = normalize_path(&source, &metrics(1000.0)).unwrap();
        assert_eq!("M250,750 L750,750 L750,250 L250,250 Z", result.path);
        assert_eq!(500.0, result.width);
    }

    #[test]
    fn viewbox_ignored_when_not_preserving() {
        let source = ParsedSvg {
            path: "M0,0 H10 V10 H0 Z".to_string(),
            view_box: Some(ViewBox {
                x: 0.0,
                y: 0.0,
                width: 20.0,
                height: 20.0,
            }),
        };
        let config = FontConfig {
            units_per_em: Some(1000.0),
            preserve_viewbox: Some(false),
            ..FontConfig::new("icons")
        };
        let result = normalize_path(&source, &config.resolve().unwrap()).unwrap();
        assert_eq!(1000.0, result.width);
    }

    #[test]
    fn offset_y_shifts_after_scaling() {
        let source = parsed("M0,0 H10 V10 H0 Z");
        let config = FontConfig {
            units_per_em: Some(1000.0),
            offset_y: Some(100.0),
            ..FontConfig::new("icons")
        };
        let result = normalize_path(&source, &config.resolve().unwrap()).unwrap();
        assert_eq!("M0,1100 L1000,1100 L1000,100 L0,100 Z", result.path);
    }

    #[test]
    fn zero_height_ink_is_degenerate() {
        assert!(matches!(
            normalize_path(&parsed("M0,0 H10"), &metrics(1000.0)),
            Err(Error::DegenerateBounds(_))
        ));
        assert!(matches!(
            normalize_path(&parsed("M5,5"), &metrics(1000.0)),
            Err(Error::DegenerateBounds(_))
        ));
    }

    #[test]
    fn empty_path_data_is_rejected() {
        assert!(matches!(
            normalize_path(&parsed(""), &metrics(1000.0)),
            Err(Error::EmptyPath)
        ));
    }

    #[test]
    fn unparseable_path_data_is_rejected() {
        assert!(matches!(
            normalize_path(&parsed("M0,0 Q"), &metrics(1000.0)),
            Err(Error::UnreadablePath(_))
        ));
    }
}
