//! Shape elements to path data.
//!
//! The six convertible SVG shapes, parsed off one element node and rendered
//! as path commands. A conversion is purely a function of its own node;
//! tags outside the set are simply not ours to judge.

use kurbo::{BezPath, Circle, Ellipse, Point, Rect, Shape as _};
use roxmltree::Node;

use crate::error::ShapeError;

/// Flattening tolerance for circle and ellipse arcs, in user units.
const CURVE_TOLERANCE: f64 = 0.1;

/// Cubic control distance approximating a quarter arc.
const KAPPA: f64 = 0.552_284_749_8;

/// A non-path drawable, dispatched by tag name.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rx: Option<f64>,
        ry: Option<f64>,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Polygon {
        points: Vec<Point>,
    },
    Polyline {
        points: Vec<Point>,
    },
}

impl Shape {
    /// Parse a recognized shape element; `Ok(None)` when the tag is not one
    /// of the six.
    ///
    /// Positional attributes default to 0 when absent, as in SVG. Sizing
    /// attributes are required.
    pub fn from_node(node: &Node<'_, '_>) -> Result<Option<Shape>, ShapeError> {
        let shape = match node.tag_name().name() {
            "rect" => Shape::Rect {
                x: opt_attr(node, "rect", "x")?.unwrap_or(0.0),
                y: opt_attr(node, "rect", "y")?.unwrap_or(0.0),
                width: req_attr(node, "rect", "width")?,
                height: req_attr(node, "rect", "height")?,
                rx: opt_attr(node, "rect", "rx")?,
                ry: opt_attr(node, "rect", "ry")?,
            },
            "circle" => Shape::Circle {
                cx: opt_attr(node, "circle", "cx")?.unwrap_or(0.0),
                cy: opt_attr(node, "circle", "cy")?.unwrap_or(0.0),
                r: req_attr(node, "circle", "r")?,
            },
            "ellipse" => Shape::Ellipse {
                cx: opt_attr(node, "ellipse", "cx")?.unwrap_or(0.0),
                cy: opt_attr(node, "ellipse", "cy")?.unwrap_or(0.0),
                rx: req_attr(node, "ellipse", "rx")?,
                ry: req_attr(node, "ellipse", "ry")?,
            },
            "line" => Shape::Line {
                x1: opt_attr(node, "line", "x1")?.unwrap_or(0.0),
                y1: opt_attr(node, "line", "y1")?.unwrap_or(0.0),
                x2: opt_attr(node, "line", "x2")?.unwrap_or(0.0),
                y2: opt_attr(node, "line", "y2")?.unwrap_or(0.0),
            },
            "polygon" => Shape::Polygon {
                points: parse_points(node, "polygon")?,
            },
            "polyline" => Shape::Polyline {
                points: parse_points(node, "polyline")?,
            },
            _ => return Ok(None),
        };
        Ok(Some(shape))
    }

    /// Render as path data in the element's own coordinates.
    pub fn to_path(&self) -> String {
        match self {
            Shape::Rect {
                x,
                y,
                width,
                height,
                rx,
                ry,
            } => {
                let rect = Rect::new(*x, *y, x + width, y + height);
                match corner_radii(*rx, *ry, rect) {
                    Some((rx, ry)) => rounded_rect_path(rect, rx, ry).to_svg(),
                    None => rect.to_path(CURVE_TOLERANCE).to_svg(),
                }
            }
            Shape::Circle { cx, cy, r } => {
                Circle::new((*cx, *cy), *r).to_path(CURVE_TOLERANCE).to_svg()
            }
            Shape::Ellipse { cx, cy, rx, ry } => Ellipse::new((*cx, *cy), (*rx, *ry), 0.0)
                .to_path(CURVE_TOLERANCE)
                .to_svg(),
            Shape::Line { x1, y1, x2, y2 } => {
                let mut path = BezPath::new();
                path.move_to((*x1, *y1));
                path.line_to((*x2, *y2));
                path.to_svg()
            }
            Shape::Polygon { points } => poly_path(points, true).to_svg(),
            Shape::Polyline { points } => poly_path(points, false).to_svg(),
        }
    }
}

/// SVG corner radius rules: a lone rx or ry supplies both, zero or negative
/// radii mean square corners, radii clamp to half the rect's extent.
fn corner_radii(rx: Option<f64>, ry: Option<f64>, rect: Rect) -> Option<(f64, f64)> {
    let (rx, ry) = match (rx, ry) {
        (None, None) => return None,
        (Some(rx), None) => (rx, rx),
        (None, Some(ry)) => (ry, ry),
        (Some(rx), Some(ry)) => (rx, ry),
    };
    if rx <= 0.0 || ry <= 0.0 {
        return None;
    }
    Some((rx.min(rect.width() / 2.0), ry.min(rect.height() / 2.0)))
}

// kurbo's RoundedRect only does circular corners, so elliptical ones are
// built by hand from quarter-arc cubics.
fn rounded_rect_path(rect: Rect, rx: f64, ry: f64) -> BezPath {
    let (x0, y0, x1, y1) = (rect.x0, rect.y0, rect.x1, rect.y1);
    let mut path = BezPath::new();
    path.move_to((x0 + rx, y0));
    path.line_to((x1 - rx, y0));
    path.curve_to(
        (x1 - rx + KAPPA * rx, y0),
        (x1, y0 + ry - KAPPA * ry),
        (x1, y0 + ry),
    );
    path.line_to((x1, y1 - ry));
    path.curve_to(
        (x1, y1 - ry + KAPPA * ry),
        (x1 - rx + KAPPA * rx, y1),
        (x1 - rx, y1),
    );
    path.line_to((x0 + rx, y1));
    path.curve_to(
        (x0 + rx - KAPPA * rx, y1),
        (x0, y1 - ry + KAPPA * ry),
        (x0, y1 - ry),
    );
    path.line_to((x0, y0 + ry));
    path.curve_to(
        (x0, y0 + ry - KAPPA * ry),
        (x0 + rx - KAPPA * rx, y0),
        (x0 + rx, y0),
    );
    path.close_path();
    path
}

fn poly_path(points: &[Point], close: bool) -> BezPath {
    let mut path = BezPath::new();
    let Some((first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to(*first);
    for point in rest {
        path.line_to(*point);
    }
    if close {
        path.close_path();
    }
    path
}

fn req_attr(node: &Node<'_, '_>, tag: &'static str, attr: &'static str) -> Result<f64, ShapeError> {
    let raw = node
        .attribute(attr)
        .ok_or(ShapeError::MissingAttribute { tag, attr })?;
    parse_number(tag, attr, raw)
}

fn opt_attr(
    node: &Node<'_, '_>,
    tag: &'static str,
    attr: &'static str,
) -> Result<Option<f64>, ShapeError> {
    node.attribute(attr)
        .map(|raw| parse_number(tag, attr, raw))
        .transpose()
}

fn parse_number(tag: &'static str, attr: &'static str, raw: &str) -> Result<f64, ShapeError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ShapeError::BadNumber {
            tag,
            attr,
            value: raw.to_string(),
        }),
    }
}

/// Coordinate pairs separated by whitespace and/or commas. A trailing
/// unpaired value is dropped, as lenient SVG renderers do.
fn parse_points(node: &Node<'_, '_>, tag: &'static str) -> Result<Vec<Point>, ShapeError> {
    let raw = node.attribute("points").ok_or(ShapeError::MissingAttribute {
        tag,
        attr: "points",
    })?;
    let values = raw
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|v| !v.is_empty())
        .map(|v| parse_number(tag, "points", v))
        .collect::<Result<Vec<_>, _>>()?;
    let points: Vec<Point> = values
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect();
    if points.is_empty() {
        return Err(ShapeError::NoPoints);
    }
    Ok(points)
}
