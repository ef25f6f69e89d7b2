//! One SVG source into IR.
//!
//! The walker visits every element in document order, keeps whatever draws,
//! and records a [`Diagnostic`] for whatever doesn't. A single bad element
//! never takes the rest of the icon down with it.

use iconir::ir::{ParsedSvg, ViewBox};
use iconir::types::{GlyphName, SvgSource};
use roxmltree::{Document, Node};

use crate::error::{Diagnostic, Error};
use crate::shapes::Shape;

/// Convert one source's markup into joined path data plus its declared
/// canvas, if any.
///
/// Only the root `svg` element can declare the canvas. A malformed or
/// zero-area `viewBox` is reported and then treated as absent.
pub fn parse_source(
    source: &SvgSource,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<ParsedSvg, Error> {
    let doc = Document::parse(&source.content)?;
    let root = doc.root_element();

    let mut view_box = None;
    if root.tag_name().name() == "svg" {
        if let Some(raw) = root.attribute("viewBox") {
            match ViewBox::parse(raw) {
                Some(parsed) if parsed.width > 0.0 && parsed.height > 0.0 => {
                    view_box = Some(parsed)
                }
                _ => diagnostics.push(Diagnostic::BadViewBox {
                    glyph: source.name.clone(),
                    raw: raw.to_string(),
                }),
            }
        }
    }

    let mut fragments = Vec::new();
    collect_paths(&source.name, root, &mut fragments, diagnostics);
    if fragments.is_empty() {
        return Err(Error::NoGeometry);
    }

    Ok(ParsedSvg {
        path: fragments.join(" "),
        view_box,
    })
}

fn collect_paths(
    glyph: &GlyphName,
    node: Node<'_, '_>,
    fragments: &mut Vec<String>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if node.is_element() {
        if node.tag_name().name() == "path" {
            // d is carried verbatim; conversion happens downstream
            match node.attribute("d") {
                Some(d) if !d.trim().is_empty() => fragments.push(d.to_string()),
                _ => {}
            }
        } else {
            match Shape::from_node(&node) {
                Ok(Some(shape)) => fragments.push(shape.to_path()),
                Ok(None) => {}
                Err(source) => diagnostics.push(Diagnostic::BadShape {
                    glyph: glyph.clone(),
                    tag: node.tag_name().name().to_string(),
                    source,
                }),
            }
        }
    }
    for child in node.children() {
        collect_paths(glyph, child, fragments, diagnostics);
    }
}
