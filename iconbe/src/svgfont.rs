//! SVG font document assembly.
//!
//! The document is the wire format between the pipeline and the binary
//! font toolchain: an SVG 1.1 `font` element with one `glyph` per IR glyph,
//! serialized on a single line after the declaration and doctype.

use log::debug;

use iconir::ir::Glyph;
use iconir::metrics::FontMetrics;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" standalone=\"no\"?>\n";
const DOCTYPE: &str =
    "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n";

struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Element>,
}

impl Element {
    fn new(tag: &'static str, attrs: Vec<(&'static str, String)>) -> Element {
        Element {
            tag,
            attrs,
            children: Vec::new(),
        }
    }

    fn write(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            push_escaped(out, value);
            out.push('"');
        }
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            child.write(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

fn push_escaped(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Serialize glyphs into a complete SVG font document.
///
/// Glyphs appear in list order. Path data is carried as-is; whether it is
/// valid is the font compiler's concern, not ours.
pub fn serialize_svg_font(glyphs: &[Glyph], metrics: &FontMetrics) -> String {
    debug!(
        "Serializing '{}', {} glyphs",
        metrics.font_family,
        glyphs.len()
    );
    let upem = metrics.units_per_em.to_string();

    let mut font = Element::new("font", Vec::new());
    font.children.push(Element::new(
        "font-face",
        vec![
            ("font-family", metrics.font_family.clone()),
            ("units-per-em", upem.clone()),
            ("ascent", metrics.ascent.to_string()),
            ("descent", metrics.descent.to_string()),
        ],
    ));
    font.children.push(Element::new(
        "missing-glyph",
        vec![("horiz-adv-x", upem.clone()), ("vert-adv-y", upem.clone())],
    ));
    for glyph in glyphs {
        font.children.push(Element::new(
            "glyph",
            vec![
                ("glyph-name", glyph.name.to_string()),
                // the literal character, not a numeric reference
                ("unicode", glyph.unicode.to_string()),
                ("horiz-adv-x", glyph.advance_width.to_string()),
                ("vert-adv-y", upem.clone()),
                ("d", glyph.path.clone()),
            ],
        ));
    }

    let mut defs = Element::new("defs", Vec::new());
    defs.children.push(font);
    let mut svg = Element::new(
        "svg",
        vec![
            ("xmlns", "http://www.w3.org/2000/svg".to_string()),
            ("version", "1.1".to_string()),
        ],
    );
    svg.children.push(defs);

    let mut out = String::from(XML_DECLARATION);
    out.push_str(DOCTYPE);
    svg.write(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use iconir::ir::Glyph;
    use iconir::metrics::{FontConfig, FontMetrics};
    use pretty_assertions::assert_eq;

    use super::serialize_svg_font;

    fn default_metrics() -> FontMetrics {
        FontConfig::new("hf").resolve().unwrap()
    }

    #[test]
    fn one_glyph_document() {
        let glyphs = vec![Glyph {
            name: "a".into(),
            unicode: '\u{e000}',
            path: "M0,0 L10,0".to_string(),
            advance_width: 500.0,
        }];
        let expected = concat!(
            "<?xml version=\"1.0\" standalone=\"no\"?>\n",
            "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n",
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">",
            "<defs>",
            "<font>",
            "<font-face font-family=\"hf\" units-per-em=\"1024\" ascent=\"1024\" descent=\"0\"/>",
            "<missing-glyph horiz-adv-x=\"1024\" vert-adv-y=\"1024\"/>",
            "<glyph glyph-name=\"a\" unicode=\"\u{e000}\" horiz-adv-x=\"500\" vert-adv-y=\"1024\" d=\"M0,0 L10,0\"/>",
            "</font>",
            "</defs>",
            "</svg>",
        );
        assert_eq!(expected, serialize_svg_font(&glyphs, &default_metrics()));
    }

    #[test]
    fn no_glyphs_is_still_a_font() {
        let doc = serialize_svg_font(&[], &default_metrics());
        assert!(doc.contains("<font-face "), "{doc}");
        assert!(doc.contains("<missing-glyph "), "{doc}");
        assert!(!doc.contains("<glyph "), "{doc}");
    }

    #[test]
    fn glyphs_keep_list_order() {
        let glyphs = vec![
            Glyph {
                name: "zebra".into(),
                unicode: '\u{e000}',
                path: "M0,0".to_string(),
                advance_width: 1.0,
            },
            Glyph {
                name: "aardvark".into(),
                unicode: '\u{e001}',
                path: "M0,0".to_string(),
                advance_width: 1.0,
            },
        ];
        let doc = serialize_svg_font(&glyphs, &default_metrics());
        let zebra = doc.find("zebra").unwrap();
        let aardvark = doc.find("aardvark").unwrap();
        assert!(zebra < aardvark, "{doc}");
    }

    #[test]
    fn attribute_values_are_escaped() {
        let metrics = FontConfig::new("R&D \"Icons\"").resolve().unwrap();
        let doc = serialize_svg_font(&[], &metrics);
        assert!(
            doc.contains("font-family=\"R&amp;D &quot;Icons&quot;\""),
            "{doc}"
        );
    }

    #[test]
    fn fractional_metrics_serialize_plainly() {
        let mut config = FontConfig::new("hf");
        config.units_per_em = Some(1000.5);
        let doc = serialize_svg_font(&[], &config.resolve().unwrap());
        assert!(doc.contains("units-per-em=\"1000.5\""), "{doc}");
    }
}
