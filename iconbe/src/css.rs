//! Stylesheet for the compiled web font.
//!
//! Rules are emitted per source, by input position, through the same
//! code point assignment the glyph assembler uses. A source that produced
//! no glyph still gets its rule; the class simply renders nothing.

use iconir::metrics::{code_point_for, DEFAULT_UNICODE_BASE};
use iconir::types::SvgSource;

/// Settings for [generate_css].
#[derive(Debug, Clone, PartialEq)]
pub struct CssOptions {
    pub font_family: String,
    /// Where the stylesheet should load the woff2 from.
    pub font_url: String,
    /// First icon code point. Default [DEFAULT_UNICODE_BASE].
    pub unicode_base: Option<u32>,
    /// vertical-align value for the base icon class, e.g. "middle".
    pub vertical_align: Option<String>,
}

/// Emit the stylesheet: a font-face rule, the shared icon classes, and one
/// class per source binding `--hf` to its code point.
pub fn generate_css(sources: &[SvgSource], options: &CssOptions) -> String {
    let base = options.unicode_base.unwrap_or(DEFAULT_UNICODE_BASE);
    let vertical_align = options
        .vertical_align
        .as_ref()
        .map(|value| format!("vertical-align: {value}; "))
        .unwrap_or_default();

    let mut css = format!(
        "@font-face {{ font-family: '{family}'; font-style: normal; font-weight: 400; font-display: block; src: url(\"{url}\") format(\"woff2\"); }}\n\
         @layer font {{ .hf {{ font-family: '{family}'; font-style: normal; font-weight: normal; {vertical_align}}} }}\n\
         @layer font {{ .hf::before {{ content: var(--hf); }} }}\n",
        family = options.font_family,
        url = options.font_url,
    );
    for (index, source) in sources.iter().enumerate() {
        // indexes the assembler could never assign get no rule either
        let Some(code_point) = code_point_for(base, index) else {
            continue;
        };
        css.push_str(&format!(
            "@layer font {{ .hf-{name} {{ --hf: \"\\{code:x}\"; }} }}\n",
            name = source.name,
            code = code_point as u32,
        ));
    }
    css
}
