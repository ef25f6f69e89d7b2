//! Backend of the icon font compiler.
//!
//! Takes IR glyphs the rest of the way to deliverables: the SVG font
//! document handed to the binary font toolchain, and the stylesheet that
//! maps icon class names onto code points.

pub mod compile;
pub mod css;
pub mod error;
pub mod svgfont;
