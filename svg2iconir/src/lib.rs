//! Converts raw SVG markup to icon IR

pub mod error;
pub mod shapes;
pub mod source;
