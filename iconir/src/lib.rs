//! Intermediate Representation (IR) types for icon font compilation

pub mod error;
pub mod glyph;
pub mod ir;
pub mod metrics;
pub mod types;
