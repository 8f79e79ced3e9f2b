//! In-memory data produced by a single run.

pub mod annotation;
pub mod color;

pub use annotation::{ColorInfo, ImageProperties, Label, Rgb};
pub use color::AggregateColor;
