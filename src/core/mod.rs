//! Core reporting logic.

pub mod reporter;

pub use reporter::{ReportError, Reporter};
