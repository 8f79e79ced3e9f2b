//! Command-line interface module.
//!
//! Provides argument parsing for the single positional image path.

pub mod args;

pub use args::Args;
