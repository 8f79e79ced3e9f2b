//! Print Cloud Vision labels and dominant colors for a single image.
//!
//! The [`core::Reporter`] drives two detection calls through a
//! [`vision::VisionService`] and writes a plain-text report. The production
//! service is [`vision::VisionClient`], configured from [`config::Config`].

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod state;
pub mod vision;
