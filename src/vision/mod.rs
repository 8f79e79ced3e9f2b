//! Remote vision service boundary.
//!
//! The reporter only talks to a [`VisionService`]; [`VisionClient`] is the
//! production implementation backed by the Cloud Vision REST API.

pub mod client;
pub mod wire;

use thiserror::Error;

use crate::constants;
use crate::state::{ImageProperties, Label};

pub use client::VisionClient;

/// Failure of a remote detection call.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Transport failure: DNS, connect, TLS, timeout.
    #[error("{}: {source}", constants::ERR_NETWORK_REQUEST_FAILED)]
    Http {
        #[from]
        source: reqwest::Error,
    },
    /// Non-success HTTP status.
    #[error("{}{status}: {message}", constants::ERR_SERVER_ERROR)]
    Status { status: u16, message: String },
    /// The service accepted the request but reported an annotate error.
    #[error("Vision API error {code}: {message}")]
    Api { code: i32, message: String },
    /// The response body did not match the expected shape.
    #[error("Malformed response: {0}")]
    Malformed(String),
    /// The request body could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("{}", constants::ERR_MISSING_CREDENTIALS)]
    MissingCredentials,
}

/// The two detection capabilities the reporter needs.
pub trait VisionService {
    /// Returns labels in service ranking order.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] if the remote call fails.
    fn detect_labels(&self, content: &[u8]) -> Result<Vec<Label>, ServiceError>;

    /// Returns dominant-color property groups.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] if the remote call fails.
    fn detect_properties(&self, content: &[u8]) -> Result<Vec<ImageProperties>, ServiceError>;
}

impl<T: VisionService + ?Sized> VisionService for &T {
    fn detect_labels(&self, content: &[u8]) -> Result<Vec<Label>, ServiceError> {
        (**self).detect_labels(content)
    }

    fn detect_properties(&self, content: &[u8]) -> Result<Vec<ImageProperties>, ServiceError> {
        (**self).detect_properties(content)
    }
}
