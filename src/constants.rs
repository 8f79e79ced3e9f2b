//! Application-wide constants and configuration values.
//!
//! This module defines all static configuration values used by the label
//! reporter, including API endpoints, timeouts, credential sources and the
//! exact text printed to standard output.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Path Configuration ===

/// Name of the configuration file inside the application config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// === Vision API ===

/// Default `images:annotate` endpoint of the Cloud Vision REST API.
pub const DEFAULT_ENDPOINT: &str = "https://vision.googleapis.com/v1/images:annotate";
/// Default timeout for a single annotate request in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default maximum log level.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Feature type requesting label annotations.
pub const FEATURE_LABEL_DETECTION: &str = "LABEL_DETECTION";
/// Feature type requesting dominant-color annotations.
pub const FEATURE_IMAGE_PROPERTIES: &str = "IMAGE_PROPERTIES";

// === Credential Discovery ===

/// Environment variable holding an API key.
pub const ENV_API_KEY: &str = "VISION_API_KEY";
/// Environment variable holding an OAuth bearer token.
pub const ENV_ACCESS_TOKEN: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";
/// Query parameter used to pass an API key.
pub const API_KEY_PARAM: &str = "key";

// === Output ===

/// Header printed before the label list.
pub const HEADER_LABELS: &str = "Labels:";
/// Header printed before the color list.
pub const HEADER_PROPERTIES: &str = "Properties:";

// === Error Messages ===

pub const ERR_NETWORK_REQUEST_FAILED: &str = "Network request failed";
pub const ERR_SERVER_ERROR: &str = "Server returned error: ";
pub const ERR_EMPTY_RESPONSES: &str = "response contained no annotate results";
pub const ERR_MISSING_CREDENTIALS: &str =
    "No credentials found. Set VISION_API_KEY or GOOGLE_OAUTH_ACCESS_TOKEN, or add api_key to the config file";
