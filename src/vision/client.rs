//! Blocking Cloud Vision REST client.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use tracing::{debug, info};
use url::Url;

use super::wire::{AnnotateRequestBatch, AnnotateResponse, AnnotateResponseBatch, ErrorBody};
use super::{ServiceError, VisionService};
use crate::config::Config;
use crate::constants;
use crate::state::{ImageProperties, Label};

/// How a request is authorized.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    ApiKey(String),
    Bearer(String),
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::ApiKey(_) => write!(f, "ApiKey(..)"),
            Credentials::Bearer(_) => write!(f, "Bearer(..)"),
        }
    }
}

impl Credentials {
    /// Discovers credentials from the environment, then from the config.
    ///
    /// API keys win over bearer tokens; environment wins over config.
    #[must_use]
    pub fn discover(config: &Config) -> Option<Self> {
        let env = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Self::resolve(
            env(constants::ENV_API_KEY),
            env(constants::ENV_ACCESS_TOKEN),
            config,
        )
    }

    fn resolve(
        env_key: Option<String>,
        env_token: Option<String>,
        config: &Config,
    ) -> Option<Self> {
        env_key
            .or_else(|| config.api_key.clone())
            .map(Credentials::ApiKey)
            .or_else(|| {
                env_token
                    .or_else(|| config.access_token.clone())
                    .map(Credentials::Bearer)
            })
    }
}

/// Production [`VisionService`] talking to `images:annotate`.
#[derive(Debug)]
pub struct VisionClient {
    http: Client,
    endpoint: Url,
    credentials: Option<Credentials>,
    max_labels: Option<u32>,
}

impl VisionClient {
    /// Builds a client from the config and ambient credentials.
    ///
    /// Missing credentials are not an error here; calls fail with
    /// [`ServiceError::MissingCredentials`] instead.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, ServiceError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(format!("{}/{}", constants::APP_NAME, constants::APP_VERSION))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            credentials: Credentials::discover(config),
            max_labels: config.max_labels,
        })
    }

    fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder, ServiceError> {
        match &self.credentials {
            Some(Credentials::ApiKey(key)) => {
                Ok(request.query(&[(constants::API_KEY_PARAM, key.as_str())]))
            }
            Some(Credentials::Bearer(token)) => Ok(request.bearer_auth(token)),
            None => Err(ServiceError::MissingCredentials),
        }
    }

    /// Sends one single-feature annotate request and returns its only result.
    fn annotate(
        &self,
        content: &[u8],
        feature: &str,
        max_results: Option<u32>,
    ) -> Result<AnnotateResponse, ServiceError> {
        let body = serde_json::to_vec(&AnnotateRequestBatch::single(content, feature, max_results))?;
        debug!(feature, bytes = content.len(), endpoint = %self.endpoint, "Sending annotate request");

        let request = self
            .http
            .post(self.endpoint.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
        let response = self.authorize(request)?.send()?;

        let status = response.status();
        let text = response.text()?;
        if !status.is_success() {
            return Err(status_error(status.as_u16(), &text));
        }
        parse_annotate(&text)
    }
}

/// Builds a [`ServiceError::Status`], preferring the JSON error message.
fn status_error(status: u16, body: &str) -> ServiceError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string());
    ServiceError::Status { status, message }
}

/// Decodes a 2xx body into the first annotate result.
fn parse_annotate(body: &str) -> Result<AnnotateResponse, ServiceError> {
    let batch: AnnotateResponseBatch =
        serde_json::from_str(body).map_err(|e| ServiceError::Malformed(e.to_string()))?;
    let mut response = batch
        .responses
        .into_iter()
        .next()
        .ok_or_else(|| ServiceError::Malformed(constants::ERR_EMPTY_RESPONSES.to_string()))?;
    if let Some(status) = response.error.take() {
        return Err(ServiceError::Api {
            code: status.code,
            message: status.message,
        });
    }
    Ok(response)
}

impl VisionService for VisionClient {
    fn detect_labels(&self, content: &[u8]) -> Result<Vec<Label>, ServiceError> {
        let response = self.annotate(content, constants::FEATURE_LABEL_DETECTION, self.max_labels)?;
        let labels: Vec<Label> = response
            .label_annotations
            .into_iter()
            .map(Label::from)
            .collect();
        for label in &labels {
            debug!(
                description = %label.description,
                score = ?label.score,
                mid = ?label.mid,
                "Label"
            );
        }
        info!(count = labels.len(), "Received labels");
        Ok(labels)
    }

    fn detect_properties(&self, content: &[u8]) -> Result<Vec<ImageProperties>, ServiceError> {
        let response = self.annotate(content, constants::FEATURE_IMAGE_PROPERTIES, None)?;
        let properties: Vec<ImageProperties> = response
            .image_properties_annotation
            .into_iter()
            .map(ImageProperties::from)
            .collect();
        for info in properties.iter().flat_map(|p| &p.colors) {
            debug!(
                red = info.color.red,
                green = info.color.green,
                blue = info.color.blue,
                score = info.score,
                pixel_fraction = ?info.pixel_fraction,
                "Dominant color"
            );
        }
        info!(
            groups = properties.len(),
            colors = properties.iter().map(|p| p.colors.len()).sum::<usize>(),
            "Received image properties"
        );
        Ok(properties)
    }
}
