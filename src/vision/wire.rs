//! JSON shapes of the `images:annotate` request and response.
//!
//! Only the fields the reporter reads are modelled; unknown fields are
//! ignored on decode.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::state::{ColorInfo, ImageProperties, Label, Rgb};

#[derive(Debug, Serialize)]
pub struct AnnotateRequestBatch<'a> {
    pub requests: Vec<AnnotateRequest<'a>>,
}

#[derive(Debug, Serialize)]
pub struct AnnotateRequest<'a> {
    pub image: ImageSource,
    pub features: Vec<Feature<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ImageSource {
    /// Base64 (standard alphabet, padded) image bytes.
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature<'a> {
    #[serde(rename = "type")]
    pub kind: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
}

impl<'a> AnnotateRequestBatch<'a> {
    /// Builds a one-image, one-feature batch.
    #[must_use]
    pub fn single(content: &[u8], kind: &'a str, max_results: Option<u32>) -> Self {
        Self {
            requests: vec![AnnotateRequest {
                image: ImageSource {
                    content: STANDARD.encode(content),
                },
                features: vec![Feature { kind, max_results }],
            }],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AnnotateResponseBatch {
    #[serde(default)]
    pub responses: Vec<AnnotateResponse>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateResponse {
    #[serde(default)]
    pub label_annotations: Vec<EntityAnnotation>,
    pub image_properties_annotation: Option<ImagePropertiesAnnotation>,
    pub error: Option<Status>,
}

#[derive(Debug, Deserialize)]
pub struct EntityAnnotation {
    #[serde(default)]
    pub description: String,
    pub score: Option<f64>,
    pub mid: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePropertiesAnnotation {
    pub dominant_colors: Option<DominantColors>,
}

#[derive(Debug, Deserialize)]
pub struct DominantColors {
    #[serde(default)]
    pub colors: Vec<WireColorInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireColorInfo {
    #[serde(default)]
    pub color: WireColor,
    #[serde(default)]
    pub score: f64,
    pub pixel_fraction: Option<f64>,
}

/// Channels arrive as floats and are omitted when zero.
#[derive(Debug, Default, Deserialize)]
pub struct WireColor {
    #[serde(default)]
    pub red: f64,
    #[serde(default)]
    pub green: f64,
    #[serde(default)]
    pub blue: f64,
}

/// `google.rpc.Status`, used both per-response and for HTTP error bodies.
#[derive(Debug, Default, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

/// Top-level error body returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: Status,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

impl From<EntityAnnotation> for Label {
    fn from(value: EntityAnnotation) -> Self {
        Self {
            description: value.description,
            score: value.score,
            mid: value.mid,
        }
    }
}

impl From<WireColorInfo> for ColorInfo {
    fn from(value: WireColorInfo) -> Self {
        Self {
            color: Rgb::new(
                channel(value.color.red),
                channel(value.color.green),
                channel(value.color.blue),
            ),
            score: value.score,
            pixel_fraction: value.pixel_fraction,
        }
    }
}

impl From<ImagePropertiesAnnotation> for ImageProperties {
    fn from(value: ImagePropertiesAnnotation) -> Self {
        Self {
            colors: value
                .dominant_colors
                .map(|d| d.colors.into_iter().map(ColorInfo::from).collect())
                .unwrap_or_default(),
        }
    }
}
