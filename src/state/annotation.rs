//! Annotation types returned by the vision service.

/// A content label detected in an image (e.g. "cat", "outdoor").
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// Human-readable description of the label.
    pub description: String,
    /// Confidence reported by the service, if any.
    pub score: Option<f64>,
    /// Knowledge-graph entity id, if any.
    pub mid: Option<String>,
}

impl Label {
    /// Creates a label with only a description.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            score: None,
            mid: None,
        }
    }
}

/// An RGB color with channels in `0..=255`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// One dominant color of an image.
///
/// `score` is the weight of the color in the image, in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorInfo {
    pub color: Rgb,
    pub score: f64,
    /// Fraction of pixels the color occupies, if reported.
    pub pixel_fraction: Option<f64>,
}

impl ColorInfo {
    #[must_use]
    pub const fn new(color: Rgb, score: f64) -> Self {
        Self {
            color,
            score,
            pixel_fraction: None,
        }
    }
}

/// A group of image properties; only dominant colors are modelled.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageProperties {
    pub colors: Vec<ColorInfo>,
}
