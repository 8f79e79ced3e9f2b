//! Label and color report for a single image.
//!
//! Each detection re-reads the image from disk and writes its section to the
//! supplied writer. Any error aborts the run; nothing is retried.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::constants;
use crate::state::AggregateColor;
use crate::vision::{ServiceError, VisionService};

/// Failure of a report run.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to read image {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

/// Reads the whole image. The handle is closed before returning.
fn read_image(path: &Path) -> Result<Vec<u8>, ReportError> {
    let content = fs::read(path).map_err(|source| ReportError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "Read image");
    Ok(content)
}

/// Formats a score as a plain decimal with the shortest round-trip digits.
///
/// Never uses an exponent and always carries a decimal point.
fn format_score(score: f64) -> String {
    let plain = score.to_string();
    if plain.contains('.') || !score.is_finite() {
        plain
    } else {
        format!("{plain}.0")
    }
}

/// Prints vision annotations for an image.
pub struct Reporter<S> {
    service: S,
}

impl<S: VisionService> Reporter<S> {
    #[must_use]
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Prints `Labels:` followed by one description per line.
    ///
    /// # Errors
    ///
    /// Fails if the image cannot be read, the service call fails, or the
    /// output cannot be written.
    pub fn detect_labels<W: Write>(&self, path: &Path, out: &mut W) -> Result<(), ReportError> {
        let content = read_image(path)?;
        let labels = self.service.detect_labels(&content)?;

        writeln!(out, "{}", constants::HEADER_LABELS).map_err(ReportError::Output)?;
        for label in &labels {
            writeln!(out, "{}", label.description).map_err(ReportError::Output)?;
        }
        Ok(())
    }

    /// Prints every dominant color and the score-weighted channel sums.
    ///
    /// Returns the aggregate that was printed on the last line.
    ///
    /// # Errors
    ///
    /// Fails if the image cannot be read, the service call fails, or the
    /// output cannot be written.
    pub fn detect_properties<W: Write>(
        &self,
        path: &Path,
        out: &mut W,
    ) -> Result<AggregateColor, ReportError> {
        let content = read_image(path)?;
        let properties = self.service.detect_properties(&content)?;

        writeln!(out, "{}", constants::HEADER_PROPERTIES).map_err(ReportError::Output)?;
        let mut aggregate = AggregateColor::default();
        for info in properties.iter().flat_map(|p| &p.colors) {
            writeln!(
                out,
                "fraction: {}\nr: {}\ng: {}\nb: {}",
                format_score(info.score),
                info.color.red,
                info.color.green,
                info.color.blue
            )
            .map_err(ReportError::Output)?;
            aggregate.add(info);
        }
        writeln!(out, "{aggregate}").map_err(ReportError::Output)?;
        Ok(aggregate)
    }

    /// Labels, a blank line, then properties.
    ///
    /// # Errors
    ///
    /// Stops at the first failing step.
    pub fn run<W: Write>(&self, path: &Path, out: &mut W) -> Result<(), ReportError> {
        self.detect_labels(path, out)?;
        writeln!(out).map_err(ReportError::Output)?;
        self.detect_properties(path, out)?;
        out.flush().map_err(ReportError::Output)
    }
}
