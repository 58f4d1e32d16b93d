//! Error types for the clinostat engine.
//!
//! All failures are synchronous, raised on the first violated precondition,
//! and carry enough context for the presentation layer to build a
//! user-facing message.

use thiserror::Error;

/// Main error type for simulation, analysis, and ingest operations.
#[derive(Error, Debug)]
pub enum ClinostatError {
    /// A kinematic parameter or configuration value is out of range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The series has too few samples for any averaging.
    #[error("Series too short: need at least {min} samples, got {actual}")]
    SeriesTooShort { min: usize, actual: usize },

    /// Sample time offsets decrease somewhere in the series.
    #[error("Sample times must be non-decreasing at index {index}")]
    NonMonotonicTimestamps { index: usize },

    /// An analysis-window bound lies beyond the series' time extent.
    #[error(
        "Analysis window bound {bound_hours} h lies beyond the series extent of {extent_hours} h"
    )]
    OutOfRangeWindow { bound_hours: f64, extent_hours: f64 },

    /// The analysis window resolves to zero samples.
    #[error("Analysis window [{start_hours} h, {end_hours} h] contains no samples")]
    EmptyAnalysisWindow { start_hours: f64, end_hours: f64 },

    /// No sample in the series has measurable magnitude.
    #[error("No sample in the series has measurable magnitude")]
    DegenerateSeries,

    /// An accelerometer-log record could not be parsed.
    #[error("Malformed input record at record {position}: {reason}")]
    MalformedRecord { position: usize, reason: String },
}

/// Result type alias for clinostat engine operations.
pub type Result<T> = std::result::Result<T, ClinostatError>;

impl ClinostatError {
    /// Create an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Create a series too short error.
    #[must_use]
    pub const fn series_too_short(min: usize, actual: usize) -> Self {
        Self::SeriesTooShort { min, actual }
    }

    /// Create an out-of-range window error.
    #[must_use]
    pub const fn out_of_range_window(bound_hours: f64, extent_hours: f64) -> Self {
        Self::OutOfRangeWindow {
            bound_hours,
            extent_hours,
        }
    }

    /// Create a malformed record error.
    #[must_use]
    pub fn malformed_record(position: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            position,
            reason: reason.into(),
        }
    }
}
