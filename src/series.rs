//! Acceleration time-series data structures.
//!
//! A [`TimeSeries`] is an ordered, immutable sequence of [`SampleRecord`]s
//! produced once per run by the simulator or the accelerometer-log parser.
//! Its invariants (minimum length, non-decreasing offsets) are enforced at
//! construction so that every consumer can assume them; consumers receive
//! read-only slice views.

use crate::error::{ClinostatError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One instantaneous acceleration-vector sample in the sample's local frame.
///
/// Components are in units of gravitational acceleration (g); the time
/// offset is elapsed seconds since the start of the run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleRecord {
    /// Elapsed time since the first sample (seconds, non-negative).
    pub time_offset_s: f64,

    /// X component (g).
    pub x: f64,

    /// Y component (g).
    pub y: f64,

    /// Z component (g).
    pub z: f64,
}

impl SampleRecord {
    /// Create a new sample record.
    #[must_use]
    pub const fn new(time_offset_s: f64, x: f64, y: f64, z: f64) -> Self {
        Self {
            time_offset_s,
            x,
            y,
            z,
        }
    }

    /// Euclidean magnitude of the acceleration vector (g).
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Time offset in hours.
    #[must_use]
    pub fn time_offset_hours(&self) -> f64 {
        self.time_offset_s / 3600.0
    }
}

/// An ordered, finite, immutable acceleration time series.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeSeries {
    records: Vec<SampleRecord>,
}

impl TimeSeries {
    /// Minimum number of samples required for any averaging.
    pub const MIN_SAMPLES: usize = 2;

    /// Build a series from records, validating the series invariants.
    ///
    /// # Errors
    ///
    /// - [`ClinostatError::SeriesTooShort`] if fewer than
    ///   [`Self::MIN_SAMPLES`] records are supplied.
    /// - [`ClinostatError::InvalidParameter`] if any time offset is
    ///   non-finite or the first offset is negative.
    /// - [`ClinostatError::NonMonotonicTimestamps`] if offsets decrease.
    pub fn new(records: Vec<SampleRecord>) -> Result<Self> {
        if records.len() < Self::MIN_SAMPLES {
            return Err(ClinostatError::series_too_short(
                Self::MIN_SAMPLES,
                records.len(),
            ));
        }
        if records.iter().any(|r| !r.time_offset_s.is_finite()) {
            return Err(ClinostatError::invalid_parameter(
                "sample time offsets must be finite",
            ));
        }
        if records[0].time_offset_s < 0.0 {
            return Err(ClinostatError::invalid_parameter(
                "sample time offsets must be non-negative",
            ));
        }
        for (index, pair) in records.windows(2).enumerate() {
            if pair[1].time_offset_s < pair[0].time_offset_s {
                return Err(ClinostatError::NonMonotonicTimestamps { index: index + 1 });
            }
        }
        Ok(Self { records })
    }

    /// Read-only view of the records.
    #[must_use]
    pub fn records(&self) -> &[SampleRecord] {
        &self.records
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; a valid series holds at least two samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total time extent of the series (seconds).
    #[must_use]
    pub fn duration_seconds(&self) -> f64 {
        self.records[self.records.len() - 1].time_offset_s - self.records[0].time_offset_s
    }

    /// Total time extent of the series (hours).
    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        self.duration_seconds() / 3600.0
    }

    /// Time offsets in hours, the unit used for plotting and window bounds.
    #[must_use]
    pub fn times_hours(&self) -> Vec<f64> {
        self.records.iter().map(SampleRecord::time_offset_hours).collect()
    }

    /// Iterate over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, SampleRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a SampleRecord;
    type IntoIter = std::slice::Iter<'a, SampleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
