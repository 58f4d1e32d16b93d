//! Cumulative time-average analysis of an acceleration series.
//!
//! The central physical claim a clinostat makes is that the *long-run
//! average* of the gravity vector in the sample frame tends to zero. This
//! module computes the running per-axis means from the first sample onward,
//! the magnitude of the averaged vector at each sample, and the mean of that
//! magnitude over the full run and over a caller-chosen analysis window.

use crate::config::AnalysisWindow;
use crate::error::{ClinostatError, Result};
use crate::series::TimeSeries;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Output aggregate of [`analyze`].
///
/// All sequences have the same length as the input series, and
/// `magnitude[i] == sqrt(cumulative_x[i]^2 + cumulative_y[i]^2 +
/// cumulative_z[i]^2)` holds at every index.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeAverageResult {
    /// Running mean of the x component up to and including each sample.
    pub cumulative_x: Vec<f64>,

    /// Running mean of the y component.
    pub cumulative_y: Vec<f64>,

    /// Running mean of the z component.
    pub cumulative_z: Vec<f64>,

    /// Magnitude of the time-averaged vector at each sample (g).
    pub magnitude: Vec<f64>,

    /// Arithmetic mean of the full magnitude sequence (g).
    pub mean_magnitude_full: f64,

    /// Arithmetic mean of the magnitude over the analysis window (g).
    pub mean_magnitude_window: f64,

    /// First sample index inside the analysis window.
    pub window_start_index: usize,

    /// One past the last sample index inside the analysis window.
    pub window_end_index: usize,
}

/// Compute cumulative time-averages and windowed mean magnitudes.
///
/// Window bounds are given in hours and resolved against the series' time
/// offsets by binary search: the start maps to the first sample at or after
/// the bound, the end to one past the last sample at or before the bound.
/// A window spanning `[0, duration]` therefore covers the whole series and
/// its mean equals `mean_magnitude_full` exactly.
///
/// Pure function of `(series, window)`; the input series is not mutated.
///
/// # Errors
///
/// - [`ClinostatError::InvalidParameter`] if the window's own invariants
///   fail (negative start, end not above start, non-finite bound).
/// - [`ClinostatError::OutOfRangeWindow`] if either bound lies beyond the
///   series' final time offset.
/// - [`ClinostatError::EmptyAnalysisWindow`] if no sample falls inside the
///   window.
///
/// # Example
///
/// ```
/// use clinostat_model::{analyze, simulate, AnalysisWindow, KinematicParameters};
///
/// let series = simulate(&KinematicParameters::new(1.0, 5.0, 0.1))?;
/// let result = analyze(&series, &AnalysisWindow::new(0.02, 0.08))?;
/// assert_eq!(result.magnitude.len(), series.len());
/// # Ok::<(), clinostat_model::ClinostatError>(())
/// ```
pub fn analyze(series: &TimeSeries, window: &AnalysisWindow) -> Result<TimeAverageResult> {
    window.validate()?;

    let records = series.records();
    let n = records.len();

    let (start_index, end_index) = resolve_window(series, window)?;
    if start_index == end_index {
        return Err(ClinostatError::EmptyAnalysisWindow {
            start_hours: window.start_hours,
            end_hours: window.end_hours,
        });
    }

    let mut cumulative_x = Vec::with_capacity(n);
    let mut cumulative_y = Vec::with_capacity(n);
    let mut cumulative_z = Vec::with_capacity(n);
    let mut magnitude = Vec::with_capacity(n);

    let (mut sum_x, mut sum_y, mut sum_z) = (0.0, 0.0, 0.0);
    for (i, record) in records.iter().enumerate() {
        sum_x += record.x;
        sum_y += record.y;
        sum_z += record.z;

        let count = (i + 1) as f64;
        let (avg_x, avg_y, avg_z) = (sum_x / count, sum_y / count, sum_z / count);
        cumulative_x.push(avg_x);
        cumulative_y.push(avg_y);
        cumulative_z.push(avg_z);
        magnitude.push((avg_x * avg_x + avg_y * avg_y + avg_z * avg_z).sqrt());
    }

    let mean_magnitude_full = mean(&magnitude);
    let mean_magnitude_window = mean(&magnitude[start_index..end_index]);

    Ok(TimeAverageResult {
        cumulative_x,
        cumulative_y,
        cumulative_z,
        magnitude,
        mean_magnitude_full,
        mean_magnitude_window,
        window_start_index: start_index,
        window_end_index: end_index,
    })
}

/// Map window bounds (hours) onto a half-open sample index range.
fn resolve_window(series: &TimeSeries, window: &AnalysisWindow) -> Result<(usize, usize)> {
    let records = series.records();
    let extent_s = records[records.len() - 1].time_offset_s;

    // Bounds arrive in hours; converting back to seconds can land an ulp
    // past the extent, so bounds within rounding distance snap onto it.
    let tolerance = 1e-9 * extent_s.max(1.0);
    let snap = |bound_s: f64| {
        if (bound_s - extent_s).abs() <= tolerance {
            extent_s
        } else {
            bound_s
        }
    };
    let start_s = snap(window.start_seconds());
    let end_s = snap(window.end_seconds());

    if start_s > extent_s {
        return Err(ClinostatError::out_of_range_window(
            window.start_hours,
            extent_s / 3600.0,
        ));
    }
    if end_s > extent_s {
        return Err(ClinostatError::out_of_range_window(
            window.end_hours,
            extent_s / 3600.0,
        ));
    }

    // Offsets are non-decreasing, so partition_point is a valid monotonic
    // search for both bounds.
    let start_index = records.partition_point(|r| r.time_offset_s < start_s);
    let end_index = records.partition_point(|r| r.time_offset_s <= end_s);

    Ok((start_index, end_index))
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
