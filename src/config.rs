//! Parameter structs for simulation and analysis.
//!
//! This module provides [`KinematicParameters`] (the two frame rates plus
//! run duration), [`AnalysisWindow`] (the sub-interval over which the
//! restricted mean magnitude is computed), and [`SimulatorConfig`] (sampling
//! resolution of the synthetic series).
//!
//! # Example
//!
//! ```
//! use clinostat_model::{AnalysisWindow, KinematicParameters};
//!
//! let params = KinematicParameters::new(1.0, 5.0, 1.0);
//! assert!(params.validate().is_ok());
//!
//! let window = AnalysisWindow::new(0.2, 0.8);
//! assert!(window.validate().is_ok());
//! ```

use crate::error::{ClinostatError, Result};

/// Theoretical-mode configuration: two constant frame rates and a duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicParameters {
    /// Inner frame rotation rate (revolutions per minute, strictly positive).
    pub inner_rate_rpm: f64,

    /// Outer frame rotation rate (revolutions per minute, strictly positive).
    pub outer_rate_rpm: f64,

    /// Simulated run duration (hours, strictly positive).
    pub duration_hours: f64,
}

impl KinematicParameters {
    /// Create a new parameter set.
    #[must_use]
    pub const fn new(inner_rate_rpm: f64, outer_rate_rpm: f64, duration_hours: f64) -> Self {
        Self {
            inner_rate_rpm,
            outer_rate_rpm,
            duration_hours,
        }
    }

    /// Validate the parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`ClinostatError::InvalidParameter`] if either rate or the
    /// duration is non-finite or not strictly positive.
    pub fn validate(&self) -> Result<()> {
        if !self.inner_rate_rpm.is_finite() || self.inner_rate_rpm <= 0.0 {
            return Err(ClinostatError::invalid_parameter(
                "inner frame rate must be positive",
            ));
        }
        if !self.outer_rate_rpm.is_finite() || self.outer_rate_rpm <= 0.0 {
            return Err(ClinostatError::invalid_parameter(
                "outer frame rate must be positive",
            ));
        }
        if !self.duration_hours.is_finite() || self.duration_hours <= 0.0 {
            return Err(ClinostatError::invalid_parameter(
                "simulation duration must be positive",
            ));
        }
        Ok(())
    }

    /// Run duration in seconds.
    #[must_use]
    pub fn duration_seconds(&self) -> f64 {
        self.duration_hours * 3600.0
    }

    /// The faster of the two frame rates.
    #[must_use]
    pub fn fastest_rate_rpm(&self) -> f64 {
        self.inner_rate_rpm.max(self.outer_rate_rpm)
    }
}

/// Position deviation of the sample from the clinostat's rotation center
/// (meters, signed, any axis may be zero).
///
/// A perfectly centered sample feels gravity alone; an off-center sample
/// additionally feels the rotational acceleration of its mounting point,
/// which [`crate::simulate_with_offsets`] models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountingOffsets {
    /// Deviation along the x axis (meters).
    pub delta_x_m: f64,

    /// Deviation along the y axis (meters).
    pub delta_y_m: f64,

    /// Deviation along the z axis (meters).
    pub delta_z_m: f64,
}

impl Default for MountingOffsets {
    fn default() -> Self {
        Self::centered()
    }
}

impl MountingOffsets {
    /// Create a new offset set.
    #[must_use]
    pub const fn new(delta_x_m: f64, delta_y_m: f64, delta_z_m: f64) -> Self {
        Self {
            delta_x_m,
            delta_y_m,
            delta_z_m,
        }
    }

    /// A sample mounted exactly on the rotation center.
    #[must_use]
    pub const fn centered() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Validate the offsets.
    ///
    /// # Errors
    ///
    /// Returns [`ClinostatError::InvalidParameter`] if any deviation is
    /// non-finite.
    pub fn validate(&self) -> Result<()> {
        if !self.delta_x_m.is_finite()
            || !self.delta_y_m.is_finite()
            || !self.delta_z_m.is_finite()
        {
            return Err(ClinostatError::invalid_parameter(
                "mounting offsets must be finite",
            ));
        }
        Ok(())
    }

    /// Distance of the sample from the rotation center (meters).
    #[must_use]
    pub fn radius_m(&self) -> f64 {
        (self.delta_x_m * self.delta_x_m
            + self.delta_y_m * self.delta_y_m
            + self.delta_z_m * self.delta_z_m)
            .sqrt()
    }
}

/// Sub-interval of the run over which the restricted mean magnitude is
/// computed. Bounds are in hours, matching the user entry unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisWindow {
    /// Lower bound (hours, non-negative).
    pub start_hours: f64,

    /// Upper bound (hours, strictly greater than `start_hours`).
    pub end_hours: f64,
}

impl AnalysisWindow {
    /// Create a new analysis window.
    #[must_use]
    pub const fn new(start_hours: f64, end_hours: f64) -> Self {
        Self {
            start_hours,
            end_hours,
        }
    }

    /// Validate the window bounds.
    ///
    /// Containment within a simulated run's duration is a presentation-layer
    /// rule (see [`crate::validation`]); this only checks the window's own
    /// invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ClinostatError::InvalidParameter`] if a bound is non-finite,
    /// the start is negative, or the upper bound does not exceed the lower.
    pub fn validate(&self) -> Result<()> {
        if !self.start_hours.is_finite() || !self.end_hours.is_finite() {
            return Err(ClinostatError::invalid_parameter(
                "analysis window bounds must be finite",
            ));
        }
        if self.start_hours < 0.0 {
            return Err(ClinostatError::invalid_parameter(
                "analysis window start must be non-negative",
            ));
        }
        if self.end_hours <= self.start_hours {
            return Err(ClinostatError::invalid_parameter(
                "analysis window end must be greater than its start",
            ));
        }
        Ok(())
    }

    /// Lower bound in seconds.
    #[must_use]
    pub fn start_seconds(&self) -> f64 {
        self.start_hours * 3600.0
    }

    /// Upper bound in seconds.
    #[must_use]
    pub fn end_seconds(&self) -> f64 {
        self.end_hours * 3600.0
    }
}

/// Sampling configuration for the kinematic simulator.
///
/// The sampling interval is `min(max_sample_interval_s, fastest_period /
/// samples_per_revolution)`, so a fast axis is always resolved by at least
/// `samples_per_revolution` samples per turn while slow runs keep the
/// coarse 1 Hz grid of the legacy data format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatorConfig {
    /// Minimum number of samples per revolution of the faster axis.
    pub samples_per_revolution: usize,

    /// Ceiling on the sampling interval (seconds).
    pub max_sample_interval_s: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            samples_per_revolution: 32,
            max_sample_interval_s: 1.0,
        }
    }
}

impl SimulatorConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the samples-per-revolution floor.
    #[must_use]
    pub const fn with_samples_per_revolution(mut self, samples: usize) -> Self {
        self.samples_per_revolution = samples;
        self
    }

    /// Set the sampling-interval ceiling.
    #[must_use]
    pub const fn with_max_sample_interval(mut self, seconds: f64) -> Self {
        self.max_sample_interval_s = seconds;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClinostatError::InvalidParameter`] if the revolution floor
    /// is too coarse to resolve the oscillation or the interval ceiling is
    /// not positive.
    pub fn validate(&self) -> Result<()> {
        if self.samples_per_revolution < 4 {
            return Err(ClinostatError::invalid_parameter(
                "samples_per_revolution must be at least 4",
            ));
        }
        if !self.max_sample_interval_s.is_finite() || self.max_sample_interval_s <= 0.0 {
            return Err(ClinostatError::invalid_parameter(
                "max_sample_interval_s must be positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_parameters() {
        let params = KinematicParameters::new(1.0, 5.0, 1.0);
        assert!(params.validate().is_ok());
        assert_eq!(params.duration_seconds(), 3600.0);
        assert_eq!(params.fastest_rate_rpm(), 5.0);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(KinematicParameters::new(0.0, 5.0, 1.0).validate().is_err());
        assert!(KinematicParameters::new(1.0, -5.0, 1.0).validate().is_err());
        assert!(KinematicParameters::new(1.0, 5.0, 0.0).validate().is_err());
        assert!(KinematicParameters::new(f64::NAN, 5.0, 1.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_mounting_offsets() {
        assert!(MountingOffsets::new(0.05, -0.02, 0.0).validate().is_ok());
        assert!(MountingOffsets::centered().validate().is_ok());
        assert!(MountingOffsets::new(f64::NAN, 0.0, 0.0).validate().is_err());
        assert!(MountingOffsets::new(0.0, f64::INFINITY, 0.0)
            .validate()
            .is_err());

        let offsets = MountingOffsets::new(3.0, 0.0, 4.0);
        assert_eq!(offsets.radius_m(), 5.0);
        assert_eq!(MountingOffsets::default(), MountingOffsets::centered());
    }

    #[test]
    fn test_window_validation() {
        assert!(AnalysisWindow::new(0.2, 0.8).validate().is_ok());
        assert!(AnalysisWindow::new(0.0, 1.0).validate().is_ok());
        assert!(AnalysisWindow::new(-0.1, 0.8).validate().is_err());
        assert!(AnalysisWindow::new(0.8, 0.8).validate().is_err());
        assert!(AnalysisWindow::new(0.8, 0.2).validate().is_err());
    }

    #[test]
    fn test_simulator_config() {
        let config = SimulatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.samples_per_revolution, 32);

        let coarse = SimulatorConfig::new().with_samples_per_revolution(2);
        assert!(coarse.validate().is_err());

        let bad_interval = SimulatorConfig::new().with_max_sample_interval(0.0);
        assert!(bad_interval.validate().is_err());
    }
}
