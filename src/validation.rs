//! Validation of raw user inputs for both operating modes.
//!
//! The presentation layer hands over entry-field text verbatim; this module
//! applies the validation rules in a fixed order so the reported error
//! always matches the first rule violated:
//!
//! 1. presence (no empty field)
//! 2. numeric parse
//! 3. positivity of the frame rates
//! 4. positivity of the duration / non-negativity of the window bounds
//! 5. window ordering (end above start)
//! 6. window containment within the simulated duration
//! 7. window bound inequality
//!
//! Rule 7 cannot fire after rule 5 succeeds; it is retained because the
//! message ordering is part of the engine's contract with the user guide.

use crate::config::{AnalysisWindow, KinematicParameters};
use crate::error::{ClinostatError, Result};

/// Raw entry-field values for a theoretical-mode run.
#[derive(Debug, Clone, Copy)]
pub struct TheoreticalEntries<'a> {
    /// Inner frame rate field (RPM).
    pub inner_rpm: &'a str,
    /// Outer frame rate field (RPM).
    pub outer_rpm: &'a str,
    /// Simulation duration field (hours).
    pub duration_hours: &'a str,
    /// Analysis window lower bound field (hours).
    pub window_start_hours: &'a str,
    /// Analysis window upper bound field (hours).
    pub window_end_hours: &'a str,
}

/// Raw entry-field values for an experimental-mode run.
#[derive(Debug, Clone, Copy)]
pub struct ExperimentalEntries<'a> {
    /// Analysis window lower bound field (hours).
    pub window_start_hours: &'a str,
    /// Analysis window upper bound field (hours).
    pub window_end_hours: &'a str,
}

/// Validate theoretical-mode inputs into engine parameter structs.
///
/// # Errors
///
/// Returns [`ClinostatError::InvalidParameter`] carrying the user-facing
/// message of the first violated rule.
pub fn validate_theoretical(
    entries: &TheoreticalEntries<'_>,
) -> Result<(KinematicParameters, AnalysisWindow)> {
    let fields = [
        entries.inner_rpm,
        entries.outer_rpm,
        entries.duration_hours,
        entries.window_start_hours,
        entries.window_end_hours,
    ];
    check_presence(&fields)?;

    let inner_rpm = parse_field("inner frame rate", entries.inner_rpm)?;
    let outer_rpm = parse_field("outer frame rate", entries.outer_rpm)?;
    let duration = parse_field("simulation duration", entries.duration_hours)?;
    let start = parse_field("analysis start", entries.window_start_hours)?;
    let end = parse_field("analysis end", entries.window_end_hours)?;

    if inner_rpm <= 0.0 || outer_rpm <= 0.0 {
        return Err(ClinostatError::invalid_parameter(
            "Frame velocities must be positive.",
        ));
    }
    if start < 0.0 || end < 0.0 || duration <= 0.0 {
        return Err(ClinostatError::invalid_parameter(
            "Time values must be positive.",
        ));
    }
    if end <= start {
        return Err(ClinostatError::invalid_parameter(
            "Upper bound for analysis period must be greater than the lower bound.",
        ));
    }
    if end > duration {
        return Err(ClinostatError::invalid_parameter(
            "Upper bound must be less than or equal to the simulation duration.",
        ));
    }
    if start == end {
        return Err(ClinostatError::invalid_parameter(
            "Upper and lower bounds must not be equal.",
        ));
    }

    Ok((
        KinematicParameters::new(inner_rpm, outer_rpm, duration),
        AnalysisWindow::new(start, end),
    ))
}

/// Validate experimental-mode inputs into an analysis window.
///
/// The series' own data determines its duration, so no containment ceiling
/// applies here.
///
/// # Errors
///
/// Returns [`ClinostatError::InvalidParameter`] carrying the user-facing
/// message of the first violated rule.
pub fn validate_experimental(entries: &ExperimentalEntries<'_>) -> Result<AnalysisWindow> {
    check_presence(&[entries.window_start_hours, entries.window_end_hours])?;

    let start = parse_field("analysis start", entries.window_start_hours)?;
    let end = parse_field("analysis end", entries.window_end_hours)?;

    if start < 0.0 || end < 0.0 {
        return Err(ClinostatError::invalid_parameter(
            "Time values must be positive.",
        ));
    }
    if end <= start {
        return Err(ClinostatError::invalid_parameter(
            "Upper bound for analysis period must be greater than the lower bound.",
        ));
    }

    Ok(AnalysisWindow::new(start, end))
}

fn check_presence(fields: &[&str]) -> Result<()> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(ClinostatError::invalid_parameter(
            "All input fields must be filled.",
        ));
    }
    Ok(())
}

fn parse_field(name: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        ClinostatError::invalid_parameter(format!("{name} must be a number, got {raw:?}"))
    })?;
    if !value.is_finite() {
        return Err(ClinostatError::invalid_parameter(format!(
            "{name} must be finite"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries<'a>(
        inner: &'a str,
        outer: &'a str,
        duration: &'a str,
        start: &'a str,
        end: &'a str,
    ) -> TheoreticalEntries<'a> {
        TheoreticalEntries {
            inner_rpm: inner,
            outer_rpm: outer,
            duration_hours: duration,
            window_start_hours: start,
            window_end_hours: end,
        }
    }

    fn message(err: ClinostatError) -> String {
        err.to_string()
    }

    #[test]
    fn test_valid_inputs() {
        let (params, window) =
            validate_theoretical(&entries("1", "5", "1.0", "0.2", "0.8")).unwrap();
        assert_eq!(params.inner_rate_rpm, 1.0);
        assert_eq!(params.outer_rate_rpm, 5.0);
        assert_eq!(window.start_hours, 0.2);
        assert_eq!(window.end_hours, 0.8);
        assert!(params.validate().is_ok());
        assert!(window.validate().is_ok());
    }

    #[test]
    fn test_presence_checked_first() {
        // An empty field wins even when other fields are also invalid.
        let err = validate_theoretical(&entries("", "-5", "0", "0.8", "0.2")).unwrap_err();
        assert!(message(err).contains("must be filled"));
    }

    #[test]
    fn test_parse_checked_before_range() {
        let err = validate_theoretical(&entries("abc", "-5", "1", "0.2", "0.8")).unwrap_err();
        assert!(message(err).contains("must be a number"));
    }

    #[test]
    fn test_rate_positivity_before_time_values() {
        let err = validate_theoretical(&entries("-1", "5", "-1", "0.2", "0.8")).unwrap_err();
        assert!(message(err).contains("Frame velocities"));
    }

    #[test]
    fn test_time_positivity_before_ordering() {
        let err = validate_theoretical(&entries("1", "5", "0", "0.8", "0.2")).unwrap_err();
        assert!(message(err).contains("Time values"));
    }

    #[test]
    fn test_window_ordering() {
        let err = validate_theoretical(&entries("1", "5", "1", "0.8", "0.2")).unwrap_err();
        assert!(message(err).contains("greater than the lower bound"));
    }

    #[test]
    fn test_window_containment() {
        let err = validate_theoretical(&entries("1", "5", "1", "0.2", "1.5")).unwrap_err();
        assert!(message(err).contains("simulation duration"));
    }

    #[test]
    fn test_full_span_window_accepted() {
        assert!(validate_theoretical(&entries("1", "5", "1", "0", "1")).is_ok());
    }

    #[test]
    fn test_experimental_no_containment_ceiling() {
        let entries = ExperimentalEntries {
            window_start_hours: "0.5",
            window_end_hours: "100",
        };
        assert!(validate_experimental(&entries).is_ok());
    }

    #[test]
    fn test_experimental_ordering() {
        let entries = ExperimentalEntries {
            window_start_hours: "1.0",
            window_end_hours: "0.5",
        };
        let err = validate_experimental(&entries).unwrap_err();
        assert!(message(err).contains("greater than the lower bound"));
    }
}
