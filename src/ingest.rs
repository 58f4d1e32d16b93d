//! Parsing of measured accelerometer logs (experimental mode).
//!
//! A log is a flat token stream where every group of five consecutive
//! tokens forms one record: `{time_of_day, date, x, y, z}`, tokens
//! separated by any run of whitespace or commas. The two leading tokens
//! combine into a timestamp in `HH:MM:SS MM/DD/YYYY` form; the produced
//! series carries elapsed seconds since the first record's timestamp.

use chrono::NaiveDateTime;

use crate::error::{ClinostatError, Result};
use crate::series::{SampleRecord, TimeSeries};

/// Number of tokens per accelerometer record.
pub const TOKENS_PER_RECORD: usize = 5;

/// Timestamp layout of the logger: time of day, then date.
const TIMESTAMP_FORMAT: &str = "%H:%M:%S %m/%d/%Y";

/// Parse a raw accelerometer log into a validated time series.
///
/// Token streams whose length is not a multiple of five are rejected
/// outright rather than silently truncated, so a corrupted tail never
/// shifts the field alignment of every following record.
///
/// # Errors
///
/// - [`ClinostatError::MalformedRecord`] on an empty stream, a leftover
///   token group, an unparseable timestamp, or an unparseable component.
/// - [`ClinostatError::SeriesTooShort`] if fewer than two records are
///   present.
/// - [`ClinostatError::NonMonotonicTimestamps`] if the log's timestamps
///   run backwards.
///
/// # Example
///
/// ```
/// use clinostat_model::parse_accelerometer_log;
///
/// let raw = "12:00:00 03/14/2025 0.01 -0.99 0.02\n\
///            12:00:01 03/14/2025 0.03 -0.98 0.05";
/// let series = parse_accelerometer_log(raw)?;
/// assert_eq!(series.len(), 2);
/// assert_eq!(series.records()[1].time_offset_s, 1.0);
/// # Ok::<(), clinostat_model::ClinostatError>(())
/// ```
pub fn parse_accelerometer_log(raw: &str) -> Result<TimeSeries> {
    let tokens: Vec<&str> = raw
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(ClinostatError::malformed_record(0, "no tokens in input"));
    }
    if tokens.len() % TOKENS_PER_RECORD != 0 {
        return Err(ClinostatError::malformed_record(
            tokens.len() / TOKENS_PER_RECORD,
            format!(
                "token count {} is not a multiple of {}",
                tokens.len(),
                TOKENS_PER_RECORD
            ),
        ));
    }

    let mut timestamps = Vec::with_capacity(tokens.len() / TOKENS_PER_RECORD);
    let mut components = Vec::with_capacity(tokens.len() / TOKENS_PER_RECORD);

    for (position, chunk) in tokens.chunks_exact(TOKENS_PER_RECORD).enumerate() {
        let stamp = format!("{} {}", chunk[0], chunk[1]);
        let timestamp = NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT).map_err(|e| {
            ClinostatError::malformed_record(position, format!("bad timestamp {stamp:?}: {e}"))
        })?;

        let mut xyz = [0.0f64; 3];
        for (slot, token) in xyz.iter_mut().zip(&chunk[2..]) {
            *slot = token.parse().map_err(|e| {
                ClinostatError::malformed_record(position, format!("bad component {token:?}: {e}"))
            })?;
        }

        timestamps.push(timestamp);
        components.push(xyz);
    }

    let first = timestamps[0];
    let records: Vec<SampleRecord> = timestamps
        .iter()
        .zip(&components)
        .map(|(timestamp, &[x, y, z])| {
            let elapsed = timestamp.signed_duration_since(first);
            let seconds = elapsed.num_milliseconds() as f64 / 1000.0;
            SampleRecord::new(seconds, x, y, z)
        })
        .collect();

    TimeSeries::new(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TWO_RECORDS: &str =
        "12:00:00 03/14/2025 0.10 -0.99 0.02, 12:00:30 03/14/2025 0.30 -0.95 0.12";

    #[test]
    fn test_parse_valid_log() {
        let series = parse_accelerometer_log(TWO_RECORDS).unwrap();
        let records = series.records();

        assert_eq!(records.len(), 2);
        assert_relative_eq!(records[0].time_offset_s, 0.0);
        assert_relative_eq!(records[0].x, 0.10);
        assert_relative_eq!(records[0].y, -0.99);
        assert_relative_eq!(records[1].time_offset_s, 30.0);
        assert_relative_eq!(records[1].z, 0.12);
    }

    #[test]
    fn test_mixed_separators() {
        let raw = "12:00:00,03/14/2025,0.1,0.2,0.3\t\t12:00:05 03/14/2025   0.4, 0.5, 0.6";
        let series = parse_accelerometer_log(raw).unwrap();
        assert_eq!(series.len(), 2);
        assert_relative_eq!(series.records()[1].time_offset_s, 5.0);
    }

    #[test]
    fn test_elapsed_across_midnight() {
        let raw = "23:59:50 03/14/2025 0.0 1.0 0.0 00:00:10 03/15/2025 1.0 0.0 0.0";
        let series = parse_accelerometer_log(raw).unwrap();
        assert_relative_eq!(series.records()[1].time_offset_s, 20.0);
    }

    #[test]
    fn test_truncated_stream_rejected() {
        // 7 tokens: one full record plus a dangling pair.
        let raw = "12:00:00 03/14/2025 0.1 0.2 0.3 12:00:01 03/14/2025";
        let err = parse_accelerometer_log(raw).unwrap_err();
        assert!(matches!(err, ClinostatError::MalformedRecord { .. }));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(parse_accelerometer_log("  \n\t ,, ").is_err());
    }

    #[test]
    fn test_bad_timestamp_rejected() {
        let raw = "25:99:00 03/14/2025 0.1 0.2 0.3 12:00:01 03/14/2025 0.1 0.2 0.3";
        let err = parse_accelerometer_log(raw).unwrap_err();
        assert!(matches!(
            err,
            ClinostatError::MalformedRecord { position: 0, .. }
        ));
    }

    #[test]
    fn test_bad_component_rejected() {
        let raw = "12:00:00 03/14/2025 0.1 0.2 0.3 12:00:01 03/14/2025 0.1 oops 0.3";
        let err = parse_accelerometer_log(raw).unwrap_err();
        assert!(matches!(
            err,
            ClinostatError::MalformedRecord { position: 1, .. }
        ));
    }

    #[test]
    fn test_single_record_rejected() {
        let raw = "12:00:00 03/14/2025 0.1 0.2 0.3";
        let err = parse_accelerometer_log(raw).unwrap_err();
        assert!(matches!(err, ClinostatError::SeriesTooShort { .. }));
    }

    #[test]
    fn test_backwards_timestamps_rejected() {
        let raw = "12:00:30 03/14/2025 0.1 0.2 0.3 12:00:00 03/14/2025 0.1 0.2 0.3";
        let err = parse_accelerometer_log(raw).unwrap_err();
        assert!(matches!(
            err,
            ClinostatError::NonMonotonicTimestamps { .. }
        ));
    }
}
