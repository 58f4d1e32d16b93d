//! Clinostat Microgravity Model
//!
//! Simulation-and-analysis engine for evaluating how well a two-axis
//! clinostat cancels gravity for a mounted sample.
//!
//! The engine has three components, all pure and synchronous:
//!
//! - **Kinematic simulator** ([`simulate`]): composes the two frame
//!   rotations and reports the lab gravity vector expressed in the sample
//!   frame over the run, on a grid fine enough to resolve the faster axis.
//!   For samples mounted away from the rotation center,
//!   [`simulate_with_offsets`] adds the rotational acceleration of the
//!   mounting point and the resulting total acceleration.
//! - **Time-average analyzer** ([`analyze`]): running per-axis means, the
//!   magnitude of the averaged vector, and mean magnitudes over the full
//!   run and over a caller-chosen analysis window.
//! - **Uniformity scorer** ([`UniformityScorer`]): one scalar in `[0, 1]`
//!   describing how evenly the normalized path covers the unit sphere.
//!
//! Measured runs enter through [`parse_accelerometer_log`]; raw entry-field
//! text is turned into validated parameters by [`validation`].
//!
//! # Quick Start
//!
//! ```
//! use clinostat_model::{
//!     analyze, simulate, AnalysisWindow, KinematicParameters, UniformityScorer,
//! };
//!
//! let params = KinematicParameters::new(1.0, 5.0, 0.2);
//! let series = simulate(&params)?;
//!
//! let window = AnalysisWindow::new(0.05, 0.15);
//! let result = analyze(&series, &window)?;
//! assert!(result.mean_magnitude_window < 1.0);
//!
//! let score = UniformityScorer::new().score(&series)?;
//! assert!(score.coverage > 0.0 && score.coverage <= 1.0);
//! # Ok::<(), clinostat_model::ClinostatError>(())
//! ```
//!
//! # Operating Modes
//!
//! | Mode | Series source | Window ceiling |
//! |------|---------------|----------------|
//! | Theoretical | [`simulate`] from two frame rates and a duration | run duration |
//! | Experimental | [`parse_accelerometer_log`] from a measured log | data extent |
//!
//! A run's entities (series, results, score) live only for that run; the
//! engine keeps no cross-run state.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod ingest;
pub mod series;
pub mod simulator;
pub mod uniformity;
pub mod validation;

// Re-exports for convenient access
pub use analysis::{analyze, TimeAverageResult};
pub use config::{AnalysisWindow, KinematicParameters, MountingOffsets, SimulatorConfig};
pub use error::{ClinostatError, Result};
pub use ingest::parse_accelerometer_log;
pub use series::{SampleRecord, TimeSeries};
pub use simulator::{
    rpm_to_rad_per_sec, simulate, simulate_with_config, simulate_with_offsets,
    simulate_with_offsets_and_config, AccelerationSeries,
};
pub use uniformity::{UniformityScore, UniformityScorer};
pub use validation::{
    validate_experimental, validate_theoretical, ExperimentalEntries, TheoreticalEntries,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
