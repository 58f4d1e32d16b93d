//! Kinematic simulation of the gravity vector in the sample frame.
//!
//! The sample sits on the inner frame of a two-axis gimbal: the outer frame
//! rotates about the lab x-axis at a constant rate, carrying the inner
//! frame, which rotates about its own y-axis. Gravity is the fixed unit
//! vector `(0, 0, -1)` in the lab frame; each sample reports that vector
//! expressed in the sample frame, i.e. the inverse of the composed rotation
//! applied to gravity. The resulting path lies on the unit sphere and, for
//! incommensurate rates, sweeps it as the two rotations beat against each
//! other.

use nalgebra::{Rotation3, Vector3};

use crate::config::{KinematicParameters, MountingOffsets, SimulatorConfig};
use crate::error::Result;
use crate::series::{SampleRecord, TimeSeries};

/// Conversion factor from revolutions per minute to radians per second.
const RPM_TO_RAD_PER_SEC: f64 = std::f64::consts::PI / 30.0;

/// Standard gravity (m/s^2), used to express accelerations in g units.
const STANDARD_GRAVITY_M_S2: f64 = 9.8;

/// Convert a rotation rate from RPM to radians per second.
#[must_use]
pub fn rpm_to_rad_per_sec(rpm: f64) -> f64 {
    rpm * RPM_TO_RAD_PER_SEC
}

/// Simulate the gravity vector seen by the sample, with default sampling.
///
/// Equivalent to [`simulate_with_config`] with [`SimulatorConfig::default`].
///
/// # Errors
///
/// Returns [`crate::ClinostatError::InvalidParameter`] if any rate or the
/// duration is not strictly positive; no partial series is produced.
///
/// # Example
///
/// ```
/// use clinostat_model::{simulate, KinematicParameters};
///
/// let params = KinematicParameters::new(1.0, 5.0, 0.1);
/// let series = simulate(&params)?;
/// assert!(series.len() >= 2);
/// # Ok::<(), clinostat_model::ClinostatError>(())
/// ```
pub fn simulate(params: &KinematicParameters) -> Result<TimeSeries> {
    simulate_with_config(params, &SimulatorConfig::default())
}

/// Simulate the gravity vector seen by the sample.
///
/// The series covers `[0, duration]` on a uniform grid whose spacing is
/// `min(max_sample_interval, fastest_period / samples_per_revolution)`,
/// stretched so the final sample lands exactly on the requested duration.
/// Under-sampling the faster axis would alias the oscillation and corrupt
/// the downstream uniformity score, so the grid always resolves it.
///
/// The function is pure: identical inputs produce a bit-identical series.
///
/// # Errors
///
/// Returns [`crate::ClinostatError::InvalidParameter`] if the parameters or
/// the sampling configuration fail validation.
pub fn simulate_with_config(
    params: &KinematicParameters,
    config: &SimulatorConfig,
) -> Result<TimeSeries> {
    params.validate()?;
    config.validate()?;

    let inner_rad_s = rpm_to_rad_per_sec(params.inner_rate_rpm);
    let outer_rad_s = rpm_to_rad_per_sec(params.outer_rate_rpm);

    let records: Vec<SampleRecord> = time_grid(params, config)
        .map(|t| {
            let g_local = sample_frame_rotation(inner_rad_s * t, outer_rad_s * t)
                * Vector3::new(0.0, 0.0, -1.0);
            SampleRecord::new(t, g_local.x, g_local.y, g_local.z)
        })
        .collect();

    TimeSeries::new(records)
}

/// Gravitational, rotational, and total acceleration felt by an off-center
/// sample, each in g units on the shared sampling grid.
#[derive(Debug, Clone, PartialEq)]
pub struct AccelerationSeries {
    /// Gravity expressed in the sample frame (unit magnitude).
    pub gravitational: TimeSeries,

    /// Acceleration of the mounting point due to rotation alone, expressed
    /// in the sample frame. Identically zero for a centered sample.
    pub rotational: TimeSeries,

    /// Per-sample sum of the gravitational and rotational components.
    pub total: TimeSeries,
}

/// Simulate an off-center sample, with default sampling.
///
/// Equivalent to [`simulate_with_offsets_and_config`] with
/// [`SimulatorConfig::default`].
///
/// # Errors
///
/// Returns [`crate::ClinostatError::InvalidParameter`] if any rate or the
/// duration is not strictly positive, or if any offset is non-finite.
pub fn simulate_with_offsets(
    params: &KinematicParameters,
    offsets: &MountingOffsets,
) -> Result<AccelerationSeries> {
    simulate_with_offsets_and_config(params, offsets, &SimulatorConfig::default())
}

/// Simulate an off-center sample.
///
/// A sample displaced from the rotation center rides a circle-on-circle
/// trajectory and feels, besides reoriented gravity, the acceleration of its
/// mounting point: `a = -(dw/dt x r + w x (w x r))`, where `w` is the total
/// angular velocity of the sample frame and `r` the displacement expressed
/// in the lab frame. Both `a` and gravity are rotated into the sample frame
/// and reported in g units; the `total` series is their per-sample sum, the
/// quantity an accelerometer mounted on the sample would measure.
///
/// The gravitational component is bit-identical to [`simulate_with_config`]
/// on the same inputs.
///
/// # Errors
///
/// Returns [`crate::ClinostatError::InvalidParameter`] if the parameters,
/// the offsets, or the sampling configuration fail validation.
pub fn simulate_with_offsets_and_config(
    params: &KinematicParameters,
    offsets: &MountingOffsets,
    config: &SimulatorConfig,
) -> Result<AccelerationSeries> {
    params.validate()?;
    offsets.validate()?;
    config.validate()?;

    let inner_rad_s = rpm_to_rad_per_sec(params.inner_rate_rpm);
    let outer_rad_s = rpm_to_rad_per_sec(params.outer_rate_rpm);
    let (dx, dy, dz) = (offsets.delta_x_m, offsets.delta_y_m, offsets.delta_z_m);

    let mut gravitational = Vec::new();
    let mut rotational = Vec::new();
    let mut total = Vec::new();

    for t in time_grid(params, config) {
        let theta_inner = inner_rad_s * t;
        let theta_outer = outer_rad_s * t;
        let to_sample = sample_frame_rotation(theta_inner, theta_outer);

        let g_local = to_sample * Vector3::new(0.0, 0.0, -1.0);

        // Total angular velocity of the sample frame and its derivative,
        // both in the lab frame.
        let omega = Vector3::new(
            inner_rad_s,
            outer_rad_s * theta_inner.cos(),
            outer_rad_s * theta_inner.sin(),
        );
        let omega_dot = Vector3::new(
            0.0,
            -inner_rad_s * outer_rad_s * theta_inner.sin(),
            inner_rad_s * outer_rad_s * theta_inner.cos(),
        );

        // Displacement of the sample from the rotation center, carried
        // through both rotations into the lab frame.
        let r = Vector3::new(
            dx * theta_outer.cos() + dz * theta_outer.sin(),
            dy * theta_inner.cos() + dx * theta_inner.sin() * theta_outer.sin()
                - dz * theta_inner.sin() * theta_outer.cos(),
            dy * theta_inner.sin() - dx * theta_inner.cos() * theta_outer.sin()
                + dz * theta_inner.cos() * theta_outer.cos(),
        );

        let a_lab = -(omega_dot.cross(&r) + omega.cross(&omega.cross(&r)));
        let a_local = (to_sample * a_lab) / STANDARD_GRAVITY_M_S2;

        gravitational.push(SampleRecord::new(t, g_local.x, g_local.y, g_local.z));
        rotational.push(SampleRecord::new(t, a_local.x, a_local.y, a_local.z));
        total.push(SampleRecord::new(
            t,
            g_local.x + a_local.x,
            g_local.y + a_local.y,
            g_local.z + a_local.z,
        ));
    }

    Ok(AccelerationSeries {
        gravitational: TimeSeries::new(gravitational)?,
        rotational: TimeSeries::new(rotational)?,
        total: TimeSeries::new(total)?,
    })
}

/// Rotation taking lab-frame vectors into the sample frame at the given
/// accumulated gimbal angles.
fn sample_frame_rotation(theta_inner: f64, theta_outer: f64) -> Rotation3<f64> {
    let outer = Rotation3::from_axis_angle(&Vector3::x_axis(), theta_outer);
    let inner = Rotation3::from_axis_angle(&Vector3::y_axis(), theta_inner);
    (outer * inner).inverse()
}

/// Uniform sampling grid over `[0, duration]`.
///
/// Spacing is `min(max_sample_interval, fastest_period / samples_per_rev)`,
/// stretched so the final sample lands exactly on the requested duration and
/// window resolution at end == duration never falls outside the series.
/// Callers validate inputs first.
fn time_grid(
    params: &KinematicParameters,
    config: &SimulatorConfig,
) -> impl Iterator<Item = f64> {
    let duration_s = params.duration_seconds();
    let fastest_period_s = 60.0 / params.fastest_rate_rpm();
    let target_dt = (fastest_period_s / config.samples_per_revolution as f64)
        .min(config.max_sample_interval_s);
    let steps = (duration_s / target_dt).ceil().max(1.0) as usize;
    let dt = duration_s / steps as f64;

    (0..=steps).map(move |i| if i == steps { duration_s } else { i as f64 * dt })
}
