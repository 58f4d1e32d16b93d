//! Uniformity scoring of the acceleration-vector path on the unit sphere.
//!
//! A good microgravity simulation sweeps the gravity vector evenly over all
//! orientations; a path that lingers near a few directions or traces a thin
//! band cancels gravity poorly along the neglected directions. The scorer
//! reduces a 3-D path to one scalar in `[0, 1]`: the fraction of a fixed
//! golden-spiral reference grid whose bins the normalized path visits,
//! where each sample is assigned to the nearest reference direction within
//! its octant. The statistic is deterministic, monotone in newly covered
//! regions, and invariant under rigid rotation of the whole path up to the
//! grid's discretization.

use crate::error::{ClinostatError, Result};
use crate::series::TimeSeries;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Magnitude below which a sample is treated as degenerate and excluded.
pub const DEGENERATE_MAGNITUDE: f64 = 1e-9;

/// Default number of reference directions on the sphere.
pub const DEFAULT_REFERENCE_POINTS: usize = 1000;

/// Uniformity/distribution score of a path over the unit sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UniformityScore {
    /// Fraction of reference bins visited by the path, in `[0, 1]`.
    pub coverage: f64,

    /// Number of reference bins visited.
    pub occupied_bins: usize,

    /// Total number of reference bins.
    pub total_bins: usize,

    /// Samples excluded for having near-zero magnitude.
    pub degenerate_samples: usize,
}

/// Scores how evenly an acceleration path covers the unit sphere.
///
/// The reference grid and its octant index are precomputed at construction
/// and reused across [`score`](Self::score) calls.
#[derive(Debug, Clone)]
pub struct UniformityScorer {
    reference: Vec<[f64; 3]>,
    octants: [Vec<usize>; 8],
}

impl Default for UniformityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformityScorer {
    /// Create a scorer with the default grid resolution.
    #[must_use]
    pub fn new() -> Self {
        Self::build(DEFAULT_REFERENCE_POINTS)
    }

    /// Create a scorer with a custom number of reference directions.
    ///
    /// # Errors
    ///
    /// Returns [`ClinostatError::InvalidParameter`] if fewer than 8 points
    /// are requested; at least one direction per octant is needed for the
    /// nearest-bin lookup.
    pub fn with_resolution(num_points: usize) -> Result<Self> {
        if num_points < 8 {
            return Err(ClinostatError::invalid_parameter(
                "uniformity grid needs at least 8 reference points",
            ));
        }
        Ok(Self::build(num_points))
    }

    fn build(num_points: usize) -> Self {
        let reference = golden_spiral_sphere(num_points);

        let mut octants: [Vec<usize>; 8] = Default::default();
        for (index, point) in reference.iter().enumerate() {
            octants[octant_of(point)].push(index);
        }

        Self { reference, octants }
    }

    /// Number of reference directions in the grid.
    #[must_use]
    pub fn resolution(&self) -> usize {
        self.reference.len()
    }

    /// Score how evenly the series' path covers the unit sphere.
    ///
    /// Each sample is normalized onto the sphere and marks the nearest
    /// reference bin within its octant; the score is the fraction of bins
    /// marked. Samples below [`DEGENERATE_MAGNITUDE`] are excluded and
    /// counted.
    ///
    /// # Errors
    ///
    /// Returns [`ClinostatError::DegenerateSeries`] if every sample is
    /// degenerate.
    pub fn score(&self, series: &TimeSeries) -> Result<UniformityScore> {
        let mut occupied = vec![false; self.reference.len()];
        let mut degenerate_samples = 0usize;
        let mut scored_any = false;

        for record in series {
            let magnitude = record.magnitude();
            if magnitude < DEGENERATE_MAGNITUDE {
                degenerate_samples += 1;
                continue;
            }
            scored_any = true;

            let unit = [
                record.x / magnitude,
                record.y / magnitude,
                record.z / magnitude,
            ];
            occupied[self.nearest_bin(&unit)] = true;
        }

        if !scored_any {
            return Err(ClinostatError::DegenerateSeries);
        }

        let occupied_bins = occupied.iter().filter(|&&hit| hit).count();
        let total_bins = self.reference.len();

        Ok(UniformityScore {
            coverage: occupied_bins as f64 / total_bins as f64,
            occupied_bins,
            total_bins,
            degenerate_samples,
        })
    }

    /// Index of the reference direction nearest to a unit vector among the
    /// vector's own octant.
    ///
    /// Near an octant boundary the true nearest direction may sit in the
    /// adjacent octant, so the assignment approximates the grid's Voronoi
    /// cells rather than reproducing them exactly; the discrepancy is on
    /// the order of one bin width. The full grid is scanned only when the
    /// octant is empty at very coarse resolutions.
    fn nearest_bin(&self, unit: &[f64; 3]) -> usize {
        let candidates = &self.octants[octant_of(unit)];
        if candidates.is_empty() {
            return self.nearest_bin_global(unit);
        }

        let mut best_index = candidates[0];
        let mut best_dot = dot(&self.reference[best_index], unit);
        for &index in &candidates[1..] {
            let d = dot(&self.reference[index], unit);
            if d > best_dot {
                best_dot = d;
                best_index = index;
            }
        }
        best_index
    }

    fn nearest_bin_global(&self, unit: &[f64; 3]) -> usize {
        let mut best_index = 0;
        let mut best_dot = f64::NEG_INFINITY;
        for (index, point) in self.reference.iter().enumerate() {
            let d = dot(point, unit);
            if d > best_dot {
                best_dot = d;
                best_index = index;
            }
        }
        best_index
    }
}

/// Distribute `n` points quasi-uniformly on the unit sphere.
///
/// Golden-spiral construction: latitudes descend linearly while longitudes
/// advance by the golden angle.
fn golden_spiral_sphere(n: usize) -> Vec<[f64; 3]> {
    let golden_ratio = (5.0_f64.sqrt() + 1.0) / 2.0;
    let golden_angle = (2.0 - golden_ratio) * (2.0 * std::f64::consts::PI);

    (0..n)
        .map(|i| {
            let y = 1.0 - (i as f64 / (n - 1) as f64) * 2.0;
            let radius = (1.0 - y * y).sqrt();
            let theta = golden_angle * i as f64;
            [theta.cos() * radius, y, theta.sin() * radius]
        })
        .collect()
}

/// Octant index of a point from its coordinate signs.
fn octant_of(point: &[f64; 3]) -> usize {
    usize::from(point[0] > 0.0)
        | usize::from(point[1] > 0.0) << 1
        | usize::from(point[2] > 0.0) << 2
}

#[inline]
fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}
