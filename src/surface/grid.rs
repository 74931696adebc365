// src/surface/grid.rs
//! Spot/strike coordinate mesh
//!
//! Both axes are sampled with `resolution` evenly spaced points including
//! their endpoints, `step = (max - min) / (resolution - 1)`. Cell `(i, j)` of
//! the mesh is the pair `(S = spot_axis[j], K = strike_axis[i])`: rows follow
//! the strike axis and columns follow the spot axis.

use crate::error::{validation::*, SurfaceResult};
use ndarray::{Array1, Array2};

#[derive(Debug, Clone, PartialEq)]
pub struct PriceGrid {
    spot_axis: Array1<f64>,
    strike_axis: Array1<f64>,
}

impl PriceGrid {
    /// Build the mesh from two ranges.
    ///
    /// Only the shape of the ranges is checked here; positivity of the
    /// coordinates is the pricer's concern.
    pub fn new(
        spot_min: f64,
        spot_max: f64,
        strike_min: f64,
        strike_max: f64,
        resolution: usize,
    ) -> SurfaceResult<Self> {
        validate_increasing("spot", spot_min, spot_max)?;
        validate_increasing("strike", strike_min, strike_max)?;
        validate_resolution(resolution)?;

        Ok(PriceGrid {
            spot_axis: axis(spot_min, spot_max, resolution),
            strike_axis: axis(strike_min, strike_max, resolution),
        })
    }

    /// Number of samples per axis
    pub fn resolution(&self) -> usize {
        self.spot_axis.len()
    }

    /// `(rows, columns)` of every matrix built on this grid
    pub fn shape(&self) -> (usize, usize) {
        (self.strike_axis.len(), self.spot_axis.len())
    }

    pub fn spot_axis(&self) -> &Array1<f64> {
        &self.spot_axis
    }

    pub fn strike_axis(&self) -> &Array1<f64> {
        &self.strike_axis
    }

    /// `(spot, strike)` at row `i`, column `j`
    pub fn coordinate(&self, i: usize, j: usize) -> (f64, f64) {
        (self.spot_axis[j], self.strike_axis[i])
    }

    /// `(spot, strike)` of the cell at row-major index `idx`
    pub fn coordinate_at(&self, idx: usize) -> (f64, f64) {
        let n = self.spot_axis.len();
        self.coordinate(idx / n, idx % n)
    }

    /// Full coordinate matrices `(S, K)`, the same layout `meshgrid(spot, strike)` gives
    pub fn mesh(&self) -> (Array2<f64>, Array2<f64>) {
        let shape = self.shape();
        let spots = Array2::from_shape_fn(shape, |(_, j)| self.spot_axis[j]);
        let strikes = Array2::from_shape_fn(shape, |(i, _)| self.strike_axis[i]);
        (spots, strikes)
    }
}

/// Evenly spaced samples over `[min, max]`, endpoints pinned exactly
fn axis(min: f64, max: f64, resolution: usize) -> Array1<f64> {
    let mut samples = Array1::linspace(min, max, resolution);
    samples[resolution - 1] = max;
    samples
}
