// src/surface/mod.rs
//! Price surfaces over a spot/strike grid
//!
//! [`evaluator::evaluate_surface`] prices every node of a [`grid::PriceGrid`]
//! and returns a [`PriceSurface`]. Matrices are indexed `[[i, j]]` with row
//! `i` on the strike axis and column `j` on the spot axis, so a plotting
//! layer should put spot on x and strike on y.

pub mod evaluator;
pub mod grid;

use grid::PriceGrid;
use ndarray::{Array1, Array2};

/// Call and put matrices aligned to the grid they were priced on
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSurface {
    grid: PriceGrid,
    call: Array2<f64>,
    put: Array2<f64>,
}

/// Extremes of a surface, plus the node closest to at-the-money
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSummary {
    pub call_min: f64,
    pub call_max: f64,
    pub put_min: f64,
    pub put_max: f64,
    /// `(spot, strike)` of the node minimising |S - K|, first in row-major order
    pub atm_node: (f64, f64),
    pub atm_call: f64,
    pub atm_put: f64,
}

impl PriceSurface {
    pub(crate) fn new(grid: PriceGrid, call: Array2<f64>, put: Array2<f64>) -> Self {
        PriceSurface { grid, call, put }
    }

    pub fn grid(&self) -> &PriceGrid {
        &self.grid
    }

    pub fn spot_axis(&self) -> &Array1<f64> {
        self.grid.spot_axis()
    }

    pub fn strike_axis(&self) -> &Array1<f64> {
        self.grid.strike_axis()
    }

    /// Call prices, rows = strike, columns = spot
    pub fn call(&self) -> &Array2<f64> {
        &self.call
    }

    /// Put prices, rows = strike, columns = spot
    pub fn put(&self) -> &Array2<f64> {
        &self.put
    }

    pub fn shape(&self) -> (usize, usize) {
        self.grid.shape()
    }

    /// `(spot, strike, call, put)` at row `i`, column `j`
    pub fn cell(&self, i: usize, j: usize) -> (f64, f64, f64, f64) {
        let (s, k) = self.grid.coordinate(i, j);
        (s, k, self.call[[i, j]], self.put[[i, j]])
    }

    /// Hand the matrices to the caller as `(call, put)`
    pub fn into_matrices(self) -> (Array2<f64>, Array2<f64>) {
        (self.call, self.put)
    }

    pub fn summary(&self) -> SurfaceSummary {
        let fold_min = |m: &Array2<f64>| m.iter().copied().fold(f64::INFINITY, f64::min);
        let fold_max = |m: &Array2<f64>| m.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let (rows, cols) = self.shape();
        let mut atm = (0, 0);
        let mut best = f64::INFINITY;
        for i in 0..rows {
            for j in 0..cols {
                let (s, k) = self.grid.coordinate(i, j);
                let distance = (s - k).abs();
                if distance < best {
                    best = distance;
                    atm = (i, j);
                }
            }
        }

        SurfaceSummary {
            call_min: fold_min(&self.call),
            call_max: fold_max(&self.call),
            put_min: fold_min(&self.put),
            put_max: fold_max(&self.put),
            atm_node: self.grid.coordinate(atm.0, atm.1),
            atm_call: self.call[atm],
            atm_put: self.put[atm],
        }
    }
}
