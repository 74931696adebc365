// src/surface/evaluator.rs
use crate::analytics::bs_analytic::{OptionPrices, PricingParameters};
use crate::error::{validation::*, SurfaceError, SurfaceResult};
use crate::math_utils::Timer;
use crate::surface::grid::PriceGrid;
use crate::surface::PriceSurface;
use ndarray::Array2;
use rayon::prelude::*;
use serde::Deserialize;
use tracing::debug;

/// How the resolution² independent cells are mapped over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationPolicy {
    /// Plain iterator on the calling thread
    Sequential,
    /// Rayon thread pool
    #[default]
    Parallel,
}

/// Inputs of one surface evaluation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub spot_min: f64,
    pub spot_max: f64,
    pub strike_min: f64,
    pub strike_max: f64,
    /// Time to maturity in years
    pub t: f64,
    /// Continuously-compounded risk-free rate
    pub r: f64,
    pub sigma: f64,
    /// Samples per axis
    pub resolution: usize,
    pub policy: EvaluationPolicy,
}

impl SurfaceConfig {
    /// Validate every input before any pricing starts
    ///
    /// Ranges are checked first, then the scalars the pricer needs. The
    /// smallest spot and strike of the grid are the range minima, so checking
    /// those for positivity covers every cell.
    pub fn validate(&self) -> SurfaceResult<()> {
        validate_increasing("spot", self.spot_min, self.spot_max)?;
        validate_increasing("strike", self.strike_min, self.strike_max)?;
        validate_resolution(self.resolution)?;
        validate_domain("spot_min", self.spot_min, "ln(S/K)")?;
        validate_domain("strike_min", self.strike_min, "ln(S/K)")?;
        PricingParameters::new(self.spot_min, self.strike_min, self.t, self.r, self.sigma)?;
        Ok(())
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        SurfaceConfig {
            spot_min: 50.0,
            spot_max: 150.0,
            strike_min: 50.0,
            strike_max: 150.0,
            t: 1.0,
            r: 0.05,
            sigma: 0.2,
            resolution: 50,
            policy: EvaluationPolicy::Parallel,
        }
    }
}

/// Call and put surfaces over a spot/strike grid
///
/// Builds a `resolution × resolution` mesh and prices every `(S, K)` pair
/// with the same T, r and σ. Row `i` of both matrices is `strike_axis[i]`,
/// column `j` is `spot_axis[j]`.
///
/// # Errors
///
/// - `InvalidRange` if a min/max pair is not strictly increasing, the
///   resolution is below 2, or resolution² overflows `usize`
/// - `InvalidParameter` if a range minimum, T or σ is not positive, or any
///   input is not finite
/// - `NumericalInstability` if any cell prices to a non-finite value; the
///   whole evaluation is abandoned
///
/// Emits one `tracing` debug event per call (grid size, policy, elapsed
/// time); nothing is recorded unless the host installs a subscriber.
pub fn evaluate_surface(cfg: &SurfaceConfig) -> SurfaceResult<PriceSurface> {
    cfg.validate()?;
    let timer = Timer::new();

    let grid = PriceGrid::new(
        cfg.spot_min,
        cfg.spot_max,
        cfg.strike_min,
        cfg.strike_max,
        cfg.resolution,
    )?;
    let cells = validate_resolution(grid.resolution())?;

    let price_cell = |idx: usize| -> SurfaceResult<OptionPrices> {
        let (s, k) = grid.coordinate_at(idx);
        PricingParameters::new(s, k, cfg.t, cfg.r, cfg.sigma)?.price()
    };

    // The index -> (i, j) mapping is fixed, so both policies yield identical matrices
    let prices: Vec<OptionPrices> = match cfg.policy {
        EvaluationPolicy::Sequential => (0..cells).map(price_cell).collect::<SurfaceResult<_>>()?,
        EvaluationPolicy::Parallel => (0..cells)
            .into_par_iter()
            .map(price_cell)
            .collect::<SurfaceResult<_>>()?,
    };

    let (call, put): (Vec<f64>, Vec<f64>) = prices.into_iter().map(|p| (p.call, p.put)).unzip();
    let call = into_matrix(grid.shape(), call)?;
    let put = into_matrix(grid.shape(), put)?;

    debug!(
        resolution = cfg.resolution,
        cells,
        policy = ?cfg.policy,
        elapsed_ms = timer.elapsed_ms(),
        "evaluated price surface"
    );

    Ok(PriceSurface::new(grid, call, put))
}

/// Flat-argument form of [`evaluate_surface`] using the parallel policy
#[allow(clippy::too_many_arguments)]
pub fn evaluate(
    spot_min: f64,
    spot_max: f64,
    strike_min: f64,
    strike_max: f64,
    t: f64,
    r: f64,
    sigma: f64,
    resolution: usize,
) -> SurfaceResult<PriceSurface> {
    evaluate_surface(&SurfaceConfig {
        spot_min,
        spot_max,
        strike_min,
        strike_max,
        t,
        r,
        sigma,
        resolution,
        policy: EvaluationPolicy::Parallel,
    })
}

fn into_matrix(shape: (usize, usize), values: Vec<f64>) -> SurfaceResult<Array2<f64>> {
    Array2::from_shape_vec(shape, values).map_err(|e| SurfaceError::NumericalInstability {
        method: "evaluate_surface".to_string(),
        reason: format!("cell count does not match grid shape {:?}: {}", shape, e),
    })
}
