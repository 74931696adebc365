// src/math_utils.rs
use statrs::function::erf;
use std::f64::consts::FRAC_1_SQRT_2;

/// Standard normal cumulative distribution function Φ(x).
///
/// Written in terms of `erfc` so the lower tail keeps full relative
/// precision instead of cancelling in `1 + erf(x)`.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erf::erfc(-x * FRAC_1_SQRT_2)
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Timer::new()
    }
}
