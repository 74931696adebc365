// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes-Merton prices for European calls and puts
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! and a European option on it has the closed-form value
//! ```text
//! d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
//! d₂ = d₁ - σ√T
//! C  = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
//! P  = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
//! ```
//!
//! Both prices share d₁, d₂ and the discount factor, so they are always
//! computed together. Put-call parity `C - P = S - K*e^(-rT)` then follows
//! from `Φ(x) + Φ(-x) = 1`.

use crate::error::{validation::*, SurfaceError, SurfaceResult};
use crate::math_utils::norm_cdf;

/// Validated inputs of a single Black-Scholes-Merton valuation.
///
/// Construction through [`PricingParameters::new`] is the only way to obtain
/// one, so every instance satisfies S, K, T, σ > 0 and r finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingParameters {
    s: f64,
    k: f64,
    t: f64,
    r: f64,
    sigma: f64,
}

/// Call and put value for one (S, K) pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionPrices {
    pub call: f64,
    pub put: f64,
}

impl PricingParameters {
    /// # Parameters
    /// - `s`: Spot price of the underlying
    /// - `k`: Strike price
    /// - `t`: Time to maturity in years
    /// - `r`: Continuously-compounded risk-free rate (may be negative)
    /// - `sigma`: Annualized volatility
    ///
    /// # Errors
    /// `SurfaceError::InvalidParameter` naming the first offending input.
    pub fn new(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> SurfaceResult<Self> {
        validate_domain("spot", s, "ln(S/K)")?;
        validate_domain("strike", k, "ln(S/K)")?;
        validate_domain("maturity", t, "σ√T as a divisor")?;
        validate_finite("rate", r)?;
        validate_domain("volatility", sigma, "σ√T as a divisor")?;
        if sigma * t.sqrt() <= 0.0 {
            return Err(SurfaceError::InvalidParameter {
                parameter: "volatility".to_string(),
                value: sigma,
                constraint: format!("σ√T underflows to 0 with T = {}", t),
            });
        }
        Ok(PricingParameters { s, k, t, r, sigma })
    }

    pub fn spot(&self) -> f64 {
        self.s
    }

    pub fn strike(&self) -> f64 {
        self.k
    }

    /// Discount factor e^(-rT)
    pub fn discount_factor(&self) -> f64 {
        (-self.r * self.t).exp()
    }

    /// Returns `(d₁, d₂)`
    pub fn d1_d2(&self) -> (f64, f64) {
        let sigma_sqrt_t = self.sigma * self.t.sqrt();
        let d1 = ((self.s / self.k).ln() + (self.r + 0.5 * self.sigma * self.sigma) * self.t)
            / sigma_sqrt_t;
        (d1, d1 - sigma_sqrt_t)
    }

    /// Black-Scholes-Merton call and put prices
    ///
    /// # Errors
    /// `SurfaceError::NumericalInstability` if either price is not finite,
    /// which only happens when e^(-rT) overflows.
    pub fn price(&self) -> SurfaceResult<OptionPrices> {
        let (d1, d2) = self.d1_d2();
        let discounted_strike = self.k * self.discount_factor();

        let call = self.s * norm_cdf(d1) - discounted_strike * norm_cdf(d2);
        let put = discounted_strike * norm_cdf(-d2) - self.s * norm_cdf(-d1);

        if !call.is_finite() || !put.is_finite() {
            return Err(SurfaceError::NumericalInstability {
                method: "bs_price".to_string(),
                reason: format!(
                    "non-finite price (call = {}, put = {}) for S = {}, K = {}, T = {}, r = {}, σ = {}",
                    call, put, self.s, self.k, self.t, self.r, self.sigma
                ),
            });
        }

        Ok(OptionPrices { call, put })
    }
}

/// Black-Scholes-Merton European call and put prices
///
/// # Formula
/// ```text
/// C(S,K,T,r,σ) = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// P(S,K,T,r,σ) = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
/// ```
///
/// # Errors
/// `InvalidParameter` when S, K, T or σ is not strictly positive, or any
/// input is NaN or infinite.
pub fn bs_price(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> SurfaceResult<OptionPrices> {
    PricingParameters::new(s, k, t, r, sigma)?.price()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_each_non_positive_input() {
        let cases = [
            ("spot", bs_price(0.0, 100.0, 1.0, 0.05, 0.2)),
            ("strike", bs_price(100.0, -5.0, 1.0, 0.05, 0.2)),
            ("maturity", bs_price(100.0, 100.0, 0.0, 0.05, 0.2)),
            ("volatility", bs_price(100.0, 100.0, 1.0, 0.05, 0.0)),
            ("rate", bs_price(100.0, 100.0, 1.0, f64::NAN, 0.2)),
        ];

        for (expected, result) in cases {
            match result {
                Err(SurfaceError::InvalidParameter { parameter, .. }) => {
                    assert_eq!(parameter, expected)
                }
                other => panic!("expected InvalidParameter for {}, got {:?}", expected, other),
            }
        }
    }

    #[test]
    fn test_negative_rate_is_accepted() {
        let prices = bs_price(100.0, 110.0, 0.5, -0.01, 0.3).unwrap();
        assert_relative_eq!(prices.call, 4.588_371_423_303_151, max_relative = 1e-9);
        assert_relative_eq!(prices.put, 15.139_748_717_837_264, max_relative = 1e-9);
    }

    #[test]
    fn test_subnormal_volatility_is_rejected() {
        match bs_price(100.0, 100.0, 0.01, 0.0, 5e-324) {
            Err(SurfaceError::InvalidParameter { parameter, constraint, .. }) => {
                assert_eq!(parameter, "volatility");
                assert!(constraint.contains("underflows"));
            }
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
        // tiny but representable σ√T still prices
        assert!(bs_price(100.0, 100.0, 0.01, 0.0, 1e-300).is_ok());
    }

    #[test]
    fn test_d2_is_d1_minus_sigma_sqrt_t() {
        let params = PricingParameters::new(100.0, 90.0, 4.0, 0.03, 0.25).unwrap();
        let (d1, d2) = params.d1_d2();
        assert!((d1 - d2 - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_overflowing_discount_is_reported() {
        match bs_price(100.0, 100.0, 1.0, -1e308, 0.2) {
            Err(SurfaceError::NumericalInstability { method, .. }) => assert_eq!(method, "bs_price"),
            other => panic!("expected NumericalInstability, got {:?}", other),
        }
    }
}
