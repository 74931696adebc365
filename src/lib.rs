//! # bsm-surface: Black-Scholes-Merton Price Surfaces
//!
//! Prices European calls and puts under the Black-Scholes-Merton model over
//! a grid of spot and strike prices, producing a pair of matrices ready for
//! surface visualization.
//!
//! ## Key Features
//!
//! - **Closed-form pricing**: call and put from a single d₁/d₂ evaluation
//! - **Grid evaluation**: `resolution × resolution` spot/strike mesh with
//!   inclusive endpoints
//! - **Parallel or sequential**: cells are independent and mapped with Rayon
//!   by default, with identical results either way
//! - **Eager validation**: bad ranges and parameters fail before any pricing
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_surface::surface::evaluator::{evaluate_surface, SurfaceConfig};
//!
//! let config = SurfaceConfig {
//!     spot_min: 50.0,
//!     spot_max: 150.0,
//!     strike_min: 50.0,
//!     strike_max: 150.0,
//!     t: 1.0,         // Time to maturity
//!     r: 0.05,        // Risk-free rate
//!     sigma: 0.2,     // Volatility
//!     resolution: 50,
//!     ..Default::default()
//! };
//!
//! let surface = evaluate_surface(&config).expect("Valid configuration");
//! assert_eq!(surface.call().dim(), (50, 50));
//! // Row i follows the strike axis, column j the spot axis
//! let (spot, strike, call, put) = surface.cell(0, 0);
//! println!("C({}, {}) = {:.4}, P = {:.4}", spot, strike, call, put);
//! ```

// Module declarations
pub mod analytics;
pub mod config;
pub mod error;
pub mod math_utils;
pub mod output;
pub mod surface;

// Re-export commonly used types for convenience
pub use analytics::bs_analytic::{bs_price, OptionPrices, PricingParameters};
pub use error::{SurfaceError, SurfaceResult};
pub use surface::evaluator::{evaluate, evaluate_surface, EvaluationPolicy, SurfaceConfig};
pub use surface::{PriceSurface, SurfaceSummary};
