// tests/pricer_test.rs
use approx::assert_relative_eq;
use bsm_surface::analytics::bs_analytic::{bs_price, PricingParameters};
use bsm_surface::error::SurfaceError;
use proptest::prelude::*;

fn parity_gap(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> (f64, f64) {
    let prices = bs_price(s, k, t, r, sigma).expect("Valid parameters");
    let forward_intrinsic = s - k * (-r * t).exp();
    (prices.call - prices.put, forward_intrinsic)
}

#[test]
fn test_at_the_money_reference_prices() {
    let prices = bs_price(100.0, 100.0, 1.0, 0.05, 0.2).expect("Valid parameters");

    // Reference values from an independent double-precision implementation
    let expected_call = 10.450_583_572_185_565;
    let expected_put = 5.573_526_022_256_971;

    println!("\nCall: {} (expected {})", prices.call, expected_call);
    println!("Put:  {} (expected {})", prices.put, expected_put);

    assert_relative_eq!(prices.call, expected_call, max_relative = 1e-9);
    assert_relative_eq!(prices.put, expected_put, max_relative = 1e-9);
}

#[test]
fn test_put_call_parity_at_fixed_points() {
    let cases = [
        (100.0, 100.0, 1.0, 0.05, 0.2),
        (50.0, 150.0, 0.25, 0.0, 0.6),
        (175.0, 80.0, 3.0, -0.02, 0.15),
        (10.0, 10.5, 0.01, 0.1, 1.5),
    ];

    for (s, k, t, r, sigma) in cases {
        let (lhs, rhs) = parity_gap(s, k, t, r, sigma);
        assert_relative_eq!(lhs, rhs, max_relative = 1e-6, epsilon = 1e-9);
    }
}

#[test]
fn test_vanishing_volatility_limit_at_the_money() {
    let prices = bs_price(100.0, 100.0, 1.0, 0.0, 1e-6).expect("Valid parameters");

    println!("\nσ → 0: call = {:e}, put = {:e}", prices.call, prices.put);

    // max(S - K, 0) = 0 for both legs
    assert!(prices.call >= 0.0 && prices.call < 1e-3);
    assert!(prices.put >= 0.0 && prices.put < 1e-3);
}

#[test]
fn test_deep_in_and_out_of_the_money_calls() {
    let (t, r, sigma): (f64, f64, f64) = (1.0, 0.05, 0.2);

    let deep_itm = bs_price(200.0, 50.0, t, r, sigma).expect("Valid parameters");
    let lower_bound = 200.0 - 50.0 * (-r * t).exp();
    assert!(deep_itm.call > 0.0);
    assert!(
        deep_itm.call > lower_bound - 1e-9,
        "call {} below S - K e^(-rT) = {}",
        deep_itm.call,
        lower_bound
    );

    let deep_otm = bs_price(10.0, 200.0, t, r, sigma).expect("Valid parameters");
    assert!(deep_otm.call >= 0.0);
    assert!(deep_otm.call < 0.01, "deep OTM call too large: {}", deep_otm.call);
}

#[test]
fn test_zero_volatility_or_maturity_is_rejected() {
    for (t, sigma, expected) in [(1.0, 0.0, "volatility"), (0.0, 0.2, "maturity")] {
        match bs_price(100.0, 100.0, t, 0.05, sigma) {
            Err(SurfaceError::InvalidParameter {
                parameter,
                value,
                constraint,
            }) => {
                assert_eq!(parameter, expected);
                assert_eq!(value, 0.0);
                assert!(constraint.contains("positive"));
            }
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }
}

#[test]
fn test_non_positive_spot_and_strike_are_rejected() {
    assert!(matches!(
        bs_price(-1.0, 100.0, 1.0, 0.05, 0.2),
        Err(SurfaceError::InvalidParameter { .. })
    ));
    assert!(matches!(
        PricingParameters::new(100.0, 0.0, 1.0, 0.05, 0.2),
        Err(SurfaceError::InvalidParameter { .. })
    ));
}

#[test]
fn test_monotonic_in_spot() {
    let (k, t, r, sigma) = (100.0, 1.0, 0.05, 0.2);
    let low = bs_price(80.0, k, t, r, sigma).expect("Valid parameters");
    let mid = bs_price(100.0, k, t, r, sigma).expect("Valid parameters");
    let high = bs_price(120.0, k, t, r, sigma).expect("Valid parameters");

    assert!(low.call <= mid.call && mid.call <= high.call);
    assert!(low.put >= mid.put && mid.put >= high.put);
}

proptest! {
    #[test]
    fn prop_put_call_parity(
        s in 1.0f64..500.0,
        k in 1.0f64..500.0,
        t in 0.01f64..5.0,
        r in -0.05f64..0.15,
        sigma in 0.01f64..1.5,
    ) {
        let (lhs, rhs) = parity_gap(s, k, t, r, sigma);
        let scale = s.max(k);
        prop_assert!(
            (lhs - rhs).abs() <= 1e-6 * scale,
            "C - P = {} but S - K e^(-rT) = {}", lhs, rhs
        );
    }

    #[test]
    fn prop_prices_are_non_negative_and_monotonic_in_spot(
        s in 1.0f64..400.0,
        k in 1.0f64..400.0,
        t in 0.05f64..5.0,
        r in -0.05f64..0.15,
        sigma in 0.05f64..1.0,
    ) {
        let prices: Vec<_> = [s, 1.1 * s, 1.2 * s]
            .iter()
            .map(|&spot| bs_price(spot, k, t, r, sigma).expect("Valid parameters"))
            .collect();

        for p in &prices {
            prop_assert!(p.call >= 0.0 && p.put >= 0.0);
        }
        prop_assert!(prices[0].call <= prices[1].call && prices[1].call <= prices[2].call);
        prop_assert!(prices[0].put >= prices[1].put && prices[1].put >= prices[2].put);
    }
}
