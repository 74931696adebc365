// demos/surface_demo.rs
use bsm_surface::error::SurfaceError;
use bsm_surface::output;
use bsm_surface::surface::evaluator::{evaluate, evaluate_surface, SurfaceConfig};
use bsm_surface::{bs_price, PricingParameters};

fn main() {
    println!("bsm-surface demo");
    println!("================\n");

    // Single valuation
    let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).expect("Valid parameters");
    let prices = params.price().expect("Finite prices");
    println!("1. At-the-money, S = K = 100, T = 1, r = 5%, σ = 20%");
    println!("   Call: {:.6}", prices.call);
    println!("   Put:  {:.6}", prices.put);
    println!(
        "   Parity gap C - P - (S - K e^(-rT)): {:.3e}",
        prices.call - prices.put - (params.spot() - params.strike() * params.discount_factor())
    );

    // Default surface, same inputs as the interactive panel's defaults
    println!("\n2. Default surface");
    let cfg = SurfaceConfig::default();
    let surface = evaluate_surface(&cfg).expect("Valid configuration");
    let summary = surface.summary();
    println!("   Shape: {:?} (rows = strike, columns = spot)", surface.shape());
    println!("   Call range: [{:.4}, {:.4}]", summary.call_min, summary.call_max);
    println!("   Put range:  [{:.4}, {:.4}]", summary.put_min, summary.put_max);

    let filename = "surface_demo.csv";
    match output::write_surface_to_csv(filename, &surface) {
        Ok(()) => println!("   Written to {}", filename),
        Err(e) => println!("   Could not write {}: {}", filename, e),
    }

    // Rejected inputs
    println!("\n3. Invalid inputs");
    match evaluate(100.0, 100.0, 50.0, 150.0, 1.0, 0.05, 0.2, 50) {
        Ok(_) => println!("   Unexpected: degenerate spot range accepted"),
        Err(e @ SurfaceError::InvalidRange { .. }) => println!("   ✓ Caught error: {}", e),
        Err(e) => println!("   Unexpected error kind: {}", e),
    }
    match bs_price(100.0, 100.0, 1.0, 0.05, 0.0) {
        Ok(_) => println!("   Unexpected: zero volatility accepted"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }
}
