// scripts/surface.rs
//! Command-line shell around the surface evaluator
//!
//! - `bsm-surface evaluate` prices one surface and prints its summary
//! - `bsm-surface benchmark` times sequential against parallel evaluation

use bsm_surface::config;
use bsm_surface::math_utils::Timer;
use bsm_surface::output::{write_summary_to_csv, write_surface_to_csv};
use bsm_surface::surface::evaluator::{evaluate_surface, EvaluationPolicy, SurfaceConfig};
use bsm_surface::PriceSurface;
use clap::{Args, Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Black-Scholes-Merton call and put surfaces over a spot/strike grid
#[derive(Parser)]
#[command(name = "bsm-surface")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML configuration file, applied before BSM_* variables and flags
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price one surface and print its summary
    Evaluate {
        #[command(flatten)]
        params: ParamArgs,

        /// Price cells on the calling thread only
        #[arg(long)]
        sequential: bool,

        /// Write the surface as strike,spot,call,put rows
        #[arg(short, long)]
        output: Option<String>,

        /// Write a key,value summary of the run
        #[arg(short, long)]
        summary: Option<String>,
    },

    /// Compare sequential and parallel evaluation times
    Benchmark {
        #[command(flatten)]
        params: ParamArgs,

        /// Timed repetitions per policy
        #[arg(long, default_value = "5")]
        runs: usize,
    },
}

/// Model inputs; rate and volatility are entered in percent
#[derive(Args)]
struct ParamArgs {
    #[arg(long)]
    spot_min: Option<f64>,
    #[arg(long)]
    spot_max: Option<f64>,
    #[arg(long)]
    strike_min: Option<f64>,
    #[arg(long)]
    strike_max: Option<f64>,
    /// Time to maturity in years
    #[arg(long)]
    maturity: Option<f64>,
    /// Risk-free rate in percent
    #[arg(long, allow_hyphen_values = true)]
    rate_pct: Option<f64>,
    /// Volatility in percent
    #[arg(long)]
    vol_pct: Option<f64>,
    /// Samples per axis
    #[arg(long)]
    resolution: Option<usize>,
}

impl ParamArgs {
    fn apply(&self, mut cfg: SurfaceConfig) -> SurfaceConfig {
        if let Some(v) = self.spot_min {
            cfg.spot_min = v;
        }
        if let Some(v) = self.spot_max {
            cfg.spot_max = v;
        }
        if let Some(v) = self.strike_min {
            cfg.strike_min = v;
        }
        if let Some(v) = self.strike_max {
            cfg.strike_max = v;
        }
        if let Some(v) = self.maturity {
            cfg.t = v;
        }
        if let Some(v) = self.rate_pct {
            cfg.r = v / 100.0;
        }
        if let Some(v) = self.vol_pct {
            cfg.sigma = v / 100.0;
        }
        if let Some(v) = self.resolution {
            cfg.resolution = v;
        }
        cfg
    }
}

fn base_config(path: Option<&PathBuf>) -> Result<SurfaceConfig, Box<dyn Error>> {
    let cfg = match path {
        Some(p) => {
            info!("Loading configuration from {}", p.display());
            config::load(p)?
        }
        None => SurfaceConfig::default(),
    };
    Ok(cfg.with_env_override())
}

fn print_summary(cfg: &SurfaceConfig, surface: &PriceSurface) {
    let summary = surface.summary();
    let (rows, cols) = surface.shape();

    println!("\n{:=<60}", "");
    println!("BLACK-SCHOLES-MERTON PRICE SURFACE");
    println!("{:=<60}", "");
    println!(
        "  Spot   [{}, {}]  Strike [{}, {}]  grid {}x{}",
        cfg.spot_min, cfg.spot_max, cfg.strike_min, cfg.strike_max, rows, cols
    );
    println!(
        "  T = {}  r = {:.2}%  σ = {:.2}%",
        cfg.t,
        cfg.r * 100.0,
        cfg.sigma * 100.0
    );
    println!("{:-<60}", "");
    println!("{:<20} {:>18} {:>18}", "", "Call", "Put");
    println!(
        "{:<20} {:>18.6} {:>18.6}",
        "Min", summary.call_min, summary.put_min
    );
    println!(
        "{:<20} {:>18.6} {:>18.6}",
        "Max", summary.call_max, summary.put_max
    );
    println!(
        "{:<20} {:>18.6} {:>18.6}",
        format!("ATM ({:.1}, {:.1})", summary.atm_node.0, summary.atm_node.1),
        summary.atm_call,
        summary.atm_put
    );
    println!("{:=<60}", "");
}

fn run_evaluate(
    cfg: SurfaceConfig,
    output: Option<&str>,
    summary_path: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let timer = Timer::new();
    let surface = evaluate_surface(&cfg)?;
    let elapsed = timer.elapsed_ms();
    info!(
        "Evaluated {} cells in {:.2} ms ({:?})",
        cfg.resolution * cfg.resolution,
        elapsed,
        cfg.policy
    );

    print_summary(&cfg, &surface);

    if let Some(path) = output {
        write_surface_to_csv(path, &surface)?;
        info!("Surface written to {}", path);
    }

    if let Some(path) = summary_path {
        let summary = surface.summary();
        let generated = chrono::Utc::now()
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string();
        let rows = [
            ("generated_at", generated),
            ("spot_min", cfg.spot_min.to_string()),
            ("spot_max", cfg.spot_max.to_string()),
            ("strike_min", cfg.strike_min.to_string()),
            ("strike_max", cfg.strike_max.to_string()),
            ("maturity", cfg.t.to_string()),
            ("rate", cfg.r.to_string()),
            ("volatility", cfg.sigma.to_string()),
            ("resolution", cfg.resolution.to_string()),
            ("call_min", summary.call_min.to_string()),
            ("call_max", summary.call_max.to_string()),
            ("put_min", summary.put_min.to_string()),
            ("put_max", summary.put_max.to_string()),
            ("elapsed_ms", format!("{:.3}", elapsed)),
        ];
        let borrowed: Vec<(&str, &str)> = rows.iter().map(|(k, v)| (*k, v.as_str())).collect();
        write_summary_to_csv(path, &borrowed)?;
        info!("Summary written to {}", path);
    }

    Ok(())
}

fn time_policy(cfg: &SurfaceConfig, policy: EvaluationPolicy, runs: usize) -> Result<f64, Box<dyn Error>> {
    let cfg = SurfaceConfig {
        policy,
        ..cfg.clone()
    };
    // warm-up, also surfaces any validation error before timing
    evaluate_surface(&cfg)?;

    let mut timer = Timer::new();
    let mut total = 0.0;
    for run in 0..runs {
        timer.start();
        evaluate_surface(&cfg)?;
        let elapsed = timer.elapsed_ms();
        debug!(run, ?policy, elapsed_ms = elapsed, "benchmark run");
        total += elapsed;
    }
    Ok(total / runs as f64)
}

fn run_benchmark(cfg: SurfaceConfig, runs: usize) -> Result<(), Box<dyn Error>> {
    let runs = runs.max(1);
    let cells = cfg.resolution * cfg.resolution;

    println!("bsm-surface Grid Evaluation Benchmark");
    println!("=====================================\n");
    println!("  Date: {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
    println!("  CPU Cores: {}", num_cpus::get());
    println!("  Rayon Threads: {}", rayon::current_num_threads());
    println!("  Grid: {}x{} ({} cells), {} runs per policy\n", cfg.resolution, cfg.resolution, cells, runs);

    let sequential_ms = time_policy(&cfg, EvaluationPolicy::Sequential, runs)?;
    let parallel_ms = time_policy(&cfg, EvaluationPolicy::Parallel, runs)?;

    println!("{:<15} {:>12} {:>18}", "Policy", "Time (ms)", "Cells / sec");
    println!("{:-<47}", "");
    for (name, ms) in [("Sequential", sequential_ms), ("Parallel", parallel_ms)] {
        println!(
            "{:<15} {:>12.3} {:>18.0}",
            name,
            ms,
            cells as f64 / (ms / 1000.0)
        );
    }
    println!("{:-<47}", "");
    println!("Speedup: {:.2}x", sequential_ms / parallel_ms);

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let base = base_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Evaluate {
            params,
            sequential,
            output,
            summary,
        } => {
            let mut cfg = params.apply(base);
            if sequential {
                cfg.policy = EvaluationPolicy::Sequential;
            }
            run_evaluate(cfg, output.as_deref(), summary.as_deref())
        }
        Commands::Benchmark { params, runs } => run_benchmark(params.apply(base), runs),
    }
}
