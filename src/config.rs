// src/config.rs
//! Loading [`SurfaceConfig`] from TOML with environment overrides
//!
//! Every key is optional and falls back to [`SurfaceConfig::default`]:
//!
//! ```toml
//! spot_min = 50.0
//! spot_max = 150.0
//! strike_min = 50.0
//! strike_max = 150.0
//! t = 1.0
//! r = 0.05
//! sigma = 0.2
//! resolution = 50
//! policy = "parallel"
//! ```

use crate::error::{SurfaceError, SurfaceResult};
use crate::surface::evaluator::SurfaceConfig;
use std::path::Path;

/// Load a configuration file
pub fn load(path: &Path) -> SurfaceResult<SurfaceConfig> {
    let content =
        std::fs::read_to_string(path).map_err(|e| SurfaceError::InvalidConfiguration {
            field: path.display().to_string(),
            reason: e.to_string(),
        })?;
    from_toml_str(&content)
}

/// Parse configuration from TOML text
pub fn from_toml_str(content: &str) -> SurfaceResult<SurfaceConfig> {
    toml::from_str(content).map_err(|e| SurfaceError::InvalidConfiguration {
        field: "toml".to_string(),
        reason: e.to_string(),
    })
}

impl SurfaceConfig {
    /// Apply `BSM_*` environment variable overrides; unparseable values are ignored
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let float = |key: &str| lookup(key).and_then(|v| v.trim().parse::<f64>().ok());

        if let Some(v) = float("BSM_SPOT_MIN") {
            self.spot_min = v;
        }
        if let Some(v) = float("BSM_SPOT_MAX") {
            self.spot_max = v;
        }
        if let Some(v) = float("BSM_STRIKE_MIN") {
            self.strike_min = v;
        }
        if let Some(v) = float("BSM_STRIKE_MAX") {
            self.strike_max = v;
        }
        if let Some(v) = float("BSM_MATURITY") {
            self.t = v;
        }
        if let Some(v) = float("BSM_RATE") {
            self.r = v;
        }
        if let Some(v) = float("BSM_VOLATILITY") {
            self.sigma = v;
        }
        if let Some(v) = lookup("BSM_RESOLUTION").and_then(|v| v.trim().parse::<usize>().ok()) {
            self.resolution = v;
        }

        self
    }
}
