/// Configuration management
use crate::error::{CfError, Result};
use serde::Deserialize;

/// Environment variable prefix for predictor settings
pub const ENV_PREFIX: &str = "CF_";

/// Thresholds below which a quantity is treated as numerically zero
pub const DEFAULT_EPSILON: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PredictorConfig {
    /// Pearson denominator at or below this yields a similarity of 0.0
    #[serde(default = "default_epsilon")]
    pub similarity_epsilon: f64,
    /// Total absolute similarity at or below this yields a prediction of 0.0
    #[serde(default = "default_epsilon")]
    pub weight_epsilon: f64,
}

fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            similarity_epsilon: DEFAULT_EPSILON,
            weight_epsilon: DEFAULT_EPSILON,
        }
    }
}

impl PredictorConfig {
    /// Load from `CF_SIMILARITY_EPSILON` / `CF_WEIGHT_EPSILON`, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config: Self = envy::prefixed(ENV_PREFIX).from_env()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_epsilon("similarity_epsilon", self.similarity_epsilon)?;
        check_epsilon("weight_epsilon", self.weight_epsilon)
    }
}

fn check_epsilon(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CfError::Configuration(format!(
            "{name} must be a finite, non-negative number (got {value})"
        )));
    }
    Ok(())
}
