use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_DECAY_MS: u64 = 250;
const DEFAULT_SWIPE_THRESHOLD: f32 = 10.0;
const DEFAULT_FLING_THRESHOLD: f32 = 50.0;

/// Classifier tuning. Thresholds share the unit of the sample positions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GestureConfig {
    /// Idle time after which the swipe reference is replaced by the
    /// current position.
    pub decay_ms: u64,
    pub swipe_threshold: f32,
    pub fling_threshold: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            decay_ms: DEFAULT_DECAY_MS,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            fling_threshold: DEFAULT_FLING_THRESHOLD,
        }
    }
}

impl GestureConfig {
    pub const fn new(decay_ms: u64, swipe_threshold: f32, fling_threshold: f32) -> Self {
        Self {
            decay_ms,
            swipe_threshold,
            fling_threshold,
        }
    }
}

#[derive(Debug, Error)]
pub enum GestureConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid gesture config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidThreshold { field: &'static str, value: f32 },
}

pub fn parse_config_str(raw: &str) -> Result<GestureConfig, GestureConfigError> {
    let config: GestureConfig = toml::from_str(raw)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn parse_config_file(path: &Path) -> Result<GestureConfig, GestureConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| GestureConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config_str(&raw)
}

pub fn validate_config(config: &GestureConfig) -> Result<(), GestureConfigError> {
    for (field, value) in [
        ("swipe_threshold", config.swipe_threshold),
        ("fling_threshold", config.fling_threshold),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(GestureConfigError::InvalidThreshold { field, value });
        }
    }
    Ok(())
}
