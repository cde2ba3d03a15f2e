//! Configuration errors
//!
//! The simulation itself never fails; only start-up configuration can be
//! rejected.

use thiserror::Error;

/// Reasons a [`SimConfig`](crate::SimConfig) is rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{name} must be finite and positive, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },

    #[error("friction must be within [0, 1], got {0}")]
    InvalidFriction(f32),

    #[error("impact divisor must be finite and non-zero, got {0}")]
    InvalidDivisor(f32),

    #[error("launch magnitude must be finite, got {0}")]
    InvalidLaunch(f32),

    #[error("cue origin must be finite")]
    InvalidOrigin,

    #[error("too many balls: {requested} (limit {limit})")]
    TooManyBalls { requested: usize, limit: usize },
}
