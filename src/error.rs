//! Error types for chaos-arena.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("radius {radius} not in [{min}..{max}]")]
    InvalidRadius { radius: u32, min: u32, max: u32 },

    #[error("heading {0} not in [0..2π]")]
    InvalidHeading(f64),

    #[error("speed {0} must be finite and non-negative")]
    InvalidSpeed(f64),

    #[error(
        "infeasible density: placed {placed} of {requested} bodies, gave up after {attempts} rejected candidates"
    )]
    InfeasibleDensity {
        requested: usize,
        placed: usize,
        attempts: u32,
    },

    #[error("body ids exhausted")]
    IdsExhausted,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
