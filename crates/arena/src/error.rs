//! Error types for the arena

use std::path::PathBuf;

use minimax_engine::ParseTierError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("Failed to read or write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid results file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid player spec '{spec}': {reason}")]
    InvalidSpec { spec: String, reason: String },

    #[error(transparent)]
    Tier(#[from] ParseTierError),
}

pub type ArenaResult<T> = Result<T, ArenaError>;
