//! ABC Radio Error Types
//!
//! Centralized error handling for the skill and its CLI.

use thiserror::Error;

/// Central error type for ABC Radio
#[derive(Error, Debug)]
pub enum RadioError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Station catalogue error: {0}")]
    Catalogue(String),

    #[error("Unknown station: {0}")]
    UnknownStation(String),

    #[error("Could not start {station}: {source}")]
    Playback {
        station: String,
        #[source]
        source: anyhow::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for ABC Radio operations
pub type RadioResult<T> = Result<T, RadioError>;
