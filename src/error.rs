//! Error handling for the entity viewer.
//!
//! Fetch failures are never fatal to a viewing session: the session narrows
//! the affected slice to an empty/placeholder state and records a notice.
//! These types carry enough context for that notice to be useful.

use thiserror::Error;

/// Main error type for upstream fetches and local stores
#[derive(Error, Debug)]
pub enum NexusError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned HTTP {status} for {resource}")]
    Status { resource: String, status: u16 },

    #[error("malformed {resource} payload: {source}")]
    Decode {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {message}")]
    Config { message: String },
}

impl NexusError {
    /// Short label for the error class, used in session notices.
    pub fn kind(&self) -> &'static str {
        match self {
            NexusError::Transport(_) => "transport",
            NexusError::Status { .. } => "status",
            NexusError::Decode { .. } => "decode",
            NexusError::Io(_) => "io",
            NexusError::Serialization(_) => "serialization",
            NexusError::Config { .. } => "config",
        }
    }
}

pub type Result<T> = std::result::Result<T, NexusError>;
