//! Error types for the simulator.

use mms_nav::NavError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed maze text; `line` is 1-based.
    #[error("maze text line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("config error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Nav(#[from] NavError),
}

impl SimError {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        SimError::Parse {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
