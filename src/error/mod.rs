//! Error handling module for ffshort

use thiserror::Error;

/// Main error type for ffshort operations
#[derive(Error, Debug)]
pub enum FfShortError {
    /// The prober failed or reported no usable duration
    #[error("Failed to probe media file {path}: {message}")]
    Probe { path: String, message: String },

    /// A user-supplied parameter failed validation
    #[error("{message}")]
    InvalidParameter { message: String },

    /// The external tool failed, could not be spawned or timed out
    #[error("Transformation failed: {message}")]
    Transformation { message: String },

    /// Encoder binary missing from PATH
    #[error("External tool not found: {tool}")]
    ToolNotFound { tool: String },

    /// Configuration file unreadable or invalid
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl FfShortError {
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    pub fn probe(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Probe {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn transformation(message: impl Into<String>) -> Self {
        Self::Transformation {
            message: message.into(),
        }
    }

    /// Validation failures are shown to the user as-is, without `--error`
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

/// Result type alias for ffshort operations
pub type FfShortResult<T> = std::result::Result<T, FfShortError>;
