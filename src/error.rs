//! Error types
//!
//! The per-frame simulation never fails; only loading and validating
//! tuning data can.

use std::path::PathBuf;

/// Errors raised while loading or validating [`crate::Tuning`]
#[derive(thiserror::Error, Debug)]
pub enum TuningError {
    /// Tuning file could not be read
    #[error("failed to read tuning file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Tuning JSON is malformed
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),

    /// A tuning value is outside its valid range
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl TuningError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
