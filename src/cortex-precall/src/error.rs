//! Error types for the pre-call pipeline.

use std::path::PathBuf;

use thiserror::Error;

use crate::backend::{PluginError, WorkflowError};

/// Result type alias for pre-call operations.
pub type Result<T> = std::result::Result<T, PreCallError>;

/// Terminal errors of a pipeline run.
///
/// Backend failures are transparent so callers see, and can match on, the
/// backend's own error. Interrupted workflows and empty results never surface
/// here.
#[derive(Debug, Error)]
pub enum PreCallError {
    /// Workflow arguments are not a JSON object.
    #[error(transparent)]
    InvalidArguments(#[from] serde_json::Error),

    /// Plugin backend failure.
    #[error(transparent)]
    Plugin(#[from] PluginError),

    /// Workflow backend failure that is not an interruption.
    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    /// The enclosing cancellation token fired.
    #[error("Pre-call pipeline cancelled")]
    Cancelled,
}

impl PreCallError {
    /// Check if this error was caused by malformed caller input.
    pub fn is_input_defect(&self) -> bool {
        matches!(self, PreCallError::InvalidArguments(_))
    }

    /// Check if this error came from a backend.
    pub fn is_backend_failure(&self) -> bool {
        matches!(self, PreCallError::Plugin(_) | PreCallError::Workflow(_))
    }
}

/// Errors raised while loading [`crate::PreCallConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
