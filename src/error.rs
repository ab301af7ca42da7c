//! Error types for InputGate
//!
//! Initialization lookup failures plus the handful of faults the demo host
//! can hit around terminal and configuration handling.

use thiserror::Error;

/// Main error type for InputGate operations
#[derive(Error, Debug)]
pub enum InputGateError {
    #[error("No element with id '{0}'")]
    ElementNotFound(String),

    #[error("Element '{id}' is not a {expected}")]
    ElementKindMismatch { id: String, expected: &'static str },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config error: {0}")]
    ConfigError(String),
}

/// Result type alias for InputGate operations
pub type Result<T> = std::result::Result<T, InputGateError>;

impl InputGateError {
    /// True for the lookup failures raised during watcher initialization
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            InputGateError::ElementNotFound(_) | InputGateError::ElementKindMismatch { .. }
        )
    }
}
