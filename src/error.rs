//! Error types for querybind operations.

use thiserror::Error;

/// Result type alias using [`BindError`].
pub type Result<T> = std::result::Result<T, BindError>;

/// Error types for parameter binding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// Argument array does not line up with the declared parameters.
    #[error("Argument count mismatch: expected {expected}, got {actual}")]
    ArgumentCountMismatch { expected: usize, actual: usize },

    /// Query positions are 1-based.
    #[error("Invalid position: {0} (positions start at 1)")]
    InvalidPosition(usize),

    /// No binding registered at the given position.
    #[error("No parameter binding found for position {0}")]
    NoBindingForPosition(usize),

    /// No binding registered under the given name.
    #[error("No parameter binding found for name '{0}'")]
    NoBindingForName(String),

    /// Name-based lookup requested for a parameter that carries no name.
    #[error("Method parameter at index {0} has no name")]
    UnnamedParameter(usize),

    /// The provider query handle rejected an assignment.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Query definition is inconsistent.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}
