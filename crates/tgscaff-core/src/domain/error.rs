// ============================================================================
// domain/error.rs - ENVIRONMENT VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so reports can carry them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid environment description: {0}")]
    InvalidEnvironment(String),

    #[error("Path for '{field}' must not be empty")]
    EmptyPath { field: &'static str },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Invalid app name '{name}': {reason}")]
    InvalidAppName { name: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidEnvironment(msg) => vec![
                "Check the `directory` section of your manifest".into(),
                format!("Details: {}", msg),
            ],
            Self::EmptyPath { field } => vec![
                format!("Set a value for `directory.{}`", field),
                "Paths are resolved relative to the generation root".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{}' would escape the base path", path),
                "Use a path relative to `directory.basePath`, e.g. envs/prod".into(),
            ],
            Self::InvalidAppName { name, .. } => vec![
                format!("'{}' must be a single directory name", name),
                "Examples: api, worker, frontend".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
