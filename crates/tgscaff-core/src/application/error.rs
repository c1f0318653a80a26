//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not environment
//! rules. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while loading a manifest or materializing a plan.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Manifest file could not be read.
    #[error("Failed to read manifest {path}: {reason}")]
    ConfigRead { path: PathBuf, reason: String },

    /// Manifest file is not valid YAML or has the wrong shape.
    #[error("Failed to parse manifest {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    /// Target directory (or one of its ancestors) could not be created.
    #[error("Failed to create directory {path}: {reason}")]
    DirectoryCreation { path: PathBuf, reason: String },

    /// Target file could not be created or truncated.
    #[error("Failed to create file {path}: {reason}")]
    FileCreation { path: PathBuf, reason: String },

    /// Document could not be serialized or its bytes not fully written.
    #[error("Failed to write document to {path}: {reason}")]
    SerializationWrite { path: PathBuf, reason: String },

    /// Serializer rejected the document tree.
    #[error("Document rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// In-memory adapter state is poisoned.
    #[error("Filesystem lock poisoned")]
    FilesystemLock,
}

impl ApplicationError {
    /// Path the error refers to, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::ConfigRead { path, .. }
            | Self::ConfigParse { path, .. }
            | Self::DirectoryCreation { path, .. }
            | Self::FileCreation { path, .. }
            | Self::SerializationWrite { path, .. } => Some(path),
            Self::RenderingFailed { .. } | Self::FilesystemLock => None,
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigRead { path, .. } => vec![
                format!("Could not read: {}", path.display()),
                "Check the path passed with -f/--file".into(),
            ],
            Self::ConfigParse { .. } => vec![
                "Check the manifest is valid YAML".into(),
                "Expected top-level keys: directory, terragrunt".into(),
            ],
            Self::DirectoryCreation { path, .. } | Self::FileCreation { path, .. } => vec![
                format!("Failed to write under: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before this error were left in place".into(),
            ],
            Self::SerializationWrite { .. } => vec![
                "Check available disk space".into(),
                "Files written before this error were left in place".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigRead { .. } => ErrorCategory::NotFound,
            Self::ConfigParse { .. } => ErrorCategory::Validation,
            Self::DirectoryCreation { .. }
            | Self::FileCreation { .. }
            | Self::SerializationWrite { .. }
            | Self::RenderingFailed { .. }
            | Self::FilesystemLock => ErrorCategory::Internal,
        }
    }
}
