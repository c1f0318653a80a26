//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `tgscaff-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::Document;
use crate::error::ScaffResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `tgscaff_adapters::filesystem::LocalFilesystem` (production)
/// - `tgscaff_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing ancestors. Succeeds if it already
    /// exists. Fails with `ApplicationError::DirectoryCreation`.
    fn create_dir_all(&self, path: &Path) -> ScaffResult<()>;

    /// Create or truncate `path` and write all of `content`.
    ///
    /// Fails with `ApplicationError::FileCreation` when the file cannot be
    /// opened and `ApplicationError::SerializationWrite` when the write is
    /// short. The handle is closed on every path.
    fn write_file(&self, path: &Path, content: &[u8]) -> ScaffResult<()>;
}

/// Port for document serialization.
///
/// Implemented by:
/// - `tgscaff_adapters::writer::HclWriter`
pub trait DocumentWriter: Send + Sync {
    /// Render a document tree to text. Raw expressions must come out unquoted.
    fn serialize(&self, document: &Document) -> ScaffResult<String>;
}
