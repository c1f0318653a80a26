//! Local filesystem adapter using std::fs.

use std::fs::{DirBuilder, File};
use std::io::Write;
use std::path::Path;

use tgscaff_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ScaffResult,
};

/// Mode bits for created directories before the process umask applies.
#[cfg(unix)]
const DIR_MODE: u32 = 0o777;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ScaffResult<()> {
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(DIR_MODE);
        }
        builder.create(path).map_err(|e| {
            ApplicationError::DirectoryCreation {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> ScaffResult<()> {
        let mut file = File::create(path).map_err(|e| ApplicationError::FileCreation {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        // `file` is dropped, and the handle closed, on both arms.
        file.write_all(content).map_err(|e| {
            ApplicationError::SerializationWrite {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}
