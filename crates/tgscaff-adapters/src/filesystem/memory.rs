//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use tgscaff_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ScaffResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle after boxing one into a
/// service.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
    denied: Vec<PathBuf>,
    writes: usize,
}

impl MemoryFilesystemInner {
    fn is_denied(&self, path: &Path) -> bool {
        self.denied.iter().any(|d| path.starts_with(d))
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Make every create or write at or below `path` fail.
    pub fn deny(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.denied.push(path.into());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner
            .files
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Whether a file or directory has been recorded at `path`.
    pub fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    /// Number of successful `write_file` calls, overwrites included.
    pub fn write_count(&self) -> usize {
        self.inner.read().map(|inner| inner.writes).unwrap_or(0)
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ScaffResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::FilesystemLock)?;

        if inner.is_denied(path) {
            return Err(ApplicationError::DirectoryCreation {
                path: path.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into());
        }

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> ScaffResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::FilesystemLock)?;

        if inner.is_denied(path) {
            return Err(ApplicationError::FileCreation {
                path: path.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into());
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FileCreation {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_vec());
        inner.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("infra/terragrunt.hcl"), b"x").is_err());

        fs.create_dir_all(Path::new("infra")).unwrap();
        fs.write_file(Path::new("infra/terragrunt.hcl"), b"x").unwrap();
        assert_eq!(
            fs.read_file(Path::new("infra/terragrunt.hcl")).as_deref(),
            Some("x")
        );
    }

    #[test]
    fn create_dir_all_registers_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("infra/envs/prod")).unwrap();
        assert!(fs.exists(Path::new("infra")));
        assert!(fs.exists(Path::new("infra/envs")));
        assert!(fs.exists(Path::new("infra/envs/prod")));
    }

    #[test]
    fn overwrites_count_as_writes() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("envs")).unwrap();
        fs.write_file(Path::new("envs/account.hcl"), b"one").unwrap();
        fs.write_file(Path::new("envs/account.hcl"), b"two").unwrap();

        assert_eq!(fs.write_count(), 2);
        assert_eq!(fs.list_files().len(), 1);
        assert_eq!(
            fs.read_file(Path::new("envs/account.hcl")).as_deref(),
            Some("two")
        );
    }

    #[test]
    fn denied_prefix_fails_both_operations() {
        let fs = MemoryFilesystem::new();
        fs.deny("infra/envs/dev");

        assert!(fs.create_dir_all(Path::new("infra/envs/dev/api")).is_err());
        fs.create_dir_all(Path::new("infra/envs/prod")).unwrap();
        assert!(
            fs.write_file(Path::new("infra/envs/dev/account.hcl"), b"x")
                .is_err()
        );
    }
}
