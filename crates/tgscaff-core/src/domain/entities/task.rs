use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::entities::environment::{AppInputs, BackendConfig};

/// Root document carrying the remote state configuration.
pub const ROOT_FILE_NAME: &str = "terragrunt.hcl";
/// Per-environment locals placeholder.
pub const LOCALS_FILE_NAME: &str = "account.hcl";
/// Per-app document that includes the root.
pub const APP_FILE_NAME: &str = "app.hcl";

/// Which directory an environment-locals file sits in relative to its
/// parent path. Both levels currently produce the same body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalsLevel {
    /// The parent path itself.
    Environment,
    /// The parent path's containing directory.
    Parent,
}

/// Document shape plus the parameters it is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentShape {
    RootBackend(BackendConfig),
    EnvironmentLocals(LocalsLevel),
    AppInclude(AppInputs),
}

impl DocumentShape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::RootBackend(_) => ShapeKind::RootBackend,
            Self::EnvironmentLocals(_) => ShapeKind::EnvironmentLocals,
            Self::AppInclude(_) => ShapeKind::AppInclude,
        }
    }

    /// File name every task of this shape writes to.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::RootBackend(_) => ROOT_FILE_NAME,
            Self::EnvironmentLocals(_) => LOCALS_FILE_NAME,
            Self::AppInclude(_) => APP_FILE_NAME,
        }
    }
}

/// Parameter-free discriminant of [`DocumentShape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    RootBackend,
    EnvironmentLocals,
    AppInclude,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootBackend => write!(f, "root-backend"),
            Self::EnvironmentLocals => write!(f, "environment-locals"),
            Self::AppInclude => write!(f, "app-include"),
        }
    }
}

/// One file to generate.
///
/// `target_dir` is relative to the plan root; an empty path is the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldTask {
    pub target_dir: PathBuf,
    pub file_name: &'static str,
    pub shape: DocumentShape,
}

impl ScaffoldTask {
    pub fn new(target_dir: impl Into<PathBuf>, shape: DocumentShape) -> Self {
        Self {
            target_dir: target_dir.into(),
            file_name: shape.file_name(),
            shape,
        }
    }

    /// File path relative to the plan root.
    pub fn target_path(&self) -> PathBuf {
        self.target_dir.join(self.file_name)
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }
}

/// Ordered list of tasks plus the root they are relative to.
///
/// This is the output of planning. It contains no business logic, only data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    pub(crate) root: PathBuf,
    pub(crate) tasks: Vec<ScaffoldTask>,
}

impl ScaffoldPlan {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            tasks: Vec::new(),
        }
    }

    pub fn push(&mut self, task: ScaffoldTask) {
        self.tasks.push(task);
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn tasks(&self) -> &[ScaffoldTask] {
        &self.tasks
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScaffoldTask> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of tasks of the given shape.
    pub fn count(&self, kind: ShapeKind) -> usize {
        self.tasks.iter().filter(|t| t.kind() == kind).count()
    }

    /// Unique file paths the plan writes to. Overlapping locals targets
    /// collapse into one entry.
    pub fn distinct_targets(&self) -> BTreeSet<PathBuf> {
        self.tasks.iter().map(ScaffoldTask::target_path).collect()
    }
}

impl<'a> IntoIterator for &'a ScaffoldPlan {
    type Item = &'a ScaffoldTask;
    type IntoIter = std::slice::Iter<'a, ScaffoldTask>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
