use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::domain::error::DomainError;

/// Placeholder written into every app's `inputs.instance_class` when neither
/// the manifest nor the application config provide one.
pub const DEFAULT_INSTANCE_CLASS: &str = "asdasd";

/// Remote state backend parameters.
///
/// Values are carried verbatim into the root document. Nothing here is
/// checked against a real provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BackendConfig {
    pub bucket_type: String,
    pub bucket_name: String,
    pub bucket_key: String,
    pub region: String,
    pub encryption: bool,
    pub lock_table_name: String,
}

/// Inputs rendered into each per-app document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppInputs {
    pub instance_class: String,
}

impl AppInputs {
    pub fn new(instance_class: impl Into<String>) -> Self {
        Self {
            instance_class: instance_class.into(),
        }
    }
}

impl Default for AppInputs {
    fn default() -> Self {
        Self::new(DEFAULT_INSTANCE_CLASS)
    }
}

/// Declarative description of a Terragrunt directory layout.
///
/// Immutable once built. All paths are relative; `base_path` is resolved by
/// the caller against an explicit working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentSpec {
    base_path: PathBuf,
    parent_paths: Vec<PathBuf>,
    app_paths: Vec<String>,
    backend: BackendConfig,
    app_inputs: AppInputs,
}

impl EnvironmentSpec {
    /// Start building a spec rooted at `base_path`.
    pub fn builder(base_path: impl Into<PathBuf>) -> EnvironmentSpecBuilder {
        EnvironmentSpecBuilder {
            base_path: base_path.into(),
            parent_paths: Vec::new(),
            app_paths: Vec::new(),
            backend: BackendConfig::default(),
            app_inputs: AppInputs::default(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn parent_paths(&self) -> &[PathBuf] {
        &self.parent_paths
    }

    pub fn app_paths(&self) -> &[String] {
        &self.app_paths
    }

    pub fn backend(&self) -> &BackendConfig {
        &self.backend
    }

    pub fn app_inputs(&self) -> &AppInputs {
        &self.app_inputs
    }

    /// Check the path invariants. Backend values are not inspected.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.base_path.as_os_str().is_empty() {
            return Err(DomainError::EmptyPath { field: "basePath" });
        }

        for parent in &self.parent_paths {
            if parent.as_os_str().is_empty() {
                return Err(DomainError::EmptyPath {
                    field: "parentPaths",
                });
            }
            if parent.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: parent.display().to_string(),
                });
            }
        }

        for app in &self.app_paths {
            validate_app_name(app)?;
        }

        Ok(())
    }
}

fn validate_app_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::EmptyPath { field: "appPaths" });
    }

    let path = Path::new(name);
    if path.is_absolute() {
        return Err(DomainError::AbsolutePathNotAllowed { path: name.into() });
    }

    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(DomainError::InvalidAppName {
            name: name.into(),
            reason: "must be a single path segment".into(),
        }),
    }
}

/// Fluent builder for [`EnvironmentSpec`]. `build` validates.
#[derive(Debug, Clone)]
pub struct EnvironmentSpecBuilder {
    base_path: PathBuf,
    parent_paths: Vec<PathBuf>,
    app_paths: Vec<String>,
    backend: BackendConfig,
    app_inputs: AppInputs,
}

impl EnvironmentSpecBuilder {
    pub fn parent_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.parent_paths.push(path.into());
        self
    }

    pub fn parent_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.parent_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn app(mut self, name: impl Into<String>) -> Self {
        self.app_paths.push(name.into());
        self
    }

    pub fn apps<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.app_paths.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn backend(mut self, backend: BackendConfig) -> Self {
        self.backend = backend;
        self
    }

    pub fn app_inputs(mut self, inputs: AppInputs) -> Self {
        self.app_inputs = inputs;
        self
    }

    pub fn build(self) -> Result<EnvironmentSpec, DomainError> {
        let spec = EnvironmentSpec {
            base_path: self.base_path,
            parent_paths: self.parent_paths,
            app_paths: self.app_paths,
            backend: self.backend,
            app_inputs: self.app_inputs,
        };
        spec.validate()?;
        Ok(spec)
    }
}
