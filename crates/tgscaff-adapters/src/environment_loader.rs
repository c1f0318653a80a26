//! YAML manifest loader.
//!
//! Parses an environment manifest and converts it into a domain
//! [`EnvironmentSpec`] ready for the scaffold service.
//!
//! # Manifest format
//!
//! ```yaml
//! directory:
//!   basePath: infra
//!   parentPaths:
//!     - envs/prod
//!     - envs/dev
//!   appPaths:
//!     - api
//! terragrunt:
//!   main:
//!     remoteState:
//!       bucketType: s3
//!       bucketName: my-state-bucket
//!       bucketKey: terraform.tfstate
//!       region: us-east-1
//!       encryption: true
//!       dynamoDbTable: tf-locks
//!   app:                       # optional
//!     instanceClass: db.t3.micro
//! ```
//!
//! Missing keys fall back to empty values (`false` for `encryption`); they
//! are carried through to the generated files as-is. Unknown keys are ignored.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, instrument};

use tgscaff_core::{
    application::ApplicationError,
    domain::{AppInputs, BackendConfig, EnvironmentSpec},
    error::{ScaffError, ScaffResult},
};

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of the manifest file.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct EnvironmentManifest {
    pub directory: DirectorySection,
    pub terragrunt: TerragruntSection,
}

/// `directory` section: the layout to generate.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct DirectorySection {
    pub base_path: String,
    pub parent_paths: Vec<String>,
    pub app_paths: Vec<String>,
}

/// `terragrunt` section.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct TerragruntSection {
    pub main: MainSection,
    pub app: AppSection,
}

/// `terragrunt.main` section: root document parameters.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct MainSection {
    pub remote_state: RemoteStateSection,
}

/// `terragrunt.main.remoteState`.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct RemoteStateSection {
    pub bucket_type: String,
    pub bucket_name: String,
    pub bucket_key: String,
    pub region: String,
    pub encryption: bool,
    pub dynamo_db_table: String,
}

/// `terragrunt.app`: overrides for per-app inputs.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct AppSection {
    pub instance_class: Option<String>,
}

impl From<RemoteStateSection> for BackendConfig {
    fn from(s: RemoteStateSection) -> Self {
        Self {
            bucket_type: s.bucket_type,
            bucket_name: s.bucket_name,
            bucket_key: s.bucket_key,
            region: s.region,
            encryption: s.encryption,
            lock_table_name: s.dynamo_db_table,
        }
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Reads manifests into [`EnvironmentSpec`]s.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentLoader {
    app_defaults: AppInputs,
}

impl EnvironmentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inputs used when the manifest has no `terragrunt.app` overrides.
    pub fn with_app_defaults(mut self, defaults: AppInputs) -> Self {
        self.app_defaults = defaults;
        self
    }

    /// Read and decode the manifest at `path`.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn load(&self, path: &Path) -> ScaffResult<EnvironmentSpec> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ApplicationError::ConfigRead {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        self.parse(&content, path)
    }

    /// Decode manifest text. `origin` is only used in error messages.
    pub fn parse(&self, yaml: &str, origin: &Path) -> ScaffResult<EnvironmentSpec> {
        let manifest: EnvironmentManifest =
            serde_yaml::from_str(yaml).map_err(|e| ApplicationError::ConfigParse {
                path: origin.to_path_buf(),
                reason: e.to_string(),
            })?;

        debug!(
            base = %manifest.directory.base_path,
            parents = manifest.directory.parent_paths.len(),
            apps = manifest.directory.app_paths.len(),
            "Manifest parsed"
        );

        self.build_spec(manifest)
    }

    fn build_spec(&self, manifest: EnvironmentManifest) -> ScaffResult<EnvironmentSpec> {
        let EnvironmentManifest {
            directory,
            terragrunt,
        } = manifest;

        let app_inputs = match terragrunt.app.instance_class {
            Some(instance_class) => AppInputs::new(instance_class),
            None => self.app_defaults.clone(),
        };

        EnvironmentSpec::builder(directory.base_path)
            .parent_paths(directory.parent_paths)
            .apps(directory.app_paths)
            .backend(terragrunt.main.remote_state.into())
            .app_inputs(app_inputs)
            .build()
            .map_err(ScaffError::Domain)
    }
}
