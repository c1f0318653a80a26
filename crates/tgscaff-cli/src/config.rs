//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! core crate never sees it; only resolved values such as the default
//! [`AppInputs`] cross the boundary.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `TGSCAFF_DEFAULTS__INSTANCE_CLASS`, `TGSCAFF_OUTPUT__FORMAT`, ...
//! 3. Config file: `--config FILE`, else [`AppConfig::config_path`] if it exists
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use tgscaff_core::domain::{AppInputs, DEFAULT_INSTANCE_CLASS};

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "TGSCAFF";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Values applied when the manifest leaves them out.
    pub defaults: Defaults,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// `inputs.instance_class` for every generated `app.hcl`.
    pub instance_class: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            instance_class: DEFAULT_INSTANCE_CLASS.into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration by layering defaults, file and environment.
    ///
    /// An explicit `config_file` must exist when `must_exist` is set; the
    /// platform default location is always optional.
    pub fn load(config_file: Option<&PathBuf>, must_exist: bool) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), must_exist),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        Self::load_from(&path, required, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())?;

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(env.prefix_separator("_").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs`, falling back to `.tgscaff.toml` in
    /// the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "tgscaff", "tgscaff")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".tgscaff.toml"))
    }

    /// The file `init` writes and `config path` reports.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }

    /// Per-app inputs used when the manifest has no `terragrunt.app` section.
    pub fn app_defaults(&self) -> AppInputs {
        AppInputs::new(self.defaults.instance_class.clone())
    }
}
