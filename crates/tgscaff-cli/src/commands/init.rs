//! `tgscaff init`: write the default configuration file.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Writes to `--config FILE` when given, otherwise the platform location.
pub fn execute(args: InitArgs, config_file: Option<PathBuf>, output: OutputManager) -> CliResult<()> {
    let config_path = AppConfig::active_path(config_file.as_ref());
    debug!(path = %config_path.display(), force = args.force, "Initialising configuration");

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let toml = render_default()?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("Failed to create config directory '{}'", parent.display()),
            source: e,
        })?;
    }

    fs::write(&config_path, &toml).map_err(|e| CliError::IoError {
        message: format!("Failed to write config to '{}'", config_path.display()),
        source: e,
    })?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display()
    ))?;
    Ok(())
}

fn render_default() -> CliResult<String> {
    toml::to_string_pretty(&AppConfig::default())
        .map_err(|e| CliError::config("Failed to serialise default config", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_document_lists_every_section() {
        let text = render_default().unwrap();
        assert!(text.contains("[defaults]"));
        assert!(text.contains("instance_class = \"asdasd\""));
        assert!(text.contains("[output]"));
    }
}
