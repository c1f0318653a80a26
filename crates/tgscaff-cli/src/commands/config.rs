//! `tgscaff config`: inspect the effective configuration.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<PathBuf>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            if output.is_json() {
                output.json(&BTreeMap::from([(key, value)]))?;
            } else {
                output.print(&value)?;
            }
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                let serialised = toml::to_string_pretty(&config)
                    .map_err(|e| CliError::config("Failed to serialise config", e))?;
                output.print(serialised.trim_end())?;
            }
        }

        ConfigCommands::Path => {
            let path = AppConfig::active_path(config_file.as_ref());
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.instance_class" => Ok(config.defaults.instance_class.clone()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::InvalidInput {
            message: format!(
                "unknown config key '{key}' (expected defaults.instance_class, \
                 output.no_color or output.format)"
            ),
            source: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "defaults.instance_class").unwrap(),
            "asdasd"
        );
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
        assert_eq!(get_config_value(&cfg, "output.format").unwrap(), "auto");
    }

    #[test]
    fn get_unknown_key_is_user_error() {
        let err = get_config_value(&AppConfig::default(), "does.not.exist").unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
