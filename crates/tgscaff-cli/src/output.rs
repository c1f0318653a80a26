//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Writes command results to stdout in the resolved format.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build from parsed flags and loaded config. An explicit
    /// `--output-format` wins over `output.format`; `auto` becomes `human` on a
    /// terminal and `plain` otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => OutputFormat::from_config(&config.output.format),
            explicit => explicit,
        };
        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// `✓ <msg>`
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// `⚠ <msg>`
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}")
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty-printed JSON. Written even in quiet mode since it is the
    /// command's result, not progress output.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(format: OutputFormat, no_color: bool) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color,
            config: None,
            output_format: format,
        }
    }

    #[test]
    fn explicit_flag_beats_config() {
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        let out = OutputManager::new(&args(OutputFormat::Plain, false), &config);
        assert_eq!(out.resolved_format, OutputFormat::Plain);
    }

    #[test]
    fn config_format_applies_when_flag_is_auto() {
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        let out = OutputManager::new(&args(OutputFormat::Auto, false), &config);
        assert!(out.is_json());
    }

    #[test]
    fn color_only_for_human_output() {
        let config = AppConfig::default();
        assert!(!OutputManager::new(&args(OutputFormat::Human, false), &config).no_color);
        assert!(OutputManager::new(&args(OutputFormat::Human, true), &config).no_color);
        assert!(OutputManager::new(&args(OutputFormat::Plain, false), &config).no_color);
    }

    #[test]
    fn config_no_color_is_honoured() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        let out = OutputManager::new(&args(OutputFormat::Human, false), &config);
        assert!(out.no_color);
    }

    #[test]
    fn print_and_json_succeed_without_a_tty() {
        let out = OutputManager::new(&args(OutputFormat::Plain, true), &AppConfig::default());
        assert!(out.print("hello").is_ok());
        assert!(out.json(&["a", "b"]).is_ok());
    }
}
