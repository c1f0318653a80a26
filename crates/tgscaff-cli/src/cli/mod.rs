//! CLI argument definitions using the clap derive API.
//!
//! Argument names, aliases and help text live here. No business logic.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name     = "tgscaff",
    bin_name = "tgscaff",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Terragrunt directory layouts from one environment manifest",
    long_about = "tgscaff reads a YAML environment manifest and writes the \
                  Terragrunt root, locals and per-app files it describes.",
    after_help = "EXAMPLES:\n\
        \x20 tgscaff generate -f environment.yaml\n\
        \x20 tgscaff gen -f envs.yaml --root ./live\n\
        \x20 tgscaff --output-format json generate -f environment.yaml\n\
        \x20 tgscaff completions bash > /usr/share/bash-completion/completions/tgscaff",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the Terragrunt tree described by a manifest.
    #[command(
        visible_alias = "gen",
        about = "Generate Terragrunt files from a manifest",
        after_help = "EXAMPLES:\n\
            \x20 tgscaff generate -f environment.yaml\n\
            \x20 tgscaff generate -f environment.yaml --root /srv/infra"
    )]
    Generate(GenerateArgs),

    /// Write a default tgscaff configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 tgscaff init\n\
            \x20 tgscaff init --force\n\
            \x20 tgscaff --config ./tgscaff.toml init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 tgscaff completions bash > ~/.local/share/bash-completion/completions/tgscaff\n\
            \x20 tgscaff completions zsh  > ~/.zfunc/_tgscaff\n\
            \x20 tgscaff completions fish > ~/.config/fish/completions/tgscaff.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 tgscaff config get defaults.instance_class\n\
            \x20 tgscaff config list\n\
            \x20 tgscaff config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Environment manifest (YAML).
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        help = "Path to the environment manifest"
    )]
    pub file: PathBuf,

    /// Directory `basePath` is resolved against.
    #[arg(
        long = "root",
        value_name = "DIR",
        default_value = ".",
        help = "Directory the manifest's basePath is relative to"
    )]
    pub root: PathBuf,
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.instance_class`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path of the configuration file in use.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
