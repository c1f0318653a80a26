//! `tgscaff generate`: manifest in, Terragrunt tree out.
//!
//! Translates arguments into adapter wiring and a core call, then reports.
//! No generation logic lives here.

use std::path::Path;

use tracing::{info, instrument};

use tgscaff_adapters::{EnvironmentLoader, HclWriter, LocalFilesystem};
use tgscaff_core::application::{ScaffoldReport, ScaffoldService};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// 1. Decode the manifest, applying configured input defaults
/// 2. Scaffold under `--root`
/// 3. Print a summary or the JSON report
#[instrument(skip_all, fields(manifest = %args.file.display(), root = %args.root.display()))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if args.root.as_os_str().is_empty() {
        return Err(CliError::InvalidInput {
            message: "--root must not be empty".into(),
            source: None,
        });
    }

    let loader = EnvironmentLoader::new().with_app_defaults(config.app_defaults());
    let spec = loader.load(&args.file).map_err(CliError::manifest)?;

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()), Box::new(HclWriter::new()));

    if !output.is_json() {
        output.header(&format!(
            "Generating '{}' from {}",
            spec.base_path().display(),
            args.file.display()
        ))?;
    }

    let report = service.scaffold(&spec, &args.root)?;
    info!(
        writes = report.write_count(),
        files = report.distinct_files().len(),
        "Generation finished"
    );

    if output.is_json() {
        output.json(&report)?;
    } else {
        print_summary(&report, &output)?;
    }

    Ok(())
}

fn print_summary(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    for file in &report.written {
        output.print(&format!(
            "  {:<20} {}",
            file.kind.to_string(),
            relative(&file.path, &report.root).display()
        ))?;
    }
    output.print("")?;
    output.success(&format!(
        "{} files written ({} writes) under {}",
        report.distinct_files().len(),
        report.write_count(),
        report.root.display()
    ))?;
    Ok(())
}

fn relative<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn relative_strips_root() {
        let root = PathBuf::from("./infra");
        assert_eq!(
            relative(Path::new("./infra/envs/account.hcl"), &root),
            Path::new("envs/account.hcl")
        );
    }

    #[test]
    fn relative_keeps_foreign_paths() {
        assert_eq!(
            relative(Path::new("/elsewhere/a.hcl"), Path::new("/infra")),
            Path::new("/elsewhere/a.hcl")
        );
    }
}
