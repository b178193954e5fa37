//! Command dispatch and handler modules.

mod export;
mod graph;
mod report;
mod table;

use std::path::Path;

use miette::Result;
use tracing::debug;

use slngraph_core::DependencyReport;
use slngraph_msbuild::SOLUTION_EXTENSION;
use slngraph_resolver::builder;
use slngraph_util::errors::SlnGraphError;
use slngraph_util::fs::find_files_with_extension;
use slngraph_util::progress::{spinner, status, status_warn};

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Report { root, out_dir } => report::exec(&root, out_dir.as_deref(), cli.verbose),
        Command::Graph { root, output } => graph::exec(&root, &output, cli.verbose),
        Command::Table { root, output } => table::exec(&root, &output, cli.verbose),
        Command::Export { root, output } => export::exec(&root, &output, cli.verbose),
    }
}

/// Shared front half of every command: discover solutions under `root` and
/// build the dependency report.
pub(crate) fn load_report(root: &Path, verbose: bool) -> Result<DependencyReport> {
    if !root.is_dir() {
        return Err(SlnGraphError::Discovery {
            message: format!("{} is not a directory", root.display()),
        }
        .into());
    }

    status("Scanning", &root.display().to_string());
    let solutions = find_files_with_extension(root, SOLUTION_EXTENSION);
    debug!(count = solutions.len(), "discovered solution files");
    if solutions.is_empty() {
        status_warn("Warning", "no solution files found");
    }

    let sp = spinner("Resolving cross-solution dependencies...");
    let report = builder::build_report(&solutions);
    sp.finish_and_clear();

    status(
        "Resolved",
        &format!(
            "{} cross-solution packages across {} solutions",
            report.dependencies.len(),
            report.solution_projects.len()
        ),
    );

    if verbose {
        for package in report.unresolved_packages() {
            status_warn("Unresolved", &format!("{package} matches no in-tree project"));
        }
    }

    Ok(report)
}
