//! CLI argument definitions for slngraph.
//!
//! Uses `clap` derive macros to define the full command surface. Each
//! command corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "slngraph",
    version,
    about = "Map cross-solution package dependencies in a .NET solution tree",
    long_about = "slngraph scans a directory tree for Visual Studio solutions, matches the \
                  packages each solution declares in Directory.Packages.props against projects \
                  built in other solutions, and renders the result as a graph and a table."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a solution tree and write every artifact
    Report {
        /// Root directory to search for solution files
        root: PathBuf,
        /// Directory to place output artifacts in (defaults to the current directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Render the dependency graph as an SVG file
    Graph {
        /// Root directory to search for solution files
        root: PathBuf,
        /// Output file
        #[arg(short, long, default_value = "project_dependencies.svg")]
        output: PathBuf,
    },

    /// Print the dependency table and write it to a file
    Table {
        /// Root directory to search for solution files
        root: PathBuf,
        /// Output file
        #[arg(short, long, default_value = "dependency_table.txt")]
        output: PathBuf,
    },

    /// Export the graph as a JSON node/link document
    Export {
        /// Root directory to search for solution files
        root: PathBuf,
        /// Output file
        #[arg(short, long, default_value = "graph_data.json")]
        output: PathBuf,
    },
}

/// Parse command-line arguments.
pub fn parse() -> Cli {
    Cli::parse()
}
