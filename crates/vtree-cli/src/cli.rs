//! CLI argument definitions for vtree.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "vtree",
    version,
    about = "Render a project's resolved dependency tree",
    long_about = "vtree resolves a project's dependencies and writes the resulting \
                  dependency tree to a text file (target/tree.txt by default)."
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
    /// Resolve dependencies and write the dependency tree
    Tree {
        /// File to write the tree to (default: target/tree.txt)
        #[arg(short, long, env = "VTREE_OUTPUT_FILE")]
        output_file: Option<PathBuf>,
        /// Print the tree to standard output instead of a file
        #[arg(long, conflicts_with = "output_file")]
        stdout: bool,
        /// Output format: text, json
        #[arg(short, long)]
        format: Option<String>,
        /// Maximum depth
        #[arg(long)]
        depth: Option<u32>,
    },
}

/// Parse command-line arguments.
pub fn parse() -> Cli {
    Cli::parse()
}
