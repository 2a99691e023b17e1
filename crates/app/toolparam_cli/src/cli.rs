use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Show typed input parameters of MCP tools.
#[derive(Debug, Parser)]
#[command(name = "toolparam", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the version.
    Version,

    /// Convert a captured `tools/list` response and print each tool's parameters.
    List {
        /// JSON document to read; `-` or omitted reads stdin.
        input: Option<PathBuf>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Nesting levels expanded below the root properties
        /// (overrides `TOOLPARAM_MAX_DEPTH`).
        #[arg(long)]
        max_depth: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
