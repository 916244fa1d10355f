//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand, ValueEnum};

/// Terminal-native AI color palette designer
#[derive(Parser)]
#[command(name = "tinge", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the interactive studio TUI
    Tui {
        /// Generator to use (e.g. canned). Uses TINGE_GENERATOR env if not set.
        #[arg(long)]
        generator: Option<String>,
        /// Override the generator's simulated latency, in milliseconds
        #[arg(long)]
        latency_ms: Option<u64>,
    },
    /// Generate themes for a prompt and print them
    Generate {
        /// Prompt describing the desired mood (default: TINGE_PROMPT or built-in)
        #[arg(short, long)]
        prompt: Option<String>,
        /// Generator to use. Uses TINGE_GENERATOR env if not set.
        #[arg(long)]
        generator: Option<String>,
        /// Override the generator's simulated latency, in milliseconds
        #[arg(long)]
        latency_ms: Option<u64>,
        /// Inject a generation failure with this message (for testing)
        #[arg(long)]
        fault: Option<String>,
    },
    /// Compute the readable text color for a hex color
    Contrast {
        /// Color in #rrggbb form
        color: String,
    },
    /// Print the default theme and the canned catalog
    Catalog,
}
