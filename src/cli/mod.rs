//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod formatters;
pub mod output;

pub use commands::Commands;
pub use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "roboline", version, about = "Build and search the RoboLine robotics curriculum")]
pub struct Cli {
    /// Machine-readable JSON output and JSON logs
    #[arg(long, global = true)]
    pub robot: bool,

    /// Output format (ignored with --robot)
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Explicit config file; skips global and project config
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding phases.toml and resources.toml
    #[arg(long, global = true)]
    pub content: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        if self.robot {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}
