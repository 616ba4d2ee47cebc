//! roboline - RoboLine curriculum CLI
//!
//! Render the robotics curriculum site and search its phases and resources.

use std::process::ExitCode;

use clap::Parser;
use console::style;
use serde::Serialize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use roboline::app::AppContext;
use roboline::cli::Cli;
use roboline::{Result, SiteError};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(code = err.code(), "command failed");
            report(&err, cli.robot);
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    roboline::cli::commands::run(&ctx, &cli.command)
}

/// Failure payload printed on stdout in robot mode.
#[derive(Serialize)]
struct RobotFailure {
    error: bool,
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<&'static str>,
}

fn report(err: &SiteError, robot: bool) {
    if robot {
        let failure = RobotFailure {
            error: true,
            code: err.code(),
            message: err.to_string(),
            hint: err.hint(),
        };
        match serde_json::to_string(&failure) {
            Ok(json) => println!("{json}"),
            Err(_) => eprintln!("{err}"),
        }
        return;
    }

    eprintln!("{} {err}", style("error:").red().bold());
    if let Some(hint) = err.hint() {
        eprintln!("  {} {hint}", style("hint:").dim());
    }
}

/// Subsystem targets used by the library's log macros.
const LOG_TARGETS: [&str; 4] = ["content", "search", "render", "contact"];

fn default_filter(verbose: u8) -> String {
    let (base, ours) = match verbose {
        0 => ("warn", "info"),
        1 => ("info", "debug"),
        2 => ("debug", "trace"),
        _ => return "trace".to_string(),
    };
    let mut directives = vec![base.to_string(), format!("roboline={ours}")];
    directives.extend(LOG_TARGETS.iter().map(|target| format!("{target}={ours}")));
    directives.join(",")
}

/// Logs always go to stderr so stdout stays parseable.
fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(cli.verbose)));
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(cli.verbose > 0);
    let registry = tracing_subscriber::registry().with(filter);
    if cli.robot {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer).init();
    }
}
