//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod build;
pub mod check;
pub mod config;
pub mod contact;
pub mod list;
pub mod search;
pub mod show;
pub mod tags;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the static site
    Build(build::BuildArgs),

    /// Fuzzy search phases and resources
    Search(search::SearchArgs),

    /// List tags with usage counts
    Tags(tags::TagsArgs),

    /// Show a phase or resource
    Show(show::ShowArgs),

    /// List phases or resources
    List(list::ListArgs),

    /// Validate content
    Check(check::CheckArgs),

    /// Submit the contact form
    Contact(contact::ContactArgs),

    /// Print the effective configuration
    Config(config::ConfigArgs),
}

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Build(args) => build::run(ctx, args),
        Commands::Search(args) => search::run(ctx, args),
        Commands::Tags(args) => tags::run(ctx, args),
        Commands::Show(args) => show::run(ctx, args),
        Commands::List(args) => list::run(ctx, args),
        Commands::Check(args) => check::run(ctx, args),
        Commands::Contact(args) => contact::run(ctx, args),
        Commands::Config(args) => config::run(ctx, args),
    }
}
