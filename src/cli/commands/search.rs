//! roboline search - Fuzzy search phases and resources

use std::collections::HashSet;

use clap::{Args, ValueEnum};
use tracing::debug;

use crate::app::AppContext;
use crate::cli::formatters::{SearchResultRow, SearchResults};
use crate::cli::output::Formattable;
use crate::content::ResourceKind;
use crate::error::{RecordKind, Result};
use crate::search::ResultFilter;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query; omit to list everything
    pub query: Option<String>,

    /// Keep items carrying any of these tags (repeatable)
    #[arg(long = "tag", short = 't')]
    pub tags: Vec<String>,

    /// Only phases or only resources
    #[arg(long, value_enum)]
    pub kind: Option<KindFilter>,

    /// Only resources of this type
    #[arg(long = "type", value_enum)]
    pub resource_type: Option<ResourceKind>,

    /// Maximum number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindFilter {
    Phase,
    Resource,
}

impl KindFilter {
    const fn record_kind(self) -> RecordKind {
        match self {
            Self::Phase => RecordKind::Phase,
            Self::Resource => RecordKind::Resource,
        }
    }
}

pub fn run(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let mut controller = ctx.controller();
    if let Some(query) = &args.query {
        controller.set_query(query.as_str());
    }
    let mut unknown = Vec::new();
    for tag in requested_tags(&args.tags) {
        if !controller.catalog().contains(tag) {
            debug!(target: "search", tag = %tag, "tag not in catalog");
            unknown.push(format!("unknown tag: {tag}"));
        }
        controller.toggle_tag(tag);
    }

    let mut results = SearchResults::new(controller.query(), controller.selected_tags());
    for warning in unknown {
        results.warn(warning);
    }
    let filter = ResultFilter {
        kind: args.kind.map(KindFilter::record_kind),
        resource_type: args.resource_type,
    };
    let limit = args.limit.unwrap_or(usize::MAX);
    for result in filter.apply(controller.results()).take(limit) {
        results.push(SearchResultRow::from(result));
    }

    println!("{}", results.format(ctx.output_format));
    Ok(())
}

/// `--tag` values once each, first occurrence wins.
///
/// Toggling is its own inverse, so a repeated tag must not reach the
/// controller twice.
fn requested_tags(tags: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    tags.iter()
        .map(String::as_str)
        .filter(|tag| seen.insert(*tag))
        .collect()
}
