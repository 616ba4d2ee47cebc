//! roboline list - List phases or resources

use clap::{Args, ValueEnum};
use serde::Serialize;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::output::{
    HumanLayout, OutputFormat, emit_human, emit_json, escape_tsv, robot_ok,
};
use crate::content::{Difficulty, Phase, Resource};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Which collection to list
    #[arg(value_enum)]
    pub collection: Collection,

    /// Keep entries carrying any of these tags
    #[arg(long = "tag", short = 't')]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Collection {
    Phases,
    Resources,
}

#[derive(Debug, Serialize)]
struct PhaseEntry<'a> {
    position: usize,
    id: &'a str,
    title: &'a str,
    difficulty: Difficulty,
    tags: &'a [String],
}

#[derive(Debug, Serialize)]
struct ResourceEntry<'a> {
    id: &'a str,
    title: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    url: &'a str,
    tags: &'a [String],
}

pub fn run(ctx: &AppContext, args: &ListArgs) -> Result<()> {
    let wanted = |tags: &[String]| args.tags.is_empty() || args.tags.iter().any(|t| tags.contains(t));
    match args.collection {
        Collection::Phases => {
            let entries: Vec<_> = ctx
                .store
                .phases()
                .iter()
                .enumerate()
                .filter(|(_, phase)| wanted(&phase.tags))
                .map(|(index, phase)| phase_entry(index, phase))
                .collect();
            debug!(target: "content", count = entries.len(), "listing phases");
            display_phases(ctx.output_format, &entries)
        }
        Collection::Resources => {
            let entries: Vec<_> = ctx
                .store
                .resources()
                .iter()
                .filter(|resource| wanted(&resource.tags))
                .map(resource_entry)
                .collect();
            debug!(target: "content", count = entries.len(), "listing resources");
            display_resources(ctx.output_format, &entries)
        }
    }
}

fn phase_entry(index: usize, phase: &Phase) -> PhaseEntry<'_> {
    PhaseEntry {
        position: index + 1,
        id: &phase.id,
        title: &phase.title,
        difficulty: Difficulty::for_position(index),
        tags: &phase.tags,
    }
}

fn resource_entry(resource: &Resource) -> ResourceEntry<'_> {
    ResourceEntry {
        id: &resource.id,
        title: &resource.title,
        kind: resource.kind.as_str(),
        url: &resource.url,
        tags: &resource.tags,
    }
}

fn display_phases(format: OutputFormat, entries: &[PhaseEntry<'_>]) -> Result<()> {
    match format {
        OutputFormat::Json => emit_json(&robot_ok(entries)),
        OutputFormat::Plain => {
            for entry in entries {
                println!("{}\t{}\t{}", entry.position, entry.id, escape_tsv(entry.title));
            }
            Ok(())
        }
        OutputFormat::Human => {
            let mut layout = HumanLayout::new();
            layout.title(&format!("{} phases", entries.len()));
            for entry in entries {
                layout.bullet(&format!(
                    "{}. {} [{}] ({})",
                    entry.position,
                    entry.title,
                    entry.id,
                    entry.difficulty.label()
                ));
            }
            emit_human(&layout);
            Ok(())
        }
    }
}

fn display_resources(format: OutputFormat, entries: &[ResourceEntry<'_>]) -> Result<()> {
    match format {
        OutputFormat::Json => emit_json(&robot_ok(entries)),
        OutputFormat::Plain => {
            for entry in entries {
                println!("{}\t{}\t{}", entry.kind, entry.id, escape_tsv(entry.title));
            }
            Ok(())
        }
        OutputFormat::Human => {
            let mut layout = HumanLayout::new();
            layout.title(&format!("{} resources", entries.len()));
            for entry in entries {
                layout.bullet(&format!("{} [{}] {}", entry.title, entry.kind, entry.url));
            }
            emit_human(&layout);
            Ok(())
        }
    }
}
