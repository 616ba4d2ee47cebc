//! roboline show - Show a phase or resource

use clap::{Args, Subcommand};

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, robot_ok};
use crate::content::{ContentStore, Difficulty, Phase, Resource, estimated_time};
use crate::error::{RecordKind, Result, SiteError};

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(subcommand)]
    pub target: ShowTarget,
}

#[derive(Subcommand, Debug)]
pub enum ShowTarget {
    /// Show a phase by id
    Phase {
        id: String,
        /// Include code snippet sources
        #[arg(long)]
        code: bool,
    },
    /// Show a resource by id
    Resource { id: String },
}

pub fn run(ctx: &AppContext, args: &ShowArgs) -> Result<()> {
    match &args.target {
        ShowTarget::Phase { id, code } => {
            let phase = ctx.store.phase(id).ok_or_else(|| SiteError::NotFound {
                kind: RecordKind::Phase,
                id: id.clone(),
            })?;
            show_phase(ctx, phase, *code)
        }
        ShowTarget::Resource { id } => {
            let resource = ctx.store.resource(id).ok_or_else(|| SiteError::NotFound {
                kind: RecordKind::Resource,
                id: id.clone(),
            })?;
            show_resource(ctx, resource)
        }
    }
}

fn show_phase(ctx: &AppContext, phase: &Phase, code: bool) -> Result<()> {
    let position = ctx.store.phase_position(&phase.id).unwrap_or_default();
    match ctx.output_format {
        OutputFormat::Json | OutputFormat::Plain => emit_json(&robot_ok(phase)),
        OutputFormat::Human => {
            emit_human(&phase_layout(&ctx.store, phase, position, code));
            Ok(())
        }
    }
}

fn phase_layout(store: &ContentStore, phase: &Phase, position: usize, code: bool) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout
        .title(&format!("Phase {}: {}", position + 1, phase.title))
        .push_line(phase.summary.as_str())
        .blank()
        .kv("Id", &phase.id)
        .kv("Difficulty", Difficulty::for_position(position).label())
        .kv("Time", estimated_time(position))
        .kv("Published", &phase.created_at.format("%Y-%m-%d").to_string())
        .kv("Tags", &phase.tags.join(", "));
    if let Some(url) = &phase.video_url {
        layout.kv("Video", url);
    }
    if let Some(prev) = store.previous_phase(phase) {
        layout.kv("Previous", &prev.id);
    }
    match (&phase.next_phase, store.next_phase(phase)) {
        (_, Some(next)) => {
            layout.kv("Next", &next.id);
        }
        (Some(dangling), None) => {
            layout.kv("Next", &format!("{dangling} (missing)"));
        }
        (None, None) => {}
    }

    layout.blank().section("Problem").push_line(phase.problem.trim()).blank();
    layout.section("Approach").push_line(phase.approach.trim()).blank();
    for (heading, items) in [("Hardware", &phase.hardware), ("Software", &phase.software)] {
        if items.is_empty() {
            continue;
        }
        layout.section(heading);
        for item in items {
            layout.bullet(item);
        }
        layout.blank();
    }

    if !phase.code_snippets.is_empty() {
        layout.section("Code");
        for snippet in &phase.code_snippets {
            layout.bullet(&format!("{} ({}) [{}]", snippet.title, snippet.language, snippet.id));
            if code {
                layout.push_line(snippet.code.trim_end());
            }
        }
    }
    layout
}

fn show_resource(ctx: &AppContext, resource: &Resource) -> Result<()> {
    match ctx.output_format {
        OutputFormat::Json | OutputFormat::Plain => emit_json(&robot_ok(resource)),
        OutputFormat::Human => {
            let mut layout = HumanLayout::new();
            layout
                .title(&resource.title)
                .push_line(resource.description.as_str())
                .blank()
                .kv("Id", &resource.id)
                .kv("Type", resource.kind.label())
                .kv("Url", &resource.url)
                .kv("Tags", &resource.tags.join(", "));
            emit_human(&layout);
            Ok(())
        }
    }
}
