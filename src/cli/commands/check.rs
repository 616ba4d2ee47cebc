//! roboline check - Validate content

use clap::Args;
use serde::Serialize;
use tracing::warn;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, robot_ok};
use crate::content::ContentStore;
use crate::error::{Result, SiteError};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Fail when a phase links to a missing next phase
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Default, Serialize)]
pub struct CheckReport {
    pub source: String,
    pub phases: usize,
    pub resources: usize,
    pub tags: usize,
    pub dangling_links: Vec<String>,
    pub warnings: Vec<String>,
}

impl CheckReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.dangling_links.is_empty() && self.warnings.is_empty()
    }
}

/// Inspect `store` for problems that do not prevent loading.
#[must_use]
pub fn inspect(store: &ContentStore) -> CheckReport {
    let mut report = CheckReport {
        phases: store.phases().len(),
        resources: store.resources().len(),
        ..CheckReport::default()
    };
    report.dangling_links = store.dangling_links().iter().map(ToString::to_string).collect();

    if store.is_empty() {
        report.warnings.push("no phases or resources found".to_string());
    }
    for resource in store.resources() {
        if !resource.url.starts_with("http://") && !resource.url.starts_with("https://") {
            report
                .warnings
                .push(format!("resource {} has a non-http url: {}", resource.id, resource.url));
        }
    }
    for phase in store.phases() {
        if phase.tags.is_empty() {
            report.warnings.push(format!("phase {} has no tags", phase.id));
        }
    }
    report
}

pub fn run(ctx: &AppContext, args: &CheckArgs) -> Result<()> {
    let mut report = inspect(&ctx.store);
    report.tags = ctx.controller().catalog().len();
    report.source = ctx
        .content_dir
        .as_ref()
        .map_or_else(|| "embedded".to_string(), |dir| dir.display().to_string());

    for warning in &report.warnings {
        warn!(target: "content", "{warning}");
    }

    match ctx.output_format {
        OutputFormat::Json => emit_json(&robot_ok(&report))?,
        OutputFormat::Plain => {
            for line in report.dangling_links.iter().chain(&report.warnings) {
                println!("{line}");
            }
        }
        OutputFormat::Human => {
            let mut layout = HumanLayout::new();
            layout
                .title("Content check")
                .kv("Source", &report.source)
                .kv("Phases", &report.phases.to_string())
                .kv("Resources", &report.resources.to_string())
                .kv("Tags", &report.tags.to_string());
            if !report.dangling_links.is_empty() {
                layout.blank().section("Dangling links");
                for link in &report.dangling_links {
                    layout.bullet(link);
                }
            }
            if !report.warnings.is_empty() {
                layout.blank().section("Warnings");
                for warning in &report.warnings {
                    layout.bullet(warning);
                }
            }
            if report.is_clean() {
                layout.blank().push_line("OK");
            }
            emit_human(&layout);
        }
    }

    if args.strict && !report.dangling_links.is_empty() {
        return Err(SiteError::InvalidContent(report.dangling_links.join("; ")));
    }
    Ok(())
}
