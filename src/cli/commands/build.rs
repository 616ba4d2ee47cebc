//! roboline build - Render the static site

use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, robot_ok};
use crate::error::Result;
use crate::render::SiteRenderer;

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Output directory (default: build.output_dir from config)
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Remove the output directory before writing
    #[arg(long)]
    pub clean: bool,
}

pub fn run(ctx: &AppContext, args: &BuildArgs) -> Result<()> {
    let out_dir = ctx.resolve(
        args.out
            .clone()
            .unwrap_or_else(|| PathBuf::from(&ctx.config.build.output_dir)),
    );
    let clean = args.clean || ctx.config.build.clean;

    let report = SiteRenderer::new(&ctx.config, &ctx.store).build(&out_dir, clean)?;

    match ctx.output_format {
        OutputFormat::Json => emit_json(&robot_ok(&report)),
        OutputFormat::Plain => {
            for file in &report.files {
                println!("{}", out_dir.join(file).display());
            }
            Ok(())
        }
        OutputFormat::Human => {
            let mut layout = HumanLayout::new();
            layout
                .title("Site built")
                .kv("Output", &report.output_dir.display().to_string())
                .kv("Pages", &report.pages.to_string())
                .kv("Tag pages", &report.tags.to_string())
                .kv("Files", &report.files.len().to_string());
            emit_human(&layout);
            Ok(())
        }
    }
}
