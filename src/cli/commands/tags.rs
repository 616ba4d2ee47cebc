//! roboline tags - Tag catalog with usage counts

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{
    HumanLayout, OutputFormat, emit_human, emit_json, escape_tsv, robot_ok,
};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct TagsArgs {
    /// Only tags used by resources
    #[arg(long, conflicts_with = "phases_only")]
    pub resources_only: bool,

    /// Only tags used by phases
    #[arg(long)]
    pub phases_only: bool,
}

pub fn run(ctx: &AppContext, args: &TagsArgs) -> Result<()> {
    let counts: Vec<_> = ctx
        .controller()
        .catalog()
        .counts()
        .into_iter()
        .filter(|count| !args.phases_only || count.phases > 0)
        .filter(|count| !args.resources_only || count.resources > 0)
        .collect();

    match ctx.output_format {
        OutputFormat::Json => emit_json(&robot_ok(&counts)),
        OutputFormat::Plain => {
            for count in &counts {
                println!(
                    "{}\t{}\t{}",
                    escape_tsv(&count.tag),
                    count.phases,
                    count.resources
                );
            }
            Ok(())
        }
        OutputFormat::Human => {
            let mut layout = HumanLayout::new();
            layout.title(&format!("{} tags", counts.len()));
            for count in &counts {
                layout.kv(
                    &count.tag,
                    &format!("{} phases, {} resources", count.phases, count.resources),
                );
            }
            emit_human(&layout);
            Ok(())
        }
    }
}
