//! roboline config - Print the effective configuration

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{OutputFormat, emit_json, robot_ok};
use crate::error::{Result, SiteError};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print a single section: site, search, content, build
    #[arg(long)]
    pub section: Option<String>,
}

pub fn run(ctx: &AppContext, args: &ConfigArgs) -> Result<()> {
    let value = serde_json::to_value(&ctx.config)?;
    let value = match &args.section {
        Some(section) => value.get(section).cloned().ok_or_else(|| {
            SiteError::Config(format!("unknown config section: {section}"))
        })?,
        None => value,
    };

    match ctx.output_format {
        OutputFormat::Json => emit_json(&robot_ok(&value)),
        OutputFormat::Human | OutputFormat::Plain => {
            let text = match &args.section {
                Some(section) => {
                    let body = toml::to_string_pretty(&value).map_err(|err| {
                        SiteError::Serialization(format!("serialize config: {err}"))
                    })?;
                    format!("[{section}]\n{body}")
                }
                None => ctx.config.to_toml()?,
            };
            print!("{text}");
            Ok(())
        }
    }
}
