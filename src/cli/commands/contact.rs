//! roboline contact - Submit the contact form

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, robot_ok};
use crate::contact::ContactForm;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub subject: String,

    #[arg(long)]
    pub message: String,
}

pub fn run(ctx: &AppContext, args: &ContactArgs) -> Result<()> {
    let form = ContactForm {
        name: args.name.clone(),
        email: args.email.clone(),
        subject: args.subject.clone(),
        message: args.message.clone(),
    };
    let receipt = form.submit()?;

    match ctx.output_format {
        OutputFormat::Json => emit_json(&robot_ok(&receipt)),
        OutputFormat::Plain => {
            println!("{}", receipt.reference);
            Ok(())
        }
        OutputFormat::Human => {
            let mut layout = HumanLayout::new();
            layout
                .title(&receipt.message)
                .kv("Reference", &receipt.reference)
                .kv("Submitted", &receipt.submitted_at.to_rfc3339())
                .kv("To", &ctx.config.site.contact_email);
            emit_human(&layout);
            Ok(())
        }
    }
}
