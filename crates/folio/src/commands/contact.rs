use crate::cli::OutputFormat;
use crate::output::output_banner;
use anyhow::{bail, Result};
use colored::Colorize;
use folio_core::{
    submit, FormField, MessageSender, PortfolioView, SubmitOutcome, ViewEvent, FAILED_MESSAGE,
    SENDING_LABEL, SENT_MESSAGE,
};
use serde_json::json;

pub fn handle_contact(
    sender: &dyn MessageSender,
    name: &str,
    email: &str,
    message: &str,
    format: OutputFormat,
) -> Result<()> {
    let view = PortfolioView::new()
        .apply(ViewEvent::FormFieldChanged(FormField::Name, name.to_string()))
        .apply(ViewEvent::FormFieldChanged(FormField::Email, email.to_string()))
        .apply(ViewEvent::FormFieldChanged(FormField::Message, message.to_string()));

    if format == OutputFormat::Text {
        eprintln!("{}", SENDING_LABEL.dimmed());
    }

    let view = submit(view, sender);

    match view.submit_status {
        Some(SubmitOutcome::Sent) => {
            match format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&json!({
                            "success": true,
                            "message": SENT_MESSAGE
                        }))?
                    );
                }
                OutputFormat::Text => println!("{}", SENT_MESSAGE.green()),
            }
            Ok(())
        }
        Some(SubmitOutcome::Failed(reason)) => {
            if format == OutputFormat::Text {
                output_banner(FAILED_MESSAGE);
            }
            bail!("{}", reason)
        }
        None => bail!("{}", FAILED_MESSAGE),
    }
}
