use haven_core::screens::SmsOptInForm;

use crate::commands::common::CommandContext;
use crate::error::CliError;

/// SMS opt-in is public; no session is required.
pub async fn run_opt_in(context: &CommandContext, phone: &str) -> Result<(), CliError> {
    let api = context.api_client()?;
    let mut form = SmsOptInForm::new();
    form.set_phone(phone);
    form.submit(&api).await?;
    if let Some(status) = form.status() {
        println!("{status}");
    }
    Ok(())
}
