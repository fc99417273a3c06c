use haven_core::api::Credentials;
use haven_core::collection::LinkCollection;
use haven_core::guard::Route;
use haven_core::screens::{submit_login, submit_signup, Navigation};

use crate::commands::common::CommandContext;
use crate::error::CliError;

pub async fn run_login(
    mut context: CommandContext,
    email: &str,
    password: &str,
) -> Result<(), CliError> {
    if context.store.is_authenticated() {
        println!(
            "Profile '{}' is already signed in as {}",
            context.profile_name,
            context.signed_in_label()
        );
        return Ok(());
    }

    let api = context.api_client()?;
    let credentials = Credentials::new(email.trim(), password);
    let Navigation::Navigate(route) = submit_login(&api, &mut context.store, &credentials).await?;
    println!(
        "Signed in profile '{}' as {}",
        context.profile_name,
        context.signed_in_label()
    );
    tracing::debug!(next = %route, "Login finished");
    Ok(())
}

pub async fn run_signup(
    context: &CommandContext,
    email: &str,
    password: &str,
) -> Result<(), CliError> {
    let api = context.api_client()?;
    let credentials = Credentials::new(email.trim(), password);
    match submit_signup(&api, &context.store, &credentials).await? {
        Navigation::Navigate(Route::Login) => {
            println!("Account created for {}. Run `haven login` to sign in.", credentials.email);
        }
        Navigation::Navigate(_) => {
            println!(
                "Profile '{}' is already signed in as {}",
                context.profile_name,
                context.signed_in_label()
            );
        }
    }
    Ok(())
}

pub fn run_logout(mut context: CommandContext) -> Result<(), CliError> {
    let was_signed_in = context.store.is_authenticated();
    LinkCollection::logout(&mut context.store)?;
    if was_signed_in {
        println!("Signed out profile '{}'", context.profile_name);
    } else {
        println!("Profile '{}' was not signed in.", context.profile_name);
    }
    Ok(())
}

pub fn run_status(context: &CommandContext) {
    if context.store.is_authenticated() {
        println!(
            "Profile '{}' is signed in as {} ({})",
            context.profile_name,
            context.signed_in_label(),
            context.store.slot().describe()
        );
    } else {
        println!("Profile '{}' is not signed in.", context.profile_name);
    }
}
