//! Link Haven CLI - save links from the terminal and browse them by day

mod cli;
mod commands;
mod config_profiles;
mod error;
mod session_slot;


use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::auth_cmd::{run_login, run_logout, run_signup, run_status};
use crate::commands::categories::run_categories;
use crate::commands::common::CommandContext;
use crate::commands::completions::run_completions;
use crate::commands::config::run_config;
use crate::commands::list::run_list;
use crate::commands::opt_in::run_opt_in;
use crate::commands::pages::{run_terms, welcome_lines};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "haven=info".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let profile = cli.profile.as_deref();

    match cli.command {
        None => {
            let context = CommandContext::load(profile, cli.session_file)?;
            let signed_in = context
                .store
                .is_authenticated()
                .then(|| context.signed_in_label());
            for line in welcome_lines(signed_in.as_deref()) {
                println!("{line}");
            }
            println!();
            Cli::command().print_help()?;
        }
        Some(Commands::Login { email, password }) => {
            let context = CommandContext::load(profile, cli.session_file)?;
            run_login(context, &email, &password).await?;
        }
        Some(Commands::Signup { email, password }) => {
            let context = CommandContext::load(profile, cli.session_file)?;
            run_signup(&context, &email, &password).await?;
        }
        Some(Commands::Logout) => {
            run_logout(CommandContext::load(profile, cli.session_file)?)?;
        }
        Some(Commands::Status) => {
            run_status(&CommandContext::load(profile, cli.session_file)?);
        }
        Some(Commands::Add {
            url,
            source,
            category,
        }) => {
            let context = CommandContext::load(profile, cli.session_file)?;
            run_add(context, &url, source.into(), category.as_deref()).await?;
        }
        Some(Commands::List { category, json }) => {
            let context = CommandContext::load(profile, cli.session_file)?;
            run_list(context, category.as_deref(), json).await?;
        }
        Some(Commands::Categories { json }) => {
            let context = CommandContext::load(profile, cli.session_file)?;
            run_categories(context, json).await?;
        }
        Some(Commands::OptIn { phone }) => {
            let context = CommandContext::load(profile, cli.session_file)?;
            run_opt_in(&context, &phone).await?;
        }
        Some(Commands::Terms) => run_terms(),
        Some(Commands::Config { command }) => run_config(command, profile)?,
        Some(Commands::Completions { shell, output }) => {
            run_completions(shell, output.as_deref())?;
        }
    }

    Ok(())
}
