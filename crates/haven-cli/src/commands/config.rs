use std::env;

use haven_core::config::{normalize_api_base_url, normalize_text_option, API_BASE_URL_ENV};

use crate::cli::ConfigCommands;
use crate::config_profiles::{default_config_path, CliProfilesConfig};
use crate::error::CliError;

pub fn run_config(command: ConfigCommands, global_profile: Option<&str>) -> Result<(), CliError> {
    match command {
        ConfigCommands::Init {
            profile,
            api_base_url,
            no_activate,
        } => run_config_init(profile.as_deref().or(global_profile), api_base_url, no_activate),
        ConfigCommands::Show => run_config_show(global_profile),
    }
}

/// Merge `--api-base-url`, then `LINK_HAVEN_API_BASE_URL`, then the existing value.
pub fn run_config_init(
    profile_name: Option<&str>,
    api_base_url: Option<String>,
    no_activate: bool,
) -> Result<(), CliError> {
    let mut config = CliProfilesConfig::load().map_err(CliError::Config)?;
    let profile_name = config.resolve_profile_name(profile_name);
    let existing_profile = config.profile(&profile_name).cloned().unwrap_or_default();

    let merged_api_base_url = normalize_text_option(api_base_url)
        .or_else(|| normalize_text_option(env::var(API_BASE_URL_ENV).ok()))
        .or_else(|| existing_profile.api_base_url())
        .map(normalize_api_base_url)
        .transpose()?;

    let profile = config.profile_mut_or_default(&profile_name);
    if let Some(value) = merged_api_base_url {
        profile.api_base_url = Some(value);
    }

    if !no_activate {
        config.active_profile = Some(profile_name.clone());
    }

    let path = config.save().map_err(CliError::Config)?;
    println!(
        "Profile '{}' initialized at {}",
        profile_name,
        path.display()
    );

    let ready = config
        .profile(&profile_name)
        .and_then(|profile| profile.api_base_url())
        .is_some();
    if ready {
        println!("Profile '{profile_name}' is ready. Run `haven login --email <EMAIL> --password <PASSWORD>`.");
    } else {
        println!("Profile '{profile_name}' is missing: api_base_url");
    }
    Ok(())
}

fn run_config_show(global_profile: Option<&str>) -> Result<(), CliError> {
    let config = CliProfilesConfig::load().map_err(CliError::Config)?;
    let profile_name = config.resolve_profile_name(global_profile);
    let path = default_config_path().map_err(CliError::Config)?;

    println!("Config file: {}", path.display());
    println!("Profile: {profile_name}");
    match config.profile(&profile_name).and_then(|profile| profile.api_base_url()) {
        Some(url) => println!("API base URL: {url}"),
        None => println!("API base URL: (not set)"),
    }
    if let Some(url) = normalize_text_option(env::var(API_BASE_URL_ENV).ok()) {
        println!("{API_BASE_URL_ENV} override: {url}");
    }
    Ok(())
}
