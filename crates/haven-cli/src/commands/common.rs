use std::path::PathBuf;

use haven_core::api::HavenApiClient;
use haven_core::collection::TimelineDay;
use haven_core::config::ClientConfig;
use haven_core::guard::{evaluate, Route, RouteDecision};
use haven_core::session::SessionStore;
use haven_core::timeline::CategoryFilter;

use crate::config_profiles::{CliProfile, CliProfilesConfig};
use crate::error::CliError;
use crate::session_slot::{open_session_store, CliSessionSlot};

/// Resolved profile plus the session store bound to it.
pub struct CommandContext {
    pub profile_name: String,
    pub profile: CliProfile,
    pub store: SessionStore<CliSessionSlot>,
}

impl CommandContext {
    pub fn load(
        global_profile: Option<&str>,
        session_file: Option<PathBuf>,
    ) -> Result<Self, CliError> {
        let config = CliProfilesConfig::load().map_err(CliError::Config)?;
        let profile_name = config.resolve_profile_name(global_profile);
        let profile = config.profile(&profile_name).cloned().unwrap_or_default();
        let store = open_session_store(&profile_name, session_file);
        Ok(Self {
            profile_name,
            profile,
            store,
        })
    }

    pub fn api_client(&self) -> Result<HavenApiClient, CliError> {
        let config = ClientConfig::resolve(self.profile.api_base_url())?;
        tracing::debug!(api_base_url = config.api_base_url(), "Using backend");
        Ok(HavenApiClient::new(config)?)
    }

    /// Gate a protected command the way the dashboard route is gated.
    pub fn require_dashboard(&self) -> Result<(), CliError> {
        match evaluate(Route::Dashboard, &self.store) {
            RouteDecision::Render(_) => Ok(()),
            RouteDecision::Redirect(_) => Err(CliError::NotSignedIn),
        }
    }

    pub fn signed_in_label(&self) -> String {
        self.store
            .session()
            .and_then(|session| session.email())
            .unwrap_or("(no email)")
            .to_string()
    }
}

pub fn format_timeline_lines(days: &[TimelineDay]) -> Vec<String> {
    if days.is_empty() {
        return vec!["No links saved yet.".to_string()];
    }

    let mut lines = Vec::new();
    for (index, day) in days.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.push(day.date.clone());
        for link in &day.links {
            lines.push(format!(
                "  {}  [{}] via {}",
                link.url,
                link.category,
                link.source.label()
            ));
        }
    }
    lines
}

pub fn format_category_lines(categories: &[CategoryFilter], selected: &CategoryFilter) -> Vec<String> {
    categories
        .iter()
        .map(|category| {
            let marker = if category == selected { '*' } else { ' ' };
            format!("{marker} {}", category.label())
        })
        .collect()
}
