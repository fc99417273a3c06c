//! Link collection view: the signed-in user's timeline of saved links.

use chrono::TimeZone;
use serde::Serialize;
use thiserror::Error;

use crate::api::{ApiError, HavenApiClient};
use crate::capture::{CaptureError, LinkCaptureForm};
use crate::guard::Route;
use crate::models::{Link, Source};
use crate::session::{SessionResult, SessionSlot, SessionStore};
use crate::timeline::{derive_categories, filter_and_group, filter_links, CategoryFilter, DateGroup};

#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("Not signed in")]
    NotSignedIn,
    #[error("Session expired, please log in again")]
    SessionExpired,
    #[error("Failed to load links: {0}")]
    Fetch(#[source] ApiError),
}

/// One rendered timeline entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRow {
    pub url: String,
    pub category: String,
    pub source: Source,
}

impl From<&Link> for LinkRow {
    fn from(link: &Link) -> Self {
        Self {
            url: link.url.clone(),
            category: link.category_label().to_string(),
            source: link.source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineDay {
    pub date: String,
    pub links: Vec<LinkRow>,
}

impl From<DateGroup> for TimelineDay {
    fn from(group: DateGroup) -> Self {
        Self {
            date: group.date,
            links: group.links.iter().map(LinkRow::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LinkCollection {
    links: Vec<Link>,
    selected: CategoryFilter,
}

impl LinkCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-fetch the authoritative list. Failures keep the current list.
    pub async fn refresh<S: SessionSlot>(
        &mut self,
        api: &HavenApiClient,
        store: &mut SessionStore<S>,
    ) -> Result<usize, RefreshError> {
        let Some(token) = store.token().map(ToString::to_string) else {
            return Err(RefreshError::NotSignedIn);
        };

        match api.list_links(&token).await {
            Ok(links) => {
                tracing::debug!(count = links.len(), "Fetched links");
                self.links = links;
                Ok(self.links.len())
            }
            Err(ApiError::Unauthorized) => {
                tracing::warn!("Backend rejected the session token; signing out");
                if let Err(error) = store.logout() {
                    tracing::warn!("Failed to clear expired session: {}", error);
                }
                Err(RefreshError::SessionExpired)
            }
            Err(error) => {
                tracing::error!("Failed to fetch links: {}", error);
                Err(RefreshError::Fetch(error))
            }
        }
    }

    /// Submit `form` and, once the save succeeds, refresh the list so it
    /// includes the new link. A failed refresh is logged, not returned.
    pub async fn save_from<S: SessionSlot>(
        &mut self,
        form: &mut LinkCaptureForm,
        api: &HavenApiClient,
        store: &mut SessionStore<S>,
    ) -> Result<Link, CaptureError> {
        let link = form.submit(api, store).await?;
        if let Err(error) = self.refresh(api, store).await {
            tracing::warn!("Saved link but could not refresh the list: {}", error);
        }
        Ok(link)
    }

    /// Logout control. The caller navigates to the returned route.
    pub fn logout<S: SessionSlot>(store: &mut SessionStore<S>) -> SessionResult<Route> {
        store.logout()?;
        Ok(Route::Login)
    }

    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    #[must_use]
    pub fn categories(&self) -> Vec<CategoryFilter> {
        derive_categories(&self.links)
    }

    pub fn select(&mut self, filter: CategoryFilter) {
        self.selected = filter;
    }

    #[must_use]
    pub const fn selected(&self) -> &CategoryFilter {
        &self.selected
    }

    #[must_use]
    pub fn visible(&self) -> Vec<Link> {
        filter_links(&self.links, &self.selected)
    }

    #[must_use]
    pub fn timeline<Tz: TimeZone>(&self, tz: &Tz) -> Vec<TimelineDay> {
        filter_and_group(&self.links, &self.selected, tz)
            .into_iter()
            .map(TimelineDay::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::LinkId;
    use crate::session::MemorySessionSlot;

    fn link(id: &str, category: Option<&str>) -> Link {
        Link {
            id: LinkId::new(id),
            url: format!("https://example.com/{id}"),
            source: Source::Sms,
            category: category.map(ToString::to_string),
            created_at: "2024-05-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap(),
        }
    }

    fn collection_with(links: Vec<Link>) -> LinkCollection {
        LinkCollection {
            links,
            selected: CategoryFilter::default(),
        }
    }

    #[test]
    fn selection_defaults_to_all() {
        let collection = collection_with(vec![link("1", Some("ai")), link("2", None)]);
        assert_eq!(collection.selected(), &CategoryFilter::All);
        assert_eq!(collection.visible().len(), 2);
    }

    #[test]
    fn uncategorized_selection_shows_only_empty_category() {
        let mut collection = collection_with(vec![link("ai", Some("ai")), link("blank", None)]);
        collection.select(CategoryFilter::from_label("Uncategorized"));

        let visible = collection.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id.as_str(), "blank");
    }

    #[test]
    fn timeline_rows_fall_back_to_uncategorized_label() {
        let collection = collection_with(vec![link("1", None)]);
        let days = collection.timeline(&Utc);

        assert_eq!(
            days,
            vec![TimelineDay {
                date: "5/1/2024".to_string(),
                links: vec![LinkRow {
                    url: "https://example.com/1".to_string(),
                    category: "Uncategorized".to_string(),
                    source: Source::Sms,
                }],
            }]
        );
    }

    #[test]
    fn logout_control_clears_session_and_targets_login() {
        let mut store = SessionStore::rehydrate(MemorySessionSlot::default());
        store.login("token", None).unwrap();

        let target = LinkCollection::logout(&mut store).unwrap();

        assert_eq!(target, Route::Login);
        assert!(!store.is_authenticated());
    }
}
