//! Link capture form state.

use thiserror::Error;
use url::Url;

use crate::api::{ApiError, ApiResult, CreateLinkRequest, HavenApiClient};
use crate::models::{normalize_category, Link, Source};
use crate::session::{SessionSlot, SessionStore};

const SAVE_FAILED_MESSAGE: &str = "Failed to save link";

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("A URL is required")]
    MissingUrl,
    #[error("A save is already in progress")]
    InFlight,
    #[error("Not signed in")]
    NotSignedIn,
    #[error("Session expired, please log in again")]
    SessionExpired,
    #[error("Failed to save link")]
    SaveFailed(#[source] ApiError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkCaptureForm {
    url: String,
    source: Source,
    category: String,
    in_flight: bool,
    last_error: Option<String>,
}

impl LinkCaptureForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the URL field, validating it the way the input widget does.
    pub fn set_url(&mut self, raw: &str) -> Result<(), CaptureError> {
        self.url = normalize_link_url(raw)?;
        Ok(())
    }

    pub const fn set_source(&mut self, source: Source) {
        self.source = source;
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub const fn source(&self) -> Source {
        self.source
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        if self.in_flight {
            "Saving..."
        } else {
            "Save Link"
        }
    }

    /// Mark the form busy and build the request, unless a save is already
    /// running or there is nothing to save.
    pub fn begin_submit(&mut self) -> Option<CreateLinkRequest> {
        if self.in_flight || self.url.is_empty() {
            return None;
        }

        self.in_flight = true;
        Some(CreateLinkRequest {
            url: self.url.clone(),
            source: self.source,
            category: normalize_category(Some(self.category.as_str())).unwrap_or_default(),
        })
    }

    pub fn finish_submit(&mut self, result: &ApiResult<Link>) {
        self.in_flight = false;
        match result {
            Ok(link) => {
                tracing::info!(link = %link.id, "Link saved");
                self.url.clear();
                self.category.clear();
                self.last_error = None;
            }
            Err(error) => {
                tracing::error!("Failed to save link: {}", error);
                self.last_error = Some(SAVE_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Send the form to the backend. A 401 signs the session out.
    ///
    /// On success the caller refreshes its link list; see
    /// [`LinkCollection::save_from`](crate::collection::LinkCollection::save_from).
    pub async fn submit<S: SessionSlot>(
        &mut self,
        api: &HavenApiClient,
        store: &mut SessionStore<S>,
    ) -> Result<Link, CaptureError> {
        let Some(token) = store.token().map(ToString::to_string) else {
            return Err(CaptureError::NotSignedIn);
        };
        if self.in_flight {
            return Err(CaptureError::InFlight);
        }
        let Some(request) = self.begin_submit() else {
            return Err(CaptureError::MissingUrl);
        };

        let result = api.create_link(&token, &request).await;
        self.finish_submit(&result);

        match result {
            Ok(link) => Ok(link),
            Err(ApiError::Unauthorized) => {
                if let Err(error) = store.logout() {
                    tracing::warn!("Failed to clear expired session: {}", error);
                }
                Err(CaptureError::SessionExpired)
            }
            Err(error) => Err(CaptureError::SaveFailed(error)),
        }
    }
}

/// Validate a URL the way the capture input does.
///
/// Input without a scheme (`google.com`) is treated as `https://`.
pub fn normalize_link_url(raw: &str) -> Result<String, CaptureError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CaptureError::MissingUrl);
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let parsed = Url::parse(&candidate)
        .map_err(|error| CaptureError::InvalidUrl(format!("{trimmed}: {error}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(CaptureError::InvalidUrl(format!(
            "{trimmed}: only http and https links can be saved"
        )));
    }
    if parsed.host_str().unwrap_or_default().is_empty() {
        return Err(CaptureError::InvalidUrl(format!("{trimmed}: missing host")));
    }

    Ok(parsed.to_string())
}
