//! REST client for the Link Haven backend.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ClientConfig;
use crate::models::{Link, SessionUser, Source};

#[cfg(test)]
mod tests;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid API configuration: {0}")]
    InvalidConfiguration(String),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to parse JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Session token was rejected by the backend")]
    Unauthorized,
    #[error("API error: {message} ({status})")]
    Api { status: u16, message: String },
}

impl ApiError {
    /// True when the backend rejected the bearer token or credentials
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields are required; the password is not trimmed when sent.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.trim().is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SignupResponse {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateLinkRequest {
    pub url: String,
    pub source: Source,
    /// Sent as an empty string when absent
    pub category: String,
}

#[derive(Debug, Serialize)]
struct OptInRequest<'a> {
    phone: &'a str,
}

#[derive(Clone)]
pub struct HavenApiClient {
    config: ClientConfig,
    client: Client,
}

impl HavenApiClient {
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        Ok(Self {
            config,
            client: Client::builder().build()?,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `POST /api/login`
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        let request = self
            .client
            .post(self.config.endpoint("/api/login"))
            .json(credentials);
        let response: LoginResponse = send_json(request).await?;
        if response.token.trim().is_empty() {
            return Err(ApiError::Api {
                status: StatusCode::OK.as_u16(),
                message: "Login response did not include a token".to_string(),
            });
        }
        Ok(response)
    }

    /// `POST /api/signup`
    pub async fn signup(&self, credentials: &Credentials) -> ApiResult<SignupResponse> {
        let request = self
            .client
            .post(self.config.endpoint("/api/signup"))
            .json(credentials);
        let response = send(request).await?;
        let body = response.text().await?;
        Ok(decode_signup_body(&body))
    }

    /// `GET /api/links`
    pub async fn list_links(&self, token: &str) -> ApiResult<Vec<Link>> {
        let request = self
            .client
            .get(self.config.endpoint("/api/links"))
            .bearer_auth(require_token(token)?)
            .header("Accept", "application/json");
        send_json(request).await
    }

    /// `POST /api/links`
    pub async fn create_link(&self, token: &str, link: &CreateLinkRequest) -> ApiResult<Link> {
        let request = self
            .client
            .post(self.config.endpoint("/api/links"))
            .bearer_auth(require_token(token)?)
            .json(link);
        send_json(request).await
    }

    /// `POST /api/twilio/opt-in`. The response body is not interpreted.
    pub async fn sms_opt_in(&self, phone: &str) -> ApiResult<()> {
        let request = self
            .client
            .post(self.config.endpoint("/api/twilio/opt-in"))
            .json(&OptInRequest { phone });
        send(request).await?;
        Ok(())
    }
}

async fn send(request: RequestBuilder) -> ApiResult<reqwest::Response> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::debug!(status = status.as_u16(), "Backend request failed");
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    Err(ApiError::Api {
        status: status.as_u16(),
        message: parse_api_error(status, &body),
    })
}

async fn send_json<T: serde::de::DeserializeOwned>(request: RequestBuilder) -> ApiResult<T> {
    let response = send(request).await?;
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Signup bodies are informational; an empty or unparseable body is a success without a token.
fn decode_signup_body(body: &str) -> SignupResponse {
    if body.trim().is_empty() {
        return SignupResponse::default();
    }
    match serde_json::from_str(body) {
        Ok(response) => response,
        Err(error) => {
            tracing::debug!("Ignoring unparseable signup response: {}", error);
            SignupResponse::default()
        }
    }
}

fn require_token(token: &str) -> ApiResult<&str> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ApiError::InvalidConfiguration(
            "Session token must not be empty".to_string(),
        ));
    }
    Ok(token)
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = payload.message.or(payload.error) {
            return compact_text(&message);
        }
    }

    let trimmed = compact_text(body);
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .map_or_else(|| format!("HTTP {}", status.as_u16()), ToString::to_string)
    } else {
        trimmed
    }
}

/// Truncate text to at most 180 characters for error messages.
fn compact_text(value: &str) -> String {
    value.trim().chars().take(180).collect()
}
