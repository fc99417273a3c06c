//! Login and signup screens.

use thiserror::Error;

use crate::api::{Credentials, HavenApiClient};
use crate::guard::{evaluate, Route, RouteDecision};
use crate::session::{SessionSlot, SessionStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Navigate(Route),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthScreenError {
    #[error("Invalid login credentials")]
    InvalidCredentials,
    #[error("Signup failed. Email may already be in use.")]
    SignupFailed,
}

/// Submit the login form. On success the token is stored and the dashboard
/// is next; on any failure the session is left untouched.
pub async fn submit_login<S: SessionSlot>(
    api: &HavenApiClient,
    store: &mut SessionStore<S>,
    credentials: &Credentials,
) -> Result<Navigation, AuthScreenError> {
    if let RouteDecision::Redirect(target) = evaluate(Route::Login, store) {
        return Ok(Navigation::Navigate(target));
    }
    if !credentials.is_complete() {
        return Err(AuthScreenError::InvalidCredentials);
    }

    let response = api.login(credentials).await.map_err(|error| {
        tracing::error!("Login failed: {}", error);
        AuthScreenError::InvalidCredentials
    })?;

    store.login(response.token, response.user).map_err(|error| {
        tracing::error!("Failed to persist session: {}", error);
        AuthScreenError::InvalidCredentials
    })?;

    tracing::info!(email = %credentials.email, "Signed in");
    Ok(Navigation::Navigate(Route::Dashboard))
}

/// Submit the signup form. A new account is sent to the login screen; any
/// token in the signup response is not kept.
pub async fn submit_signup<S: SessionSlot>(
    api: &HavenApiClient,
    store: &SessionStore<S>,
    credentials: &Credentials,
) -> Result<Navigation, AuthScreenError> {
    if let RouteDecision::Redirect(target) = evaluate(Route::Signup, store) {
        return Ok(Navigation::Navigate(target));
    }
    if !credentials.is_complete() {
        return Err(AuthScreenError::SignupFailed);
    }

    let response = api.signup(credentials).await.map_err(|error| {
        tracing::error!("Signup failed: {}", error);
        AuthScreenError::SignupFailed
    })?;

    tracing::info!(
        email = %credentials.email,
        token_returned = response.token.is_some(),
        "Account created"
    );
    Ok(Navigation::Navigate(Route::Login))
}
