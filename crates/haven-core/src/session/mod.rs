//! Session store backed by a durable client-side slot.
//!
//! `SessionStore` is the single writer of authentication state. Screens read
//! it through `&SessionStore`; only login and logout mutate it, and every
//! mutation reaches the durable slot before the in-memory state changes.

mod slots;

use thiserror::Error;

use crate::models::{Session, SessionUser};

pub use slots::{FileSessionSlot, MemorySessionSlot};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session storage error: {0}")]
    Storage(String),
    #[error("Session token must not be empty")]
    EmptyToken,
}

pub type SessionResult<T> = Result<T, SessionError>;

/// A durable key-value slot holding the serialized session.
pub trait SessionSlot {
    fn read(&self) -> SessionResult<Option<String>>;
    fn write(&self, raw: &str) -> SessionResult<()>;
    fn clear(&self) -> SessionResult<()>;
}

#[derive(Debug)]
pub struct SessionStore<S: SessionSlot> {
    slot: S,
    session: Option<Session>,
}

impl<S: SessionSlot> SessionStore<S> {
    /// Load whatever the slot holds. Unreadable or corrupt contents leave the
    /// store signed out.
    pub fn rehydrate(slot: S) -> Self {
        let session = match slot.read() {
            Ok(Some(raw)) => decode_session(&raw, &slot),
            Ok(None) => None,
            Err(error) => {
                tracing::warn!("Failed to read persisted session: {}", error);
                None
            }
        };

        Self { slot, session }
    }

    pub fn login(&mut self, token: impl Into<String>, user: Option<SessionUser>) -> SessionResult<()> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(SessionError::EmptyToken);
        }

        let session = Session { token, user };
        let raw = serde_json::to_string(&session)
            .map_err(|error| SessionError::Storage(error.to_string()))?;
        self.slot.write(&raw)?;
        self.session = Some(session);
        tracing::info!("Session stored");
        Ok(())
    }

    pub fn logout(&mut self) -> SessionResult<()> {
        self.session = None;
        self.slot.clear()?;
        tracing::info!("Session cleared");
        Ok(())
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.token.as_str())
    }

    #[must_use]
    pub const fn slot(&self) -> &S {
        &self.slot
    }
}

fn decode_session<S: SessionSlot>(raw: &str, slot: &S) -> Option<Session> {
    match serde_json::from_str::<Session>(raw) {
        Ok(session) if !session.token.trim().is_empty() => Some(session),
        Ok(_) => {
            tracing::warn!("Persisted session has an empty token; clearing it");
            discard(slot);
            None
        }
        Err(error) => {
            tracing::warn!("Persisted session is corrupt; clearing it: {}", error);
            discard(slot);
            None
        }
    }
}

fn discard<S: SessionSlot>(slot: &S) {
    if let Err(error) = slot.clear() {
        tracing::warn!("Failed to clear persisted session: {}", error);
    }
}
