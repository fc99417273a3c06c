//! Session model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity descriptor returned alongside a login token
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Authenticated session: an opaque bearer token plus optional identity
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

impl Session {
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().and_then(|user| user.email.as_deref())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Session")
            .field("token", &"[REDACTED]")
            .field("user", &self.user)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_debug_redacts_token() {
        let session = Session {
            token: "secret-bearer-token".to_string(),
            user: Some(SessionUser {
                id: Some("u1".to_string()),
                email: Some("a@b.com".to_string()),
            }),
        };
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("secret-bearer-token"));
        assert!(rendered.contains("[REDACTED]"));
        assert!(rendered.contains("a@b.com"));
    }

    #[test]
    fn session_without_user_deserializes() {
        let session: Session = serde_json::from_str(r#"{"token":"t"}"#).unwrap();
        assert_eq!(session.token, "t");
        assert!(session.user.is_none());
        assert_eq!(session.email(), None);
    }
}
