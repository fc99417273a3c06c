//! Link model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned link identifier. Opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(String);

impl LinkId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Channel a link was captured through
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    #[default]
    Web,
    Sms,
    Email,
}

impl Source {
    pub const ALL: [Self; 3] = [Self::Web, Self::Email, Self::Sms];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Sms => "sms",
            Self::Email => "email",
        }
    }

    /// Human label used by the capture form selector
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Web => "Web",
            Self::Sms => "SMS",
            Self::Email => "Email",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "web" => Ok(Self::Web),
            "sms" => Ok(Self::Sms),
            "email" => Ok(Self::Email),
            other => Err(format!("unknown link source '{other}' (expected web, sms, or email)")),
        }
    }
}

/// A saved link as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Server-assigned identifier
    #[serde(alias = "_id")]
    pub id: LinkId,
    pub url: String,
    #[serde(default)]
    pub source: Source,
    /// Free-text grouping label; `None` when absent or blank
    #[serde(default, deserialize_with = "deserialize_category")]
    pub category: Option<String>,
    #[serde(alias = "created_at")]
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Category label for display, falling back to `Uncategorized`
    #[must_use]
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }

    #[must_use]
    pub fn is_uncategorized(&self) -> bool {
        self.category.is_none()
    }
}

/// Label of the synthetic bucket holding links without a category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Label of the synthetic bucket holding every link
pub const ALL_CATEGORIES: &str = "All";

fn deserialize_category<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(normalize_category(raw.as_deref()))
}

/// Trim a category and collapse blank values to `None`.
#[must_use]
pub fn normalize_category(raw: Option<&str>) -> Option<String> {
    let value = raw?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
