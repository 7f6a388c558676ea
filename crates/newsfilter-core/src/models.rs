use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A configured news website: where to fetch and which elements hold headlines.
///
/// Only `sources` is required at load time. Missing fields surface later as an
/// [`AppError::InvalidSource`] for that one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub headline_selector: Option<String>,
}

impl SourceDescriptor {
    pub fn new(name: &str, url: &str, headline_selector: &str) -> Self {
        Self {
            name: name.to_string(),
            url: Some(url.to_string()),
            headline_selector: Some(headline_selector.to_string()),
        }
    }

    /// Build a descriptor from one raw `sources` entry without rejecting it.
    ///
    /// Fields that are absent or not strings become empty, so a malformed entry
    /// fails on its own in the aggregator instead of sinking the whole file.
    pub fn from_value(entry: &serde_json::Value) -> Self {
        let field = |key: &str| entry.get(key).and_then(|v| v.as_str()).map(str::to_string);
        Self {
            name: field("name").unwrap_or_default(),
            url: field("url"),
            headline_selector: field("headline_selector"),
        }
    }

    /// Name used in logs, falling back to a placeholder for unnamed entries.
    pub fn label(&self) -> &str {
        if self.name.trim().is_empty() {
            "<unnamed>"
        } else {
            &self.name
        }
    }

    pub fn name(&self) -> Result<&str, AppError> {
        non_empty(Some(self.name.as_str()))
            .ok_or_else(|| AppError::InvalidSource("source has no name".to_string()))
    }

    pub fn url(&self) -> Result<&str, AppError> {
        non_empty(self.url.as_deref())
            .ok_or_else(|| AppError::InvalidSource(format!("{} has no url", self.label())))
    }

    pub fn selector(&self) -> Result<&str, AppError> {
        non_empty(self.headline_selector.as_deref()).ok_or_else(|| {
            AppError::InvalidSource(format!("{} has no headline_selector", self.label()))
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// One extracted headline, tagged with the source it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineRecord {
    pub source: String,
    pub headline: String,
}

impl HeadlineRecord {
    pub fn new(source: impl Into<String>, headline: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            headline: headline.into(),
        }
    }
}

/// Where a session's headlines came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlineOrigin {
    Cache,
    Fetched,
}
