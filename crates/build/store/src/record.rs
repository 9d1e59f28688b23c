//! Persisted build records.

use build_core::BuildTemplate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// A named build as the storage layer persists it.
///
/// The record carries the complete [`BuildTemplate`] plus enough
/// surrounding context (originating chat string, save time) to show a
/// useful listing without re-encoding anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildRecord {
    /// User-chosen name; also the storage key.
    pub name: String,

    /// The complete build.
    pub template: BuildTemplate,

    /// The chat string this build was imported from, if any.
    #[serde(default)]
    pub chat_link: Option<String>,

    /// When the record was (last) saved.
    pub saved_at: DateTime<Utc>,
}

impl BuildRecord {
    /// Creates a record stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidName`] when `name` cannot be used
    /// as a storage key.
    pub fn new(name: impl Into<String>, template: BuildTemplate) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            template,
            chat_link: None,
            saved_at: Utc::now(),
        })
    }

    /// Attaches the originating chat string (builder pattern).
    #[must_use]
    pub fn with_chat_link(mut self, chat_link: impl Into<String>) -> Self {
        self.chat_link = Some(chat_link.into());
        self
    }
}

/// Checks that a build name is usable as a storage key.
///
/// Names become file names, so they must be non-empty, free of path
/// separators, and not a relative-path component.
pub fn validate_name(name: &str) -> Result<()> {
    let reason = if name.trim().is_empty() {
        Some("name must not be empty")
    } else if name.contains(['/', '\\']) {
        Some("name must not contain path separators")
    } else if name == "." || name == ".." {
        Some("name must not be a path component")
    } else if name.contains('\0') {
        Some("name must not contain NUL bytes")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(StoreError::InvalidName {
            name: name.to_owned(),
            reason,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use build_core::Profession;

    #[test]
    fn record_serializes_as_structured_json() {
        let record = BuildRecord::new("power quickness", BuildTemplate::new(Profession::Guardian))
            .unwrap()
            .with_chat_link("[&DQEAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA==]");

        let json = serde_json::to_string_pretty(&record).unwrap();
        let parsed: BuildRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
        assert_eq!(parsed.template.profession_id, 1);
    }

    #[test]
    fn names_are_validated() {
        assert!(validate_name("daily fractals").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name("a/b").is_err());
        assert!(validate_name("a\\b").is_err());
        assert!(validate_name("..").is_err());
    }
}
