//! Validated server name type.

use super::MonitorDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a server name.
const MAX_NAME_LENGTH: usize = 100;

/// Validated, lowercase mailing-list server identifier.
///
/// Server names are unique within a collection, shown to the moderator, and
/// used as the tie-breaker when two servers compare equal under the
/// attention ordering (e.g. `pgsql-hackers`, `announce.lists`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerName(String);

impl ServerName {
    /// Creates a validated server name.
    ///
    /// The input is trimmed and lowercased. Only characters in
    /// `[a-z0-9._-]` are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorDomainError::EmptyServerName`] when the value is
    /// empty after trimming, [`MonitorDomainError::InvalidServerName`] when
    /// it contains characters outside `[a-z0-9._-]`, or
    /// [`MonitorDomainError::ServerNameTooLong`] when it exceeds 100
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, MonitorDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return Err(MonitorDomainError::EmptyServerName);
        }

        if normalized.len() > MAX_NAME_LENGTH {
            return Err(MonitorDomainError::ServerNameTooLong(raw));
        }

        let is_valid = normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-'));

        if !is_valid {
            return Err(MonitorDomainError::InvalidServerName(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the server name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ServerName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ServerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
