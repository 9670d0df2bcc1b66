//! Opaque per-server connection parameters.

use super::MonitorDomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Opaque bag of server-specific connection settings.
///
/// The monitor core never interprets these entries; they are handed through
/// verbatim to the fetch capability, which knows what a given server type
/// needs (address, credentials, list identifiers, and so on). The ordered
/// map keeps serialised configuration diffs deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionParams(BTreeMap<String, String>);

impl ConnectionParams {
    /// Creates connection parameters from key/value settings.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorDomainError::EmptyConnectionParams`] when no
    /// settings are provided; a descriptor without any connection detail can
    /// never be fetched.
    pub fn new(
        settings: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, MonitorDomainError> {
        let entries: BTreeMap<String, String> = settings.into_iter().collect();
        if entries.is_empty() {
            return Err(MonitorDomainError::EmptyConnectionParams);
        }
        Ok(Self(entries))
    }

    /// Returns the setting stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterates over all settings in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of settings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the bag holds no settings.
    ///
    /// Always `false` for a constructed value; present for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
