//! Priority-ordered collection of server descriptors.

use super::{
    ConnectionParams, MonitorDomainError, ServerDescriptor, ServerId, ServerName, attention_cmp,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Raw configuration record for one server, before validation.
///
/// This is the shape configuration sources enumerate: a display name plus
/// the opaque connection settings the fetch capability needs. Serde derives
/// let file-backed sources deserialise records directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRecord {
    /// Raw server name as found in configuration.
    pub name: String,
    /// Raw connection settings as found in configuration.
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

impl ServerRecord {
    /// Creates a record from a name and connection settings.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        params: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            name: name.into(),
            params: params.into_iter().collect(),
        }
    }

    fn into_descriptor(self) -> Result<ServerDescriptor, ConfigRecordError> {
        let Self { name, params } = self;
        let server_name = ServerName::new(&name).map_err(|source| {
            ConfigRecordError::InvalidServerName {
                record: name.clone(),
                source,
            }
        })?;
        let connection = ConnectionParams::new(params)
            .map_err(|_| ConfigRecordError::MissingConnectionParams { record: name })?;
        Ok(ServerDescriptor::new(server_name, connection))
    }
}

/// Error describing one malformed configuration record.
///
/// Record errors are reported individually and never abort loading the
/// remaining records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigRecordError {
    /// The record's server name failed validation.
    #[error("configuration record '{record}' has an invalid server name: {source}")]
    InvalidServerName {
        /// Raw record name as configured.
        record: String,
        /// Underlying name validation failure.
        source: MonitorDomainError,
    },

    /// The record carries no connection settings at all.
    #[error("configuration record '{record}' has no connection parameters")]
    MissingConnectionParams {
        /// Raw record name as configured.
        record: String,
    },

    /// The record's name collides with an already-loaded server.
    #[error("configuration record '{record}' duplicates an already-loaded server name")]
    DuplicateServerName {
        /// Raw record name as configured.
        record: String,
    },
}

/// Ordered, mutable collection of server descriptors.
///
/// The sequence order is itself state: after [`ServerCollection::reorder`],
/// servers needing moderator attention come first. The collection is owned
/// by whoever drives it; observers only ever see it between notifications.
///
/// Collections serialise for snapshot output but are only ever built through
/// [`ServerCollection::from_records`] or [`ServerCollection::append`], which
/// enforce name uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServerCollection {
    entries: Vec<ServerDescriptor>,
}

impl ServerCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds a collection from raw configuration records.
    ///
    /// Malformed records (invalid name, missing connection parameters,
    /// duplicate name) are skipped and reported individually; they never
    /// abort loading the rest. The returned collection is already in
    /// priority order.
    #[must_use]
    pub fn from_records(records: Vec<ServerRecord>) -> (Self, Vec<ConfigRecordError>) {
        let mut collection = Self::new();
        let mut skipped = Vec::new();

        for record in records {
            let raw_name = record.name.clone();
            match record.into_descriptor() {
                Ok(descriptor) => {
                    if collection.append(descriptor).is_err() {
                        skipped.push(ConfigRecordError::DuplicateServerName { record: raw_name });
                    }
                }
                Err(err) => skipped.push(err),
            }
        }

        collection.reorder();
        (collection, skipped)
    }

    /// Appends one descriptor without a full reload.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorDomainError::DuplicateServerName`] when a descriptor
    /// with the same name is already present.
    pub fn append(&mut self, descriptor: ServerDescriptor) -> Result<(), MonitorDomainError> {
        if self.find_by_name(descriptor.name()).is_some() {
            return Err(MonitorDomainError::DuplicateServerName(
                descriptor.name().clone(),
            ));
        }
        self.entries.push(descriptor);
        Ok(())
    }

    /// Re-sorts the collection in place by the attention ordering.
    ///
    /// The sort is stable, so descriptors that compare equal keep their
    /// relative order across re-sorts triggered by unrelated updates.
    /// Collections are small (tens of servers), so a full sort per call is
    /// intentional.
    pub fn reorder(&mut self) {
        self.entries.sort_by(attention_cmp);
    }

    /// Returns the number of descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the collection holds no descriptors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over descriptors in current priority order.
    pub fn iter(&self) -> impl Iterator<Item = &ServerDescriptor> {
        self.entries.iter()
    }

    /// Returns a position-independent snapshot of descriptor identities.
    ///
    /// The polling pass iterates this snapshot so that mid-pass re-sorting
    /// can never skip or repeat a descriptor.
    #[must_use]
    pub fn ids(&self) -> Vec<ServerId> {
        self.entries.iter().map(ServerDescriptor::id).collect()
    }

    /// Finds a descriptor by identifier.
    #[must_use]
    pub fn get(&self, id: ServerId) -> Option<&ServerDescriptor> {
        self.entries.iter().find(|d| d.id() == id)
    }

    /// Finds a descriptor by validated name.
    #[must_use]
    pub fn find_by_name(&self, name: &ServerName) -> Option<&ServerDescriptor> {
        self.entries.iter().find(|d| d.name() == name)
    }

    /// Mutable descriptor lookup for the polling pass.
    pub(crate) fn descriptor_mut(&mut self, id: ServerId) -> Option<&mut ServerDescriptor> {
        self.entries.iter_mut().find(|d| d.id() == id)
    }
}

impl<'a> IntoIterator for &'a ServerCollection {
    type Item = &'a ServerDescriptor;
    type IntoIter = std::slice::Iter<'a, ServerDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
