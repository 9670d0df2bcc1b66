//! Collection loading and edit-outcome handling.
//!
//! Provides [`RosterService`], which builds a [`ServerCollection`] from an
//! external configuration source and reacts to the structured result of the
//! external server-editing flow.

use crate::monitor::domain::{
    ConfigRecordError, EditOutcome, MonitorDomainError, ServerCollection,
};
use crate::monitor::ports::{ConfigSource, ConfigSourceError};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for roster operations.
#[derive(Debug, Error)]
pub enum RosterServiceError {
    /// The configuration store itself could not be read.
    #[error(transparent)]
    Source(#[from] ConfigSourceError),
    /// Domain validation failed while mutating the collection.
    #[error(transparent)]
    Domain(#[from] MonitorDomainError),
}

/// Result type for roster service operations.
pub type RosterServiceResult<T> = Result<T, RosterServiceError>;

/// A freshly loaded collection plus the records that were skipped.
#[derive(Debug)]
pub struct LoadedCollection {
    collection: ServerCollection,
    skipped: Vec<ConfigRecordError>,
}

impl LoadedCollection {
    /// Returns the loaded, priority-ordered collection.
    #[must_use]
    pub const fn collection(&self) -> &ServerCollection {
        &self.collection
    }

    /// Returns the per-record errors reported during the load.
    #[must_use]
    pub fn skipped(&self) -> &[ConfigRecordError] {
        &self.skipped
    }

    /// Splits into the collection and the skipped-record report.
    #[must_use]
    pub fn into_parts(self) -> (ServerCollection, Vec<ConfigRecordError>) {
        (self.collection, self.skipped)
    }
}

/// How the collection reacted to an edit outcome.
#[derive(Debug)]
pub enum EditReaction {
    /// The new descriptor was appended and the collection re-sorted.
    Appended,
    /// The collection was reloaded from the configuration source.
    Reloaded {
        /// Records skipped during the reload.
        skipped: Vec<ConfigRecordError>,
    },
    /// Nothing changed.
    Unchanged,
}

impl EditReaction {
    /// Returns whether the reaction left descriptors needing a fresh poll.
    #[must_use]
    pub const fn requires_pass(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Collection loading and edit-reaction service.
#[derive(Clone)]
pub struct RosterService<S>
where
    S: ConfigSource,
{
    source: Arc<S>,
}

impl<S> RosterService<S>
where
    S: ConfigSource,
{
    /// Creates a roster service over the given configuration source.
    #[must_use]
    pub const fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Loads the collection from the configuration source.
    ///
    /// Malformed records are skipped, logged with their configured name,
    /// and reported in the result; only an unreadable source fails the
    /// whole load.
    ///
    /// # Errors
    ///
    /// Returns [`RosterServiceError::Source`] when the configuration store
    /// cannot be read.
    pub async fn load(&self) -> RosterServiceResult<LoadedCollection> {
        let records = self.source.enumerate().await?;
        let (collection, skipped) = ServerCollection::from_records(records);
        for err in &skipped {
            tracing::warn!(error = %err, "skipping malformed configuration record");
        }
        Ok(LoadedCollection {
            collection,
            skipped,
        })
    }

    /// Applies the structured result of the external edit flow.
    ///
    /// `Added` appends the new descriptor and re-sorts; `Modified` reloads
    /// the whole collection from the source in case vital configuration
    /// changed; `Cancelled` leaves everything untouched. When the reaction
    /// [`EditReaction::requires_pass`], the caller should launch a polling
    /// pass to populate the affected descriptors.
    ///
    /// # Errors
    ///
    /// Returns [`RosterServiceError::Domain`] when an added descriptor
    /// duplicates an existing name, or [`RosterServiceError::Source`] when
    /// a reload cannot read the configuration store.
    pub async fn apply_edit_outcome(
        &self,
        collection: &mut ServerCollection,
        outcome: EditOutcome,
    ) -> RosterServiceResult<EditReaction> {
        match outcome {
            EditOutcome::Added(descriptor) => {
                collection.append(descriptor)?;
                collection.reorder();
                Ok(EditReaction::Appended)
            }
            EditOutcome::Modified => {
                let (reloaded, skipped) = self.load().await?.into_parts();
                *collection = reloaded;
                Ok(EditReaction::Reloaded { skipped })
            }
            EditOutcome::Cancelled => Ok(EditReaction::Unchanged),
        }
    }
}
