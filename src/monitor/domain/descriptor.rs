//! Monitored server descriptor aggregate.

use super::{ConnectionParams, MonitorDomainError, ServerId, ServerName};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// One monitored mailing-list server: identity, connection parameters, and
/// last-known moderation queue state.
///
/// A descriptor starts unpopulated. A successful fetch records the pending
/// count and timestamp; a failed fetch only raises the transient
/// failed-this-round marker and leaves the previously known state intact,
/// so a flaky server keeps showing its last good count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerDescriptor {
    id: ServerId,
    name: ServerName,
    connection: ConnectionParams,
    pending: Option<u64>,
    last_checked_at: Option<DateTime<Utc>>,
    last_fetch_failed: bool,
}

impl ServerDescriptor {
    /// Creates an unpopulated descriptor with a fresh identifier.
    #[must_use]
    pub fn new(name: ServerName, connection: ConnectionParams) -> Self {
        Self {
            id: ServerId::new(),
            name,
            connection,
            pending: None,
            last_checked_at: None,
            last_fetch_failed: false,
        }
    }

    /// Returns the descriptor identifier.
    #[must_use]
    pub const fn id(&self) -> ServerId {
        self.id
    }

    /// Returns the validated server name.
    #[must_use]
    pub const fn name(&self) -> &ServerName {
        &self.name
    }

    /// Returns the opaque connection parameters.
    #[must_use]
    pub const fn connection(&self) -> &ConnectionParams {
        &self.connection
    }

    /// Returns the last successfully fetched pending count, if any.
    #[must_use]
    pub const fn pending_count(&self) -> Option<u64> {
        self.pending
    }

    /// Returns whether at least one fetch has completed successfully.
    #[must_use]
    pub const fn is_populated(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns whether the server has known messages awaiting moderation.
    #[must_use]
    pub fn needs_attention(&self) -> bool {
        self.pending.is_some_and(|count| count > 0)
    }

    /// Returns when the last successful fetch completed, if any.
    #[must_use]
    pub const fn last_checked_at(&self) -> Option<DateTime<Utc>> {
        self.last_checked_at
    }

    /// Returns whether the most recent fetch attempt failed.
    #[must_use]
    pub const fn last_fetch_failed(&self) -> bool {
        self.last_fetch_failed
    }

    /// Records a successful fetch of the pending-moderation count.
    pub fn record_success(&mut self, count: u64, clock: &impl Clock) {
        self.pending = Some(count);
        self.last_checked_at = Some(clock.utc());
        self.last_fetch_failed = false;
    }

    /// Records a failed fetch attempt.
    ///
    /// Only the transient failure marker changes; the previously known
    /// count and timestamp survive so the moderator still sees the last
    /// good value.
    pub const fn record_failure(&mut self) {
        self.last_fetch_failed = true;
    }

    /// Validates that a detail view may be opened for this server.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorDomainError::DetailViewRequiresPopulated`] while no
    /// fetch has ever succeeded; there is no queue to show yet.
    pub fn ensure_can_open_detail(&self) -> Result<(), MonitorDomainError> {
        if self.is_populated() {
            return Ok(());
        }

        Err(MonitorDomainError::DetailViewRequiresPopulated {
            name: self.name.clone(),
        })
    }
}
