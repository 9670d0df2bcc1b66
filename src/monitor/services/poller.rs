//! Polling pass orchestration.
//!
//! Provides [`PollingService`], which drives one end-to-end refresh pass
//! over a [`ServerCollection`]: notify, fetch each server once, apply the
//! result, re-sort, notify again. Failures are data, not control flow; a
//! pass always runs to completion unless cooperatively cancelled.

use crate::monitor::domain::{ServerCollection, ServerId, ServerName};
use crate::monitor::ports::{ChangeObserver, FetchError, QueueFetcher};
use mockable::Clock;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::task::JoinHandle;

/// Cooperative cancellation flag shared between a pass and its launcher.
///
/// The pass checks the flag before every descriptor, so cancelling stops
/// the sweep at the next server boundary without interrupting an in-flight
/// fetch.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    inner: Arc<AtomicBool>,
}

impl CancelFlag {
    /// Creates a flag in the not-cancelled state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation of the associated pass.
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::Relaxed);
    }

    /// Returns whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }
}

/// Result of one fetch attempt within a pass.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// The server answered; the descriptor now holds this count.
    Updated(u64),
    /// The fetch failed; the descriptor's prior state was preserved.
    Failed(FetchError),
}

/// One per-server row of a pass report.
#[derive(Debug, Clone)]
pub struct ServerPassOutcome {
    id: ServerId,
    name: ServerName,
    outcome: FetchOutcome,
}

impl ServerPassOutcome {
    /// Returns the descriptor identifier this row describes.
    #[must_use]
    pub const fn id(&self) -> ServerId {
        self.id
    }

    /// Returns the server name this row describes.
    #[must_use]
    pub const fn name(&self) -> &ServerName {
        &self.name
    }

    /// Returns the fetch outcome.
    #[must_use]
    pub const fn outcome(&self) -> &FetchOutcome {
        &self.outcome
    }
}

/// Structured report of one completed (or cancelled) polling pass.
///
/// Outcomes appear in attempt order, one row per descriptor visited. Errors
/// live here as data for the reporting sink; nothing in a pass escalates.
#[derive(Debug, Clone, Default)]
pub struct PassReport {
    outcomes: Vec<ServerPassOutcome>,
    cancelled: bool,
}

impl PassReport {
    /// Returns all per-server outcomes in attempt order.
    #[must_use]
    pub fn outcomes(&self) -> &[ServerPassOutcome] {
        &self.outcomes
    }

    /// Returns whether the pass stopped early due to cancellation.
    #[must_use]
    pub const fn was_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Iterates over the servers whose fetch failed this pass.
    pub fn failures(&self) -> impl Iterator<Item = (&ServerName, &FetchError)> {
        self.outcomes.iter().filter_map(|row| match row.outcome() {
            FetchOutcome::Failed(err) => Some((row.name(), err)),
            FetchOutcome::Updated(_) => None,
        })
    }
}

/// Orchestrator for one serial refresh pass over a server collection.
///
/// The service owns no collection itself; the caller passes exclusive
/// access in for the duration of a pass. Observer notifications are the
/// only signal that crosses back out, and each one corresponds to a
/// freshly re-sorted, consistent collection.
pub struct PollingService<F, O, C>
where
    F: QueueFetcher,
    O: ChangeObserver,
    C: Clock + Send + Sync,
{
    fetcher: Arc<F>,
    observer: Arc<O>,
    clock: Arc<C>,
}

// Manual impl: the capability implementations behind the Arcs do not need
// to be Clone for the handles themselves to be.
impl<F, O, C> Clone for PollingService<F, O, C>
where
    F: QueueFetcher,
    O: ChangeObserver,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            observer: Arc::clone(&self.observer),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<F, O, C> PollingService<F, O, C>
where
    F: QueueFetcher,
    O: ChangeObserver,
    C: Clock + Send + Sync,
{
    /// Creates a polling service over the given capability implementations.
    #[must_use]
    pub const fn new(fetcher: Arc<F>, observer: Arc<O>, clock: Arc<C>) -> Self {
        Self {
            fetcher,
            observer,
            clock,
        }
    }

    /// Runs one complete refresh pass over the collection.
    ///
    /// The observer is notified immediately, so consumers see the loaded
    /// but not-yet-populated list without waiting for the first fetch.
    /// Iteration walks a snapshot of descriptor identities taken at pass
    /// start: every descriptor present then is attempted exactly once, no
    /// matter how the per-step re-sorting permutes positions.
    ///
    /// A failed fetch is recorded in the report and on the descriptor's
    /// transient failure marker; prior known state is never erased, and the
    /// pass always continues to the next server.
    pub async fn run_pass(
        &self,
        collection: &mut ServerCollection,
        cancel: &CancelFlag,
    ) -> PassReport {
        self.observer.collection_changed();

        let ids = collection.ids();
        let mut outcomes = Vec::with_capacity(ids.len());
        let mut cancelled = false;

        for id in ids {
            if cancel.is_cancelled() {
                tracing::debug!(attempted = outcomes.len(), "polling pass cancelled");
                cancelled = true;
                break;
            }

            let Some((name, connection)) = collection
                .get(id)
                .map(|d| (d.name().clone(), d.connection().clone()))
            else {
                continue;
            };

            let outcome = match self.fetcher.fetch_pending(&connection).await {
                Ok(count) => {
                    if let Some(descriptor) = collection.descriptor_mut(id) {
                        descriptor.record_success(count, &*self.clock);
                    }
                    FetchOutcome::Updated(count)
                }
                Err(err) => {
                    tracing::warn!(server = %name, error = %err, "fetch failed; keeping last known state");
                    if let Some(descriptor) = collection.descriptor_mut(id) {
                        descriptor.record_failure();
                    }
                    FetchOutcome::Failed(err)
                }
            };

            // Re-sort inside the loop so servers with pending messages
            // bubble to the top while the pass is still running.
            collection.reorder();
            self.observer.collection_changed();

            outcomes.push(ServerPassOutcome { id, name, outcome });
        }

        PassReport {
            outcomes,
            cancelled,
        }
    }

    /// Launches a pass on a background task.
    ///
    /// The collection moves into the task for the duration of the pass and
    /// is handed back with the report, so no caller can observe mid-pass
    /// mutation except through the observer.
    pub fn spawn_pass(
        &self,
        collection: ServerCollection,
        cancel: CancelFlag,
    ) -> JoinHandle<(ServerCollection, PassReport)>
    where
        F: 'static,
        O: 'static,
        C: 'static,
    {
        let service = self.clone();
        tokio::spawn(async move {
            let mut owned = collection;
            let report = service.run_pass(&mut owned, &cancel).await;
            (owned, report)
        })
    }
}
