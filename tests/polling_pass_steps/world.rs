//! Shared world state for polling pass BDD scenarios.

use modwatch::monitor::adapters::memory::{InMemoryConfigSource, ScriptedFetcher};
use modwatch::monitor::adapters::ChannelObserver;
use modwatch::monitor::domain::{
    ConfigRecordError, ConnectionParams, ServerCollection, ServerRecord,
};
use modwatch::monitor::services::{CancelFlag, PassReport, PollingService, RosterService};
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;

/// Scenario world for polling pass behaviour tests.
pub struct MonitorWorld {
    /// Configuration records queued for loading.
    pub records: Vec<ServerRecord>,
    /// Scripted fetch capability shared with the polling service.
    pub fetcher: Arc<ScriptedFetcher>,
    /// Collection produced by the last load.
    pub collection: Option<ServerCollection>,
    /// Records skipped during the last load.
    pub skipped: Vec<ConfigRecordError>,
    /// Report of the last polling pass.
    pub report: Option<PassReport>,
}

impl MonitorWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            fetcher: Arc::new(ScriptedFetcher::new()),
            collection: None,
            skipped: Vec::new(),
            report: None,
        }
    }
}

impl Default for MonitorWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> MonitorWorld {
    MonitorWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Builds the connection parameters used for a named scenario server.
pub fn scenario_connection(name: &str) -> Result<ConnectionParams, eyre::Report> {
    ConnectionParams::new([("address".to_owned(), format!("{name}.example.org"))])
        .map_err(|err| eyre::eyre!("invalid scenario connection params: {err}"))
}

/// Loads the world's records into a collection, recording skips.
pub fn load_collection(world: &mut MonitorWorld) -> Result<(), eyre::Report> {
    let roster = RosterService::new(Arc::new(InMemoryConfigSource::new(world.records.clone())));
    let loaded = run_async(roster.load()).map_err(|err| eyre::eyre!("load failed: {err}"))?;
    let (collection, skipped) = loaded.into_parts();
    world.collection = Some(collection);
    world.skipped = skipped;
    Ok(())
}

/// Runs one polling pass over the world's loaded collection.
pub fn run_pass(world: &mut MonitorWorld) -> Result<(), eyre::Report> {
    let mut collection = world
        .collection
        .take()
        .ok_or_else(|| eyre::eyre!("no loaded collection in scenario world"))?;
    let (observer, _notifications) = ChannelObserver::new();
    let poller = PollingService::new(
        Arc::clone(&world.fetcher),
        Arc::new(observer),
        Arc::new(DefaultClock),
    );
    let report = run_async(poller.run_pass(&mut collection, &CancelFlag::new()));
    world.collection = Some(collection);
    world.report = Some(report);
    Ok(())
}
