//! Scripted fetch capability double.

use crate::monitor::domain::ConnectionParams;
use crate::monitor::ports::{FetchError, FetchResult, QueueFetcher};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Fetcher returning canned outcomes keyed by connection parameters.
///
/// Each connection carries a FIFO script of results; every invocation is
/// also recorded, so tests can assert exactly which servers a polling pass
/// visited and how often. An unscripted connection fails as unreachable.
#[derive(Debug, Default)]
pub struct ScriptedFetcher {
    state: Mutex<ScriptedState>,
}

#[derive(Debug, Default)]
struct ScriptedState {
    scripts: HashMap<ConnectionParams, VecDeque<FetchResult<u64>>>,
    calls: Vec<ConnectionParams>,
}

impl ScriptedFetcher {
    /// Creates a fetcher with no scripted outcomes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one outcome for the given connection.
    pub fn script(&self, connection: ConnectionParams, outcome: FetchResult<u64>) {
        if let Ok(mut state) = self.state.lock() {
            state.scripts.entry(connection).or_default().push_back(outcome);
        }
    }

    /// Returns every connection fetched so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<ConnectionParams> {
        self.state
            .lock()
            .map(|state| state.calls.clone())
            .unwrap_or_default()
    }
}

fn display_address(connection: &ConnectionParams) -> String {
    connection.get("address").unwrap_or("unknown").to_owned()
}

#[async_trait]
impl QueueFetcher for ScriptedFetcher {
    async fn fetch_pending(&self, connection: &ConnectionParams) -> FetchResult<u64> {
        let mut state = self.state.lock().map_err(|err| {
            FetchError::unreachable(
                display_address(connection),
                std::io::Error::other(err.to_string()),
            )
        })?;

        state.calls.push(connection.clone());
        state
            .scripts
            .get_mut(connection)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| {
                Err(FetchError::unreachable(
                    display_address(connection),
                    std::io::Error::other("no scripted outcome for connection"),
                ))
            })
    }
}
