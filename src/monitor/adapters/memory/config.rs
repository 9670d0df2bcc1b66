//! In-memory configuration source.

use crate::monitor::domain::ServerRecord;
use crate::monitor::ports::{ConfigSource, ConfigSourceResult};
use async_trait::async_trait;

/// Configuration source backed by a record vector.
///
/// Used wherever server definitions are assembled programmatically rather
/// than read from a store, and as the default source in tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigSource {
    records: Vec<ServerRecord>,
}

impl InMemoryConfigSource {
    /// Creates a source over the given records.
    #[must_use]
    pub const fn new(records: Vec<ServerRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl ConfigSource for InMemoryConfigSource {
    async fn enumerate(&self) -> ConfigSourceResult<Vec<ServerRecord>> {
        Ok(self.records.clone())
    }
}
