//! Configuration source port for server definitions.

use crate::monitor::domain::ServerRecord;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for configuration source operations.
pub type ConfigSourceResult<T> = Result<T, ConfigSourceError>;

/// Contract for enumerating configured server records.
///
/// A source yields raw [`ServerRecord`]s; validating individual records is
/// the collection's job, so one malformed entry never turns into a source
/// failure. A source error means the store itself could not be read and is
/// fatal to the load.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Enumerates every configured server record.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigSourceError`] when the configuration store cannot be
    /// read at all.
    async fn enumerate(&self) -> ConfigSourceResult<Vec<ServerRecord>>;
}

/// Errors returned by configuration source implementations.
#[derive(Debug, Clone, Error)]
pub enum ConfigSourceError {
    /// The configuration store could not be read.
    #[error("configuration source unreadable: {0}")]
    Unreadable(Arc<dyn std::error::Error + Send + Sync>),
}

impl ConfigSourceError {
    /// Wraps an underlying store failure.
    pub fn unreadable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unreadable(Arc::new(err))
    }
}
