//! Fetch capability port for per-server pending-count retrieval.

use crate::monitor::domain::ConnectionParams;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for fetch capability operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Capability contract: connect to one mailing-list server and return how
/// many messages await moderator approval.
///
/// Implementations own the wire protocol (authentication, scraping, API
/// calls) and are expected to apply their own bounded timeout so one
/// unreachable server cannot stall a polling pass indefinitely. They must
/// not mutate shared state and must not retry internally; retry policy
/// belongs to the caller.
#[async_trait]
pub trait QueueFetcher: Send + Sync {
    /// Fetches the current pending-moderation count for one server.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] describing why the server could not be
    /// reached, authenticated against, or understood.
    async fn fetch_pending(&self, connection: &ConnectionParams) -> FetchResult<u64>;
}

/// Errors returned by fetch capability implementations.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The server could not be reached.
    #[error("server '{address}' is unreachable: {source}")]
    Unreachable {
        /// Address the fetcher tried to reach.
        address: String,
        /// Underlying transport failure.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// The server rejected the configured credentials.
    #[error("authentication failed for '{address}': {reason}")]
    Authentication {
        /// Address the fetcher authenticated against.
        address: String,
        /// Server-provided rejection detail.
        reason: String,
    },

    /// The server responded with something the fetcher could not parse.
    #[error("malformed response from '{address}': {reason}")]
    MalformedResponse {
        /// Address that produced the response.
        address: String,
        /// Parse failure detail.
        reason: String,
    },

    /// The fetcher's own bounded timeout elapsed.
    #[error("fetch from '{address}' timed out")]
    Timeout {
        /// Address that failed to answer in time.
        address: String,
    },
}

impl FetchError {
    /// Wraps a transport error for an unreachable server.
    pub fn unreachable(
        address: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Unreachable {
            address: address.into(),
            source: Arc::new(err),
        }
    }

    /// Builds an authentication-rejected error.
    pub fn authentication(address: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Authentication {
            address: address.into(),
            reason: reason.into(),
        }
    }

    /// Builds a malformed-response error.
    pub fn malformed_response(address: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            address: address.into(),
            reason: reason.into(),
        }
    }

    /// Builds a timeout error.
    pub fn timeout(address: impl Into<String>) -> Self {
        Self::Timeout {
            address: address.into(),
        }
    }
}
