//! Port contracts for moderation queue monitoring.
//!
//! Ports define infrastructure-agnostic interfaces the monitor services
//! depend on: the per-server fetch capability, the configuration source,
//! and the collection-changed notification sink.

pub mod config;
pub mod fetcher;
pub mod observer;

pub use config::{ConfigSource, ConfigSourceError, ConfigSourceResult};
pub use fetcher::{FetchError, FetchResult, QueueFetcher};
pub use observer::ChangeObserver;
