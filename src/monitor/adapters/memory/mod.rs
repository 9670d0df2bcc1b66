//! In-memory adapters for programmatic configuration and scripted fetching.

mod config;
mod fetcher;

pub use config::InMemoryConfigSource;
pub use fetcher::ScriptedFetcher;
