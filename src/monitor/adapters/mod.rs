//! Adapter implementations for the monitor ports.

pub mod memory;

mod channel;
mod fs;

pub use channel::{ChannelObserver, CollectionChanged};
pub use fs::JsonConfigSource;
