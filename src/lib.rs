//! Modwatch: mailing-list moderation queue monitor.
//!
//! This crate tracks a set of independently configured mailing-list servers
//! and how many messages each one has waiting for moderator approval. A
//! serial polling pass refreshes every server's pending count, tolerates
//! per-server failures without aborting the batch, and keeps the collection
//! in priority order (servers needing attention first) after every update.
//!
//! # Architecture
//!
//! Modwatch follows hexagonal architecture principles:
//!
//! - **Domain**: Pure state and ordering rules with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for the fetch capability,
//!   configuration source, and change notifications
//! - **Adapters**: Concrete implementations of ports (in-memory, channel,
//!   filesystem)
//!
//! # Modules
//!
//! - [`monitor`]: Server descriptors, the priority-ordered collection, and
//!   the polling orchestration services

pub mod monitor;
