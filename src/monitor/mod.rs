//! Moderation queue monitoring for modwatch.
//!
//! This module owns the dynamic collection of mailing-list server
//! descriptors, the priority ordering that keeps servers needing moderator
//! attention at the top, and the serial polling pass that refreshes every
//! descriptor's pending count exactly once per invocation. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
