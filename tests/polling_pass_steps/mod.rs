//! Step definitions for polling pass behaviour scenarios.

pub mod world;

mod given;
mod then;
mod when;
