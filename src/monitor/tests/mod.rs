//! Unit tests for the monitor module.
