//! Cross-layer integration tests for Golem
//!
//! Tests that verify correct interaction between multiple crates.
