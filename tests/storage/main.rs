//! Integration tests for Layer 2: Storage
//!
//! Tests for world construction and navigation.

mod world;
