//! Integration tests for Layer 0: Foundation
//!
//! Tests for tags, items, and errors.

mod errors;
mod items;
