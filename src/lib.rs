//! Golem - Declarative interactive fiction rules
//!
//! This crate re-exports all layers of the Golem system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: golem_storage    — Item arena, initial world construction
//! Layer 1: golem_language   — Tokenizer, parser, canonical printer
//! Layer 0: golem_foundation — Core types (Item, Tag, Error)
//! ```

pub use golem_foundation as foundation;
pub use golem_language as language;
pub use golem_storage as storage;
