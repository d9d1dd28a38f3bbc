//! Item arena and initial world construction for Golem.
//!
//! This crate provides:
//! - [`World`] - The declared items as a forest, with the player character
//! - [`WorldBuilder`] - Incremental construction from declaration rules
//! - [`WorldConfig`] - Player tag and declaration strictness

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod world;

pub use config::WorldConfig;
pub use world::{ItemId, Node, Preorder, World, WorldBuilder, build_world, build_world_with_config};
