//! Core item, tag, and error types for Golem.
//!
//! This crate provides:
//! - [`Tag`] and [`TagSet`] - Signed boolean properties, sorted and unique by name
//! - [`Item`] - Named, tagged, nestable objects as written in a document
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod item;
pub mod tag;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use item::Item;
pub use tag::{Tag, TagSet};
