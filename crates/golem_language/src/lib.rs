//! Tokenizer, parser, and rule syntax tree for the Golem authoring language.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of Golem documents
//! - [`Parser`] - Parsing tokens into [`Rule`]s and [`Effect`]s
//! - [`pretty`] - Printing rules back to canonical source

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lexer;
pub mod parser;
pub mod pretty;
pub mod rule;
pub mod span;
pub mod token;


pub use lexer::Lexer;
pub use parser::{Parser, parse, parse_named};
pub use rule::{Effect, Reference, Rule};
pub use span::Span;
pub use token::{Token, TokenKind};
