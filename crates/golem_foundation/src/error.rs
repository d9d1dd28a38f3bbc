//! Error types for the Golem system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for Golem operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a lexical error at the given position.
    #[must_use]
    pub fn lex(message: impl Into<String>, line: u32, column: u32, source_line: String) -> Self {
        Self::new(ErrorKind::LexError {
            message: message.into(),
            line,
            column,
            context: source_line,
        })
    }

    /// Creates a syntax error at the given position.
    #[must_use]
    pub fn syntax(
        message: impl Into<String>,
        line: u32,
        column: u32,
        source_line: String,
    ) -> Self {
        Self::new(ErrorKind::SyntaxError {
            message: message.into(),
            line,
            column,
            context: source_line,
        })
    }

    /// Creates a semantic error.
    #[must_use]
    pub fn semantic(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SemanticError(message.into()))
    }

    /// Creates the error raised when no item carries the player tag.
    #[must_use]
    pub fn no_player_character(tag: &str) -> Self {
        Self::semantic(format!("no item carries a positive {tag} tag"))
    }

    /// Returns true if this error came from the tokenizer.
    #[must_use]
    pub const fn is_lex_error(&self) -> bool {
        matches!(self.kind, ErrorKind::LexError { .. })
    }

    /// Returns true if this error is a grammar violation.
    #[must_use]
    pub const fn is_syntax_error(&self) -> bool {
        matches!(self.kind, ErrorKind::SyntaxError { .. })
    }

    /// Returns true if this error came from world construction.
    #[must_use]
    pub const fn is_semantic_error(&self) -> bool {
        matches!(self.kind, ErrorKind::SemanticError(_))
    }

    /// Returns the line and column of a lexical or syntax error.
    #[must_use]
    pub const fn position(&self) -> Option<(u32, u32)> {
        match &self.kind {
            ErrorKind::LexError { line, column, .. }
            | ErrorKind::SyntaxError { line, column, .. } => Some((*line, *column)),
            ErrorKind::SemanticError(_) => None,
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The tokenizer could not classify the input.
    #[error("lexical error at {line}:{column}: {message}")]
    LexError {
        /// Description of the lexical error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// The source line where the error occurred.
        context: String,
    },

    /// The token stream does not match the grammar.
    #[error("syntax error at {line}:{column}: {message}")]
    SyntaxError {
        /// Description of the syntax error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// The source line where the error occurred.
        context: String,
    },

    /// The rules parse but do not describe a usable world.
    #[error("semantic error: {0}")]
    SemanticError(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source document name.
    pub source: Option<String>,
    /// Index of the rule being processed, if any.
    pub rule: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source document name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the rule index.
    #[must_use]
    pub fn with_rule(mut self, rule: usize) -> Self {
        self.rule = Some(rule);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        if let Some(rule) = self.rule {
            if self.source.is_some() {
                write!(f, ", ")?;
            }
            write!(f, "rule #{}", rule + 1)?;
        }
        Ok(())
    }
}

/// Result type alias using the Golem error.
pub type Result<T> = std::result::Result<T, Error>;
