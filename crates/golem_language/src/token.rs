//! Token types for the Golem authoring language.
//!
//! Tokens are the output of the lexer and input to the parser.

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }

    /// Returns true once the token stream is exhausted, either normally or
    /// after a lexical error.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self.kind, TokenKind::End | TokenKind::Error(_))
    }
}

/// Token types for the Golem authoring language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    // Punctuation
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `.`
    Period,
    /// `^` (lexed, but no grammar rule accepts it)
    Caret,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `+`
    Plus,
    /// `-`
    Minus,

    // Values
    /// A run of name characters like `chest` or `PC`
    Name(String),
    /// Quoted text like `"You swing!"`, without its quotes
    String(String),
    /// A participant ordinal like `2`
    Reference(u32),

    // Meta
    /// End of input
    End,
    /// Lexer error
    Error(String),
}

impl TokenKind {
    /// Returns the punctuation kind for a character, if it is one.
    #[must_use]
    pub fn punctuation(c: char) -> Option<Self> {
        Some(match c {
            ',' => Self::Comma,
            ';' => Self::Semicolon,
            ':' => Self::Colon,
            '.' => Self::Period,
            '^' => Self::Caret,
            '[' => Self::LBracket,
            ']' => Self::RBracket,
            '+' => Self::Plus,
            '-' => Self::Minus,
            _ => return None,
        })
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Comma => "','",
            Self::Semicolon => "';'",
            Self::Colon => "':'",
            Self::Period => "'.'",
            Self::Caret => "'^'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Name(_) => "name",
            Self::String(_) => "string",
            Self::Reference(_) => "reference",
            Self::End => "end of input",
            Self::Error(_) => "error",
        }
    }
}
