//! Lexer for the Golem authoring language.
//!
//! The lexer converts document text into a stream of tokens. Comments are
//! skipped entirely. Once the lexer reaches the end of input or a lexical
//! error it keeps returning that same token.

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer for Golem documents.
pub struct Lexer<'src> {
    /// Source text being tokenized (cut at the first NUL, if any).
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
    /// Set once `End` or `Error` has been produced.
    halted: Option<TokenKind>,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let source = source.find('\0').map_or(source, |nul| &source[..nul]);
        Self {
            source,
            rest: source,
            position: 0,
            line: 1,
            column: 1,
            halted: None,
        }
    }

    /// Returns the next token from the source.
    ///
    /// After `End` or an `Error` token every further call returns the same
    /// kind again, with an empty span at the stopping point.
    pub fn next_token(&mut self) -> Token {
        if let Some(kind) = &self.halted {
            return Token::new(
                kind.clone(),
                Span::point(self.position, self.line, self.column),
            );
        }

        let token = self.scan();
        if token.is_terminal() {
            self.halted = Some(token.kind.clone());
        }
        token
    }

    /// Tokenizes all source and returns a vector of tokens.
    ///
    /// The last token is `End` or `Error`.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let done = token.is_terminal();
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    /// Scans one token, skipping whitespace and comments first.
    fn scan(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            let start = self.position;
            let start_line = self.line;
            let start_column = self.column;

            let Some(c) = self.peek_char() else {
                return Token::new(
                    TokenKind::End,
                    Span::point(start, start_line, start_column),
                );
            };

            let kind = match c {
                '(' => match self.skip_comment() {
                    Some(error) => error,
                    None => continue,
                },
                ')' => {
                    self.advance();
                    TokenKind::Error("unexpected ')' outside a comment".into())
                }
                '"' | '\'' => self.scan_string(c),
                c if c.is_ascii_digit() => self.scan_reference(),
                c => match TokenKind::punctuation(c) {
                    Some(kind) => {
                        self.advance();
                        kind
                    }
                    None => self.scan_name(),
                },
            };

            return Token::new(
                kind,
                Span::new(start, self.position, start_line, start_column),
            );
        }
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(is_space) {
            self.advance();
        }
    }

    /// Skips a `(...)` comment. Returns an error token if it never closes.
    fn skip_comment(&mut self) -> Option<TokenKind> {
        self.advance(); // consume '('
        loop {
            match self.peek_char() {
                Some(')') => {
                    self.advance();
                    return None;
                }
                Some(_) => self.advance(),
                None => return Some(TokenKind::Error("unterminated comment".into())),
            }
        }
    }

    /// Scans a string delimited by `quote`. There are no escapes.
    fn scan_string(&mut self, quote: char) -> TokenKind {
        self.advance(); // consume opening quote
        let start = self.position;
        loop {
            match self.peek_char() {
                Some(c) if c == quote => {
                    let text = self.source[start..self.position].to_string();
                    self.advance();
                    return TokenKind::String(text);
                }
                Some(_) => self.advance(),
                None => return TokenKind::Error("unterminated string literal".into()),
            }
        }
    }

    /// Scans a maximal run of digits.
    fn scan_reference(&mut self) -> TokenKind {
        let start = self.position;
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        let text = &self.source[start..self.position];
        match text.parse::<u32>() {
            Ok(n) => TokenKind::Reference(n),
            Err(_) => TokenKind::Error(format!("reference out of range: {text}")),
        }
    }

    /// Scans a name: everything up to whitespace or a terminator character.
    fn scan_name(&mut self) -> TokenKind {
        let start = self.position;
        while self
            .peek_char()
            .is_some_and(|c| !is_space(c) && !is_terminator(c))
        {
            self.advance();
        }
        TokenKind::Name(self.source[start..self.position].to_string())
    }
}

/// Returns true for the characters C's `isspace` accepts.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Returns true if `c` ends a name.
fn is_terminator(c: char) -> bool {
    matches!(c, '(' | ')' | '"' | '\'') || TokenKind::punctuation(c).is_some()
}
