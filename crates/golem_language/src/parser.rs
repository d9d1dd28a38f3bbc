//! Parser for the Golem authoring language.
//!
//! A recursive-descent parser with one token of lookahead:
//!
//! ```text
//! tag    := ('+'|'-') NAME
//! item   := ( NAME | tag | '[' item (',' item)* ']' )+
//! rule   := item [',' item] [';' item (',' item)*] [':' effect (',' effect)*] '.'
//! effect := item | STRING | REF tag | REF '[' REF ']' | REF '[' item ']' | '-' REF
//! ```
//!
//! A narrative string may be the last effect of a rule without a closing
//! period. Any error aborts the whole parse.

use golem_foundation::{Error, ErrorContext, Item, Result, Tag, TagSet};

use crate::lexer::Lexer;
use crate::rule::{Effect, Reference, Rule};
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Parser for Golem documents.
pub struct Parser<'src> {
    /// The lexer providing tokens.
    lexer: Lexer<'src>,
    /// Current token (lookahead).
    current: Token,
    /// Source text (for error messages).
    source: &'src str,
}

/// Pieces of an item collected while parsing it.
#[derive(Default)]
struct ItemParts {
    words: Vec<String>,
    tags: TagSet,
    children: Vec<Item>,
    elements: usize,
}

impl ItemParts {
    fn finish(self) -> Item {
        Item {
            name: self.words.join(" "),
            tags: self.tags,
            children: self.children,
        }
    }
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            source,
        }
    }

    /// Parses every rule in the document.
    ///
    /// # Errors
    /// Returns a lexical or syntax error for the first problem found, or a
    /// syntax error if the document holds no rule at all.
    pub fn parse_all(&mut self) -> Result<Vec<Rule>> {
        let mut rules = Vec::new();
        loop {
            match &self.current.kind {
                TokenKind::End => break,
                TokenKind::Error(_) => return Err(self.unexpected("rule")),
                _ => rules.push(self.parse_rule()?),
            }
        }
        if rules.is_empty() {
            return Err(self.error("expected at least one rule"));
        }
        Ok(rules)
    }

    /// Parses a single rule.
    ///
    /// # Errors
    /// Returns an error if the tokens at the current position do not form a
    /// rule.
    pub fn parse_rule(&mut self) -> Result<Rule> {
        let mut rule = Rule::new(self.parse_item()?);

        if self.eat(&TokenKind::Comma) {
            rule.target = Some(self.parse_item()?);
        }

        if self.eat(&TokenKind::Semicolon) {
            rule.others.push(self.parse_item()?);
            while self.eat(&TokenKind::Comma) {
                rule.others.push(self.parse_item()?);
            }
            if self.current.kind != TokenKind::Colon {
                return Err(self.unexpected("':' after the others clause"));
            }
        }

        if self.eat(&TokenKind::Colon) {
            rule.effects = self.parse_effects()?;
        } else {
            self.expect(&TokenKind::Period)?;
        }

        Ok(rule)
    }

    /// Parses the effect list after `:`.
    fn parse_effects(&mut self) -> Result<Vec<Effect>> {
        let mut effects = Vec::new();
        loop {
            let effect = self.parse_effect()?;
            let narrative = matches!(effect, Effect::Narrate(_));
            effects.push(effect);

            match self.current.kind {
                TokenKind::Comma => self.advance(),
                TokenKind::Period => {
                    self.advance();
                    break;
                }
                _ if narrative => break,
                _ => return Err(self.unexpected("',' or '.' after effect")),
            }
        }
        Ok(effects)
    }

    /// Parses one effect.
    fn parse_effect(&mut self) -> Result<Effect> {
        match &self.current.kind {
            TokenKind::String(text) => {
                let text = text.clone();
                self.advance();
                Ok(Effect::Narrate(text))
            }
            TokenKind::Reference(n) => {
                let reference = *n;
                self.advance();
                self.parse_reference_effect(reference)
            }
            TokenKind::Minus => {
                self.advance();
                match &self.current.kind {
                    TokenKind::Reference(n) => {
                        let reference = *n;
                        self.advance();
                        Ok(Effect::Remove(reference))
                    }
                    TokenKind::Name(name) => {
                        // A spawned item that starts with a negative tag.
                        let mut parts = ItemParts::default();
                        parts.tags.insert(Tag::negative(name.clone()));
                        parts.elements = 1;
                        self.advance();
                        self.parse_item_from(parts).map(Effect::Spawn)
                    }
                    _ => Err(self.unexpected("reference or tag name after '-'")),
                }
            }
            TokenKind::Name(_) | TokenKind::Plus | TokenKind::LBracket => {
                self.parse_item().map(Effect::Spawn)
            }
            _ => Err(self.unexpected("effect")),
        }
    }

    /// Parses what follows a reference at the start of an effect.
    fn parse_reference_effect(&mut self, reference: Reference) -> Result<Effect> {
        match self.current.kind {
            TokenKind::Plus | TokenKind::Minus => Ok(Effect::Tag(reference, self.parse_tag()?)),
            TokenKind::LBracket => {
                self.advance();
                let effect = if let TokenKind::Reference(dest) = self.current.kind {
                    self.advance();
                    Effect::MoveInto(reference, dest)
                } else {
                    Effect::MoveIntoNew(reference, self.parse_item()?)
                };
                self.expect(&TokenKind::RBracket)?;
                Ok(effect)
            }
            _ => Err(self.unexpected("'+', '-' or '[' after reference")),
        }
    }

    /// Parses an item.
    fn parse_item(&mut self) -> Result<Item> {
        self.parse_item_from(ItemParts::default())
    }

    /// Continues parsing an item from already collected parts, stopping in
    /// front of `,`, `;`, `:`, `.` or `]`.
    fn parse_item_from(&mut self, mut parts: ItemParts) -> Result<Item> {
        loop {
            match &self.current.kind {
                TokenKind::Name(word) => {
                    parts.words.push(word.clone());
                    self.advance();
                }
                TokenKind::Plus | TokenKind::Minus => {
                    let tag = self.parse_tag()?;
                    parts.tags.insert(tag);
                }
                TokenKind::LBracket => {
                    self.advance();
                    parts.children.push(self.parse_item()?);
                    while self.eat(&TokenKind::Comma) {
                        parts.children.push(self.parse_item()?);
                    }
                    self.expect(&TokenKind::RBracket)?;
                }
                TokenKind::Comma
                | TokenKind::Semicolon
                | TokenKind::Colon
                | TokenKind::Period
                | TokenKind::RBracket
                    if parts.elements > 0 =>
                {
                    break;
                }
                _ if parts.elements == 0 => return Err(self.unexpected("item")),
                _ => return Err(self.unexpected("',', ';', ':', '.' or ']' after item")),
            }
            parts.elements += 1;
        }
        Ok(parts.finish())
    }

    /// Parses a signed tag.
    fn parse_tag(&mut self) -> Result<Tag> {
        let sign = match self.current.kind {
            TokenKind::Plus => true,
            TokenKind::Minus => false,
            _ => return Err(self.unexpected("'+' or '-'")),
        };
        self.advance();

        match &self.current.kind {
            TokenKind::Name(name) => {
                let tag = Tag::new(name.clone(), sign);
                self.advance();
                Ok(tag)
            }
            _ => Err(self.unexpected("tag name")),
        }
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Advances past the current token if it is of the given kind.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.current.kind == *kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects the current token to be of a specific kind, then advances.
    fn expect(&mut self, expected: &TokenKind) -> Result<()> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.unexpected(expected.name()))
        }
    }

    /// Creates an error for the current token when `expected` was wanted.
    ///
    /// A lexer error token is reported as a lexical error.
    fn unexpected(&self, expected: &str) -> Error {
        if let TokenKind::Error(message) = &self.current.kind {
            let span = self.current.span;
            return Error::lex(
                message.as_str(),
                span.line,
                span.column,
                self.context_at(span),
            );
        }
        self.error(&format!(
            "expected {expected}, found {}",
            self.current.kind.name()
        ))
    }

    /// Creates a syntax error at the current position.
    fn error(&self, message: &str) -> Error {
        self.error_at(self.current.span, message)
    }

    /// Creates a syntax error at a specific span.
    fn error_at(&self, span: Span, message: &str) -> Error {
        Error::syntax(message, span.line, span.column, self.context_at(span))
    }

    /// Gets the source line around a span for error messages.
    fn context_at(&self, span: Span) -> String {
        span.line_text(self.source).to_string()
    }
}

/// Parses a whole document into rules.
///
/// # Errors
/// Returns an error if the document cannot be parsed; no partial result is
/// produced.
pub fn parse(source: &str) -> Result<Vec<Rule>> {
    Parser::new(source).parse_all()
}

/// Parses a document, naming it in the context of any error.
///
/// # Errors
/// Same as [`parse`].
pub fn parse_named(name: &str, source: &str) -> Result<Vec<Rule>> {
    parse(source).map_err(|e| e.with_context(ErrorContext::new().with_source(name)))
}
