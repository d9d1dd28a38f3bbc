//! Integration tests for the lexer
//!
//! Tests tokenization of Golem documents.

use golem_language::{Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize_all(source)
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn name(s: &str) -> TokenKind {
    TokenKind::Name(s.to_string())
}

// =============================================================================
// Basic Tokens
// =============================================================================

#[test]
fn tokenize_empty() {
    assert_eq!(kinds(""), [TokenKind::End]);
    assert_eq!(kinds(" \t\r\n\x0B\x0C"), [TokenKind::End]);
}

#[test]
fn tokenize_punctuation() {
    assert_eq!(
        kinds(",;:.^[]+-"),
        [
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::Period,
            TokenKind::Caret,
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::End,
        ]
    );
}

#[test]
fn tokenize_declaration() {
    assert_eq!(
        kinds("chest+Open[key]."),
        [
            name("chest"),
            TokenKind::Plus,
            name("Open"),
            TokenKind::LBracket,
            name("key"),
            TokenKind::RBracket,
            TokenKind::Period,
            TokenKind::End,
        ]
    );
}

#[test]
fn tokenize_references() {
    assert_eq!(
        kinds("12[3]"),
        [
            TokenKind::Reference(12),
            TokenKind::LBracket,
            TokenKind::Reference(3),
            TokenKind::RBracket,
            TokenKind::End,
        ]
    );
}

#[test]
fn tokenize_digits_inside_names() {
    assert_eq!(kinds("room42"), [name("room42"), TokenKind::End]);
    assert_eq!(
        kinds("2nd"),
        [TokenKind::Reference(2), name("nd"), TokenKind::End]
    );
}

#[test]
fn tokenize_strings() {
    assert_eq!(
        kinds(r#""It's dark." 'Say "hi".'"#),
        [
            TokenKind::String("It's dark.".into()),
            TokenKind::String("Say \"hi\".".into()),
            TokenKind::End,
        ]
    );
}

#[test]
fn tokenize_string_has_no_escapes() {
    assert_eq!(
        kinds(r#""a\n""#),
        [TokenKind::String("a\\n".into()), TokenKind::End]
    );
}

#[test]
fn tokenize_unicode_name() {
    assert_eq!(kinds("épée."), [name("épée"), TokenKind::Period, TokenKind::End]);
}

// =============================================================================
// Comments
// =============================================================================

#[test]
fn comments_are_skipped() {
    assert_eq!(
        kinds("sword (a (rusty blade) ."),
        [name("sword"), TokenKind::Period, TokenKind::End]
    );
}

#[test]
fn comments_separate_names() {
    assert_eq!(
        kinds("old(worn)boot"),
        [name("old"), name("boot"), TokenKind::End]
    );
}

// =============================================================================
// Errors and Termination
// =============================================================================

#[test]
fn unterminated_comment_is_error() {
    let tokens = Lexer::tokenize_all("sword (rusty");
    assert!(matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::Error(_))));
}

#[test]
fn unterminated_string_is_error() {
    let tokens = Lexer::tokenize_all("bell: \"Dong.");
    assert!(matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::Error(_))));
}

#[test]
fn stray_close_paren_is_error() {
    let tokens = Lexer::tokenize_all("a)");
    assert_eq!(tokens[0].kind, name("a"));
    assert!(matches!(tokens[1].kind, TokenKind::Error(_)));
    assert_eq!(tokens.len(), 2);
}

#[test]
fn huge_reference_is_error() {
    let tokens = Lexer::tokenize_all("99999999999999999999");
    assert!(matches!(tokens[0].kind, TokenKind::Error(_)));
}

#[test]
fn nul_ends_input() {
    assert_eq!(kinds("a\0b"), [name("a"), TokenKind::End]);
}

#[test]
fn end_repeats() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token().kind, name("x"));
    for _ in 0..3 {
        assert_eq!(lexer.next_token().kind, TokenKind::End);
    }
}

#[test]
fn error_repeats() {
    let mut lexer = Lexer::new(")");
    let first = lexer.next_token().kind;
    assert!(matches!(first, TokenKind::Error(_)));
    assert_eq!(lexer.next_token().kind, first);
}

// =============================================================================
// Spans
// =============================================================================

#[test]
fn spans_track_lines_and_columns() {
    let source = "room.\n  box+Lit.";
    let tokens = Lexer::tokenize_all(source);
    let lit = &tokens[4];
    assert_eq!(lit.kind, name("Lit"));
    assert_eq!((lit.span.line, lit.span.column), (2, 7));
    assert_eq!(lit.text(source), "Lit");
    assert_eq!(lit.span.line_text(source), "  box+Lit.");
}
