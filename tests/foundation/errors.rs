//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use golem_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_lex() {
    let err = Error::lex("unterminated string literal", 3, 7, "say \"hi".into());
    assert!(err.is_lex_error());
    assert_eq!(err.position(), Some((3, 7)));
    assert_eq!(
        err.to_string(),
        "lexical error at 3:7: unterminated string literal"
    );
}

#[test]
fn error_syntax() {
    let err = Error::syntax("expected '.'", 1, 6, "sword".into());
    assert!(err.is_syntax_error());
    assert!(!err.is_lex_error());
    match err.kind {
        ErrorKind::SyntaxError { context, .. } => assert_eq!(context, "sword"),
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn error_semantic_has_no_position() {
    let err = Error::semantic("nothing to do");
    assert!(err.is_semantic_error());
    assert_eq!(err.position(), None);
    assert_eq!(err.to_string(), "semantic error: nothing to do");
}

#[test]
fn error_no_player_character_names_tag() {
    let err = Error::no_player_character("Hero");
    assert!(err.is_semantic_error());
    assert!(err.to_string().contains("positive Hero tag"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_with_context() {
    let err = Error::semantic("bad declaration")
        .with_context(ErrorContext::new().with_source("cave.golem").with_rule(2));
    let context = err.context.unwrap();
    assert_eq!(context.source.as_deref(), Some("cave.golem"));
    assert_eq!(context.rule, Some(2));
    assert_eq!(context.to_string(), "in cave.golem, rule #3");
}

#[test]
fn error_context_rule_only() {
    assert_eq!(ErrorContext::new().with_rule(0).to_string(), "rule #1");
}
