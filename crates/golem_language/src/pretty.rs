//! Canonical printer for rules.
//!
//! Converts rules back to Golem source. Printing then parsing a parsed
//! document yields the same rules.
//!
//! # Example
//!
//! ```
//! use golem_language::{parse, pretty::print_rules};
//!
//! let rules = parse("room [sword] [shield] (the armory) +Lit.").unwrap();
//! assert_eq!(print_rules(&rules), "room+Lit[sword, shield].");
//! ```

use std::fmt::Write;

use crate::rule::{Effect, Rule};

/// Print a rule in canonical form, always closed by a period.
#[must_use]
pub fn print_rule(rule: &Rule) -> String {
    let mut out = rule.subject.to_string();

    if let Some(target) = &rule.target {
        let _ = write!(out, ", {target}");
    }

    if !rule.others.is_empty() {
        out.push_str("; ");
        push_joined(&mut out, rule.others.iter().map(ToString::to_string));
    }

    if !rule.effects.is_empty() {
        out.push_str(": ");
        push_joined(&mut out, rule.effects.iter().map(print_effect));
    }

    out.push('.');
    out
}

/// Print multiple rules, one per line.
#[must_use]
pub fn print_rules(rules: &[Rule]) -> String {
    rules.iter().map(print_rule).collect::<Vec<_>>().join("\n")
}

/// Print a single effect.
#[must_use]
pub fn print_effect(effect: &Effect) -> String {
    match effect {
        Effect::Spawn(item) => item.to_string(),
        Effect::Narrate(text) => quote(text),
        Effect::Tag(reference, tag) => format!("{reference}{tag}"),
        Effect::MoveInto(source, dest) => format!("{source}[{dest}]"),
        Effect::MoveIntoNew(source, item) => format!("{source}[{item}]"),
        Effect::Remove(reference) => format!("-{reference}"),
    }
}

/// Quote narrative text. Strings have no escapes, so single quotes are used
/// when the text holds a double quote.
fn quote(text: &str) -> String {
    let q = if text.contains('"') { '\'' } else { '"' };
    format!("{q}{text}{q}")
}

fn push_joined(out: &mut String, parts: impl Iterator<Item = String>) {
    for (i, part) in parts.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&part);
    }
}
