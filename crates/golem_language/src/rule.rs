//! Rules and effects: the syntax tree of a Golem document.

use std::fmt;

use golem_foundation::{Item, Tag};

use crate::pretty;

/// A 1-based ordinal over a rule's participants `[subject, target, others...]`.
///
/// The parser never resolves references; see [`Rule::participant`].
pub type Reference = u32;

/// One declared consequence of a behavior rule.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// Create a new item: `box+Closed[key]`
    Spawn(Item),
    /// Show narrative text: `"The door creaks."`
    Narrate(String),
    /// Tag a participant: `1+Open`
    Tag(Reference, Tag),
    /// Move a participant into another participant: `3[1]`
    MoveInto(Reference, Reference),
    /// Move a participant into a freshly declared item: `1[box]`
    MoveIntoNew(Reference, Item),
    /// Remove a participant: `-1`
    Remove(Reference),
}

impl Effect {
    /// Returns the participant references this effect mentions.
    #[must_use]
    pub fn references(&self) -> Vec<Reference> {
        match self {
            Self::Spawn(_) | Self::Narrate(_) => Vec::new(),
            Self::Tag(r, _) | Self::MoveIntoNew(r, _) | Self::Remove(r) => vec![*r],
            Self::MoveInto(source, dest) => vec![*source, *dest],
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&pretty::print_effect(self))
    }
}

/// A declaration or a behavior.
///
/// A rule without effects is a declaration and seeds the initial world.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    /// The item the rule is about.
    pub subject: Item,
    /// Optional item the subject acts on (`subject, target`).
    pub target: Option<Item>,
    /// Further items that must be present (`; other, other`).
    pub others: Vec<Item>,
    /// Effects in declaration order; empty for declarations.
    pub effects: Vec<Effect>,
}

impl Rule {
    /// Creates a declaration rule for the given subject.
    #[must_use]
    pub fn new(subject: Item) -> Self {
        Self {
            subject,
            target: None,
            others: Vec::new(),
            effects: Vec::new(),
        }
    }

    /// Builder method setting the target.
    #[must_use]
    pub fn with_target(mut self, target: Item) -> Self {
        self.target = Some(target);
        self
    }

    /// Builder method appending to the others clause.
    #[must_use]
    pub fn with_other(mut self, other: Item) -> Self {
        self.others.push(other);
        self
    }

    /// Builder method appending an effect.
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Returns true if this rule only declares items.
    #[must_use]
    pub fn is_declaration(&self) -> bool {
        self.effects.is_empty()
    }

    /// Returns true if a target or others clause is present.
    #[must_use]
    pub fn has_participants(&self) -> bool {
        self.target.is_some() || !self.others.is_empty()
    }

    /// Resolves a reference against `[subject, target, others...]`.
    ///
    /// Slot 2 always denotes the target, so without a target `2` resolves to
    /// nothing and the others start at `3`.
    #[must_use]
    pub fn participant(&self, reference: Reference) -> Option<&Item> {
        match reference {
            0 => None,
            1 => Some(&self.subject),
            2 => self.target.as_ref(),
            n => self.others.get(usize::try_from(n - 3).ok()?),
        }
    }

    /// Returns the references used by effects that name no participant.
    #[must_use]
    pub fn dangling_references(&self) -> Vec<Reference> {
        self.effects
            .iter()
            .flat_map(Effect::references)
            .filter(|r| self.participant(*r).is_none())
            .collect()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&pretty::print_rule(self))
    }
}
