//! Configuration for world construction.

/// Tag that marks the player character unless configured otherwise.
pub const DEFAULT_PC_TAG: &str = "PC";

/// Configuration for building a [`World`](crate::World) from rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldConfig {
    /// Name of the positive tag that marks the player character.
    pub pc_tag: String,

    /// Reject declarations that carry a target or others clause instead of
    /// warning and discarding the clause.
    pub strict_declarations: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            pc_tag: DEFAULT_PC_TAG.to_string(),
            strict_declarations: false,
        }
    }
}

impl WorldConfig {
    /// Creates a configuration that treats extraneous declaration clauses
    /// as errors.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict_declarations: true,
            ..Self::default()
        }
    }

    /// Builder method to set the player tag.
    #[must_use]
    pub fn with_pc_tag(mut self, tag: impl Into<String>) -> Self {
        self.pc_tag = tag.into();
        self
    }

    /// Builder method to enable/disable strict declarations.
    #[must_use]
    pub fn with_strict_declarations(mut self, strict: bool) -> Self {
        self.strict_declarations = strict;
        self
    }
}
