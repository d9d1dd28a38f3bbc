//! Items: named, tagged, nestable objects.

use std::fmt;

use crate::tag::{Tag, TagSet};

/// An item as written in a document: a room, container, character or prop.
///
/// Items own their children. Parent links only exist once items are placed
/// in a world.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Item name; words are separated by single spaces. May be empty until
    /// validated.
    pub name: String,
    /// Tags, sorted and unique by name.
    pub tags: TagSet,
    /// Contained items in declaration order.
    pub children: Vec<Item>,
}

impl Item {
    /// Creates an item with the given name and no tags or children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: TagSet::new(),
            children: Vec::new(),
        }
    }

    /// Builder method adding a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.insert(tag);
        self
    }

    /// Builder method appending a child.
    #[must_use]
    pub fn with_child(mut self, child: Item) -> Self {
        self.children.push(child);
        self
    }

    /// Upserts a tag (see [`TagSet::insert`]).
    pub fn insert_tag(&mut self, tag: Tag) {
        self.tags.insert(tag);
    }

    /// Returns the tag with the given name, whatever its sign.
    #[must_use]
    pub fn tag(&self, name: &str) -> Option<&Tag> {
        self.tags.get(name)
    }

    /// Returns true if this item carries a positive tag with this name.
    #[must_use]
    pub fn is_tagged(&self, name: &str) -> bool {
        self.tags.is_set(name)
    }

    /// Returns true if this item and all its descendants have a name.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && self.children.iter().all(Item::is_complete)
    }

    /// Finds the first item carrying a positive `tag`, searching this item
    /// then its children depth first.
    #[must_use]
    pub fn find_tagged(&self, tag: &str) -> Option<&Item> {
        if self.is_tagged(tag) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_tagged(tag))
    }

    /// Number of items in this tree, including this one.
    #[must_use]
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Item::size).sum::<usize>()
    }
}

impl fmt::Display for Item {
    /// Writes the canonical form: name, tags in order, then all children in
    /// a single bracket group.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.tags)?;
        if !self.children.is_empty() {
            f.write_str("[")?;
            for (i, child) in self.children.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{child}")?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}
