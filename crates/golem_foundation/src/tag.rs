//! Signed boolean tags and sorted tag sets.

use std::fmt;

/// A signed, boolean-named property of an item.
///
/// `+Open` is a positive tag, `-Open` a negative one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag {
    /// Tag name (never contains whitespace or punctuation).
    pub name: String,
    /// True for `+`, false for `-`.
    pub sign: bool,
}

impl Tag {
    /// Creates a new tag.
    #[must_use]
    pub fn new(name: impl Into<String>, sign: bool) -> Self {
        Self {
            name: name.into(),
            sign,
        }
    }

    /// Creates a positive tag.
    #[must_use]
    pub fn positive(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    /// Creates a negative tag.
    #[must_use]
    pub fn negative(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.sign { '+' } else { '-' };
        write!(f, "{sign}{}", self.name)
    }
}

/// A set of tags kept sorted and unique by name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagSet {
    tags: Vec<Tag>,
}

impl TagSet {
    /// Creates an empty tag set.
    #[must_use]
    pub const fn new() -> Self {
        Self { tags: Vec::new() }
    }

    /// Inserts a tag.
    ///
    /// If a tag with the same name is already present only its sign is
    /// overwritten and the new tag is dropped.
    pub fn insert(&mut self, tag: Tag) {
        match self.tags.binary_search_by(|t| t.name.cmp(&tag.name)) {
            Ok(index) => self.tags[index].sign = tag.sign,
            Err(index) => self.tags.insert(index, tag),
        }
    }

    /// Returns the tag with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.tags
            .binary_search_by(|t| t.name.as_str().cmp(name))
            .ok()
            .map(|index| &self.tags[index])
    }

    /// Returns true if a tag with this name is present, whatever its sign.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns true if a positive tag with this name is present.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some_and(|t| t.sign)
    }

    /// Number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if there are no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterates over tags in name order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    /// Upserts every tag of `other` into this set.
    pub fn merge(&mut self, other: &Self) {
        for tag in other {
            self.insert(tag.clone());
        }
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let mut set = Self::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in &self.tags {
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}
