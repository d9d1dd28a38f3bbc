//! The initial world: an arena of items built from declaration rules.
//!
//! Declarations are applied in rule order. Each surviving subject becomes a
//! root of the world forest. A child whose name matches an existing root
//! adopts that root in place, so a world can be described piece by piece:
//!
//! ```
//! use golem_language::parse;
//! use golem_storage::build_world;
//!
//! let rules = parse("chest[key+PC]. hall[chest].").unwrap();
//! let world = build_world(&rules).unwrap();
//! assert_eq!(world[world.pc()].name(), "key");
//! assert_eq!(world[world.current()].name(), "hall");
//! ```

use std::fmt;
use std::ops::Index;

use golem_foundation::{Error, ErrorContext, Item, Result, TagSet};
use golem_language::Rule;
use log::{debug, info, warn};

use crate::config::WorldConfig;

/// Index of an item within a [`World`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(usize);

impl ItemId {
    /// Returns the arena index of this item.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Item({})", self.0)
    }
}

/// An item stored in the world arena.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    name: String,
    tags: TagSet,
    parent: Option<ItemId>,
    children: Vec<ItemId>,
}

impl Node {
    /// The item's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The item's tags.
    #[must_use]
    pub const fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// The item containing this one, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<ItemId> {
        self.parent
    }

    /// Items directly contained in this one, in order.
    #[must_use]
    pub fn children(&self) -> &[ItemId] {
        &self.children
    }

    /// Returns true if the named tag is present and positive.
    #[must_use]
    pub fn is_tagged(&self, tag: &str) -> bool {
        self.tags.is_set(tag)
    }
}

/// The initial world state.
///
/// Holds every declared item as a forest, along with the player character
/// and the top-level item that contains it.
#[derive(Clone, Debug)]
pub struct World {
    nodes: Vec<Node>,
    roots: Vec<ItemId>,
    pc: ItemId,
    current: ItemId,
}

impl World {
    /// The top-level items, in declaration order.
    #[must_use]
    pub fn roots(&self) -> &[ItemId] {
        &self.roots
    }

    /// The player character.
    #[must_use]
    pub const fn pc(&self) -> ItemId {
        self.pc
    }

    /// The top-level item containing the player character.
    #[must_use]
    pub const fn current(&self) -> ItemId {
        self.current
    }

    /// Number of items in the world.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the world holds no items. A built world always holds
    /// at least the player character.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up an item.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// The item containing `id`, if any.
    #[must_use]
    pub fn parent(&self, id: ItemId) -> Option<ItemId> {
        self.get(id).and_then(Node::parent)
    }

    /// Items directly contained in `id`.
    #[must_use]
    pub fn children(&self, id: ItemId) -> &[ItemId] {
        self.get(id).map_or(&[][..], Node::children)
    }

    /// The top-level ancestor of `id`, or `id` itself if it is a root.
    #[must_use]
    pub fn location(&self, id: ItemId) -> ItemId {
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        current
    }

    /// Finds the first item with the given name, in pre-order.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<ItemId> {
        self.preorder().find(|&id| self[id].name == name)
    }

    /// Returns true if `id` carries the named tag with a positive sign.
    #[must_use]
    pub fn is_tagged(&self, id: ItemId, tag: &str) -> bool {
        self.get(id).is_some_and(|node| node.is_tagged(tag))
    }

    /// Iterates over every item in pre-order: each root, then its subtree,
    /// before the next root.
    #[must_use]
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            world: self,
            stack: self.roots.iter().rev().copied().collect(),
        }
    }

    /// Rebuilds the owned item tree rooted at `id`.
    #[must_use]
    pub fn to_item(&self, id: ItemId) -> Option<Item> {
        let node = self.get(id)?;
        let children = node
            .children
            .iter()
            .filter_map(|&child| self.to_item(child))
            .collect();
        Some(Item {
            name: node.name.clone(),
            tags: node.tags.clone(),
            children,
        })
    }
}

impl Index<ItemId> for World {
    type Output = Node;

    fn index(&self, id: ItemId) -> &Node {
        &self.nodes[id.0]
    }
}

/// Pre-order iterator over a world's items.
#[derive(Debug)]
pub struct Preorder<'w> {
    world: &'w World,
    stack: Vec<ItemId>,
}

impl Iterator for Preorder<'_> {
    type Item = ItemId;

    fn next(&mut self) -> Option<ItemId> {
        let id = self.stack.pop()?;
        self.stack.extend(self.world.children(id).iter().rev().copied());
        Some(id)
    }
}

/// Builds a world incrementally from declarations.
#[derive(Debug)]
pub struct WorldBuilder {
    config: WorldConfig,
    nodes: Vec<Node>,
    roots: Vec<ItemId>,
    declared: usize,
}

impl Default for WorldBuilder {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}

impl WorldBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new(config: WorldConfig) -> Self {
        Self {
            config,
            nodes: Vec::new(),
            roots: Vec::new(),
            declared: 0,
        }
    }

    /// Applies one rule, identified by its position in the document.
    ///
    /// Behaviors are ignored. A declaration's target and others are discarded
    /// with a warning, or rejected when strict declarations are configured.
    /// A subject containing an unnamed item is dropped.
    ///
    /// # Errors
    ///
    /// Returns a semantic error for an extraneous clause under strict
    /// declarations.
    pub fn declare(&mut self, index: usize, rule: &Rule) -> Result<()> {
        if !rule.is_declaration() {
            return Ok(());
        }

        if rule.has_participants() {
            if self.config.strict_declarations {
                return Err(Error::semantic(format!(
                    "declaration of '{}' has a target or others clause",
                    rule.subject.name
                ))
                .with_context(ErrorContext::new().with_rule(index)));
            }
            warn!(
                "rule #{}: ignoring target/others clause on declaration of '{}'",
                index + 1,
                rule.subject.name
            );
        }

        if !rule.subject.is_complete() {
            debug!(
                "rule #{}: dropping declaration with an unnamed item",
                index + 1
            );
            return Ok(());
        }

        let id = self.alloc(&rule.subject, None);
        self.roots.push(id);
        self.attach_children(id, &rule.subject.children);
        self.declared += 1;
        Ok(())
    }

    /// Locates the player character and produces the world.
    ///
    /// # Errors
    ///
    /// Returns a semantic error if no item carries a positive player tag.
    pub fn finish(self) -> Result<World> {
        let mut world = World {
            nodes: self.nodes,
            roots: self.roots,
            pc: ItemId(0),
            current: ItemId(0),
        };

        let tag = &self.config.pc_tag;
        let pc = world
            .preorder()
            .find(|&id| world[id].is_tagged(tag))
            .ok_or_else(|| Error::no_player_character(tag))?;
        world.pc = pc;
        world.current = world.location(pc);

        info!(
            "built world from {} declarations: {} items in {} roots, '{}' starts in '{}'",
            self.declared,
            world.len(),
            world.roots.len(),
            world[pc].name,
            world[world.current].name
        );
        Ok(world)
    }

    fn alloc(&mut self, item: &Item, parent: Option<ItemId>) -> ItemId {
        let id = ItemId(self.nodes.len());
        self.nodes.push(Node {
            name: item.name.clone(),
            tags: item.tags.clone(),
            parent,
            children: Vec::new(),
        });
        id
    }

    fn attach_children(&mut self, parent: ItemId, children: &[Item]) {
        for child in children {
            self.attach(parent, child);
        }
    }

    fn attach(&mut self, parent: ItemId, item: &Item) {
        let id = match self.adoptable_root(parent, &item.name) {
            Some(root) => {
                debug!(
                    "'{}' adopts top-level '{}'",
                    self.nodes[parent.0].name, item.name
                );
                self.roots.retain(|&r| r != root);
                let node = &mut self.nodes[root.0];
                node.parent = Some(parent);
                node.tags.merge(&item.tags);
                root
            }
            None => self.alloc(item, Some(parent)),
        };
        self.nodes[parent.0].children.push(id);
        self.attach_children(id, &item.children);
    }

    /// First root named `name` that is not the tree `parent` belongs to.
    fn adoptable_root(&self, parent: ItemId, name: &str) -> Option<ItemId> {
        let own = self.root_of(parent);
        self.roots
            .iter()
            .copied()
            .find(|&root| root != own && self.nodes[root.0].name == name)
    }

    fn root_of(&self, id: ItemId) -> ItemId {
        let mut current = id;
        while let Some(parent) = self.nodes[current.0].parent {
            current = parent;
        }
        current
    }
}

/// Builds the initial world from parsed rules with the default configuration.
///
/// # Errors
///
/// Returns a semantic error if no item is tagged as the player character.
pub fn build_world(rules: &[Rule]) -> Result<World> {
    build_world_with_config(rules, WorldConfig::default())
}

/// Builds the initial world from parsed rules.
///
/// # Errors
///
/// Returns a semantic error if no item is tagged as the player character, or
/// if a declaration carries a target or others clause under strict
/// declarations.
pub fn build_world_with_config(rules: &[Rule], config: WorldConfig) -> Result<World> {
    let mut builder = WorldBuilder::new(config);
    for (index, rule) in rules.iter().enumerate() {
        builder.declare(index, rule)?;
    }
    builder.finish()
}
