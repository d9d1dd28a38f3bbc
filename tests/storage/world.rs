//! Integration tests for World construction
//!
//! Tests player discovery, declaration handling, and item adoption.

use golem_foundation::{Item, Tag};
use golem_language::{Rule, parse};
use golem_storage::{World, WorldBuilder, WorldConfig, build_world, build_world_with_config};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn build(source: &str) -> World {
    init_logging();
    build_world(&parse(source).unwrap()).unwrap()
}

fn name(world: &World, id: golem_storage::ItemId) -> &str {
    world[id].name()
}

// =============================================================================
// Player Discovery
// =============================================================================

#[test]
fn pc_in_nested_item() {
    let world = build("forest[clearing[+PC fox]]. cave.");
    assert_eq!(name(&world, world.pc()), "fox");
    assert_eq!(name(&world, world.current()), "forest");
}

#[test]
fn pc_search_follows_declaration_order() {
    let world = build("a[b]. c+PC. d+PC.");
    assert_eq!(name(&world, world.pc()), "c");
    assert_eq!(world.current(), world.pc());
}

#[test]
fn missing_pc_fails() {
    init_logging();
    let err = build_world(&parse("room[table, chair].").unwrap()).unwrap_err();
    assert!(err.is_semantic_error());
}

#[test]
fn pc_only_in_behavior_does_not_count() {
    init_logging();
    let err = build_world(&parse("room. lamp: +PC ghost.").unwrap()).unwrap_err();
    assert!(err.is_semantic_error());
}

// =============================================================================
// Declarations
// =============================================================================

#[test]
fn declaration_target_is_discarded() {
    let world = build("+PC me, door.");
    assert_eq!(world.len(), 1);
    assert!(world.find_by_name("door").is_none());
}

#[test]
fn strict_mode_rejects_declaration_target() {
    init_logging();
    let rules = parse("room. +PC me, door.").unwrap();
    let err = build_world_with_config(&rules, WorldConfig::strict()).unwrap_err();
    assert!(err.is_semantic_error());
    assert_eq!(err.context.and_then(|c| c.rule), Some(1));
}

#[test]
fn nameless_items_are_dropped() {
    let world = build("+PC. room[+Lit]. +PC me.");
    assert_eq!(world.len(), 1);
    assert_eq!(name(&world, world.pc()), "me");
}

#[test]
fn builder_accepts_rules_one_at_a_time() {
    init_logging();
    let mut builder = WorldBuilder::new(WorldConfig::default());
    let rules = [
        Rule::new(Item::new("hall").with_child(Item::new("chest"))),
        Rule::new(Item::new("chest").with_child(Item::new("key").with_tag(Tag::positive("PC")))),
    ];
    for (i, rule) in rules.iter().enumerate() {
        builder.declare(i, rule).unwrap();
    }
    let world = builder.finish().unwrap();
    assert_eq!(name(&world, world.pc()), "key");
    assert_eq!(name(&world, world.current()), "chest");
    assert_eq!(world.roots().len(), 2);
}

// =============================================================================
// Adoption
// =============================================================================

#[test]
fn later_container_adopts_earlier_item() {
    let world = build("chest[key+PC]. hall[chest].");
    assert_eq!(name(&world, world.pc()), "key");
    assert_eq!(name(&world, world.current()), "hall");
    assert_eq!(world.roots().len(), 1);
    assert_eq!(world.len(), 3);
}

#[test]
fn adoption_chains() {
    let world = build("key+PC. chest[key]. hall[chest]. castle[hall].");
    assert_eq!(name(&world, world.current()), "castle");
    let chain: Vec<&str> = std::iter::successors(Some(world.pc()), |&id| world.parent(id))
        .map(|id| name(&world, id))
        .collect();
    assert_eq!(chain, ["key", "chest", "hall", "castle"]);
}

#[test]
fn only_roots_are_adopted() {
    let world = build("room[lamp]. +PC me[lamp].");
    assert_eq!(world.len(), 4);
    assert_eq!(world.roots().len(), 2);
}

#[test]
fn world_to_item_reflects_adoption() {
    let world = build("chest-Open[key]. +PC hall[chest+Big].");
    let hall = world.to_item(world.current()).unwrap();
    assert_eq!(hall.to_string(), "hall+PC[chest+Big-Open[key]]");
}
