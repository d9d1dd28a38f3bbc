//! Integration tests for tags and items
//!
//! Tests tag upsert, ordering, and the canonical item form.

use golem_foundation::{Item, Tag, TagSet};

// =============================================================================
// Tags
// =============================================================================

#[test]
fn tag_display() {
    assert_eq!(Tag::positive("Lit").to_string(), "+Lit");
    assert_eq!(Tag::negative("Lit").to_string(), "-Lit");
}

#[test]
fn tag_set_upsert_keeps_one_entry() {
    let mut tags = TagSet::new();
    tags.insert(Tag::positive("Open"));
    tags.insert(Tag::negative("Open"));
    assert_eq!(tags.len(), 1);
    assert!(tags.contains("Open"));
    assert!(!tags.is_set("Open"));
}

#[test]
fn tag_set_is_ordered_by_name() {
    let tags: TagSet = [
        Tag::positive("Wet"),
        Tag::negative("Cold"),
        Tag::positive("Dark"),
    ]
    .into_iter()
    .collect();
    let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Cold", "Dark", "Wet"]);
}

#[test]
fn tag_set_merge_overwrites_sign() {
    let mut tags: TagSet = [Tag::positive("Open"), Tag::positive("Big")]
        .into_iter()
        .collect();
    let other: TagSet = [Tag::negative("Open")].into_iter().collect();
    tags.merge(&other);
    assert_eq!(tags.to_string(), "+Big-Open");
}

// =============================================================================
// Items
// =============================================================================

#[test]
fn item_canonical_form() {
    let chest = Item::new("chest")
        .with_tag(Tag::positive("Open"))
        .with_tag(Tag::negative("Locked"))
        .with_child(Item::new("key"))
        .with_child(Item::new("coin").with_tag(Tag::positive("Gold")));
    assert_eq!(chest.to_string(), "chest-Locked+Open[key, coin+Gold]");
}

#[test]
fn item_find_tagged_is_preorder() {
    let room = Item::new("room")
        .with_child(Item::new("box").with_child(Item::new("ring").with_tag(Tag::positive("PC"))))
        .with_child(Item::new("me").with_tag(Tag::positive("PC")));
    assert_eq!(room.find_tagged("PC").map(|i| i.name.as_str()), Some("ring"));
    assert_eq!(room.size(), 4);
}

#[test]
fn item_completeness() {
    assert!(Item::new("a").with_child(Item::new("b")).is_complete());
    assert!(!Item::new("a").with_child(Item::new("")).is_complete());
    assert!(!Item::default().is_complete());
}
