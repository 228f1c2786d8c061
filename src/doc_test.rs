#![allow(clippy::float_cmp)]

use super::*;

fn asset(name: &str) -> Item {
    Item::new(ItemKind::Asset(name.to_owned()), None)
}

fn store_with(names: &[&str]) -> (SceneStore, Vec<ItemId>) {
    let mut store = SceneStore::new();
    let ids = names.iter().map(|n| store.add(asset(n))).collect();
    (store, ids)
}

// =============================================================
// ItemKind
// =============================================================

#[test]
fn kind_from_type_id() {
    assert_eq!(ItemKind::from_type_id("custom-text"), Some(ItemKind::Text));
    assert_eq!(ItemKind::from_type_id("tree"), Some(ItemKind::Asset("tree".into())));
    assert_eq!(ItemKind::from_type_id(""), None);
}

#[test]
fn kind_type_id_round_trips() {
    for id in ["custom-text", "tree", "house-2"] {
        let kind = ItemKind::from_type_id(id);
        assert_eq!(kind.as_ref().map(ItemKind::type_id), Some(id));
    }
}

#[test]
fn kind_serde_shape() {
    assert_eq!(serde_json::to_string(&ItemKind::Text).unwrap(), "\"text\"");
    assert_eq!(serde_json::to_string(&ItemKind::Asset("car".into())).unwrap(), "{\"asset\":\"car\"}");
}

// =============================================================
// Item
// =============================================================

#[test]
fn new_item_defaults() {
    let item = asset("tree");
    assert_eq!(item.position(), Point::new(0.0, 0.0));
    assert_eq!(item.transform.rotation, 0.0);
    assert_eq!(item.transform.scale, 1.0);
    assert!(!item.selected);
    assert!(item.content.is_none());
    assert_eq!((item.width, item.height), (100.0, 100.0));
}

#[test]
fn new_text_item_gets_placeholder() {
    let item = Item::new(ItemKind::Text, None);
    assert_eq!(item.content.as_deref(), Some("Double-click to edit"));
}

#[test]
fn new_text_item_keeps_given_content() {
    let item = Item::new(ItemKind::Text, Some("Hello".into()));
    assert_eq!(item.content.as_deref(), Some("Hello"));
}

#[test]
fn new_asset_ignores_content() {
    let item = Item::new(ItemKind::Asset("car".into()), Some("nope".into()));
    assert!(item.content.is_none());
}

#[test]
fn new_items_have_unique_ids() {
    let a = asset("x");
    let b = asset("x");
    assert_ne!(a.id, b.id);
}

#[test]
fn set_position_and_center() {
    let mut item = asset("tree").with_size(80.0, 40.0);
    item.set_position(Point::new(10.0, 20.0));
    assert_eq!(item.position(), Point::new(10.0, 20.0));
    assert_eq!(item.center(), Point::new(50.0, 40.0));
}

// =============================================================
// SceneStore structure
// =============================================================

#[test]
fn store_starts_empty() {
    let store = SceneStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.selected().is_none());
}

#[test]
fn store_keeps_insertion_order() {
    let (store, ids) = store_with(&["a", "b", "c"]);
    let order: Vec<ItemId> = store.items().iter().map(|i| i.id).collect();
    assert_eq!(order, ids);
}

#[test]
fn store_remove_returns_item_and_keeps_order() {
    let (mut store, ids) = store_with(&["a", "b", "c"]);
    let removed = store.remove(&ids[1]);
    assert_eq!(removed.map(|i| i.id), Some(ids[1]));
    let order: Vec<ItemId> = store.items().iter().map(|i| i.id).collect();
    assert_eq!(order, vec![ids[0], ids[2]]);
}

#[test]
fn store_remove_missing_is_none() {
    let (mut store, _) = store_with(&["a"]);
    assert!(store.remove(&Uuid::new_v4()).is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn store_clear() {
    let (mut store, _) = store_with(&["a", "b"]);
    store.clear();
    assert!(store.is_empty());
}

#[test]
fn store_replace_all() {
    let (mut store, old) = store_with(&["a", "b"]);
    let fresh = vec![asset("c"), asset("d"), asset("e")];
    let fresh_ids: Vec<ItemId> = fresh.iter().map(|i| i.id).collect();
    store.replace_all(fresh);
    assert_eq!(store.len(), 3);
    assert!(store.get(&old[0]).is_none());
    let order: Vec<ItemId> = store.items().iter().map(|i| i.id).collect();
    assert_eq!(order, fresh_ids);
}

#[test]
fn store_get_mut_writes_through() {
    let (mut store, ids) = store_with(&["a"]);
    if let Some(item) = store.get_mut(&ids[0]) {
        item.transform.rotation = 30.0;
    }
    assert_eq!(store.get(&ids[0]).map(|i| i.transform.rotation), Some(30.0));
}

// =============================================================
// SceneStore selection
// =============================================================

#[test]
fn select_is_singleton() {
    let (mut store, ids) = store_with(&["a", "b", "c"]);
    assert!(store.select(&ids[0]));
    assert!(store.select(&ids[1]));
    let selected: Vec<ItemId> = store.items().iter().filter(|i| i.selected).map(|i| i.id).collect();
    assert_eq!(selected, vec![ids[1]]);
    assert_eq!(store.selected(), Some(ids[1]));
}

#[test]
fn select_missing_changes_nothing() {
    let (mut store, ids) = store_with(&["a", "b"]);
    store.select(&ids[0]);
    assert!(!store.select(&Uuid::new_v4()));
    assert_eq!(store.selected(), Some(ids[0]));
}

#[test]
fn deselect_all_reports_change() {
    let (mut store, ids) = store_with(&["a", "b"]);
    assert!(!store.deselect_all());
    store.select(&ids[1]);
    assert!(store.deselect_all());
    assert!(store.selected().is_none());
}

#[test]
fn removing_selected_leaves_no_selection() {
    let (mut store, ids) = store_with(&["a", "b"]);
    store.select(&ids[0]);
    store.remove(&ids[0]);
    assert!(store.selected().is_none());
}
