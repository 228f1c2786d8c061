use super::*;
use crate::doc::ItemKind;
use crate::transform::ItemTransform;

fn asset_at(x: f64, y: f64) -> Item {
    let mut item = Item::new(ItemKind::Asset("tree".into()), None);
    item.transform = ItemTransform { x, y, rotation: 0.0, scale: 1.0 };
    item
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Geometry helpers
// =============================================================

#[test]
fn handle_positions_unrotated() {
    let item = asset_at(0.0, 0.0);
    let view = View::default();
    assert_eq!(handle_screen(&item, rotate_handle_local(&item), &view), pt(50.0, -20.0));
    assert_eq!(handle_screen(&item, scale_handle_local(&item), &view), pt(100.0, 100.0));
}

#[test]
fn handles_follow_zoom_and_pan() {
    let item = asset_at(0.0, 0.0);
    let view = View { pan_x: 10.0, pan_y: 20.0, zoom: 2.0, ..View::default() };
    assert_eq!(handle_screen(&item, scale_handle_local(&item), &view), pt(210.0, 220.0));
}

#[test]
fn body_contains_respects_rotation() {
    let mut item = asset_at(0.0, 0.0).with_size(100.0, 20.0);
    // Unrotated: a point below the thin box is outside.
    assert!(!body_contains(&item, pt(50.0, 50.0)));
    // Rotated 90° about the center (50, 10) the box spans y in [-40, 60].
    item.transform.rotation = 90.0;
    assert!(body_contains(&item, pt(50.0, 50.0)));
    assert!(!body_contains(&item, pt(5.0, 10.0)));
}

#[test]
fn body_contains_respects_scale() {
    let mut item = asset_at(0.0, 0.0);
    item.transform.scale = 0.5;
    // Box shrinks about (50, 50) to [25, 75].
    assert!(body_contains(&item, pt(30.0, 30.0)));
    assert!(!body_contains(&item, pt(10.0, 10.0)));
}

#[test]
fn zero_scale_body_is_never_hit() {
    let mut item = asset_at(0.0, 0.0);
    item.transform.scale = 0.0;
    assert!(!body_contains(&item, pt(50.0, 50.0)));
}

// =============================================================
// hit_test
// =============================================================

#[test]
fn empty_scene_hits_nothing() {
    assert!(hit_test(pt(10.0, 10.0), &SceneStore::new(), &View::default()).is_none());
}

#[test]
fn hits_body() {
    let mut scene = SceneStore::new();
    let id = scene.add(asset_at(0.0, 0.0));
    let hit = hit_test(pt(50.0, 50.0), &scene, &View::default());
    assert_eq!(hit, Some(Hit { item_id: id, part: HitPart::Body }));
}

#[test]
fn background_misses() {
    let mut scene = SceneStore::new();
    scene.add(asset_at(0.0, 0.0));
    assert!(hit_test(pt(300.0, 300.0), &scene, &View::default()).is_none());
}

#[test]
fn topmost_body_wins() {
    let mut scene = SceneStore::new();
    scene.add(asset_at(0.0, 0.0));
    let top = scene.add(asset_at(50.0, 50.0));
    let hit = hit_test(pt(75.0, 75.0), &scene, &View::default());
    assert_eq!(hit.map(|h| h.item_id), Some(top));
}

#[test]
fn body_hit_uses_world_space() {
    let mut scene = SceneStore::new();
    let id = scene.add(asset_at(0.0, 0.0));
    let view = View { pan_x: 100.0, pan_y: 100.0, zoom: 0.5, ..View::default() };
    // World (90, 90) -> screen (145, 145).
    assert_eq!(hit_test(pt(145.0, 145.0), &scene, &view).map(|h| h.item_id), Some(id));
    assert!(hit_test(pt(40.0, 40.0), &scene, &view).is_none());
}

#[test]
fn handles_ignored_when_unselected() {
    let mut scene = SceneStore::new();
    scene.add(asset_at(0.0, 0.0));
    assert!(hit_test(pt(50.0, -20.0), &scene, &View::default()).is_none());
}

#[test]
fn rotate_handle_on_selected() {
    let mut scene = SceneStore::new();
    let id = scene.add(asset_at(0.0, 0.0));
    scene.select(&id);
    let hit = hit_test(pt(52.0, -18.0), &scene, &View::default());
    assert_eq!(hit, Some(Hit { item_id: id, part: HitPart::RotateHandle }));
}

#[test]
fn scale_handle_beats_body() {
    let mut scene = SceneStore::new();
    let id = scene.add(asset_at(0.0, 0.0));
    scene.select(&id);
    let hit = hit_test(pt(98.0, 98.0), &scene, &View::default());
    assert_eq!(hit, Some(Hit { item_id: id, part: HitPart::ScaleHandle }));
}

#[test]
fn selected_handle_beats_item_on_top() {
    let mut scene = SceneStore::new();
    let below = scene.add(asset_at(0.0, 0.0));
    scene.add(asset_at(90.0, 90.0));
    scene.select(&below);
    let hit = hit_test(pt(100.0, 100.0), &scene, &View::default());
    assert_eq!(hit, Some(Hit { item_id: below, part: HitPart::ScaleHandle }));
}

#[test]
fn handle_radius_is_screen_space() {
    let mut scene = SceneStore::new();
    let id = scene.add(asset_at(0.0, 0.0));
    scene.select(&id);
    let view = View { zoom: 2.0, ..View::default() };
    // Scale handle at screen (200, 200); 7px away still hits at any zoom.
    let hit = hit_test(pt(207.0, 200.0), &scene, &view);
    assert_eq!(hit.map(|h| h.part), Some(HitPart::ScaleHandle));
}
