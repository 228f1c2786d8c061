#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{HANDLE_RADIUS_PX, ROTATE_HANDLE_OFFSET};
use crate::doc::{Item, ItemId, SceneStore};
use crate::view::{Point, View};

/// Which part of an item was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    RotateHandle,
    ScaleHandle,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub item_id: ItemId,
    pub part: HitPart,
}

/// Local-space position of the rotate handle: centered above the top edge.
#[must_use]
pub fn rotate_handle_local(item: &Item) -> Point {
    Point::new(item.width * 0.5, -ROTATE_HANDLE_OFFSET)
}

/// Local-space position of the scale handle: the bottom-right corner.
#[must_use]
pub fn scale_handle_local(item: &Item) -> Point {
    Point::new(item.width, item.height)
}

/// Screen-space position of a handle given in item-local space.
#[must_use]
pub fn handle_screen(item: &Item, local: Point, view: &View) -> Point {
    view.world_to_screen(item.transform.local_to_world(local, item.width, item.height))
}

/// Whether `world_pt` falls inside the item's transformed layout box.
#[must_use]
pub fn body_contains(item: &Item, world_pt: Point) -> bool {
    item.transform
        .world_to_local(world_pt, item.width, item.height)
        .is_some_and(|local| local.x >= 0.0 && local.x <= item.width && local.y >= 0.0 && local.y <= item.height)
}

/// Test which item (if any) is under `screen_pt`.
///
/// Handles only exist on the selected item and are checked first; bodies are
/// then checked top-most first (reverse insertion order).
#[must_use]
pub fn hit_test(screen_pt: Point, scene: &SceneStore, view: &View) -> Option<Hit> {
    if let Some(selected) = scene.selected().and_then(|id| scene.get(&id)) {
        let rotate = handle_screen(selected, rotate_handle_local(selected), view);
        if rotate.distance_to(screen_pt) <= HANDLE_RADIUS_PX {
            return Some(Hit { item_id: selected.id, part: HitPart::RotateHandle });
        }
        let scale = handle_screen(selected, scale_handle_local(selected), view);
        if scale.distance_to(screen_pt) <= HANDLE_RADIUS_PX {
            return Some(Hit { item_id: selected.id, part: HitPart::ScaleHandle });
        }
    }

    let world_pt = view.screen_to_world(screen_pt);
    scene
        .items()
        .iter()
        .rev()
        .find(|item| body_contains(item, world_pt))
        .map(|item| Hit { item_id: item.id, part: HitPart::Body })
}
