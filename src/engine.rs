use std::f64::consts::PI;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::AssetCatalog;
use crate::config::EditorConfig;
use crate::consts::MIN_PIVOT_DISTANCE_PX;
use crate::doc::{Item, ItemId, ItemKind, SceneStore};
use crate::document::{self, DocumentError, SceneRecord};
use crate::hit::{self, HitPart};
use crate::input::{Button, GestureKind, InputState, Key, UiState, WheelDelta};
use crate::transform::{self, ItemTransform};
use crate::view::{self, Point, View};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Effects returned from editor operations for the host to apply.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// A new item was added on top of the z-order.
    ItemCreated { item: Item },
    /// An item's transform changed; the host re-applies its CSS transform.
    ItemTransformed { id: ItemId, transform: ItemTransform },
    ItemDeleted { id: ItemId },
    /// Handles move to `selected` (or disappear when `None`).
    SelectionChanged { selected: Option<ItemId> },
    /// Pan, zoom or grid options changed; the host redraws the content layer and grid.
    ViewChanged { view: View },
    /// A text item entered edit mode; the host focuses its editor.
    EditTextRequested { id: ItemId, text: String },
    TextChanged { id: ItemId, text: String },
    EditEnded { id: ItemId },
    /// The whole item set was replaced; the host rebuilds every item.
    SceneReplaced,
    SetCursor { cursor: String },
}

/// The editor session: scene, view, active gesture, and UI state.
///
/// Everything is mutated synchronously from host event callbacks. There is
/// exactly one `input` slot, and pointer-downs are ignored while it is not
/// idle, so at most one gesture is ever active.
#[derive(Debug)]
pub struct EditorCore {
    pub scene: SceneStore,
    pub view: View,
    pub ui: UiState,
    pub input: InputState,
    pub catalog: AssetCatalog,
    pub config: EditorConfig,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for EditorCore {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl EditorCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an editor whose view starts from the config's grid options.
    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        let view = View {
            grid_spacing: config.grid_spacing,
            snap_enabled: config.snap_enabled,
            grid_visible: config.grid_visible,
            ..View::default()
        };
        Self {
            scene: SceneStore::new(),
            view,
            ui: UiState::default(),
            input: InputState::default(),
            catalog: AssetCatalog::empty(),
            config,
            viewport_width: 0.0,
            viewport_height: 0.0,
        }
    }

    // --- Catalog / layout inputs ---

    /// Install the asset library listing.
    pub fn set_catalog(&mut self, catalog: AssetCatalog) {
        info!(count = catalog.len(), "asset catalog loaded");
        self.catalog = catalog;
    }

    /// Record a failed catalog fetch. The library stays empty; placed items are unaffected.
    pub fn catalog_load_failed(&mut self, reason: &str) {
        warn!(%reason, "failed to load asset catalog");
        self.catalog = AssetCatalog::empty();
    }

    /// Update the canvas viewport size in CSS pixels.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Store the host-measured layout box of an item.
    ///
    /// Returns false for unknown items or sizes that are not finite and positive.
    pub fn set_item_size(&mut self, id: &ItemId, width: f64, height: f64) -> bool {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            debug!(%id, width, height, "ignoring degenerate item size");
            return false;
        }
        let Some(item) = self.scene.get_mut(id) else {
            return false;
        };
        item.width = width;
        item.height = height;
        true
    }

    // --- Placement ---

    /// Drag-create: place a library item with its origin under the pointer,
    /// select it, and start moving it.
    ///
    /// Ignored while another gesture is active or for an empty `type_id`.
    pub fn place_from_library(&mut self, type_id: &str, screen_pt: Point) -> Vec<Action> {
        if !self.input.is_idle() {
            debug!(gesture = ?self.input.kind(), "placement ignored; gesture already active");
            return Vec::new();
        }
        let Some(kind) = self.catalog.kind_for(type_id) else {
            warn!("placement ignored; empty asset id");
            return Vec::new();
        };

        let mut actions = self.end_edit_unless(None);
        let world = self.view.screen_to_world(screen_pt);
        let mut item = self.new_item(kind);
        item.set_position(world);
        let id = self.scene.add(item);
        self.scene.select(&id);
        self.input = InputState::Moving { id, start_world: world, orig_x: world.x, orig_y: world.y };
        debug!(%id, %type_id, "placed item; move started");

        if let Some(item) = self.scene.get(&id) {
            actions.push(Action::ItemCreated { item: item.clone() });
        }
        actions.push(Action::SelectionChanged { selected: Some(id) });
        actions
    }

    // --- Pointer input ---

    /// Classify the target under the pointer and open exactly one gesture.
    ///
    /// Ignored while a gesture is already active.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if !self.input.is_idle() {
            debug!(gesture = ?self.input.kind(), "pointer-down ignored; gesture already active");
            return Vec::new();
        }
        match button {
            Button::Primary => {}
            Button::Middle => {
                let mut actions = self.end_edit_unless(None);
                actions.extend(self.begin_pan(screen_pt));
                return actions;
            }
            Button::Secondary => return Vec::new(),
        }

        let hit = hit::hit_test(screen_pt, &self.scene, &self.view);
        let mut actions = self.end_edit_unless(hit.map(|h| h.item_id));
        match hit {
            Some(h) => match h.part {
                HitPart::Body => actions.extend(self.begin_move(h.item_id, screen_pt)),
                HitPart::RotateHandle => self.begin_rotate(h.item_id, screen_pt),
                HitPart::ScaleHandle => self.begin_scale(h.item_id, screen_pt),
            },
            None => actions.extend(self.begin_pan(screen_pt)),
        }
        actions
    }

    /// Recompute the gesture target from the gesture-start snapshot.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Moving { id, start_world, orig_x, orig_y } => {
                let world = self.view.screen_to_world(screen_pt);
                let mut pos = Point::new(orig_x + (world.x - start_world.x), orig_y + (world.y - start_world.y));
                if self.view.snap_enabled {
                    pos = transform::snap_to_grid(pos, self.view.grid_spacing);
                }
                self.update_item(&id, |t| {
                    t.x = pos.x;
                    t.y = pos.y;
                })
            }
            InputState::Rotating { id, center_screen, start_angle, orig_rotation } => {
                let angle = transform::pointer_angle(center_screen, screen_pt);
                let rotation = orig_rotation + (angle - start_angle) * 180.0 / PI;
                self.update_item(&id, |t| t.rotation = rotation)
            }
            InputState::Scaling { id, center_screen, start_distance, orig_scale } => {
                let distance = transform::pointer_distance(center_screen, screen_pt, MIN_PIVOT_DISTANCE_PX);
                let scale = orig_scale * (distance / start_distance);
                self.update_item(&id, |t| t.scale = scale)
            }
            InputState::Panning { start_screen, orig_pan_x, orig_pan_y } => {
                self.view
                    .pan_to(orig_pan_x + (screen_pt.x - start_screen.x), orig_pan_y + (screen_pt.y - start_screen.y));
                vec![Action::ViewChanged { view: self.view }]
            }
        }
    }

    /// End whatever gesture is active. Releasing anywhere completes it.
    pub fn on_pointer_up(&mut self, _screen_pt: Point, _button: Button) -> Vec<Action> {
        let ended = std::mem::take(&mut self.input);
        if ended.is_idle() {
            return Vec::new();
        }
        debug!(gesture = ?ended.kind(), target = ?ended.target(), "gesture ended");
        match ended {
            InputState::Panning { .. } => vec![Action::SetCursor { cursor: "default".into() }],
            _ => Vec::new(),
        }
    }

    // --- Zoom ---

    /// Wheel zoom anchored at the cursor: `zoom * (1 - dy * wheel_zoom_factor)`.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        let zoom = self.view.zoom * (1.0 - delta.dy * self.config.wheel_zoom_factor);
        self.zoom_to(screen_pt, zoom)
    }

    /// Button zoom-in, anchored at the viewport center.
    pub fn zoom_in(&mut self) -> Vec<Action> {
        let zoom = self.view.zoom + self.config.zoom_step;
        self.zoom_to(self.viewport_center(), zoom)
    }

    /// Button zoom-out, anchored at the viewport center.
    pub fn zoom_out(&mut self) -> Vec<Action> {
        let zoom = self.view.zoom - self.config.zoom_step;
        self.zoom_to(self.viewport_center(), zoom)
    }

    // --- Text editing ---

    /// Enter edit mode on the text item under the pointer.
    pub fn on_double_click(&mut self, screen_pt: Point) -> Vec<Action> {
        let Some(hit) = hit::hit_test(screen_pt, &self.scene, &self.view) else {
            return Vec::new();
        };
        if hit.part != HitPart::Body || self.ui.editing_id == Some(hit.item_id) {
            return Vec::new();
        }
        let Some(text) = self
            .scene
            .get(&hit.item_id)
            .filter(|item| item.kind.is_text())
            .and_then(|item| item.content.clone())
        else {
            return Vec::new();
        };
        let mut actions = self.end_edit_unless(None);
        self.ui.editing_id = Some(hit.item_id);
        debug!(id = %hit.item_id, "text edit started");
        actions.push(Action::EditTextRequested { id: hit.item_id, text });
        actions
    }

    /// Commit edited text. Only honored while `id` is in edit mode.
    pub fn set_text(&mut self, id: &ItemId, text: String) -> Vec<Action> {
        if self.ui.editing_id != Some(*id) {
            debug!(%id, "text change ignored; item is not in edit mode");
            return Vec::new();
        }
        let Some(item) = self.scene.get_mut(id) else {
            return Vec::new();
        };
        if item.content.as_deref() == Some(text.as_str()) {
            return Vec::new();
        }
        item.content = Some(text.clone());
        vec![Action::TextChanged { id: *id, text }]
    }

    /// Leave edit mode (focus loss).
    pub fn end_text_edit(&mut self) -> Vec<Action> {
        self.end_edit_unless(None)
    }

    // --- Keyboard / structural edits ---

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if key.is_delete() { self.delete_selected() } else { Vec::new() }
    }

    /// Delete the selected item. Refused while a text item is being edited.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        if let Some(editing) = self.ui.editing_id {
            debug!(%editing, "delete ignored; text edit in progress");
            return Vec::new();
        }
        let Some(id) = self.scene.selected() else {
            return Vec::new();
        };
        if self.scene.remove(&id).is_none() {
            return Vec::new();
        }
        info!(%id, remaining = self.scene.len(), "item deleted");
        vec![Action::ItemDeleted { id }, Action::SelectionChanged { selected: None }]
    }

    /// Remove every item. Confirmation is the host's concern.
    pub fn clear(&mut self) -> Vec<Action> {
        self.scene.clear();
        self.ui.editing_id = None;
        info!("scene cleared");
        vec![Action::SceneReplaced]
    }

    // --- View options ---

    pub fn toggle_grid(&mut self) -> Vec<Action> {
        self.view.grid_visible = !self.view.grid_visible;
        vec![Action::ViewChanged { view: self.view }]
    }

    pub fn set_snap(&mut self, enabled: bool) -> Vec<Action> {
        if self.view.snap_enabled == enabled {
            return Vec::new();
        }
        self.view.snap_enabled = enabled;
        vec![Action::ViewChanged { view: self.view }]
    }

    // --- Export / import ---

    /// Snapshot every item in z-order.
    #[must_use]
    pub fn export_records(&self) -> Vec<SceneRecord> {
        document::export_records(self.scene.items())
    }

    /// Export the scene as a pretty-printed JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Parse`] if serialization fails.
    pub fn export_json(&self) -> Result<String, DocumentError> {
        let json = document::to_json(&self.export_records())?;
        info!(count = self.scene.len(), "scene exported");
        Ok(json)
    }

    /// Replace the scene with a parsed document.
    ///
    /// An active gesture keeps running until pointer-up; moves aimed at a
    /// replaced item are no-ops.
    ///
    /// # Errors
    ///
    /// Any parse or validation failure is returned and the scene is left untouched.
    pub fn import_json(&mut self, json: &str) -> Result<Vec<Action>, DocumentError> {
        let items = document::parse_document(json, &self.config.text_placeholder).inspect_err(|e| {
            warn!(error = %e, "scene import rejected");
        })?;
        Ok(self.replace_items(items))
    }

    /// Replace the scene with already-decoded records.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidRecord`] for the first bad record; the
    /// scene is left untouched.
    pub fn import_records(&mut self, records: &[SceneRecord]) -> Result<Vec<Action>, DocumentError> {
        let items = document::items_from_records(records, &self.config.text_placeholder).inspect_err(|e| {
            warn!(error = %e, "scene import rejected");
        })?;
        Ok(self.replace_items(items))
    }

    // --- Queries ---

    /// The currently selected item, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ItemId> {
        self.scene.selected()
    }

    /// The text item in edit mode, if any.
    #[must_use]
    pub fn editing(&self) -> Option<ItemId> {
        self.ui.editing_id
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub fn gesture(&self) -> GestureKind {
        self.input.kind()
    }

    /// Look up an item by id.
    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.scene.get(id)
    }

    /// All items in z-order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        self.scene.items()
    }

    // --- Internals ---

    fn new_item(&self, kind: ItemKind) -> Item {
        let (size, content) = match kind {
            ItemKind::Text => (self.config.text_size, Some(self.config.text_placeholder.clone())),
            ItemKind::Asset(_) => (self.config.asset_size, None),
        };
        Item::new(kind, content).with_size(size.width, size.height)
    }

    /// Button-zoom anchor. The host reports the size with `set_viewport`;
    /// until then the anchor is the screen origin.
    fn viewport_center(&self) -> Point {
        if self.viewport_width <= 0.0 || self.viewport_height <= 0.0 {
            debug!(
                width = self.viewport_width,
                height = self.viewport_height,
                "viewport size not set; zoom anchored at origin"
            );
        }
        Point::new(self.viewport_width * 0.5, self.viewport_height * 0.5)
    }

    fn zoom_to(&mut self, anchor: Point, zoom: f64) -> Vec<Action> {
        if view::clamp_zoom(zoom) == self.view.zoom {
            return Vec::new();
        }
        self.view = self.view.zoom_about_point(anchor, zoom);
        vec![Action::ViewChanged { view: self.view }]
    }

    /// Apply `f` to an item's transform. A missing target is a no-op.
    fn update_item(&mut self, id: &ItemId, f: impl FnOnce(&mut ItemTransform)) -> Vec<Action> {
        let Some(item) = self.scene.get_mut(id) else {
            return Vec::new();
        };
        f(&mut item.transform);
        vec![Action::ItemTransformed { id: *id, transform: item.transform }]
    }

    /// Leave edit mode unless the edited item is `keep`.
    fn end_edit_unless(&mut self, keep: Option<ItemId>) -> Vec<Action> {
        match self.ui.editing_id {
            Some(id) if Some(id) != keep => {
                self.ui.editing_id = None;
                debug!(%id, "text edit ended");
                vec![Action::EditEnded { id }]
            }
            _ => Vec::new(),
        }
    }

    fn begin_move(&mut self, id: ItemId, screen_pt: Point) -> Vec<Action> {
        let Some(orig) = self.scene.get(&id).map(Item::position) else {
            return Vec::new();
        };
        let was_selected = self.scene.selected() == Some(id);
        self.scene.select(&id);
        let start_world = self.view.screen_to_world(screen_pt);
        self.input = InputState::Moving { id, start_world, orig_x: orig.x, orig_y: orig.y };
        debug!(%id, "move started");
        if was_selected { Vec::new() } else { vec![Action::SelectionChanged { selected: Some(id) }] }
    }

    fn begin_rotate(&mut self, id: ItemId, screen_pt: Point) {
        let Some(item) = self.scene.get(&id) else {
            return;
        };
        let center_screen = self.view.world_to_screen(item.center());
        let start_angle = transform::pointer_angle(center_screen, screen_pt);
        self.input = InputState::Rotating { id, center_screen, start_angle, orig_rotation: item.transform.rotation };
        debug!(%id, "rotate started");
    }

    fn begin_scale(&mut self, id: ItemId, screen_pt: Point) {
        let Some(item) = self.scene.get(&id) else {
            return;
        };
        let center_screen = self.view.world_to_screen(item.center());
        let start_distance = transform::pointer_distance(center_screen, screen_pt, MIN_PIVOT_DISTANCE_PX);
        self.input = InputState::Scaling { id, center_screen, start_distance, orig_scale: item.transform.scale };
        debug!(%id, "scale started");
    }

    fn begin_pan(&mut self, screen_pt: Point) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.scene.deselect_all() {
            actions.push(Action::SelectionChanged { selected: None });
        }
        self.input = InputState::Panning {
            start_screen: screen_pt,
            orig_pan_x: self.view.pan_x,
            orig_pan_y: self.view.pan_y,
        };
        debug!("pan started");
        actions.push(Action::SetCursor { cursor: "grabbing".into() });
        actions
    }

    fn replace_items(&mut self, items: Vec<Item>) -> Vec<Action> {
        let items: Vec<Item> = items
            .into_iter()
            .map(|item| {
                let size = if item.kind.is_text() { self.config.text_size } else { self.config.asset_size };
                if item.transform.scale <= 0.0 {
                    warn!(id = %item.id, scale = item.transform.scale, "imported item has non-positive scale");
                }
                item.with_size(size.width, size.height)
            })
            .collect();
        let count = items.len();
        self.scene.replace_all(items);
        self.ui.editing_id = None;
        info!(count, "scene imported");
        vec![Action::SceneReplaced]
    }
}
