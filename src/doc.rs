//! Scene model: placed items and the ordered store that owns them.
//!
//! Items are kept in insertion order, which is also their z-order (first item
//! drawn at the bottom). The store is the only writer of the per-item
//! `selected` flag and keeps it a singleton: at most one item is selected.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{ASSET_HEIGHT, ASSET_WIDTH, CUSTOM_TEXT_ID, TEXT_HEIGHT, TEXT_PLACEHOLDER, TEXT_WIDTH};
use crate::transform::ItemTransform;
use crate::view::Point;

/// Unique identifier for a placed item. Never reused after deletion.
pub type ItemId = Uuid;

/// What an item shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Editable free-text label.
    Text,
    /// Image asset named by a non-empty catalog identifier.
    Asset(String),
}

impl ItemKind {
    /// Resolve a catalog / document type id. Returns `None` for an empty id.
    #[must_use]
    pub fn from_type_id(type_id: &str) -> Option<Self> {
        match type_id {
            "" => None,
            CUSTOM_TEXT_ID => Some(Self::Text),
            other => Some(Self::Asset(other.to_owned())),
        }
    }

    /// The type id this kind is exported under.
    #[must_use]
    pub fn type_id(&self) -> &str {
        match self {
            Self::Text => CUSTOM_TEXT_ID,
            Self::Asset(id) => id,
        }
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }
}

/// One placed object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub kind: ItemKind,
    pub transform: ItemTransform,
    /// Text content; `Some` exactly for text items.
    pub content: Option<String>,
    pub selected: bool,
    /// Layout box width in item-local units, as measured by the host.
    pub width: f64,
    /// Layout box height in item-local units, as measured by the host.
    pub height: f64,
}

impl Item {
    /// Create an item at the origin with rotation 0 and scale 1, unselected.
    ///
    /// Text items take `content` or fall back to the placeholder; assets
    /// ignore `content`.
    #[must_use]
    pub fn new(kind: ItemKind, content: Option<String>) -> Self {
        let (width, height, content) = match kind {
            ItemKind::Text => (TEXT_WIDTH, TEXT_HEIGHT, Some(content.unwrap_or_else(|| TEXT_PLACEHOLDER.to_owned()))),
            ItemKind::Asset(_) => (ASSET_WIDTH, ASSET_HEIGHT, None),
        };
        Self {
            id: Uuid::new_v4(),
            kind,
            transform: ItemTransform::default(),
            content,
            selected: false,
            width,
            height,
        }
    }

    /// Builder-style layout box override.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// World position of the local origin.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.transform.x, self.transform.y)
    }

    /// Move the local origin to `p`.
    pub fn set_position(&mut self, p: Point) {
        self.transform.x = p.x;
        self.transform.y = p.y;
    }

    /// World-space center of the layout box; the rotate/scale pivot.
    #[must_use]
    pub fn center(&self) -> Point {
        self.transform.center(self.width, self.height)
    }
}

/// Ordered, in-memory store of placed items.
#[derive(Debug, Default)]
pub struct SceneStore {
    items: Vec<Item>,
}

impl SceneStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item on top of the z-order. Returns its id.
    pub fn add(&mut self, item: Item) -> ItemId {
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Remove an item by id, returning it if it was present.
    pub fn remove(&mut self, id: &ItemId) -> Option<Item> {
        let idx = self.items.iter().position(|item| item.id == *id)?;
        Some(self.items.remove(idx))
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Replace the whole item set, keeping the given order.
    pub fn replace_all(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == *id)
    }

    pub fn get_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == *id)
    }

    /// All items, bottom of the z-order first.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The selected item's id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<ItemId> {
        self.items.iter().find(|item| item.selected).map(|item| item.id)
    }

    /// Select `id` and deselect every other item.
    ///
    /// Returns false (and changes nothing) if `id` is not in the store.
    pub fn select(&mut self, id: &ItemId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        for item in &mut self.items {
            item.selected = item.id == *id;
        }
        true
    }

    /// Deselect every item. Returns true if anything was selected.
    pub fn deselect_all(&mut self) -> bool {
        let mut changed = false;
        for item in self.items.iter_mut().filter(|item| item.selected) {
            item.selected = false;
            changed = true;
        }
        changed
    }

    /// Number of items currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the store contains no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
