//! Browser bridge: exposes [`EditorCore`] to JavaScript through `wasm-bindgen`.
//!
//! The host forwards DOM events (pointer, wheel, key, double-click) with
//! viewport-relative CSS pixel coordinates and applies the returned actions.
//! Every mutating call returns a JSON array of [`crate::engine::Action`]s;
//! queries return JSON values or plain strings. Item ids cross the boundary
//! as hyphenated UUID strings.

use std::fmt::Display;

use serde::Serialize;
use uuid::Uuid;
use wasm_bindgen::prelude::*;

use crate::catalog::AssetCatalog;
use crate::config::EditorConfig;
use crate::doc::ItemId;
use crate::engine::{Action, EditorCore};
use crate::input::{Button, Key, WheelDelta};
use crate::view::Point;

/// Editor handle owned by the host page.
#[wasm_bindgen]
pub struct Editor {
    core: EditorCore,
}

#[wasm_bindgen]
impl Editor {
    /// Create an editor. `config_json` is an optional [`EditorConfig`] object.
    ///
    /// # Errors
    ///
    /// Throws if the config does not parse or fails validation.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<Editor, JsValue> {
        let config = match config_json.as_deref() {
            Some(json) => EditorConfig::from_json(json).map_err(js_error)?,
            None => EditorConfig::default(),
        };
        Ok(Self { core: EditorCore::with_config(config) })
    }

    // --- Catalog / layout ---

    /// Install the newline-delimited asset list fetched by the host.
    pub fn set_catalog(&mut self, text: &str) {
        self.core.set_catalog(AssetCatalog::parse(text));
    }

    pub fn catalog_load_failed(&mut self, reason: &str) {
        self.core.catalog_load_failed(reason);
    }

    /// Asset ids as a JSON array of strings.
    ///
    /// # Errors
    ///
    /// Throws if serialization fails.
    pub fn catalog_json(&self) -> Result<String, JsValue> {
        to_json(self.core.catalog.ids())
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.core.set_viewport(width, height);
    }

    /// Report an item's rendered layout box.
    ///
    /// # Errors
    ///
    /// Throws if `id` is not a UUID.
    pub fn set_item_size(&mut self, id: &str, width: f64, height: f64) -> Result<bool, JsValue> {
        Ok(self.core.set_item_size(&parse_id(id)?, width, height))
    }

    // --- Input events ---

    /// Library drop / drag start at a screen point.
    ///
    /// # Errors
    ///
    /// Throws if serialization fails.
    pub fn place_from_library(&mut self, type_id: &str, x: f64, y: f64) -> Result<String, JsValue> {
        actions_json(&self.core.place_from_library(type_id, Point::new(x, y)))
    }

    /// # Errors
    ///
    /// Throws if serialization fails.
    pub fn pointer_down(&mut self, x: f64, y: f64, button: i16) -> Result<String, JsValue> {
        let actions = match Button::from_dom(button) {
            Some(button) => self.core.on_pointer_down(Point::new(x, y), button),
            None => Vec::new(),
        };
        actions_json(&actions)
    }

    /// # Errors
    ///
    /// Throws if serialization fails.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Result<String, JsValue> {
        actions_json(&self.core.on_pointer_move(Point::new(x, y)))
    }

    /// # Errors
    ///
    /// Throws if serialization fails.
    pub fn pointer_up(&mut self, x: f64, y: f64, button: i16) -> Result<String, JsValue> {
        let button = Button::from_dom(button).unwrap_or(Button::Primary);
        actions_json(&self.core.on_pointer_up(Point::new(x, y), button))
    }

    /// # Errors
    ///
    /// Throws if serialization fails.
    pub fn wheel(&mut self, x: f64, y: f64, dx: f64, dy: f64) -> Result<String, JsValue> {
        actions_json(&self.core.on_wheel(Point::new(x, y), WheelDelta { dx, dy }))
    }

    /// # Errors
    ///
    /// Throws if serialization fails.
    pub fn double_click(&mut self, x: f64, y: f64) -> Result<String, JsValue> {
        actions_json(&self.core.on_double_click(Point::new(x, y)))
    }

    /// # Errors
    ///
    /// Throws if serialization fails.
    pub fn key_down(&mut self, key: String) -> Result<String, JsValue> {
        actions_json(&self.core.on_key_down(&Key(key)))
    }

    // --- Toolbar ---

    /// # Errors
    ///
    /// Throws if serialization fails.
    pub fn zoom_in(&mut self) -> Result<String, JsValue> {
        actions_json(&self.core.zoom_in())
    }

    /// # Errors
    ///
    /// Throws if serialization fails.
    pub fn zoom_out(&mut self) -> Result<String, JsValue> {
        actions_json(&self.core.zoom_out())
    }

    /// # Errors
    ///
    /// Throws if serialization fails.
    pub fn toggle_grid(&mut self) -> Result<String, JsValue> {
        actions_json(&self.core.toggle_grid())
    }

    /// # Errors
    ///
    /// Throws if serialization fails.
    pub fn set_snap(&mut self, enabled: bool) -> Result<String, JsValue> {
        actions_json(&self.core.set_snap(enabled))
    }

    /// # Errors
    ///
    /// Throws if serialization fails.
    pub fn delete_selected(&mut self) -> Result<String, JsValue> {
        actions_json(&self.core.delete_selected())
    }

    /// Remove every item. The host asks the user for confirmation first.
    ///
    /// # Errors
    ///
    /// Throws if serialization fails.
    pub fn clear(&mut self) -> Result<String, JsValue> {
        actions_json(&self.core.clear())
    }

    // --- Text editing ---

    /// # Errors
    ///
    /// Throws if `id` is not a UUID or serialization fails.
    pub fn set_text(&mut self, id: &str, text: String) -> Result<String, JsValue> {
        let id = parse_id(id)?;
        actions_json(&self.core.set_text(&id, text))
    }

    /// # Errors
    ///
    /// Throws if serialization fails.
    pub fn end_text_edit(&mut self) -> Result<String, JsValue> {
        actions_json(&self.core.end_text_edit())
    }

    // --- Export / import ---

    /// The scene as a pretty-printed JSON document.
    ///
    /// # Errors
    ///
    /// Throws if serialization fails.
    pub fn export_json(&self) -> Result<String, JsValue> {
        self.core.export_json().map_err(js_error)
    }

    /// Replace the scene with a JSON document. On error the scene is unchanged.
    ///
    /// # Errors
    ///
    /// Throws with the parse or validation message.
    pub fn import_json(&mut self, json: &str) -> Result<String, JsValue> {
        let actions = self.core.import_json(json).map_err(js_error)?;
        actions_json(&actions)
    }

    // --- Queries ---

    /// # Errors
    ///
    /// Throws if serialization fails.
    pub fn view_json(&self) -> Result<String, JsValue> {
        to_json(&self.core.view())
    }

    /// CSS `transform` for the content layer.
    #[must_use]
    pub fn view_css(&self) -> String {
        self.core.view().css_transform()
    }

    /// CSS `transform` for one item, or `undefined` if it does not exist.
    ///
    /// # Errors
    ///
    /// Throws if `id` is not a UUID.
    pub fn item_css(&self, id: &str) -> Result<Option<String>, JsValue> {
        Ok(self.core.item(&parse_id(id)?).map(|item| item.transform.css()))
    }

    /// # Errors
    ///
    /// Throws if serialization fails.
    pub fn items_json(&self) -> Result<String, JsValue> {
        to_json(self.core.items())
    }

    #[must_use]
    pub fn selection(&self) -> Option<String> {
        self.core.selection().map(|id| id.to_string())
    }

    #[must_use]
    pub fn editing(&self) -> Option<String> {
        self.core.editing().map(|id| id.to_string())
    }

    /// Active gesture as a JSON string (`"none"`, `"move"`, ...).
    ///
    /// # Errors
    ///
    /// Throws if serialization fails.
    pub fn gesture(&self) -> Result<String, JsValue> {
        to_json(&self.core.gesture())
    }
}

fn actions_json(actions: &[Action]) -> Result<String, JsValue> {
    to_json(actions)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(js_error)
}

fn parse_id(id: &str) -> Result<ItemId, JsValue> {
    Uuid::parse_str(id).map_err(js_error)
}

fn js_error(err: impl Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
