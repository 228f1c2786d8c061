//! Scene document: the JSON export/import format.
//!
//! A document is an ordered array of records, bottom of the z-order first:
//!
//! ```json
//! [
//!   { "type": "custom-text", "x": 250, "y": 180, "rotation": 0, "scale": 1, "text": "Hi" },
//!   { "type": "tree", "x": -40, "y": 12.5, "rotation": 390, "scale": 0.8 }
//! ]
//! ```
//!
//! `text` is present exactly for `custom-text` records. Parsing is strict:
//! wrong types, missing or unknown fields, an empty `type`, a non-finite
//! number, or `text` on an asset record reject the whole document, so a caller can apply the result
//! atomically.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use serde::{Deserialize, Serialize};

use crate::doc::{Item, ItemKind};
use crate::transform::ItemTransform;

/// Error returned by [`parse_document`] and [`to_json`].
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Invalid JSON syntax or a record of the wrong shape.
    #[error("invalid scene document: {0}")]
    Parse(#[from] serde_json::Error),
    /// A well-formed record whose values are not acceptable.
    #[error("invalid scene record {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

/// One exported item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneRecord {
    /// Asset id, or `custom-text`.
    #[serde(rename = "type")]
    pub type_id: String,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub scale: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl SceneRecord {
    /// Snapshot an item's exported fields.
    #[must_use]
    pub fn from_item(item: &Item) -> Self {
        let text = if item.kind.is_text() { item.content.clone() } else { None };
        Self {
            type_id: item.kind.type_id().to_owned(),
            x: item.transform.x,
            y: item.transform.y,
            rotation: item.transform.rotation,
            scale: item.transform.scale,
            text,
        }
    }

    /// Build a fresh item carrying this record's literal transform.
    ///
    /// `placeholder` fills a text record that has no `text`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidRecord`] for an empty `type`, a
    /// non-finite number, or `text` on an asset record. `index` is only used for the error.
    pub fn to_item(&self, index: usize, placeholder: &str) -> Result<Item, DocumentError> {
        let Some(kind) = ItemKind::from_type_id(&self.type_id) else {
            return Err(DocumentError::InvalidRecord { index, reason: "empty `type`".into() });
        };
        let fields = [("x", self.x), ("y", self.y), ("rotation", self.rotation), ("scale", self.scale)];
        if let Some((field, value)) = fields.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(DocumentError::InvalidRecord { index, reason: format!("`{field}` must be finite, got {value}") });
        }
        if !kind.is_text() && self.text.is_some() {
            return Err(DocumentError::InvalidRecord {
                index,
                reason: format!("`text` is only allowed on custom-text records, found on `{}`", self.type_id),
            });
        }
        let content = match kind {
            ItemKind::Text => Some(self.text.clone().unwrap_or_else(|| placeholder.to_owned())),
            ItemKind::Asset(_) => None,
        };
        let mut item = Item::new(kind, content);
        item.transform = ItemTransform { x: self.x, y: self.y, rotation: self.rotation, scale: self.scale };
        Ok(item)
    }
}

/// Snapshot items in order.
#[must_use]
pub fn export_records(items: &[Item]) -> Vec<SceneRecord> {
    items.iter().map(SceneRecord::from_item).collect()
}

/// Pretty-print records as a JSON array.
///
/// # Errors
///
/// Returns [`DocumentError::Parse`] if serialization fails.
pub fn to_json(records: &[SceneRecord]) -> Result<String, DocumentError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Parse and validate a document into fresh items, in document order.
///
/// Nothing is returned unless every record is valid.
///
/// # Errors
///
/// Returns [`DocumentError::Parse`] for bad syntax or shape and
/// [`DocumentError::InvalidRecord`] for the first unacceptable record.
pub fn parse_document(json: &str, placeholder: &str) -> Result<Vec<Item>, DocumentError> {
    let records: Vec<SceneRecord> = serde_json::from_str(json)?;
    items_from_records(&records, placeholder)
}

/// Turn records into fresh items, in order, failing on the first bad record.
///
/// # Errors
///
/// Returns [`DocumentError::InvalidRecord`] for the first unacceptable record.
pub fn items_from_records(records: &[SceneRecord], placeholder: &str) -> Result<Vec<Item>, DocumentError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| record.to_item(index, placeholder))
        .collect()
}
