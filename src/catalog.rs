//! Asset library catalog: the list of identifiers the library panel offers.
//!
//! The catalog arrives as plain text, one identifier per line. Surrounding
//! whitespace is trimmed and blank lines are skipped. The reserved id
//! `custom-text` stands for a text item; every other id names an image the
//! host resolves on its own.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::doc::ItemKind;

/// Ordered list of asset identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetCatalog {
    ids: Vec<String>,
}

impl AssetCatalog {
    /// An empty catalog; what the library shows when loading failed.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a newline-delimited identifier list.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let ids = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();
        Self { ids }
    }

    /// Identifiers in listing order.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Whether `id` places a text item or an image asset.
    #[must_use]
    pub fn kind_for(&self, id: &str) -> Option<ItemKind> {
        ItemKind::from_type_id(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
