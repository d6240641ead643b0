//! Name search and ordering of the displayed gallery.

use serde::{Deserialize, Serialize};
use crate::core::GalleryItem;

/// Display order of the gallery grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    /// Newest first
    #[default]
    Date,
    /// Display name, case-insensitive A to Z
    Name,
    /// Largest asset first
    Size,
}

/// What the grid shows: items whose display name contains `search_query`
/// (case-insensitive), in `sort_by` order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryFilter {
    pub search_query: String,
    pub sort_by: SortOrder,
}

impl GalleryFilter {
    pub fn search(query: impl Into<String>) -> Self {
        Self { search_query: query.into(), ..Self::default() }
    }

    pub fn sorted_by(self, sort_by: SortOrder) -> Self {
        Self { sort_by, ..self }
    }

    pub fn matches(&self, item: &GalleryItem) -> bool {
        let query = self.search_query.trim().to_lowercase();
        query.is_empty() || item.display_name.to_lowercase().contains(&query)
    }

    /// Matching items in display order. Ties keep collection order.
    pub fn apply<'a>(&self, items: &'a [GalleryItem]) -> Vec<&'a GalleryItem> {
        let mut visible: Vec<&GalleryItem> = items.iter().filter(|i| self.matches(i)).collect();
        match self.sort_by {
            SortOrder::Date => visible.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOrder::Name => visible.sort_by_key(|i| i.display_name.to_lowercase()),
            SortOrder::Size => visible.sort_by(|a, b| b.size_bytes().cmp(&a.size_bytes())),
        }
        visible
    }
}
