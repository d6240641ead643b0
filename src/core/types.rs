//! Core gallery types: assets, items and their tag sets.

use std::sync::Arc;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::utils::{GalleryResult, ImageFormat, ValidationError};

/// Upper bound on tags per gallery item.
pub const MAX_TAGS: usize = 5;

/// Immutable binary image payload with its MIME type and file name.
///
/// Cloning is cheap; the bytes are shared and never mutated. Transforms
/// always produce a new `Asset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    name: String,
    mime_type: String,
    bytes: Arc<[u8]>,
}

impl Asset {
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Format implied by the MIME type
    pub fn format(&self) -> GalleryResult<ImageFormat> {
        ImageFormat::from_mime(&self.mime_type)
    }
}

/// Set of at most [`MAX_TAGS`] distinct, non-empty tags.
///
/// Insertion order is kept for display but carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `tag`; returns `Ok(false)` for blanks and duplicates.
    pub fn insert(&mut self, tag: &str) -> Result<bool, ValidationError> {
        let tag = tag.trim();
        if tag.is_empty() || self.contains(tag) {
            return Ok(false);
        }
        if self.tags.len() >= MAX_TAGS {
            return Err(ValidationError::TagLimit(MAX_TAGS));
        }
        self.tags.push(tag.to_string());
        Ok(true)
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.tags.len() >= MAX_TAGS
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Union with `extra`, keeping existing tags first and dropping whatever
    /// does not fit.
    pub fn merged<'a>(&self, extra: impl IntoIterator<Item = &'a str>) -> TagSet {
        let mut merged = self.clone();
        for tag in extra {
            if merged.is_full() {
                break;
            }
            let _ = merged.insert(tag);
        }
        merged
    }

    /// Copy that is guaranteed to contain `marker`; when full, the last
    /// existing tag makes room for it.
    pub fn with_marker(&self, marker: &str) -> TagSet {
        let mut marked = self.clone();
        if marked.contains(marker) {
            return marked;
        }
        if marked.is_full() {
            marked.tags.truncate(MAX_TAGS - 1);
        }
        let _ = marked.insert(marker);
        marked
    }
}

impl TryFrom<Vec<String>> for TagSet {
    type Error = ValidationError;

    fn try_from(tags: Vec<String>) -> Result<Self, Self::Error> {
        let mut set = TagSet::new();
        for tag in &tags {
            set.insert(tag)?;
        }
        Ok(set)
    }
}

impl From<TagSet> for Vec<String> {
    fn from(set: TagSet) -> Self {
        set.tags
    }
}

/// A user-visible gallery entry wrapping one asset.
///
/// `id` is stable; every other field is replaced wholesale on edit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub display_name: String,
    pub tags: TagSet,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    /// `None` when the underlying bytes are no longer available
    #[serde(skip)]
    pub asset: Option<Asset>,
}

impl GalleryItem {
    pub fn new(id: impl Into<String>, asset: Asset) -> Self {
        Self {
            id: id.into(),
            display_name: asset.name().to_string(),
            tags: TagSet::new(),
            description: None,
            created_at: Utc::now(),
            asset: Some(asset),
        }
    }

    pub fn with_tags(self, tags: TagSet) -> Self {
        Self { tags, ..self }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self { description: Some(description.into()), ..self }
    }

    /// Item whose asset bytes are gone (e.g. a revoked import)
    pub fn without_asset(self) -> Self {
        Self { asset: None, ..self }
    }

    pub fn size_bytes(&self) -> usize {
        self.asset.as_ref().map(Asset::len).unwrap_or(0)
    }

    /// Human-readable size, e.g. `"1.25 MB"`
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size_bytes() as f64 / 1024.0 / 1024.0)
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.asset.as_ref().map(Asset::mime_type)
    }
}
