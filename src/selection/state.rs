use serde::Serialize;

/// The gallery's selected item ids, in selection order.
///
/// Owned by the application state and written only through these methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// First selected id; the item detail panels act on it
    pub fn primary(&self) -> Option<&str> {
        self.ids.first().map(String::as_str)
    }

    /// Applies a drag result. A non-empty result replaces the selection; an
    /// empty one leaves it untouched. Returns whether anything changed.
    pub fn apply_region(&mut self, ids: Vec<String>) -> bool {
        if ids.is_empty() {
            return false;
        }
        let mut unique: Vec<String> = Vec::with_capacity(ids.len());
        for id in ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        self.ids = unique;
        true
    }

    /// Single click: deselects a selected item, otherwise selects only it.
    pub fn click(&mut self, id: &str) {
        if self.contains(id) {
            self.ids.retain(|s| s != id);
        } else {
            self.ids = vec![id.to_string()];
        }
    }

    /// Double click: makes sure `id` is selected.
    pub fn ensure(&mut self, id: &str) {
        if !self.contains(id) {
            self.ids = vec![id.to_string()];
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drops ids for which `exists` returns false.
    pub fn retain_existing(&mut self, exists: impl Fn(&str) -> bool) {
        self.ids.retain(|id| exists(id));
    }
}
