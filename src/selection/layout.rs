use serde::{Deserialize, Serialize};
use super::geometry::Rect;

/// An item's rendered bounding box in content coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectableElement {
    pub id: String,
    pub bounds: Rect,
}

impl SelectableElement {
    pub fn new(id: impl Into<String>, bounds: Rect) -> Self {
        Self { id: id.into(), bounds }
    }
}

/// Uniform grid of square-ish cells, laid out row-major.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLayout {
    pub padding: f64,
    pub cell_width: f64,
    pub cell_height: f64,
    pub gap: f64,
    pub columns: usize,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            padding: 24.0,
            cell_width: 180.0,
            cell_height: 180.0,
            gap: 16.0,
            columns: 4,
        }
    }
}

impl GridLayout {
    /// Number of columns that fit `container_width`, at least one.
    pub fn fit_columns(self, container_width: f64) -> Self {
        let usable = container_width - 2.0 * self.padding + self.gap;
        let columns = (usable / (self.cell_width + self.gap)).floor().max(1.0) as usize;
        Self { columns, ..self }
    }

    pub fn cell_bounds(&self, index: usize) -> Rect {
        let columns = self.columns.max(1);
        let col = (index % columns) as f64;
        let row = (index / columns) as f64;
        Rect::new(
            self.padding + col * (self.cell_width + self.gap),
            self.padding + row * (self.cell_height + self.gap),
            self.cell_width,
            self.cell_height,
        )
    }

    /// Bounding boxes for `ids` in display order.
    pub fn elements<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> Vec<SelectableElement> {
        ids.into_iter()
            .enumerate()
            .map(|(index, id)| SelectableElement::new(id, self.cell_bounds(index)))
            .collect()
    }

    /// Total content height for `count` items.
    pub fn content_height(&self, count: usize) -> f64 {
        let columns = self.columns.max(1);
        let rows = count.div_ceil(columns) as f64;
        if rows == 0.0 {
            return 2.0 * self.padding;
        }
        2.0 * self.padding + rows * self.cell_height + (rows - 1.0) * self.gap
    }
}
