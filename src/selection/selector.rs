use tracing::debug;
use super::geometry::{Point, Rect};
use super::layout::SelectableElement;

/// What the pointer landed on when a gesture started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// Empty grid space; a drag may start here
    Empty,
    /// A selectable item; clicks on items are handled elsewhere
    Item(String),
}

/// Rubber-band selection over the item grid, one gesture at a time.
///
/// All positions are content coordinates. Starting a second gesture before
/// ending the first is not supported.
#[derive(Debug, Clone, Default)]
pub struct RegionSelector {
    anchor: Option<Point>,
    current: Option<Point>,
}

impl RegionSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the anchor. Returns `false` and forms no region when the
    /// gesture starts on an item.
    pub fn begin(&mut self, pointer: Point, hit: &HitTarget) -> bool {
        if let HitTarget::Item(id) = hit {
            debug!("Drag suppressed: gesture started on item {}", id);
            self.reset();
            return false;
        }
        self.anchor = Some(pointer);
        self.current = Some(pointer);
        true
    }

    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    /// Moves the free corner and returns the recomputed region.
    pub fn update(&mut self, pointer: Point) -> Option<Rect> {
        self.anchor?;
        self.current = Some(pointer);
        self.region()
    }

    /// Current region, if a gesture is in progress
    pub fn region(&self) -> Option<Rect> {
        Some(Rect::from_corners(self.anchor?, self.current?))
    }

    /// Finishes the gesture and returns the ids of every element whose
    /// bounds intersect the region, in element order. Empty when no
    /// gesture was active.
    pub fn end(&mut self, elements: &[SelectableElement]) -> Vec<String> {
        let Some(region) = self.region() else {
            return Vec::new();
        };
        self.reset();

        let hits: Vec<String> = elements
            .iter()
            .filter(|el| el.bounds.intersects(&region))
            .map(|el| el.id.clone())
            .collect();

        debug!(
            "Region {:.0}×{:.0} at ({:.0}, {:.0}) hit {} of {} items",
            region.width,
            region.height,
            region.x,
            region.y,
            hits.len(),
            elements.len()
        );
        hits
    }

    /// Ends an abandoned gesture (pointer left the surface) using the last
    /// known position, so no gesture is left dangling.
    pub fn abandon(&mut self, last_pointer: Point, elements: &[SelectableElement]) -> Vec<String> {
        self.update(last_pointer);
        self.end(elements)
    }

    fn reset(&mut self) {
        self.anchor = None;
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elements() -> Vec<SelectableElement> {
        vec![
            SelectableElement::new("A", Rect::new(0.0, 0.0, 10.0, 10.0)),
            SelectableElement::new("B", Rect::new(20.0, 20.0, 10.0, 10.0)),
        ]
    }

    #[test]
    fn region_is_recomputed_not_accumulated() {
        let mut selector = RegionSelector::new();
        assert!(selector.begin(Point::new(50.0, 50.0), &HitTarget::Empty));
        selector.update(Point::new(0.0, 0.0));
        let region = selector.update(Point::new(60.0, 40.0)).unwrap();
        assert_eq!(region, Rect::new(50.0, 40.0, 10.0, 10.0));
        assert_eq!(selector.update(Point::new(60.0, 40.0)), Some(region));
    }

    #[test]
    fn selects_only_touched_elements() {
        let mut selector = RegionSelector::new();
        selector.begin(Point::new(5.0, 5.0), &HitTarget::Empty);
        selector.update(Point::new(15.0, 15.0));
        assert_eq!(selector.end(&elements()), vec!["A".to_string()]);
        assert!(!selector.is_active());
    }

    #[test]
    fn starting_on_an_item_forms_no_region() {
        let mut selector = RegionSelector::new();
        assert!(!selector.begin(Point::new(5.0, 5.0), &HitTarget::Item("A".into())));
        assert_eq!(selector.update(Point::new(25.0, 25.0)), None);
        assert!(selector.end(&elements()).is_empty());
    }

    #[test]
    fn abandon_uses_last_position() {
        let mut selector = RegionSelector::new();
        selector.begin(Point::new(12.0, 12.0), &HitTarget::Empty);
        let hits = selector.abandon(Point::new(40.0, 40.0), &elements());
        assert_eq!(hits, vec!["B".to_string()]);
        assert!(!selector.is_active());
    }

    #[test]
    fn end_without_begin_is_empty() {
        assert!(RegionSelector::new().end(&elements()).is_empty());
    }
}
