//! Drag selection over the gallery grid.
//!
//! - [`RegionSelector`]: gesture state, region computation, intersection.
//! - [`Selection`]: the owned set of selected ids.
//! - [`GridLayout`]: item bounding boxes in content coordinates.

mod geometry;
mod layout;
mod selector;
mod state;

pub use geometry::{Point, Rect, ScrollOffset};
pub use layout::{GridLayout, SelectableElement};
pub use selector::{HitTarget, RegionSelector};
pub use state::Selection;
