//! Command handlers invoked by the gallery UI.
//!
//! This is the only layer that interprets free-text action labels:
//! - [`run_batch_action`]: Route a label and batch-process the targets
//! - [`import_files`] / [`import_assets`]: Add images to the gallery
//! - [`add_tag`] / [`remove_tag`]: Edit the primary item's tags
//! - [`tag_selected_item`] / [`extract_selected_item`]: AI helpers

mod ai;
mod batch;
mod import;
mod tags;

pub use ai::{extract_selected_item, tag_selected_item};
pub use batch::{route_operation, run_batch_action};
pub use import::{import_assets, import_files};
pub use tags::{add_tag, remove_tag};
