// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod notify;
pub mod selection;
pub mod processing;
pub mod assistant;
pub mod commands;

// Public exports for external consumers
pub use core::{
    AppState, Asset, BatchOutcome, BatchProgress, GalleryFilter, GalleryItem, Settings, SortOrder, TagSet,
    TransformRequest,
};
pub use utils::{GalleryError, GalleryResult};
pub use notify::{Notification, NotificationCenter, NotificationKind};
pub use processing::{BatchOperation, BatchProcessor, TransformEngine};
pub use commands::*;

// This library file is the public API of the gallery core.
// The headless batch tool lives in main.rs.
