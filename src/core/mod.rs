//! Core application types and state management.
//!
//! This module contains the fundamental types used throughout the application:
//! - [`AppState`]: Gallery collection, selection, settings and batch status
//! - [`GalleryItem`] and [`Asset`]: Gallery entries and their image payloads
//! - [`TransformRequest`]: A typed pixel operation
//! - [`BatchProgress`]: Progress and failure accounting for one batch
//! - [`Settings`]: Persisted user configuration
//! - [`GalleryFilter`]: Name search and display order

mod filter;
mod progress;
mod settings;
mod state;
mod task;
mod types;

pub use filter::{GalleryFilter, SortOrder};
pub use progress::{BatchFailure, BatchOutcome, BatchProgress, BatchStatus};
pub use settings::{Settings, DEFAULT_CONVERT_MIME, DEFAULT_LOCAL_ENDPOINT, DEFAULT_WATERMARK_TEXT};
pub use state::AppState;
pub use task::TransformRequest;
pub use types::{Asset, GalleryItem, TagSet, MAX_TAGS};
