//! Application state shared by the command handlers.

use std::time::Instant;
use chrono::Utc;
use tokio::sync::watch;
use tracing::debug;

use crate::assistant::ExtractedFile;
use crate::core::{BatchProgress, GalleryFilter, GalleryItem, Settings};
use crate::notify::{Notification, NotificationCenter};
use crate::processing::BatchProcessor;
use crate::selection::{GridLayout, SelectableElement, Selection};

/// Everything the gallery UI reads and the commands write.
///
/// The item collection is only ever swapped out whole (import, batch
/// completion, tag edits); nothing mutates an item in place.
pub struct AppState {
    items: Vec<GalleryItem>,
    next_id: u64,
    filter: GalleryFilter,
    selection: Selection,
    settings: Settings,
    processor: BatchProcessor,
    batch_status: watch::Sender<BatchProgress>,
    extracted: Vec<ExtractedFile>,
    notifications: NotificationCenter,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self::with_processor(settings, BatchProcessor::default())
    }

    pub fn with_processor(settings: Settings, processor: BatchProcessor) -> Self {
        let (batch_status, _) = watch::channel(BatchProgress::default());
        Self {
            items: Vec::new(),
            next_id: 0,
            filter: GalleryFilter::default(),
            selection: Selection::new(),
            settings,
            processor,
            batch_status,
            extracted: Vec::new(),
            notifications: NotificationCenter::new(),
        }
    }

    // ── Items ────────────────────────────────────────────────────────────────────────

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&GalleryItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Swaps in a new collection and drops selected ids that no longer exist.
    pub fn replace_items(&mut self, items: Vec<GalleryItem>) {
        debug!("Gallery now holds {} items", items.len());
        self.items = items;
        let items = &self.items;
        self.selection.retain_existing(|id| items.iter().any(|i| i.id == id));
    }

    /// Newest-first bulk insert.
    pub fn prepend_items(&mut self, new_items: Vec<GalleryItem>) {
        if new_items.is_empty() {
            return;
        }
        let mut next = new_items;
        next.extend(self.items.iter().cloned());
        self.replace_items(next);
    }

    pub fn append_items(&mut self, new_items: Vec<GalleryItem>) {
        if new_items.is_empty() {
            return;
        }
        let mut next = self.items.clone();
        next.extend(new_items);
        self.replace_items(next);
    }

    /// Fresh id of the form `<prefix>-<millis>-<seq>`; `seq` never repeats
    /// within this state.
    pub fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}-{}", Utc::now().timestamp_millis(), self.next_id)
    }

    /// Replaces the item with `updated.id`; returns `false` if there is none.
    pub fn replace_item(&mut self, updated: GalleryItem) -> bool {
        if self.item(&updated.id).is_none() {
            return false;
        }
        let next = self
            .items
            .iter()
            .map(|i| if i.id == updated.id { updated.clone() } else { i.clone() })
            .collect();
        self.replace_items(next);
        true
    }

    // ── Selection ───────────────────────────────────────────────────────────────────

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Applies a drag result; empty results keep the current selection.
    pub fn select_region(&mut self, ids: Vec<String>) -> bool {
        self.selection.apply_region(ids)
    }

    pub fn click_item(&mut self, id: &str) {
        self.selection.click(id);
    }

    pub fn open_item(&mut self, id: &str) {
        self.selection.ensure(id);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Selects every item the current filter shows.
    pub fn select_all(&mut self) {
        let ids = self.visible_items().into_iter().map(|i| i.id.clone()).collect();
        self.selection.apply_region(ids);
    }

    // ── Filter ────────────────────────────────────────────────────────────────────

    pub fn filter(&self) -> &GalleryFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: GalleryFilter) {
        self.filter = filter;
    }

    /// Items the grid shows, in display order.
    pub fn visible_items(&self) -> Vec<&GalleryItem> {
        self.filter.apply(&self.items)
    }

    /// Bounding boxes of the visible items, for the region selector.
    pub fn selectable_elements(&self, layout: &GridLayout) -> Vec<SelectableElement> {
        layout.elements(self.visible_items().into_iter().map(|i| i.id.as_str()))
    }

    /// First selected item
    pub fn primary_item(&self) -> Option<&GalleryItem> {
        self.selection.primary().and_then(|id| self.item(id))
    }

    /// Selected items in gallery order, or every item when nothing is selected.
    pub fn batch_targets(&self) -> Vec<GalleryItem> {
        if self.selection.is_empty() {
            return self.items.clone();
        }
        self.items
            .iter()
            .filter(|i| self.selection.contains(&i.id))
            .cloned()
            .collect()
    }

    // ── Settings ────────────────────────────────────────────────────────────────────

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn processor(&self) -> &BatchProcessor {
        &self.processor
    }

    // ── Batch status ───────────────────────────────────────────────────────────────

    /// Receiver that observes every per-item batch transition.
    pub fn subscribe_batch(&self) -> watch::Receiver<BatchProgress> {
        self.batch_status.subscribe()
    }

    pub fn batch_status(&self) -> BatchProgress {
        self.batch_status.borrow().clone()
    }

    pub(crate) fn batch_publisher(&self) -> watch::Sender<BatchProgress> {
        self.batch_status.clone()
    }

    // ── Extracted data ─────────────────────────────────────────────────────────────

    pub fn extracted_files(&self) -> &[ExtractedFile] {
        &self.extracted
    }

    pub fn push_extracted(&mut self, file: ExtractedFile) {
        self.extracted.insert(0, file);
    }

    // ── Notifications ───────────────────────────────────────────────────────────────

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationCenter {
        &mut self.notifications
    }

    /// Posts `notification` after dropping toasts that have already expired.
    pub fn notify(&mut self, notification: Notification) {
        let now = Instant::now();
        self.notifications.prune_expired(now);
        self.notifications.post_at(notification, now);
    }
}
