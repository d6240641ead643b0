use serde::Serialize;
use crate::core::GalleryItem;
use crate::utils::{FailureKind, GalleryError};

/// One item that could not be processed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchFailure {
    pub item_id: String,
    pub item_name: String,
    pub message: String,
    pub kind: FailureKind,
    pub recoverable: bool,
}

impl BatchFailure {
    pub fn from_error(item: &GalleryItem, error: &GalleryError) -> Self {
        Self {
            item_id: item.id.clone(),
            item_name: item.display_name.clone(),
            message: error.to_string(),
            kind: error.kind(),
            recoverable: error.is_recoverable(),
        }
    }
}

/// Coarse state of a batch, for progress displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BatchStatus {
    Idle,
    Processing,
    Complete,
    CompletedWithErrors,
}

/// Observable state of one batch run.
///
/// `processed` only grows, from 0 to `total`; `failures` is append-only and
/// never longer than `processed`. Each recorded item updates both fields in
/// the same call, so a snapshot never shows one without the other.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchProgress {
    pub operation_label: String,
    pub total: usize,
    pub processed: usize,
    pub failures: Vec<BatchFailure>,
    pub is_active: bool,
}

impl BatchProgress {
    /// Starts an active job for `total` items
    pub fn new(operation_label: impl Into<String>, total: usize) -> Self {
        Self {
            operation_label: operation_label.into(),
            total,
            processed: 0,
            failures: Vec::new(),
            is_active: true,
        }
    }

    pub(crate) fn record_success(&mut self) {
        debug_assert!(self.processed < self.total);
        self.processed += 1;
    }

    pub(crate) fn record_failure(&mut self, failure: BatchFailure) {
        debug_assert!(self.processed < self.total);
        self.failures.push(failure);
        self.processed += 1;
    }

    pub(crate) fn finish(&mut self) {
        self.is_active = false;
    }

    pub fn succeeded(&self) -> usize {
        self.processed - self.failures.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Progress percentage (0-100)
    pub fn percentage(&self) -> usize {
        if self.total > 0 {
            (self.processed * 100) / self.total
        } else {
            0
        }
    }

    pub fn status(&self) -> BatchStatus {
        if self.is_active {
            BatchStatus::Processing
        } else if self.total == 0 {
            BatchStatus::Idle
        } else if self.has_failures() {
            BatchStatus::CompletedWithErrors
        } else {
            BatchStatus::Complete
        }
    }
}

/// Final result of a batch: the job record plus every produced item, in
/// input order.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub job: BatchProgress,
    pub produced: Vec<GalleryItem>,
}
