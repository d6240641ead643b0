use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::core::{BatchFailure, BatchOutcome, BatchProgress, GalleryItem, TransformRequest};
use crate::processing::raster::TransformEngine;
use crate::utils::{GalleryError, GalleryResult};
use super::config::BatchDefaults;

/// What a batch applies to each item.
///
/// `request` is `None` when the caller's label did not route to any
/// transform; every item then fails with `UnknownOperation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOperation {
    pub label: String,
    pub request: Option<TransformRequest>,
}

impl BatchOperation {
    pub fn new(label: impl Into<String>, request: TransformRequest) -> Self {
        Self { label: label.into(), request: Some(request) }
    }

    pub fn unrouted(label: impl Into<String>) -> Self {
        Self { label: label.into(), request: None }
    }
}

/// Applies one operation to many gallery items, strictly one at a time.
///
/// Items are attempted in input order. A failing item is recorded and the
/// batch moves on; nothing short of a panic stops it early.
#[derive(Debug, Clone, Default)]
pub struct BatchProcessor {
    engine: TransformEngine,
    defaults: BatchDefaults,
}

impl BatchProcessor {
    pub fn new(engine: TransformEngine, defaults: BatchDefaults) -> Self {
        Self { engine, defaults }
    }

    pub fn defaults(&self) -> &BatchDefaults {
        &self.defaults
    }

    /// Processes `items` with progress tracking and per-item error handling.
    ///
    /// `progress_callback` sees one snapshot per attempted item and a final
    /// one with `is_active == false`. Returns `NoTargets` without running
    /// anything when `items` is empty.
    pub async fn process_batch(
        &self,
        items: Vec<GalleryItem>,
        operation: BatchOperation,
        mut progress_callback: impl FnMut(&BatchProgress) + Send,
    ) -> GalleryResult<BatchOutcome> {
        if items.is_empty() {
            return Err(GalleryError::NoTargets);
        }

        let total = items.len();
        info!("Processing batch '{}' of {} items", operation.label, total);

        let mut job = BatchProgress::new(operation.label.clone(), total);
        let mut produced = Vec::with_capacity(total);

        for (index, item) in items.iter().enumerate() {
            match self.process_item(item, &operation).await {
                Ok(derived) => {
                    debug!("Item {}/{} '{}' → '{}'", index + 1, total, item.id, derived.id);
                    produced.push(derived);
                    job.record_success();
                }
                Err(e) => {
                    warn!("Batch item '{}' ({}) failed: {}", item.display_name, item.id, e);
                    job.record_failure(BatchFailure::from_error(item, &e));
                }
            }
            progress_callback(&job);
        }

        job.finish();
        progress_callback(&job);

        if job.has_failures() {
            warn!(
                "Batch '{}' completed with {} failed items out of {}",
                job.operation_label,
                job.failures.len(),
                total
            );
        } else {
            info!("Batch '{}' completed successfully: {} items processed", job.operation_label, total);
        }

        Ok(BatchOutcome { job, produced })
    }

    /// Starts the batch on the runtime and returns immediately.
    ///
    /// The handle's watch channel carries the same snapshots a progress
    /// callback would see. Must be called from within a tokio runtime.
    pub fn spawn(&self, items: Vec<GalleryItem>, operation: BatchOperation) -> GalleryResult<BatchHandle> {
        if items.is_empty() {
            return Err(GalleryError::NoTargets);
        }

        let (tx, rx) = watch::channel(BatchProgress::new(operation.label.clone(), items.len()));
        let processor = self.clone();
        let task = tokio::spawn(async move {
            processor
                .process_batch(items, operation, move |job| {
                    tx.send_replace(job.clone());
                })
                .await
        });

        Ok(BatchHandle { progress: rx, task })
    }

    async fn process_item(&self, item: &GalleryItem, operation: &BatchOperation) -> GalleryResult<GalleryItem> {
        let asset = item
            .asset
            .clone()
            .ok_or_else(|| GalleryError::source_unavailable("Source file unavailable"))?;

        let request = operation
            .request
            .clone()
            .ok_or_else(|| GalleryError::unknown_operation(operation.label.clone()))?;

        let output = self.engine.transform(asset, request).await?;
        Ok(self.derive_item(item, output))
    }

    /// New gallery entry for a processed asset; the source item is untouched.
    pub fn derive_item(&self, source: &GalleryItem, output: crate::core::Asset) -> GalleryItem {
        GalleryItem {
            id: format!("{}{}", source.id, self.defaults.id_suffix),
            display_name: format!("{}{}", self.defaults.name_prefix, output.name()),
            tags: source.tags.with_marker(&self.defaults.processed_tag),
            asset: Some(output),
            ..source.clone()
        }
    }
}

/// A batch running in the background.
pub struct BatchHandle {
    progress: watch::Receiver<BatchProgress>,
    task: JoinHandle<GalleryResult<BatchOutcome>>,
}

impl BatchHandle {
    /// Receiver for progress snapshots
    pub fn subscribe(&self) -> watch::Receiver<BatchProgress> {
        self.progress.clone()
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> BatchProgress {
        self.progress.borrow().clone()
    }

    /// Waits for the batch to finish.
    pub async fn wait(self) -> GalleryResult<BatchOutcome> {
        self.task
            .await
            .map_err(|e| GalleryError::transform(format!("Batch task failed: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Asset, TagSet};
    use crate::utils::FailureKind;

    fn png_item(id: &str) -> GalleryItem {
        let surface = image::RgbaImage::from_pixel(40, 20, image::Rgba([50, 100, 150, 255]));
        let mut buf = std::io::Cursor::new(Vec::new());
        surface.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        GalleryItem::new(id, Asset::new(format!("{id}.png"), "image/png", buf.into_inner()))
    }

    #[tokio::test]
    async fn empty_input_creates_no_job() {
        let processor = BatchProcessor::default();
        let mut calls = 0;
        let result = processor
            .process_batch(Vec::new(), BatchOperation::new("Batch Resize", TransformRequest::resize(10)), |_| calls += 1)
            .await;
        assert_eq!(result.unwrap_err(), GalleryError::NoTargets);
        assert_eq!(calls, 0);
        assert!(processor.spawn(Vec::new(), BatchOperation::unrouted("x")).is_err());
    }

    #[tokio::test]
    async fn derived_item_carries_marker_and_prefix() {
        let processor = BatchProcessor::default();
        let source = png_item("img1").with_tags(TagSet::try_from(vec!["sky".to_string()]).unwrap());
        let outcome = processor
            .process_batch(vec![source], BatchOperation::new("Enhance", TransformRequest::Grayscale), |_| {})
            .await
            .unwrap();

        let derived = &outcome.produced[0];
        assert_eq!(derived.id, "img1-proc");
        assert_eq!(derived.display_name, "PROCESSED_img1.png");
        assert_eq!(derived.tags.iter().collect::<Vec<_>>(), ["sky", "processed"]);
    }

    #[tokio::test]
    async fn progress_is_monotonic_and_ends_inactive() {
        let processor = BatchProcessor::default();
        let items = vec![png_item("a"), png_item("b").without_asset(), png_item("c")];
        let mut seen = Vec::new();
        processor
            .process_batch(items, BatchOperation::new("Batch Resize", TransformRequest::resize(20)), |job| {
                seen.push((job.processed, job.failures.len(), job.is_active))
            })
            .await
            .unwrap();

        assert_eq!(seen, vec![(1, 0, true), (2, 1, true), (3, 1, true), (3, 1, false)]);
    }

    #[tokio::test]
    async fn unrouted_operation_fails_every_item() {
        let processor = BatchProcessor::default();
        let outcome = processor
            .process_batch(vec![png_item("a"), png_item("b")], BatchOperation::unrouted("Sparkle"), |_| {})
            .await
            .unwrap();
        assert!(outcome.produced.is_empty());
        assert_eq!(outcome.job.processed, 2);
        assert!(outcome.job.failures.iter().all(|f| f.kind == FailureKind::UnknownOperation));
    }

    #[tokio::test]
    async fn spawned_batch_publishes_final_snapshot() {
        let processor = BatchProcessor::default();
        let handle = processor
            .spawn(vec![png_item("a")], BatchOperation::new("Batch Resize", TransformRequest::resize(10)))
            .unwrap();
        let progress = handle.subscribe();
        assert_eq!(handle.snapshot().total, 1);

        let outcome = handle.wait().await.unwrap();
        assert_eq!(outcome.produced.len(), 1);
        let last = progress.borrow().clone();
        assert_eq!(last.processed, 1);
        assert!(!last.is_active);
    }
}
