//! Batch actions triggered from the UI (e.g. dropping a selection on an
//! action folder).

use tracing::debug;
use crate::core::{AppState, BatchOutcome, BatchProgress, Settings, TransformRequest};
use crate::notify::{Notification, NotificationAction};
use crate::processing::{BatchDefaults, BatchOperation};
use crate::utils::{GalleryError, GalleryResult};

/// Maps a free-text action label to a transform request.
///
/// Labels are matched by substring, first match wins: "Resize", "Convert",
/// "Watermark", "Enhance". Anything else yields `None`.
pub fn route_operation(label: &str, settings: &Settings, defaults: &BatchDefaults) -> Option<TransformRequest> {
    if label.contains("Resize") {
        Some(TransformRequest::resize(defaults.resize_width))
    } else if label.contains("Convert") {
        Some(TransformRequest::convert(settings.default_convert_mime.clone()))
    } else if label.contains("Watermark") {
        Some(TransformRequest::watermark(settings.effective_watermark_text()))
    } else if label.contains("Enhance") {
        Some(TransformRequest::Grayscale)
    } else {
        None
    }
}

/// Runs the action named by `label` over the selection (or every item when
/// nothing is selected).
///
/// Produced items are prepended to the gallery in one insert once the whole
/// batch has been attempted. Exactly one summary notification is posted:
/// success when every item worked, a persistent warning otherwise. With no
/// targets, a "No Targets" warning is posted and `NoTargets` returned.
pub async fn run_batch_action(state: &mut AppState, label: &str) -> GalleryResult<BatchOutcome> {
    let targets = state.batch_targets();
    if targets.is_empty() {
        state.notify(Notification::warning("No Targets", "Select images to process."));
        return Err(GalleryError::NoTargets);
    }

    let processor = state.processor().clone();
    let operation = match route_operation(label, state.settings(), processor.defaults()) {
        Some(request) => BatchOperation::new(label, request),
        None => BatchOperation::unrouted(label),
    };
    debug!("Received batch action '{}' for {} items: {:?}", label, targets.len(), operation.request);

    let publisher = state.batch_publisher();
    publisher.send_replace(BatchProgress::new(label, targets.len()));

    let outcome = processor
        .process_batch(targets, operation, |job| {
            publisher.send_replace(job.clone());
        })
        .await?;

    state.prepend_items(outcome.produced.clone());

    let job = &outcome.job;
    if job.has_failures() {
        state.notify(
            Notification::warning(
                "Batch Completed with Errors",
                format!("{} of {} images failed processing.", job.failures.len(), job.total),
            )
            .persistent()
            .with_action(NotificationAction::Dismiss),
        );
    } else {
        state.notify(Notification::success(
            "Batch Complete",
            format!("Processed {} images successfully.", job.total),
        ));
    }

    Ok(outcome)
}
