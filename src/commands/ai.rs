use tracing::debug;
use crate::assistant::{Assistant, CompletionService, DataTopic, ExtractedFile};
use crate::core::AppState;
use crate::notify::{Notification, NotificationAction};
use crate::utils::{GalleryError, GalleryResult};

/// Turns an AI failure into the matching notification.
///
/// A missing credential asks the user to open settings; everything else is a
/// plain error.
fn report_ai_error(state: &mut AppState, error: &GalleryError) {
    let notification = match error {
        GalleryError::MissingCredential => Notification::warning(
            "Configuration Required",
            "Please set your AI service API key in Settings.",
        )
        .with_action(NotificationAction::OpenSettings),
        other => Notification::error("AI Error", other.to_string()),
    };
    state.notify(notification);
}

/// Generates tags and a description for the primary selected item.
///
/// New tags are merged into the existing ones (at most five are kept) and
/// the description is replaced. Returns `Ok(false)` when nothing is selected.
pub async fn tag_selected_item<S: CompletionService>(
    state: &mut AppState,
    assistant: &Assistant<S>,
) -> GalleryResult<bool> {
    let Some(item) = state.primary_item().cloned() else {
        return Ok(false);
    };
    let settings = state.settings().clone();

    let (tags, description) = tokio::join!(
        assistant.generate_tags(&settings, &item.display_name),
        assistant.describe(&settings, &item.display_name),
    );
    let (tags, description) = match tags.and_then(|t| description.map(|d| (t, d))) {
        Ok(result) => result,
        Err(e) => {
            report_ai_error(state, &e);
            return Err(e);
        }
    };

    debug!("Tagging '{}' with {:?}", item.id, tags);
    let merged = item.tags.merged(tags.iter().map(String::as_str));
    Ok(state.replace_item(item.with_tags(merged).with_description(description)))
}

/// Extracts `topic` data from the primary selected item and stores the
/// result, newest first.
pub async fn extract_selected_item<S: CompletionService>(
    state: &mut AppState,
    assistant: &Assistant<S>,
    topic: DataTopic,
) -> GalleryResult<Option<ExtractedFile>> {
    let Some(item) = state.primary_item().cloned() else {
        return Ok(None);
    };
    let settings = state.settings().clone();

    let content = match assistant.extract_data(&settings, &item.display_name, topic).await {
        Ok(content) => content,
        Err(e) => {
            report_ai_error(state, &e);
            return Err(e);
        }
    };

    let id = state.next_id("ext");
    let file = ExtractedFile::new(id, &item.id, &item.display_name, topic, content);
    state.push_extracted(file.clone());
    state.notify(Notification::success("Data Extracted", "View results in the output panel."));
    Ok(Some(file))
}
