use crate::core::AppState;
use crate::notify::Notification;
use crate::utils::GalleryResult;

/// Adds `tag` to the primary selected item.
///
/// Returns `Ok(false)` when nothing is selected or the tag is already
/// present. A full tag set posts a "Limit Reached" warning and errors.
pub fn add_tag(state: &mut AppState, tag: &str) -> GalleryResult<bool> {
    let Some(item) = state.primary_item().cloned() else {
        return Ok(false);
    };

    let mut tags = item.tags.clone();
    match tags.insert(tag) {
        Ok(true) => Ok(state.replace_item(item.with_tags(tags))),
        Ok(false) => Ok(false),
        Err(e) => {
            state.notify(Notification::warning("Limit Reached", "Max 5 tags."));
            Err(e.into())
        }
    }
}

/// Removes `tag` from the primary selected item.
pub fn remove_tag(state: &mut AppState, tag: &str) -> bool {
    let Some(item) = state.primary_item().cloned() else {
        return false;
    };

    let mut tags = item.tags.clone();
    if !tags.remove(tag) {
        return false;
    }
    state.replace_item(item.with_tags(tags))
}
