use std::path::Path;
use tracing::{debug, warn};
use crate::core::{AppState, Asset, GalleryItem};
use crate::notify::Notification;
use crate::utils::{GalleryResult, read_image_asset};

/// Reads `paths` from disk and appends every recognised image to the gallery.
///
/// Non-image files are skipped; unreadable files are logged and skipped.
/// Returns the number of items added.
pub async fn import_files<P: AsRef<Path>>(state: &mut AppState, paths: &[P]) -> GalleryResult<usize> {
    let mut assets = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        match read_image_asset(path).await {
            Ok(Some(asset)) => assets.push(asset),
            Ok(None) => debug!("Skipping non-image file {}", path.display()),
            Err(e) => warn!("Could not import {}: {}", path.display(), e),
        }
    }
    Ok(import_assets(state, assets))
}

/// Appends in-memory assets as new gallery items, skipping non-image MIME types.
pub fn import_assets(state: &mut AppState, assets: Vec<Asset>) -> usize {
    let items: Vec<GalleryItem> = assets
        .into_iter()
        .filter(|a| a.mime_type().starts_with("image/"))
        .map(|asset| GalleryItem::new(state.next_id("local"), asset))
        .collect();

    let count = items.len();
    if count == 0 {
        state.notify(Notification::warning("Nothing Imported", "No image files were found."));
        return 0;
    }

    state.append_items(items);
    state.notify(Notification::success(
        "Import Successful",
        format!("Loaded {count} images into session."),
    ));
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_non_image_assets() {
        let mut state = AppState::default();
        let added = import_assets(
            &mut state,
            vec![
                Asset::new("a.png", "image/png", vec![1u8]),
                Asset::new("notes.txt", "text/plain", vec![2u8]),
                Asset::new("b.jpg", "image/jpeg", vec![3u8]),
            ],
        );
        assert_eq!(added, 2);
        assert_eq!(state.items()[1].display_name, "b.jpg");
        assert!(state.items()[0].id.starts_with("local-"));
        assert_ne!(state.items()[0].id, state.items()[1].id);
    }

    #[test]
    fn back_to_back_imports_get_distinct_ids() {
        let mut state = AppState::default();
        import_assets(&mut state, vec![Asset::new("a.png", "image/png", vec![1u8])]);
        import_assets(&mut state, vec![Asset::new("a.png", "image/png", vec![1u8])]);

        let first = state.items()[0].id.clone();
        let second = state.items()[1].id.clone();
        assert_ne!(first, second);

        state.click_item(&second);
        assert_eq!(state.batch_targets().len(), 1);
        assert_eq!(state.selection().ids(), [second]);
    }
}
