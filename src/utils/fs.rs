use std::path::Path;
use tokio::fs;
use crate::core::Asset;
use crate::utils::{GalleryError, GalleryResult, format_from_extension};

/// Reads `path` into an [`Asset`], deriving the MIME type from the extension.
///
/// Returns `Ok(None)` for files that are not recognised images.
pub async fn read_image_asset(path: impl AsRef<Path>) -> GalleryResult<Option<Asset>> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| GalleryError::io(format!("Invalid file name: {}", path.display())))?;

    let Ok(format) = format_from_extension(name) else {
        return Ok(None);
    };

    let bytes = fs::read(path)
        .await
        .map_err(|e| GalleryError::io(format!("Failed to read {}: {}", path.display(), e)))?;

    Ok(Some(Asset::new(name, format.mime_type(), bytes)))
}

/// Writes `asset` into `dir` under `file_name`, creating `dir` if needed.
pub async fn write_asset(dir: impl AsRef<Path>, file_name: &str, asset: &Asset) -> GalleryResult<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).await?;
    fs::write(dir.join(file_name), asset.bytes())
        .await
        .map_err(|e| GalleryError::io(format!("Failed to write {}: {}", file_name, e)))
}
