use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use crate::utils::GalleryError;

/// Raster formats the engine can decode and re-encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    JPEG,
    PNG,
    WebP,
    GIF,
    BMP,
    TIFF,
}

impl ImageFormat {
    /// Canonical MIME type for this format
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::JPEG => "image/jpeg",
            Self::PNG => "image/png",
            Self::WebP => "image/webp",
            Self::GIF => "image/gif",
            Self::BMP => "image/bmp",
            Self::TIFF => "image/tiff",
        }
    }

    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            Self::JPEG => &["jpg", "jpeg"],
            Self::PNG => &["png"],
            Self::WebP => &["webp"],
            Self::GIF => &["gif"],
            Self::BMP => &["bmp"],
            Self::TIFF => &["tiff", "tif"],
        }
    }

    /// Check if the extension matches this format
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.extensions().contains(&ext.as_str())
    }

    /// Get the primary extension for this format
    pub fn primary_extension(&self) -> &str {
        self.extensions()[0]
    }

    /// Whether the encoder honours a lossy quality factor
    pub fn supports_quality(&self) -> bool {
        matches!(self, Self::JPEG)
    }

    /// Resolves a MIME type (case-insensitive, `image/jpg` accepted)
    pub fn from_mime(mime: &str) -> Result<Self, GalleryError> {
        match mime.trim().to_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Ok(Self::JPEG),
            "image/png" => Ok(Self::PNG),
            "image/webp" => Ok(Self::WebP),
            "image/gif" => Ok(Self::GIF),
            "image/bmp" => Ok(Self::BMP),
            "image/tiff" => Ok(Self::TIFF),
            other => Err(GalleryError::format(format!(
                "Unsupported MIME type: {}", other
            ))),
        }
    }

    pub(crate) fn codec(&self) -> image::ImageFormat {
        match self {
            Self::JPEG => image::ImageFormat::Jpeg,
            Self::PNG => image::ImageFormat::Png,
            Self::WebP => image::ImageFormat::WebP,
            Self::GIF => image::ImageFormat::Gif,
            Self::BMP => image::ImageFormat::Bmp,
            Self::TIFF => image::ImageFormat::Tiff,
        }
    }
}

impl FromStr for ImageFormat {
    type Err = GalleryError;

    fn from_str(ext: &str) -> Result<Self, Self::Err> {
        let ext = ext.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Ok(Self::JPEG),
            "png" => Ok(Self::PNG),
            "webp" => Ok(Self::WebP),
            "gif" => Ok(Self::GIF),
            "bmp" => Ok(Self::BMP),
            "tif" | "tiff" => Ok(Self::TIFF),
            _ => Err(GalleryError::format(format!(
                "Unsupported image format: {}", ext
            ))),
        }
    }
}

/// Get format from file extension
pub fn format_from_extension(path: &str) -> Result<ImageFormat, GalleryError> {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| GalleryError::format(
            format!("File has no extension: {}", path)
        ))?;

    ImageFormat::from_str(ext)
}

/// Returns `name` with its extension replaced by the primary extension of `format`.
///
/// Names without an extension get one appended; a leading-dot name such as
/// `.hidden` is treated as having no extension.
pub fn rename_for_format(name: &str, format: ImageFormat) -> String {
    let stem = match name.rfind('.') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    };
    format!("{stem}.{}", format.primary_extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_mime_to_extension() {
        assert_eq!(ImageFormat::from_mime("image/jpeg").unwrap().primary_extension(), "jpg");
        assert_eq!(ImageFormat::from_mime("image/webp").unwrap().primary_extension(), "webp");
        assert_eq!(ImageFormat::from_mime("IMAGE/PNG").unwrap(), ImageFormat::PNG);
        assert!(ImageFormat::from_mime("text/plain").is_err());
    }

    #[test]
    fn renames_only_the_last_extension() {
        assert_eq!(rename_for_format("holiday.photo.png", ImageFormat::JPEG), "holiday.photo.jpg");
        assert_eq!(rename_for_format("scan", ImageFormat::WebP), "scan.webp");
        assert_eq!(rename_for_format(".hidden", ImageFormat::PNG), ".hidden.png");
    }

    #[test]
    fn resolves_format_from_path() {
        assert_eq!(format_from_extension("a/b/c.JPEG").unwrap(), ImageFormat::JPEG);
        assert!(format_from_extension("notes.txt").is_err());
        assert!(format_from_extension("README").is_err());
    }
}
