// src/processing/raster/formats.rs

//! Decoding asset bytes into a raster surface and encoding surfaces back
//! into format-specific byte blobs.

use std::io::Cursor;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbaImage};
use tracing::debug;

use crate::core::Asset;
use crate::utils::{GalleryError, ImageFormat};

type Result<T> = std::result::Result<T, GalleryError>;

/// Quality factor applied wherever the encoder supports lossy output.
pub const DEFAULT_QUALITY: u8 = 90;

// ── Decoding ───────────────────────────────────────────────────────────────────────────

/// Resolves the format of `asset`, trusting the MIME type first and sniffing
/// the bytes when the MIME type is unknown.
pub fn source_format(asset: &Asset) -> Result<ImageFormat> {
    if let Ok(format) = asset.format() {
        return Ok(format);
    }
    let guessed = image::guess_format(asset.bytes()).map_err(|_| {
        GalleryError::source_unavailable(format!(
            "Cannot determine format of '{}' ({})",
            asset.name(),
            asset.mime_type()
        ))
    })?;
    ImageFormat::from_mime(guessed.to_mime_type())
        .map_err(|_| GalleryError::source_unavailable(format!("Unsupported source format for '{}'", asset.name())))
}

/// Decodes `asset` into an 8-bit RGBA surface.
pub fn decode(asset: &Asset, format: ImageFormat) -> Result<RgbaImage> {
    if asset.is_empty() {
        return Err(GalleryError::source_unavailable(format!("'{}' has no data", asset.name())));
    }

    let image = image::load_from_memory_with_format(asset.bytes(), format.codec())
        .or_else(|_| image::load_from_memory(asset.bytes()))
        .map_err(|e| GalleryError::source_unavailable(format!("Failed to decode '{}': {e}", asset.name())))?;

    debug!("Decoded '{}': {}×{}", asset.name(), image.width(), image.height());
    Ok(image.into_rgba8())
}

// ── Encoding ───────────────────────────────────────────────────────────────────────────

/// Encodes as baseline JPEG at `quality`. Alpha is discarded.
pub fn encode_jpeg(surface: &RgbaImage, quality: u8) -> Result<Vec<u8>> {
    let rgb = DynamicImage::ImageRgba8(surface.clone()).into_rgb8();
    let mut buf = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buf, quality.clamp(1, 100));
    encoder
        .encode_image(&rgb)
        .map_err(|e| GalleryError::encode(format!("JPEG encode failed: {e}")))?;
    Ok(buf)
}

/// Encodes losslessly (PNG, WebP, GIF, BMP, TIFF).
pub fn encode_lossless(surface: &RgbaImage, format: ImageFormat) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    surface
        .write_to(&mut cursor, format.codec())
        .map_err(|e| GalleryError::encode(format!("{} encode failed: {e}", format.mime_type())))?;
    Ok(cursor.into_inner())
}

/// Dispatches to the encoder for `format`, failing with `EncodeFailure`
/// when the encoder produced nothing.
pub fn encode_as(surface: &RgbaImage, format: ImageFormat, quality: u8) -> Result<Vec<u8>> {
    let bytes = if format.supports_quality() {
        encode_jpeg(surface, quality)?
    } else {
        encode_lossless(surface, format)?
    };

    if bytes.is_empty() {
        return Err(GalleryError::encode(format!(
            "{} encoder produced no output",
            format.mime_type()
        )));
    }
    Ok(bytes)
}
