// src/processing/raster/executor.rs

//! Pixel transform engine.
//!
//! Each transform runs inside `tokio::task::spawn_blocking` so the async
//! runtime is never blocked by pixel loops. Callers await one transform at a
//! time, which keeps a single decoded surface alive at any moment.

use tracing::debug;

use crate::core::{Asset, TransformRequest};
use crate::utils::{GalleryError, GalleryResult, ImageFormat, rename_for_format, validate_request};

use super::filters::grayscale_in_place;
use super::formats::{decode, encode_as, source_format, DEFAULT_QUALITY};
use super::resize::resize_to_width;
use super::watermark::apply_watermark;

/// Applies [`TransformRequest`]s to assets, producing new assets.
#[derive(Debug, Clone, Copy)]
pub struct TransformEngine {
    quality: u8,
}

impl Default for TransformEngine {
    fn default() -> Self {
        Self { quality: DEFAULT_QUALITY }
    }
}

impl TransformEngine {
    pub fn new(quality: u8) -> Self {
        Self { quality: quality.clamp(1, 100) }
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Transforms `asset` on the blocking pool and awaits the result.
    pub async fn transform(&self, asset: Asset, request: TransformRequest) -> GalleryResult<Asset> {
        let quality = self.quality;
        tokio::task::spawn_blocking(move || transform_asset(&asset, &request, quality))
            .await
            .map_err(|e| GalleryError::transform(format!("Transform task panicked: {e}")))?
    }
}

/// Decodes, transforms and re-encodes one asset synchronously.
///
/// The decoded surface is owned by this call and released before it
/// returns, on success and on every error path.
pub fn transform_asset(
    asset: &Asset,
    request: &TransformRequest,
    quality: u8,
) -> GalleryResult<Asset> {
    validate_request(request)?;

    let input_format = source_format(asset)?;
    let output_format = match request {
        TransformRequest::Convert { target_mime } => ImageFormat::from_mime(target_mime)?,
        _ => input_format,
    };

    let mut surface = decode(asset, input_format)?;
    let (w0, h0) = surface.dimensions();

    match request {
        TransformRequest::Resize { target_width } => {
            surface = resize_to_width(&surface, *target_width);
        }
        TransformRequest::Grayscale => grayscale_in_place(&mut surface),
        TransformRequest::Watermark { text } => apply_watermark(&mut surface, text),
        TransformRequest::Convert { .. } => {}
    }

    let bytes = encode_as(&surface, output_format, quality)?;

    debug!(
        "'{}' {}: {}×{} → {}×{}, {} → {} ({} bytes)",
        asset.name(),
        request.name(),
        w0,
        h0,
        surface.width(),
        surface.height(),
        input_format.mime_type(),
        output_format.mime_type(),
        bytes.len()
    );

    // Only a conversion renames; every other kind keeps the original file name.
    let name = match request {
        TransformRequest::Convert { .. } => rename_for_format(asset.name(), output_format),
        _ => asset.name().to_string(),
    };

    Ok(Asset::new(name, output_format.mime_type(), bytes))
}
