use crate::core::TransformRequest;
use crate::utils::{GalleryResult, ImageFormat, ValidationError};

/// Largest output width a resize may request.
pub const MAX_TARGET_WIDTH: u32 = 16_384;

/// Validates a transform request before any decoding happens
pub fn validate_request(request: &TransformRequest) -> GalleryResult<()> {
    match request {
        TransformRequest::Resize { target_width } => {
            if *target_width == 0 {
                return Err(ValidationError::request("Target width cannot be 0").into());
            }
            if *target_width > MAX_TARGET_WIDTH {
                return Err(ValidationError::request(format!(
                    "Target width {} exceeds the maximum of {}",
                    target_width, MAX_TARGET_WIDTH
                ))
                .into());
            }
        }
        TransformRequest::Convert { target_mime } => {
            // This will validate the MIME type and format
            ImageFormat::from_mime(target_mime)?;
        }
        TransformRequest::Watermark { .. } | TransformRequest::Grayscale => {}
    }
    Ok(())
}
