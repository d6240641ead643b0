//! Transform request definition.

use serde::{Deserialize, Serialize};

/// A typed description of one pixel operation and its parameters.
///
/// Built by the caller before a batch starts; the processor never parses
/// free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TransformRequest {
    /// Scale to `target_width`, height derived from the aspect ratio
    #[serde(rename_all = "camelCase")]
    Resize { target_width: u32 },
    /// Re-encode as `target_mime` without touching pixels
    #[serde(rename_all = "camelCase")]
    Convert { target_mime: String },
    /// Overlay `text` in the bottom-right corner
    Watermark { text: String },
    /// Channel-average desaturation
    Grayscale,
}

impl TransformRequest {
    pub fn resize(target_width: u32) -> Self {
        Self::Resize { target_width }
    }

    pub fn convert(target_mime: impl Into<String>) -> Self {
        Self::Convert { target_mime: target_mime.into() }
    }

    pub fn watermark(text: impl Into<String>) -> Self {
        Self::Watermark { text: text.into() }
    }

    /// Short lowercase name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Resize { .. } => "resize",
            Self::Convert { .. } => "convert",
            Self::Watermark { .. } => "watermark",
            Self::Grayscale => "grayscale",
        }
    }
}
