//! Persisted user configuration.

use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::utils::{GalleryResult, ImageFormat, ValidationError};

pub const DEFAULT_WATERMARK_TEXT: &str = "CONFIDENTIAL";
pub const DEFAULT_CONVERT_MIME: &str = "image/jpeg";
pub const DEFAULT_LOCAL_ENDPOINT: &str = "http://localhost:11434";

/// Key-value settings record shared by the batch and AI features.
///
/// Always passed explicitly; nothing in the core reads settings from
/// ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub api_key: String,
    pub use_local_endpoint: bool,
    pub local_endpoint_url: String,
    pub default_convert_mime: String,
    pub watermark_text: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            use_local_endpoint: false,
            local_endpoint_url: DEFAULT_LOCAL_ENDPOINT.to_string(),
            default_convert_mime: DEFAULT_CONVERT_MIME.to_string(),
            watermark_text: DEFAULT_WATERMARK_TEXT.to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from `path`, falling back to defaults when the file
    /// does not exist.
    pub async fn load(path: impl AsRef<Path>) -> GalleryResult<Self> {
        let path = path.as_ref();
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let settings: Settings = serde_json::from_str(&raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub async fn save(&self, path: impl AsRef<Path>) -> GalleryResult<()> {
        self.validate()?;
        let raw = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.as_ref().parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path.as_ref(), raw).await?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        ImageFormat::from_mime(&self.default_convert_mime).map_err(|_| {
            ValidationError::settings(format!(
                "Unsupported default convert format: {}",
                self.default_convert_mime
            ))
        })?;
        if self.use_local_endpoint && self.local_endpoint_url.trim().is_empty() {
            return Err(ValidationError::settings("Local endpoint URL is empty"));
        }
        Ok(())
    }

    /// Watermark text to stamp, never empty
    pub fn effective_watermark_text(&self) -> &str {
        match self.watermark_text.trim() {
            "" => DEFAULT_WATERMARK_TEXT,
            text => text,
        }
    }

    /// Whether the AI service can be called at all
    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty() || self.use_local_endpoint
    }
}
