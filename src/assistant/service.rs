use async_trait::async_trait;
use tracing::{debug, warn};

use crate::core::Settings;
use crate::utils::{GalleryError, GalleryResult};
use super::prompts::{description_prompt, extraction_prompt, tags_prompt, DataTopic};

pub const FALLBACK_TAGS: [&str; 3] = ["generic", "photo", "asset"];
pub const NO_DESCRIPTION: &str = "No description available.";
pub const DESCRIPTION_FAILED: &str = "Could not generate description.";
pub const NO_DATA: &str = "No data extracted.";
pub const EXTRACTION_FAILED: &str = "Error during extraction.";

/// Remote text-generation backend.
///
/// Implementations return `MissingCredential` when the backend rejects the
/// configured key; every other failure should be `Service`.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &str) -> GalleryResult<String>;
}

/// Name-based tagging, description and extraction on top of a
/// [`CompletionService`].
///
/// `MissingCredential` always propagates. Any other failure is logged and
/// replaced by a fixed fallback result.
pub struct Assistant<S> {
    service: S,
}

impl<S: CompletionService> Assistant<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    async fn request(&self, settings: &Settings, prompt: &str) -> GalleryResult<String> {
        if !settings.has_credential() {
            return Err(GalleryError::MissingCredential);
        }
        debug!("Requesting completion ({} chars)", prompt.len());
        self.service.complete(prompt).await
    }

    /// Up to five tags for `image_name`, parsed from a JSON string array.
    pub async fn generate_tags(&self, settings: &Settings, image_name: &str) -> GalleryResult<Vec<String>> {
        let fallback = || -> Vec<String> { FALLBACK_TAGS.iter().map(|t| t.to_string()).collect() };
        match self.request(settings, &tags_prompt(image_name)).await {
            Ok(text) if text.trim().is_empty() => Ok(Vec::new()),
            Ok(text) => match serde_json::from_str::<Vec<String>>(text.trim()) {
                Ok(tags) => Ok(tags),
                Err(e) => {
                    warn!("Tag reply for '{}' is not a JSON array: {}", image_name, e);
                    Ok(fallback())
                }
            },
            Err(GalleryError::MissingCredential) => Err(GalleryError::MissingCredential),
            Err(e) => {
                warn!("Tagging error for '{}': {}", image_name, e);
                Ok(fallback())
            }
        }
    }

    /// Short description of `image_name`.
    pub async fn describe(&self, settings: &Settings, image_name: &str) -> GalleryResult<String> {
        self.text_or_fallback(settings, &description_prompt(image_name), NO_DESCRIPTION, DESCRIPTION_FAILED)
            .await
    }

    /// Structured data for `topic`, as CSV or Markdown text.
    pub async fn extract_data(&self, settings: &Settings, image_name: &str, topic: DataTopic) -> GalleryResult<String> {
        self.text_or_fallback(settings, &extraction_prompt(image_name, topic), NO_DATA, EXTRACTION_FAILED)
            .await
    }

    async fn text_or_fallback(
        &self,
        settings: &Settings,
        prompt: &str,
        when_empty: &str,
        when_failed: &str,
    ) -> GalleryResult<String> {
        match self.request(settings, prompt).await {
            Ok(text) if text.trim().is_empty() => Ok(when_empty.to_string()),
            Ok(text) => Ok(text),
            Err(GalleryError::MissingCredential) => Err(GalleryError::MissingCredential),
            Err(e) => {
                warn!("Completion failed: {}", e);
                Ok(when_failed.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Reply(GalleryResult<String>);

    #[async_trait]
    impl CompletionService for Reply {
        async fn complete(&self, _prompt: &str) -> GalleryResult<String> {
            self.0.clone()
        }
    }

    fn configured() -> Settings {
        Settings { api_key: "key".into(), ..Settings::default() }
    }

    #[tokio::test]
    async fn missing_key_short_circuits() {
        let assistant = Assistant::new(Reply(Ok("[\"a\"]".into())));
        let err = assistant.generate_tags(&Settings::default(), "x.jpg").await.unwrap_err();
        assert_eq!(err, GalleryError::MissingCredential);
    }

    #[tokio::test]
    async fn local_endpoint_counts_as_configured() {
        let assistant = Assistant::new(Reply(Ok("A sunset.".into())));
        let settings = Settings { use_local_endpoint: true, ..Settings::default() };
        assert_eq!(assistant.describe(&settings, "x.jpg").await.unwrap(), "A sunset.");
    }

    #[tokio::test]
    async fn parses_json_tags() {
        let assistant = Assistant::new(Reply(Ok(r#"["beach","sun"]"#.into())));
        assert_eq!(assistant.generate_tags(&configured(), "x.jpg").await.unwrap(), ["beach", "sun"]);
    }

    #[tokio::test]
    async fn service_errors_fall_back() {
        let assistant = Assistant::new(Reply(Err(GalleryError::service("timeout"))));
        assert_eq!(assistant.generate_tags(&configured(), "x.jpg").await.unwrap(), FALLBACK_TAGS);
        assert_eq!(assistant.describe(&configured(), "x.jpg").await.unwrap(), DESCRIPTION_FAILED);
        assert_eq!(
            assistant.extract_data(&configured(), "x.jpg", DataTopic::Docs).await.unwrap(),
            EXTRACTION_FAILED
        );
    }

    #[tokio::test]
    async fn backend_credential_rejection_propagates() {
        let assistant = Assistant::new(Reply(Err(GalleryError::MissingCredential)));
        assert!(assistant.describe(&configured(), "x.jpg").await.is_err());
    }

    #[tokio::test]
    async fn empty_replies_use_placeholders() {
        let assistant = Assistant::new(Reply(Ok("  ".into())));
        assert!(assistant.generate_tags(&configured(), "x.jpg").await.unwrap().is_empty());
        assert_eq!(assistant.describe(&configured(), "x.jpg").await.unwrap(), NO_DESCRIPTION);
        assert_eq!(
            assistant.extract_data(&configured(), "x.jpg", DataTopic::Misc).await.unwrap(),
            NO_DATA
        );
    }

    #[tokio::test]
    async fn malformed_tags_fall_back() {
        let assistant = Assistant::new(Reply(Ok("beach, sun".into())));
        assert_eq!(assistant.generate_tags(&configured(), "x.jpg").await.unwrap(), FALLBACK_TAGS);
    }
}
