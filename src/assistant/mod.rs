//! Boundary to the remote AI text service.
//!
//! All operations are driven by the image's file name only; no pixel data
//! is sent anywhere.

mod prompts;
mod service;

pub use prompts::{DataTopic, ExtractedFile, description_prompt, extraction_prompt, tags_prompt};
pub use service::{
    Assistant, CompletionService, DESCRIPTION_FAILED, EXTRACTION_FAILED, FALLBACK_TAGS, NO_DATA,
    NO_DESCRIPTION,
};
