//! Error types for the gallery core.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use std::io;
use thiserror::Error;
use serde::Serialize;

/// Validation errors for transform requests, tag edits and settings.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum ValidationError {
    /// Transform parameters are out of range
    #[error("Invalid request: {0}")]
    Request(String),
    /// Tag set already holds the maximum number of tags
    #[error("Tag limit reached: at most {0} tags per item")]
    TagLimit(usize),
    /// Settings record is unusable
    #[error("Settings error: {0}")]
    Settings(String),
}

/// Main error type for the gallery core.
///
/// Item-level variants (`SourceUnavailable`, `UnknownOperation`, `EncodeFailure`,
/// `Transform`) are caught by the batch processor and recorded as failures.
/// `MissingCredential` is the one error the AI boundary always propagates.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum GalleryError {
    /// Asset bytes are missing or cannot be decoded
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// Operation label did not route to any transform
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// Re-encoding produced no output
    #[error("Encode failure: {0}")]
    EncodeFailure(String),

    /// No API key configured for the AI text service
    #[error("Missing API Key")]
    MissingCredential,

    /// Catch-all transform failure, message kept for diagnostics
    #[error("Transform error: {0}")]
    Transform(String),

    /// Request, tag or settings validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Unsupported or invalid image format
    #[error("Format error: {0}")]
    Format(String),

    /// File IO error
    #[error("IO error: {0}")]
    IO(String),

    /// AI text service failed for a reason other than credentials
    #[error("Service error: {0}")]
    Service(String),

    /// A batch was requested with nothing to process
    #[error("No targets selected")]
    NoTargets,
}

/// Convenience result type for gallery operations.
pub type GalleryResult<T> = Result<T, GalleryError>;

/// Stable tag for an error, recorded alongside batch failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FailureKind {
    SourceUnavailable,
    UnknownOperation,
    EncodeFailure,
    MissingCredential,
    Transform,
    Validation,
    Format,
    IO,
    Service,
    NoTargets,
}

// Helper methods for error creation
impl GalleryError {
    pub fn source_unavailable<T: Into<String>>(msg: T) -> Self {
        Self::SourceUnavailable(msg.into())
    }

    pub fn unknown_operation<T: Into<String>>(label: T) -> Self {
        Self::UnknownOperation(label.into())
    }

    pub fn encode<T: Into<String>>(msg: T) -> Self {
        Self::EncodeFailure(msg.into())
    }

    pub fn transform<T: Into<String>>(msg: T) -> Self {
        Self::Transform(msg.into())
    }

    pub fn format<T: Into<String>>(msg: T) -> Self {
        Self::Format(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        Self::IO(msg.into())
    }

    pub fn service<T: Into<String>>(msg: T) -> Self {
        Self::Service(msg.into())
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::SourceUnavailable(_) => FailureKind::SourceUnavailable,
            Self::UnknownOperation(_) => FailureKind::UnknownOperation,
            Self::EncodeFailure(_) => FailureKind::EncodeFailure,
            Self::MissingCredential => FailureKind::MissingCredential,
            Self::Transform(_) => FailureKind::Transform,
            Self::Validation(_) => FailureKind::Validation,
            Self::Format(_) => FailureKind::Format,
            Self::IO(_) => FailureKind::IO,
            Self::Service(_) => FailureKind::Service,
            Self::NoTargets => FailureKind::NoTargets,
        }
    }

    /// Whether retrying the same item with different input could succeed.
    ///
    /// Nothing in the core retries on its own; the flag is carried on
    /// failures for later inspection.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::MissingCredential | Self::IO(_) | Self::Service(_))
    }
}

// Helper methods for validation error creation
impl ValidationError {
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}

// Convert std::io::Error to GalleryError
impl From<io::Error> for GalleryError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

// Decoder/encoder errors that escape a more specific mapping are generic transform failures
impl From<image::ImageError> for GalleryError {
    fn from(err: image::ImageError) -> Self {
        Self::Transform(err.to_string())
    }
}

impl From<serde_json::Error> for GalleryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Validation(ValidationError::settings(err.to_string()))
    }
}
