pub mod error;
pub mod validation;
pub mod formats;
pub mod fs;

pub use error::{FailureKind, GalleryError, GalleryResult, ValidationError};
pub use validation::validate_request;
pub use formats::{ImageFormat, format_from_extension, rename_for_format};
pub use fs::{read_image_asset, write_asset};
