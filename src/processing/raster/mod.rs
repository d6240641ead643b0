// src/processing/raster/mod.rs

//! Pixel transform engine built on the `image` crate.
//!
//! # Architecture
//!
//! - [`TransformEngine`]: Decodes an asset, applies one transform, re-encodes.
//! - [`resize`]: Width-driven, aspect-preserving scaling.
//! - [`filters`]: Channel-average grayscale.
//! - [`watermark`]: Bottom-right text overlay.
//! - [`formats`]: Decoding and format-specific encoding.

mod executor;
pub mod filters;
pub mod formats;
pub mod resize;
pub mod watermark;

pub use executor::{transform_asset, TransformEngine};
pub use formats::DEFAULT_QUALITY;
