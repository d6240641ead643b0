pub mod batch;
pub mod raster;

pub use batch::{BatchDefaults, BatchHandle, BatchOperation, BatchProcessor};
pub use raster::TransformEngine;
