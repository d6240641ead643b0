mod config;
mod processor;

pub use config::BatchDefaults;
pub use processor::{BatchHandle, BatchOperation, BatchProcessor};
