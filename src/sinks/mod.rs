//! Sink implementations

pub mod file;
pub mod null;
pub mod stream;

pub use file::FileSink;
pub use null::NullSink;
pub use stream::{StreamSink, StreamTarget};

// Re-export the trait alongside its implementations.
pub use crate::core::Sink;
