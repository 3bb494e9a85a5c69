//! Core logger types and traits

pub mod error;
pub mod handler;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod registry;
pub mod severity;
pub mod sink;
pub mod template;

pub use error::{LogwireError, Result};
pub use handler::Handler;
pub use logger::Logger;
pub use metrics::RegistryMetrics;
pub use record::LogRecord;
pub use registry::{Registry, RegistryBuilder};
pub use severity::Severity;
pub use sink::Sink;
pub use template::{Field, Template, TimestampFormat, BARE_TEMPLATE, VERBOSE_TEMPLATE};
