//! # Logwire
//!
//! Configuration-driven logging: a declarative TOML file names loggers,
//! handlers, and formatters and wires them together. Emitting a message at
//! a named logger writes a formatted line to each of that logger's bound
//! sinks, filtered by the logger's minimum severity.
//!
//! ## Features
//!
//! - **Declarative**: loggers, handlers, and formatters live in one config
//!   file; broken references fail startup, not the first emission
//! - **Multiple Sinks**: standard streams, append-only files, or discard
//! - **Explicit Handles**: components obtain a named logger once at
//!   construction; nothing is looked up through global state
//!
//! ## Quick start
//!
//! ```no_run
//! use logwire::Registry;
//!
//! let registry = Registry::from_file("config/basic.toml")?;
//! let logger = registry.logger("main");
//! logger.info("starting program");
//! # Ok::<(), logwire::LogwireError>(())
//! ```

pub mod config;
pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Handler, LogRecord, Logger, LogwireError, Registry, RegistryBuilder, RegistryMetrics,
        Result, Severity, Sink, Template, TimestampFormat, BARE_TEMPLATE, VERBOSE_TEMPLATE,
    };
    pub use crate::sinks::{FileSink, NullSink, StreamSink, StreamTarget};
}

pub use config::{FormatterSpec, HandlerSpec, LoggerSpec, RawConfig, SinkKind};
pub use core::{
    Handler, LogRecord, Logger, LogwireError, Registry, RegistryBuilder, RegistryMetrics, Result,
    Severity, Sink, Template, TimestampFormat, BARE_TEMPLATE, VERBOSE_TEMPLATE,
};
pub use sinks::{FileSink, NullSink, StreamSink, StreamTarget};
