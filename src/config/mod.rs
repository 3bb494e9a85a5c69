//! Declarative configuration: TOML sections for formatters, handlers, and
//! loggers, validated and wired into a [`crate::core::Registry`] at startup.

pub mod loader;
pub mod raw;

pub use loader::{from_file, from_toml_str};
pub use raw::{FormatterSpec, HandlerSpec, LoggerSpec, RawConfig, SinkKind};
