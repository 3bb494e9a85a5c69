//! serde view of the configuration file
//!
//! The file is plain TOML with three section tables:
//!
//! ```toml
//! [formatters.verbose]
//! template = "[{timestamp}][{file}:{line} - {logger}.{function}()][{level}][msg:{message}]"
//!
//! [handlers.stdout]
//! kind = "stream"
//! target = "stdout"
//! formatter = "verbose"
//!
//! [loggers.main]
//! level = "INFO"
//! qualname = "__main__"
//! handlers = ["stdout"]
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    #[serde(default)]
    pub formatters: BTreeMap<String, FormatterSpec>,
    #[serde(default)]
    pub handlers: BTreeMap<String, HandlerSpec>,
    #[serde(default)]
    pub loggers: BTreeMap<String, LoggerSpec>,
}

/// One `[formatters.<name>]` section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatterSpec {
    pub template: String,
    /// Timestamp rendering: `iso8601` (default), `rfc3339`, `unix`, or a
    /// strftime pattern.
    #[serde(default)]
    pub datefmt: Option<String>,
}

/// One `[handlers.<name>]` section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HandlerSpec {
    pub kind: SinkKind,
    /// `stdout`/`stderr` for stream sinks (default `stdout`), a file path
    /// for file sinks; unused for null sinks.
    #[serde(default)]
    pub target: Option<String>,
    pub formatter: String,
    /// Tint stream-sink lines by severity (`console` feature).
    #[serde(default)]
    pub colors: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    Null,
    Stream,
    File,
}

/// One `[loggers.<name>]` section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerSpec {
    /// Minimum severity, e.g. `DEBUG`, `INFO`, `OFF`.
    pub level: String,
    /// Display name for the `{logger}` template field; defaults to the
    /// section name.
    #[serde(default)]
    pub qualname: Option<String>,
    #[serde(default)]
    pub handlers: Vec<String>,
}
