//! Sink trait for log output destinations

use super::error::Result;
use super::severity::Severity;

/// The destination a rendered log line is written to.
///
/// `write_line` receives the line without a trailing newline; the sink owns
/// the line terminator. The severity is passed alongside so stream sinks can
/// tint lines without re-parsing them.
pub trait Sink: Send + Sync {
    fn write_line(&mut self, severity: Severity, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn kind(&self) -> &str;
}
