//! Discarding sink

use crate::core::{Result, Severity, Sink};

/// Swallows every line. Used to keep a handler slot occupied (e.g. the
/// suppressed root logger) without producing output.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl Sink for NullSink {
    #[inline]
    fn write_line(&mut self, _severity: Severity, _line: &str) -> Result<()> {
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn kind(&self) -> &str {
        "null"
    }
}
