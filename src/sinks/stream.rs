//! Standard-stream sink

use crate::core::{LogwireError, Result, Severity, Sink};
use std::io::Write;
use std::str::FromStr;

/// Which standard stream a [`StreamSink`] writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamTarget {
    #[default]
    Stdout,
    Stderr,
}

impl StreamTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamTarget::Stdout => "stdout",
            StreamTarget::Stderr => "stderr",
        }
    }
}

impl FromStr for StreamTarget {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "stdout" => Ok(StreamTarget::Stdout),
            "stderr" => Ok(StreamTarget::Stderr),
            _ => Err(format!(
                "invalid stream target '{}' (expected 'stdout' or 'stderr')",
                s
            )),
        }
    }
}

pub struct StreamSink {
    target: StreamTarget,
    use_colors: bool,
}

impl StreamSink {
    pub fn new(target: StreamTarget) -> Self {
        Self {
            target,
            use_colors: false,
        }
    }

    pub fn stdout() -> Self {
        Self::new(StreamTarget::Stdout)
    }

    pub fn stderr() -> Self {
        Self::new(StreamTarget::Stderr)
    }

    /// Tint whole lines by severity. Only effective with the `console`
    /// feature; off by default so rendered shapes stay bit-exact.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn write_raw(&self, line: &str) -> Result<()> {
        let result = match self.target {
            StreamTarget::Stdout => writeln!(std::io::stdout().lock(), "{}", line),
            StreamTarget::Stderr => writeln!(std::io::stderr().lock(), "{}", line),
        };
        result.map_err(|e| LogwireError::sink_write(self.target.as_str(), e))
    }
}

impl Sink for StreamSink {
    fn write_line(&mut self, severity: Severity, line: &str) -> Result<()> {
        #[cfg(feature = "console")]
        if self.use_colors {
            use colored::Colorize;
            let painted = line.color(severity.color_code()).to_string();
            return self.write_raw(&painted);
        }
        let _ = severity;
        self.write_raw(line)
    }

    fn flush(&mut self) -> Result<()> {
        match self.target {
            StreamTarget::Stdout => std::io::stdout().flush()?,
            StreamTarget::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn kind(&self) -> &str {
        "stream"
    }
}
