//! Log record structure

use super::severity::Severity;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// A single emission: everything a formatter template can reference.
///
/// Records are built by the logger handle at the moment of emission and
/// passed by reference through every bound handler.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub severity: Severity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Display name of the emitting logger (its `qualname`).
    pub logger: Arc<str>,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub function: Option<String>,
}

impl LogRecord {
    /// Sanitize the message to prevent log injection.
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so a single emission always renders as a single line.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(logger: Arc<str>, severity: Severity, message: String) -> Self {
        Self {
            severity,
            message: Self::sanitize_message(&message),
            timestamp: Utc::now(),
            logger,
            file: None,
            line: None,
            function: None,
        }
    }

    pub fn with_location(mut self, file: &str, line: u32, function: &str) -> Self {
        self.file = Some(file.to_string());
        self.line = Some(line);
        self.function = Some(function.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_sanitization() {
        let record = LogRecord::new(
            Arc::from("main"),
            Severity::Info,
            "line one\nline two\twith tab\r".to_string(),
        );
        assert_eq!(record.message, "line one\\nline two\\twith tab\\r");
    }

    #[test]
    fn test_with_location() {
        let record = LogRecord::new(Arc::from("main"), Severity::Info, "msg".to_string())
            .with_location("app", 10, "run");
        assert_eq!(record.file.as_deref(), Some("app"));
        assert_eq!(record.line, Some(10));
        assert_eq!(record.function.as_deref(), Some("run"));
    }
}
