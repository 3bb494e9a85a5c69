//! Formatter templates
//!
//! A template is a string pattern defining which record fields appear in a
//! rendered line and their order, e.g.
//! `[{timestamp}][{file}:{line} - {logger}.{function}()][{level}][msg:{message}]`.
//! Templates are parsed once at configuration load; an unknown field is a
//! startup-fatal error.

use super::error::{LogwireError, Result};
use super::record::LogRecord;
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// The verbose line shape: call-site, logger, level, and message.
pub const VERBOSE_TEMPLATE: &str =
    "[{timestamp}][{file}:{line} - {logger}.{function}()][{level}][msg:{message}]";

/// Message-only shape for machine-readable lines (e.g. CSV metrics).
pub const BARE_TEMPLATE: &str = "{message}";

/// Timestamp rendering for the `{timestamp}` field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z` (default)
    #[default]
    Iso8601,
    /// RFC 3339 with timezone offset
    Rfc3339,
    /// Unix timestamp in seconds
    Unix,
    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}

impl From<&str> for TimestampFormat {
    /// The named formats are recognized; anything else is treated as a
    /// strftime pattern.
    fn from(s: &str) -> Self {
        match s {
            "iso8601" => TimestampFormat::Iso8601,
            "rfc3339" => TimestampFormat::Rfc3339,
            "unix" => TimestampFormat::Unix,
            other => TimestampFormat::Custom(other.to_string()),
        }
    }
}

/// A record field a template may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Timestamp,
    File,
    Line,
    Logger,
    Function,
    Level,
    Message,
}

impl Field {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "timestamp" => Some(Field::Timestamp),
            "file" => Some(Field::File),
            "line" => Some(Field::Line),
            "logger" => Some(Field::Logger),
            "function" => Some(Field::Function),
            "level" => Some(Field::Level),
            "message" => Some(Field::Message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// A parsed formatter template.
#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<Segment>,
    timestamps: TimestampFormat,
}

impl Template {
    /// Parse a template string. `name` identifies the formatter in errors.
    ///
    /// `{{` and `}}` render literal braces.
    pub fn parse(template: &str, name: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut field = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(ch) => field.push(ch),
                            None => {
                                return Err(LogwireError::template_syntax(
                                    name,
                                    "unterminated '{' placeholder",
                                ))
                            }
                        }
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    let parsed = Field::parse(&field)
                        .ok_or_else(|| LogwireError::unknown_field(name, field.as_str()))?;
                    segments.push(Segment::Field(parsed));
                }
                '}' => {
                    return Err(LogwireError::template_syntax(name, "unmatched '}'"));
                }
                _ => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            segments,
            timestamps: TimestampFormat::default(),
        })
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamps = format;
        self
    }

    /// Render one record into a line (without trailing newline).
    ///
    /// Call-site fields missing from the record render as `?`.
    pub fn render(&self, record: &LogRecord) -> String {
        let mut out = String::with_capacity(64 + record.message.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => out.push_str(s),
                Segment::Field(Field::Timestamp) => {
                    out.push_str(&self.timestamps.format(&record.timestamp));
                }
                Segment::Field(Field::File) => {
                    out.push_str(record.file.as_deref().unwrap_or("?"));
                }
                Segment::Field(Field::Line) => match record.line {
                    Some(line) => {
                        let _ = write!(out, "{}", line);
                    }
                    None => out.push('?'),
                },
                Segment::Field(Field::Logger) => out.push_str(&record.logger),
                Segment::Field(Field::Function) => {
                    out.push_str(record.function.as_deref().unwrap_or("?"));
                }
                Segment::Field(Field::Level) => out.push_str(record.severity.as_str()),
                Segment::Field(Field::Message) => out.push_str(&record.message),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::severity::Severity;
    use chrono::TimeZone;
    use std::sync::Arc;

    fn record_at(file: &str, line: u32, function: &str) -> LogRecord {
        let mut record = LogRecord::new(Arc::from("__main__"), Severity::Info, "start".to_string())
            .with_location(file, line, function);
        record.timestamp = Utc
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime");
        record
    }

    #[test]
    fn test_verbose_template_shape() {
        let template = Template::parse(VERBOSE_TEMPLATE, "verbose").expect("parse");
        let line = template.render(&record_at("app", 10, "run"));
        assert_eq!(
            line,
            "[2025-01-08T10:30:45.000Z][app:10 - __main__.run()][INFO][msg:start]"
        );
    }

    #[test]
    fn test_bare_template_is_message_only() {
        let template = Template::parse(BARE_TEMPLATE, "bare").expect("parse");
        let record = LogRecord::new(
            Arc::from("m_load"),
            Severity::Info,
            "load,497,12.5".to_string(),
        );
        assert_eq!(template.render(&record), "load,497,12.5");
    }

    #[test]
    fn test_missing_location_renders_placeholder() {
        let template = Template::parse(VERBOSE_TEMPLATE, "verbose").expect("parse");
        let record = LogRecord::new(Arc::from("main"), Severity::Warning, "msg".to_string());
        let line = template.render(&record);
        assert!(line.contains("[?:? - main.?()]"));
        assert!(line.contains("[WARNING]"));
    }

    #[test]
    fn test_escaped_braces() {
        let template = Template::parse("{{{message}}}", "braces").expect("parse");
        let record = LogRecord::new(Arc::from("main"), Severity::Info, "x".to_string());
        assert_eq!(template.render(&record), "{x}");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Template::parse("{thread}", "verbose").unwrap_err();
        assert!(matches!(err, LogwireError::UnknownField { .. }));
        assert_eq!(
            err.to_string(),
            "formatter 'verbose': unknown template field 'thread'"
        );
    }

    #[test]
    fn test_unterminated_placeholder_rejected() {
        let err = Template::parse("[{message", "bare").unwrap_err();
        assert!(matches!(err, LogwireError::TemplateSyntax { .. }));
    }

    #[test]
    fn test_timestamp_formats() {
        let dt = Utc
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime");
        assert_eq!(
            TimestampFormat::Iso8601.format(&dt),
            "2025-01-08T10:30:45.000Z"
        );
        assert_eq!(
            TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string()).format(&dt),
            "2025/01/08 10:30"
        );
        let unix: i64 = TimestampFormat::Unix.format(&dt).parse().expect("numeric");
        assert!(unix > 0);
    }

    #[test]
    fn test_timestamp_format_from_str() {
        assert_eq!(TimestampFormat::from("iso8601"), TimestampFormat::Iso8601);
        assert_eq!(TimestampFormat::from("rfc3339"), TimestampFormat::Rfc3339);
        assert_eq!(
            TimestampFormat::from("%Y-%m-%d"),
            TimestampFormat::Custom("%Y-%m-%d".to_string())
        );
    }
}
