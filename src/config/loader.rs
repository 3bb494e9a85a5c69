//! Configuration loader
//!
//! Turns a parsed [`RawConfig`] into a ready-to-use [`Registry`]: parses
//! every template, opens every file sink, and validates every logger →
//! handler → formatter edge. Any broken reference or unwritable target is
//! startup-fatal; nothing is retried.

use super::raw::{HandlerSpec, RawConfig, SinkKind};
use crate::core::{LogwireError, Registry, Result, Severity, Sink, Template, TimestampFormat};
use crate::sinks::{FileSink, NullSink, StreamSink, StreamTarget};
use std::path::Path;

pub fn from_file(path: impl AsRef<Path>) -> Result<Registry> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)
        .map_err(|e| LogwireError::config_read(path.display().to_string(), e))?;
    from_toml_str(&source)
}

pub fn from_toml_str(source: &str) -> Result<Registry> {
    let raw: RawConfig = toml::from_str(source)?;
    build(raw)
}

fn build(raw: RawConfig) -> Result<Registry> {
    let RawConfig {
        formatters,
        handlers,
        loggers,
    } = raw;
    let mut builder = Registry::builder();

    for (name, spec) in formatters {
        let mut template = Template::parse(&spec.template, &name)?;
        if let Some(datefmt) = &spec.datefmt {
            template = template.with_timestamp_format(TimestampFormat::from(datefmt.as_str()));
        }
        builder = builder.formatter(name, template);
    }

    for (name, spec) in handlers {
        let sink = make_sink(&name, &spec)?;
        builder = builder.handler(name, spec.formatter, sink);
    }

    for (name, spec) in loggers {
        let threshold: Severity = spec
            .level
            .parse()
            .map_err(|e: String| LogwireError::invalid_severity(name.as_str(), e))?;
        let bound: Vec<&str> = spec.handlers.iter().map(String::as_str).collect();
        builder = match &spec.qualname {
            Some(qualname) => {
                builder.logger_with_qualname(name, qualname.as_str(), threshold, &bound)
            }
            None => builder.logger(name, threshold, &bound),
        };
    }

    builder.build()
}

fn make_sink(name: &str, spec: &HandlerSpec) -> Result<Box<dyn Sink>> {
    match spec.kind {
        SinkKind::Null => Ok(Box::new(NullSink)),
        SinkKind::Stream => {
            let target = match spec.target.as_deref() {
                Some(t) => t
                    .parse::<StreamTarget>()
                    .map_err(|e| LogwireError::invalid_handler(name, e))?,
                None => StreamTarget::default(),
            };
            Ok(Box::new(StreamSink::new(target).with_colors(spec.colors)))
        }
        SinkKind::File => {
            let target = spec.target.as_deref().ok_or_else(|| {
                LogwireError::invalid_handler(name, "file sink requires a 'target' path")
            })?;
            Ok(Box::new(FileSink::open(target)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_loads() {
        let registry = from_toml_str(
            r#"
            [formatters.bare]
            template = "{message}"

            [handlers.null]
            kind = "null"
            formatter = "bare"

            [loggers.main]
            level = "INFO"
            handlers = ["null"]
            "#,
        )
        .expect("load");

        let logger = registry.logger("main");
        assert!(logger.enabled(Severity::Info));
        assert!(!logger.enabled(Severity::Debug));
    }

    #[test]
    fn test_undefined_formatter_is_fatal() {
        let err = from_toml_str(
            r#"
            [handlers.stdout]
            kind = "stream"
            formatter = "missing"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, LogwireError::UndefinedFormatter { .. }));
    }

    #[test]
    fn test_undefined_handler_is_fatal() {
        let err = from_toml_str(
            r#"
            [loggers.main]
            level = "INFO"
            handlers = ["missing"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, LogwireError::UndefinedHandler { .. }));
    }

    #[test]
    fn test_invalid_level_is_fatal() {
        let err = from_toml_str(
            r#"
            [loggers.main]
            level = "LOUD"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, LogwireError::InvalidSeverity { .. }));
    }

    #[test]
    fn test_bad_stream_target_is_fatal() {
        let err = from_toml_str(
            r#"
            [formatters.bare]
            template = "{message}"

            [handlers.out]
            kind = "stream"
            target = "syslog"
            formatter = "bare"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, LogwireError::InvalidHandler { .. }));
    }

    #[test]
    fn test_file_sink_without_target_is_fatal() {
        let err = from_toml_str(
            r#"
            [formatters.bare]
            template = "{message}"

            [handlers.metrics]
            kind = "file"
            formatter = "bare"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, LogwireError::InvalidHandler { .. }));
    }

    #[test]
    fn test_malformed_toml_is_fatal() {
        let err = from_toml_str("loggers = 3").unwrap_err();
        assert!(matches!(err, LogwireError::ConfigParse(_)));
    }
}
