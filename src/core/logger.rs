//! Named logger handles

use super::handler::Handler;
use super::metrics::RegistryMetrics;
use super::record::LogRecord;
use super::severity::Severity;
use parking_lot::Mutex;
use std::sync::Arc;

/// A cheap cloneable handle to one configured logger.
///
/// Components obtain their handle once at construction (`Registry::logger`)
/// and hold it for the process lifetime; there is no implicit global lookup.
/// Emission is synchronous and fire-and-forget: messages below the
/// threshold are dropped before any rendering, and a sink failure is
/// reported on stderr and counted, never propagated into the caller.
#[derive(Clone)]
pub struct Logger {
    name: Arc<str>,
    qualname: Arc<str>,
    threshold: Severity,
    handlers: Vec<Arc<Mutex<Handler>>>,
    metrics: Arc<RegistryMetrics>,
}

impl Logger {
    pub(crate) fn new(
        name: Arc<str>,
        qualname: Arc<str>,
        threshold: Severity,
        handlers: Vec<Arc<Mutex<Handler>>>,
        metrics: Arc<RegistryMetrics>,
    ) -> Self {
        Self {
            name,
            qualname,
            threshold,
            handlers,
            metrics,
        }
    }

    /// Handle for a name absent from the configuration: threshold above
    /// every emittable severity, bound to nothing.
    pub(crate) fn disabled(name: &str, metrics: Arc<RegistryMetrics>) -> Self {
        Self {
            name: Arc::from(name),
            qualname: Arc::from(name),
            threshold: Severity::Off,
            handlers: Vec::new(),
            metrics,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display name used for the `{logger}` template field.
    pub fn qualname(&self) -> &str {
        &self.qualname
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Would a message at this severity reach any sink?
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.threshold && !self.handlers.is_empty()
    }

    pub fn log(&self, severity: Severity, message: impl Into<String>) {
        if !self.enabled(severity) {
            return;
        }
        let record = LogRecord::new(Arc::clone(&self.qualname), severity, message.into());
        self.dispatch(&record);
    }

    /// Log with explicit call-site metadata for verbose templates.
    pub fn log_at(
        &self,
        severity: Severity,
        message: impl Into<String>,
        file: &str,
        line: u32,
        function: &str,
    ) {
        if !self.enabled(severity) {
            return;
        }
        let record = LogRecord::new(Arc::clone(&self.qualname), severity, message.into())
            .with_location(file, line, function);
        self.dispatch(&record);
    }

    fn dispatch(&self, record: &LogRecord) {
        for handler in &self.handlers {
            let mut handler = handler.lock();
            match handler.emit(record) {
                Ok(()) => {
                    self.metrics.record_written();
                }
                Err(e) => {
                    self.metrics.record_failed();
                    eprintln!("logwire: handler '{}' write failed: {}", handler.name(), e);
                }
            }
        }
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Severity::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(Severity::Info, message);
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(Severity::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(Severity::Error, message);
    }

    #[inline]
    pub fn critical(&self, message: impl Into<String>) {
        self.log(Severity::Critical, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_logger_is_silent() {
        let logger = Logger::disabled("unconfigured", Arc::new(RegistryMetrics::new()));
        assert!(!logger.enabled(Severity::Critical));
        // No handler bound; nothing to write, nothing to fail.
        logger.critical("never seen");
        assert_eq!(logger.metrics.lines_written(), 0);
    }

    #[test]
    fn test_threshold_filter() {
        use crate::core::template::{Template, BARE_TEMPLATE};
        use crate::sinks::NullSink;

        let handler = Arc::new(Mutex::new(Handler::new(
            "null",
            Template::parse(BARE_TEMPLATE, "bare").expect("parse"),
            Box::new(NullSink),
        )));
        let metrics = Arc::new(RegistryMetrics::new());
        let logger = Logger::new(
            Arc::from("main"),
            Arc::from("main"),
            Severity::Warning,
            vec![handler],
            Arc::clone(&metrics),
        );

        logger.debug("below");
        logger.info("below");
        logger.warning("at");
        logger.error("above");

        assert_eq!(metrics.lines_written(), 2);
    }
}
