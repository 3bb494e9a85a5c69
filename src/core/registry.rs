//! The logger registry
//!
//! All three configuration tables (loggers, handlers, formatters) are built
//! once at startup and held immutable for the process lifetime. The
//! registry is the single explicitly-constructed object components receive;
//! each obtains its named handle once at construction.

use super::error::{LogwireError, Result};
use super::handler::Handler;
use super::logger::Logger;
use super::metrics::RegistryMetrics;
use super::severity::Severity;
use super::sink::Sink;
use super::template::Template;
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;

pub struct Registry {
    loggers: HashMap<String, Logger>,
    handlers: Vec<Arc<Mutex<Handler>>>,
    metrics: Arc<RegistryMetrics>,
}

impl Registry {
    /// Load and validate a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        crate::config::from_file(path)
    }

    /// Parse and validate a TOML configuration string.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        crate::config::from_toml_str(source)
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Obtain a handle for a named logger.
    ///
    /// Names absent from the configuration yield a disabled handle that
    /// produces no output, so only explicitly configured loggers emit.
    pub fn logger(&self, name: &str) -> Logger {
        self.loggers
            .get(name)
            .cloned()
            .unwrap_or_else(|| Logger::disabled(name, Arc::clone(&self.metrics)))
    }

    pub fn get(&self, name: &str) -> Option<&Logger> {
        self.loggers.get(name)
    }

    pub fn logger_names(&self) -> impl Iterator<Item = &str> {
        self.loggers.keys().map(String::as_str)
    }

    pub fn metrics(&self) -> &RegistryMetrics {
        &self.metrics
    }

    /// Flush every handler's sink.
    pub fn flush(&self) -> Result<()> {
        for handler in &self.handlers {
            handler.lock().flush()?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("loggers", &self.loggers.keys().collect::<Vec<_>>())
            .field("handlers", &self.handlers.len())
            .field("metrics", &self.metrics)
            .finish()
    }
}

impl Drop for Registry {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("logwire: flush on shutdown failed: {}", e);
        }
    }
}

struct LoggerDef {
    name: String,
    qualname: Option<String>,
    threshold: Severity,
    handlers: Vec<String>,
}

/// Programmatic construction of a [`Registry`] with the same reference
/// validation the file loader applies: every handler must name a known
/// formatter, every logger must name known handlers.
pub struct RegistryBuilder {
    formatters: BTreeMap<String, Template>,
    handlers: Vec<(String, String, Box<dyn Sink>)>,
    loggers: Vec<LoggerDef>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            formatters: BTreeMap::new(),
            handlers: Vec::new(),
            loggers: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter(mut self, name: impl Into<String>, template: Template) -> Self {
        self.formatters.insert(name.into(), template);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn handler(
        mut self,
        name: impl Into<String>,
        formatter: impl Into<String>,
        sink: Box<dyn Sink>,
    ) -> Self {
        self.handlers.push((name.into(), formatter.into(), sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn logger(self, name: impl Into<String>, threshold: Severity, handlers: &[&str]) -> Self {
        self.logger_with_qualname_opt(name, None, threshold, handlers)
    }

    /// Register a logger whose `{logger}` field renders as `qualname`
    /// instead of its lookup name.
    #[must_use = "builder methods return a new value"]
    pub fn logger_with_qualname(
        self,
        name: impl Into<String>,
        qualname: impl Into<String>,
        threshold: Severity,
        handlers: &[&str],
    ) -> Self {
        self.logger_with_qualname_opt(name, Some(qualname.into()), threshold, handlers)
    }

    fn logger_with_qualname_opt(
        mut self,
        name: impl Into<String>,
        qualname: Option<String>,
        threshold: Severity,
        handlers: &[&str],
    ) -> Self {
        self.loggers.push(LoggerDef {
            name: name.into(),
            qualname,
            threshold,
            handlers: handlers.iter().map(|h| h.to_string()).collect(),
        });
        self
    }

    /// Validate all references and build the immutable registry.
    pub fn build(self) -> Result<Registry> {
        let metrics = Arc::new(RegistryMetrics::new());

        let mut handler_table: HashMap<String, Arc<Mutex<Handler>>> = HashMap::new();
        let mut all_handlers = Vec::with_capacity(self.handlers.len());
        for (name, formatter, sink) in self.handlers {
            let template = self
                .formatters
                .get(&formatter)
                .cloned()
                .ok_or_else(|| LogwireError::undefined_formatter(name.as_str(), formatter))?;
            let handler = Arc::new(Mutex::new(Handler::new(name.as_str(), template, sink)));
            all_handlers.push(Arc::clone(&handler));
            handler_table.insert(name, handler);
        }

        let mut loggers = HashMap::with_capacity(self.loggers.len());
        for def in self.loggers {
            let mut bound = Vec::with_capacity(def.handlers.len());
            for handler_name in &def.handlers {
                let handler = handler_table.get(handler_name).ok_or_else(|| {
                    LogwireError::undefined_handler(def.name.as_str(), handler_name.as_str())
                })?;
                bound.push(Arc::clone(handler));
            }
            let name: Arc<str> = Arc::from(def.name.as_str());
            let qualname: Arc<str> = match def.qualname {
                Some(q) => Arc::from(q.as_str()),
                None => Arc::clone(&name),
            };
            loggers.insert(
                def.name,
                Logger::new(name, qualname, def.threshold, bound, Arc::clone(&metrics)),
            );
        }

        Ok(Registry {
            loggers,
            handlers: all_handlers,
            metrics,
        })
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
