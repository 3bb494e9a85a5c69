//! Handler: a formatter template bound to a sink

use super::error::Result;
use super::record::LogRecord;
use super::sink::Sink;
use super::template::Template;

/// A named output binding: renders records through its template and writes
/// one line per emission to its sink. Handlers may be shared by several
/// loggers, so the registry keeps each one behind a mutex.
pub struct Handler {
    name: String,
    template: Template,
    sink: Box<dyn Sink>,
}

impl Handler {
    pub fn new(name: impl Into<String>, template: Template, sink: Box<dyn Sink>) -> Self {
        Self {
            name: name.into(),
            template,
            sink,
        }
    }

    pub fn emit(&mut self, record: &LogRecord) -> Result<()> {
        let line = self.template.render(record);
        self.sink.write_line(record.severity, &line)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sink_kind(&self) -> &str {
        self.sink.kind()
    }
}
