//! Error types for the logwire crate

pub type Result<T> = std::result::Result<T, LogwireError>;

/// Configuration errors are startup-fatal: loading aborts on the first
/// undefined reference, unparseable section, or unwritable sink target.
/// Write errors are the only variants produced after startup, and they are
/// reported rather than propagated into the emitting call.
#[derive(Debug, thiserror::Error)]
pub enum LogwireError {
    /// Failed to read the configuration file
    #[error("failed to read config '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed TOML in the configuration source
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A logger section carries an unparseable severity level
    #[error("logger '{logger}': {message}")]
    InvalidSeverity { logger: String, message: String },

    /// A logger references a handler name with no `[handlers.*]` section
    #[error("logger '{logger}' references undefined handler '{handler}'")]
    UndefinedHandler { logger: String, handler: String },

    /// A handler references a formatter name with no `[formatters.*]` section
    #[error("handler '{handler}' references undefined formatter '{formatter}'")]
    UndefinedFormatter { handler: String, formatter: String },

    /// A formatter template names a field the renderer does not know
    #[error("formatter '{formatter}': unknown template field '{field}'")]
    UnknownField { formatter: String, field: String },

    /// A formatter template is syntactically broken
    #[error("formatter '{formatter}': {message}")]
    TemplateSyntax { formatter: String, message: String },

    /// A handler section is internally inconsistent (bad target, etc.)
    #[error("handler '{handler}': {message}")]
    InvalidHandler { handler: String, message: String },

    /// A file sink target could not be opened for append
    #[error("cannot open sink file '{path}': {source}")]
    SinkUnwritable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A sink write failed after startup
    #[error("write to {sink} sink failed: {source}")]
    SinkWrite {
        sink: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LogwireError {
    pub fn config_read(path: impl Into<String>, source: std::io::Error) -> Self {
        LogwireError::ConfigRead {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_severity(logger: impl Into<String>, message: impl Into<String>) -> Self {
        LogwireError::InvalidSeverity {
            logger: logger.into(),
            message: message.into(),
        }
    }

    pub fn undefined_handler(logger: impl Into<String>, handler: impl Into<String>) -> Self {
        LogwireError::UndefinedHandler {
            logger: logger.into(),
            handler: handler.into(),
        }
    }

    pub fn undefined_formatter(handler: impl Into<String>, formatter: impl Into<String>) -> Self {
        LogwireError::UndefinedFormatter {
            handler: handler.into(),
            formatter: formatter.into(),
        }
    }

    pub fn unknown_field(formatter: impl Into<String>, field: impl Into<String>) -> Self {
        LogwireError::UnknownField {
            formatter: formatter.into(),
            field: field.into(),
        }
    }

    pub fn template_syntax(formatter: impl Into<String>, message: impl Into<String>) -> Self {
        LogwireError::TemplateSyntax {
            formatter: formatter.into(),
            message: message.into(),
        }
    }

    pub fn invalid_handler(handler: impl Into<String>, message: impl Into<String>) -> Self {
        LogwireError::InvalidHandler {
            handler: handler.into(),
            message: message.into(),
        }
    }

    pub fn sink_unwritable(path: impl Into<String>, source: std::io::Error) -> Self {
        LogwireError::SinkUnwritable {
            path: path.into(),
            source,
        }
    }

    pub fn sink_write(sink: impl Into<String>, source: std::io::Error) -> Self {
        LogwireError::SinkWrite {
            sink: sink.into(),
            source,
        }
    }
}
