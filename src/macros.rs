//! Logging macros
//!
//! Thin wrappers over [`Logger::log_at`](crate::Logger::log_at) that attach
//! call-site metadata (`file!()`, `line!()`, `module_path!()`) for verbose
//! templates, with `format!`-style message arguments.
//!
//! # Examples
//!
//! ```
//! use logwire::{info, Registry, Severity, Template, BARE_TEMPLATE};
//! use logwire::sinks::NullSink;
//!
//! let registry = Registry::builder()
//!     .formatter("bare", Template::parse(BARE_TEMPLATE, "bare").unwrap())
//!     .handler("null", "bare", Box::new(NullSink))
//!     .logger("main", Severity::Info, &["null"])
//!     .build()
//!     .unwrap();
//!
//! let logger = registry.logger("main");
//! info!(logger, "processing {} files", 497);
//! ```

/// Log at an explicit severity with call-site metadata.
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log_at($severity, format!($($arg)+), file!(), line!(), module_path!())
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Critical, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Registry, Severity, Template, BARE_TEMPLATE};
    use crate::sinks::NullSink;

    fn test_registry() -> Registry {
        Registry::builder()
            .formatter("bare", Template::parse(BARE_TEMPLATE, "bare").expect("parse"))
            .handler("null", "bare", Box::new(NullSink))
            .logger("main", Severity::Debug, &["null"])
            .build()
            .expect("build")
    }

    #[test]
    fn test_log_macro() {
        let registry = test_registry();
        let logger = registry.logger("main");
        log!(logger, Severity::Info, "plain message");
        log!(logger, Severity::Info, "formatted: {}", 42);
        assert_eq!(registry.metrics().lines_written(), 2);
    }

    #[test]
    fn test_level_macros() {
        let registry = test_registry();
        let logger = registry.logger("main");
        debug!(logger, "debug {}", 1);
        info!(logger, "info");
        warning!(logger, "retry {} of {}", 1, 3);
        error!(logger, "code {}", 500);
        critical!(logger, "unrecoverable");
        assert_eq!(registry.metrics().lines_written(), 5);
    }
}
