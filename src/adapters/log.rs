//! Adapter forwarding to the `log` crate
//!
//! The `log` crate has neither fatal nor panic levels, so both collapse to
//! `Error`; exit and unwinding are already handled by the facade before the
//! backend sees anything. It has no structured fields either, so carried
//! fields are rendered `key=value` and appended to the message.

use std::fmt;

use crate::core::{Fields, Level, Logger, Result, SharedLogger};

const TARGET: &str = "dlog";

/// Facade backend delegating to whatever `log::Log` implementation is
/// installed
#[derive(Clone)]
pub struct LogAdapter {
    fields: Fields,
    min_level: Level,
}

impl Default for LogAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogAdapter {
    pub fn new() -> Self {
        Self {
            fields: Fields::new(),
            min_level: Level::Debug,
        }
    }

    /// Install this adapter in the global slot, returning the previous
    /// logger
    pub fn register() -> SharedLogger {
        crate::set_logger(Self::new())
    }
}

/// Level-mapping table into the `log` crate's level set
pub fn map_level(level: Level) -> log::Level {
    match level {
        Level::Debug => log::Level::Debug,
        Level::Info => log::Level::Info,
        Level::Warn => log::Level::Warn,
        Level::Error | Level::Fatal | Level::Panic => log::Level::Error,
    }
}

impl Logger for LogAdapter {
    fn min_level(&self) -> Level {
        self.min_level
    }

    fn log(&self, level: Level, message: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        if self.fields.is_empty() {
            log::log!(target: TARGET, map_level(level), "{}", message);
        } else {
            log::log!(target: TARGET, map_level(level), "{} {}", message, self.fields);
        }
    }

    fn with_fields(&self, fields: Fields) -> SharedLogger {
        let mut derived = self.clone();
        derived.fields = derived.fields.merged(fields);
        SharedLogger::new(derived)
    }

    fn at_level(&self, level: Level) -> SharedLogger {
        let mut derived = self.clone();
        derived.min_level = level;
        SharedLogger::new(derived)
    }

    fn flush(&self) -> Result<()> {
        log::logger().flush();
        Ok(())
    }
}
