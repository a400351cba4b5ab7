//! The logger capability trait and the shared handle built on it

use std::fmt;
use std::sync::Arc;

use super::error::Result;
use super::fields::{FieldValue, Fields};
use super::level::Level;

/// Capability set every logging backend must expose.
///
/// `log` is the single emission point; the leveled convenience surface lives
/// on [`SharedLogger`] so that backends only implement dispatch. Deriving a
/// logger with [`Logger::with_fields`] or [`Logger::at_level`] returns a new
/// instance; the original keeps its fields and level untouched.
pub trait Logger: Send + Sync {
    /// Lowest level this logger emits. Calls below it are discarded.
    fn min_level(&self) -> Level {
        Level::Debug
    }

    /// Whether a call at `level` would be emitted
    fn enabled(&self, level: Level) -> bool {
        level >= self.min_level()
    }

    /// Emit a message at the given level
    fn log(&self, level: Level, message: fmt::Arguments<'_>);

    /// Return a new logger layering `fields` over the fields already carried
    fn with_fields(&self, fields: Fields) -> SharedLogger;

    /// Return a new logger with `level` as its minimum level
    fn at_level(&self, level: Level) -> SharedLogger;

    /// Flush any underlying sink
    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

/// Cloneable handle to a boxed [`Logger`].
///
/// This is what the global slot stores and what backend derivations return.
/// Cloning is cheap (an `Arc` bump) and clones refer to the same backend
/// state.
#[derive(Clone)]
pub struct SharedLogger(Arc<dyn Logger>);

impl fmt::Debug for SharedLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedLogger")
    }
}

impl SharedLogger {
    pub fn new(logger: impl Logger + 'static) -> Self {
        Self(Arc::new(logger))
    }

    pub fn from_arc(logger: Arc<dyn Logger>) -> Self {
        Self(logger)
    }

    pub fn min_level(&self) -> Level {
        self.0.min_level()
    }

    pub fn enabled(&self, level: Level) -> bool {
        self.0.enabled(level)
    }

    /// Emit a preformatted message at the given level
    pub fn log(&self, level: Level, message: fmt::Arguments<'_>) {
        self.0.log(level, message);
    }

    /// Log a message at the debug level
    pub fn debug(&self, message: impl fmt::Display) {
        self.0.log(Level::Debug, format_args!("{}", message));
    }

    /// Log a message at the info level
    pub fn info(&self, message: impl fmt::Display) {
        self.0.log(Level::Info, format_args!("{}", message));
    }

    /// Log a message at the warn level
    pub fn warn(&self, message: impl fmt::Display) {
        self.0.log(Level::Warn, format_args!("{}", message));
    }

    /// Log a message at the error level
    pub fn error(&self, message: impl fmt::Display) {
        self.0.log(Level::Error, format_args!("{}", message));
    }

    /// Log a message at the fatal level, flush, and exit with status 1.
    ///
    /// The backend only sees an ordinary `log` call at `Fatal`; the exit
    /// happens here so every backend has identical fatal semantics.
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.0.log(Level::Fatal, format_args!("{}", message));
        let _ = self.0.flush();
        std::process::exit(1);
    }

    /// Log a message at the panic level, flush, and panic with the message
    pub fn panic(&self, message: impl fmt::Display) -> ! {
        let rendered = message.to_string();
        self.0.log(Level::Panic, format_args!("{}", rendered));
        let _ = self.0.flush();
        std::panic!("{}", rendered);
    }

    /// Return a new logger carrying one additional field
    #[must_use]
    pub fn with_field<K, V>(&self, key: K, value: V) -> SharedLogger
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.0.with_fields(Fields::new().with_field(key, value))
    }

    /// Return a new logger layering `fields` over those already carried
    #[must_use]
    pub fn with_fields(&self, fields: Fields) -> SharedLogger {
        self.0.with_fields(fields)
    }

    /// Return a new logger with `level` as its minimum level
    #[must_use]
    pub fn at_level(&self, level: Level) -> SharedLogger {
        self.0.at_level(level)
    }

    pub fn flush(&self) -> Result<()> {
        self.0.flush()
    }
}

impl<L: Logger + 'static> From<L> for SharedLogger {
    fn from(logger: L) -> Self {
        SharedLogger::new(logger)
    }
}
