//! Process-wide logger slot and the forwarding functions over it
//!
//! A single mutable slot holds "the current logger". It defaults to
//! [`TextLogger::stderr`] and is replaced by [`set_logger`]. Every function
//! here forwards to whatever logger occupies the slot at call time;
//! replacing the logger never disturbs callers already holding a clone.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::fmt;
use std::mem;

use crate::core::{FieldValue, Fields, Level, Logger, Result, SharedLogger, TextLogger};

static GLOBAL_LOGGER: Lazy<RwLock<SharedLogger>> =
    Lazy::new(|| RwLock::new(SharedLogger::new(TextLogger::stderr())));

// The slot is process-wide; unit tests that replace it must not interleave.
#[cfg(test)]
pub(crate) static TEST_SLOT_GUARD: parking_lot::Mutex<()> = parking_lot::Mutex::new(());

/// Clone of the currently registered logger
pub fn logger() -> SharedLogger {
    GLOBAL_LOGGER.read().clone()
}

/// Register `logger` as the global logger, returning the previous one
pub fn set_logger(logger: impl Logger + 'static) -> SharedLogger {
    set_shared_logger(SharedLogger::new(logger))
}

/// Register an already-shared logger, returning the previous one
pub fn set_shared_logger(new: SharedLogger) -> SharedLogger {
    let mut slot = GLOBAL_LOGGER.write();
    mem::replace(&mut *slot, new)
}

/// Log at the given level with an already-formatted message
pub fn log(level: Level, message: fmt::Arguments<'_>) {
    logger().log(level, message);
}

/// Log a message at the debug level
pub fn debug(message: impl fmt::Display) {
    logger().debug(message);
}

/// Log a message at the info level
pub fn info(message: impl fmt::Display) {
    logger().info(message);
}

/// Log a message at the warn level
pub fn warn(message: impl fmt::Display) {
    logger().warn(message);
}

/// Log a message at the error level
pub fn error(message: impl fmt::Display) {
    logger().error(message);
}

/// Log a message at the fatal level and exit with status 1
pub fn fatal(message: impl fmt::Display) -> ! {
    logger().fatal(message)
}

/// Log a message at the panic level and panic with the message
pub fn panic(message: impl fmt::Display) -> ! {
    logger().panic(message)
}

/// Logger derived from the global one, carrying one additional field
#[must_use]
pub fn with_field<K, V>(key: K, value: V) -> SharedLogger
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    logger().with_field(key, value)
}

/// Logger derived from the global one, layering the given fields
#[must_use]
pub fn with_fields(fields: Fields) -> SharedLogger {
    logger().with_fields(fields)
}

/// Logger derived from the global one with the given minimum level
#[must_use]
pub fn at_level(level: Level) -> SharedLogger {
    logger().at_level(level)
}

/// Flush the currently registered logger
pub fn flush() -> Result<()> {
    logger().flush()
}
