//! Adapter forwarding to `tracing` events
//!
//! `tracing` has no fatal or panic levels, so both collapse to `ERROR`.
//! Its field names must be known at compile time, so the facade's dynamic
//! field set is recorded as a single `fields` attribute on each event.

use std::fmt;

use crate::core::{Fields, Level, Logger, SharedLogger};

/// Facade backend emitting `tracing` events against the current subscriber
#[derive(Clone)]
pub struct TracingAdapter {
    fields: Fields,
    min_level: Level,
}

impl TracingAdapter {
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

impl Default for TracingAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for TracingAdapter {
    fn min_level(&self) -> Level {
        self.min_level
    }

    fn log(&self, level: Level, message: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        // tracing's event macros need a const level, hence one arm per level
        if self.fields.is_empty() {
            match level {
                Level::Debug => tracing::debug!("{}", message),
                Level::Info => tracing::info!("{}", message),
                Level::Warn => tracing::warn!("{}", message),
                Level::Error | Level::Fatal | Level::Panic => tracing::error!("{}", message),
            }
        } else {
            match level {
                Level::Debug => tracing::debug!(fields = %self.fields, "{}", message),
                Level::Info => tracing::info!(fields = %self.fields, "{}", message),
                Level::Warn => tracing::warn!(fields = %self.fields, "{}", message),
                Level::Error | Level::Fatal | Level::Panic => {
                    tracing::error!(fields = %self.fields, "{}", message)
                }
            }
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
}
