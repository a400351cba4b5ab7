//! In-memory backend for tests
//!
//! [`CaptureLogger`] records everything logged through it. Clones and
//! derived loggers share the record store, so a handle kept by the test
//! observes calls made through the global slot or through `with_field`
//! derivations.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

use crate::core::{Fields, Level, Logger, SharedLogger};

/// One captured log call
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRecord {
    pub level: Level,
    pub message: String,
    pub fields: Fields,
}

/// Backend that appends every call to a shared in-memory store
#[derive(Clone)]
pub struct CaptureLogger {
    records: Arc<Mutex<Vec<CapturedRecord>>>,
    fields: Fields,
    min_level: Level,
}

impl CaptureLogger {
    /// Capture logger recording every level
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            fields: Fields::new(),
            min_level: Level::Debug,
        }
    }

    /// Snapshot of everything captured so far
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Drop everything captured so far
    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Default for CaptureLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for CaptureLogger {
    fn min_level(&self) -> Level {
        self.min_level
    }

    fn log(&self, level: Level, message: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        self.records.lock().push(CapturedRecord {
            level,
            message: message.to_string(),
            fields: self.fields.clone(),
        });
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_records_calls() {
        let capture = CaptureLogger::new();
        let logger = SharedLogger::new(capture.clone());

        logger.info("one");
        logger.error("two");

        assert_eq!(capture.len(), 2);
        let records = capture.records();
        assert_eq!(records[0].message, "one");
        assert_eq!(records[1].level, Level::Error);
    }

    #[test]
    fn test_derived_loggers_share_store() {
        let capture = CaptureLogger::new();
        let logger = SharedLogger::new(capture.clone()).with_field("k", "v");

        logger.info("derived");

        assert_eq!(capture.len(), 1);
        assert_eq!(
            capture.records()[0].fields.get("k"),
            Some(&crate::FieldValue::String("v".into()))
        );
    }

    #[test]
    fn test_clear() {
        let capture = CaptureLogger::new();
        let logger = SharedLogger::new(capture.clone());

        logger.info("x");
        capture.clear();

        assert!(capture.is_empty());
    }
}
