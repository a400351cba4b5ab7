//! Integration tests for the logging facade
//!
//! These tests verify:
//! - Registration against the process-wide slot
//! - Field layering across derived loggers
//! - Level remapping through the backend adapters
//! - Built-in text backend output

use std::sync::Mutex;

use dlog::testing::CaptureLogger;
use dlog::{FieldValue, Fields, Level};

// Everything here swaps the process-wide slot; keep those tests serialized.
static SLOT_GUARD: Mutex<()> = Mutex::new(());

fn lock_slot() -> std::sync::MutexGuard<'static, ()> {
    SLOT_GUARD.lock().unwrap_or_else(|e| e.into_inner())
}

#[test]
fn test_facade_routes_to_registered_logger() {
    let _guard = lock_slot();

    let capture = CaptureLogger::new();
    let previous = dlog::set_logger(capture.clone());

    let logger = dlog::with_field("key", "value").with_field("int", 1);
    logger.info(format!("number {}", 2));

    dlog::warn("warning line");

    let records = capture.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].message, "number 2");
    assert_eq!(records[0].fields.get("key"), Some(&FieldValue::String("value".into())));
    assert_eq!(records[0].fields.get("int"), Some(&FieldValue::Int(1)));
    assert_eq!(records[1].level, Level::Warn);
    assert_eq!(records[1].message, "warning line");

    dlog::set_shared_logger(previous);
}

#[test]
fn test_macros_and_functions_cover_all_levels() {
    let _guard = lock_slot();

    let capture = CaptureLogger::new();
    let previous = dlog::set_logger(capture.clone());

    dlog::debug!("d {}", 0);
    dlog::info!("i {}", 1);
    dlog::warn!("w {}", 2);
    dlog::error!("e {}", 3);
    dlog::debug("d");
    dlog::info("i");
    dlog::warn("w");
    dlog::error("e");

    let records = capture.records();
    assert_eq!(records.len(), 8);
    assert_eq!(records[0].level, Level::Debug);
    assert_eq!(records[3].message, "e 3");
    assert_eq!(records[7].level, Level::Error);

    dlog::set_shared_logger(previous);
}

#[test]
fn test_with_fields_layers_without_mutating_parent() {
    let _guard = lock_slot();

    let capture = CaptureLogger::new();
    let previous = dlog::set_logger(capture.clone());

    let base = dlog::with_field("service", "api");
    let derived = base.with_fields(
        Fields::new()
            .with_field("service", "worker")
            .with_field("job", "resize"),
    );

    base.info("from base");
    derived.info("from derived");

    let records = capture.records();
    assert_eq!(
        records[0].fields.get("service"),
        Some(&FieldValue::String("api".into()))
    );
    assert_eq!(
        records[1].fields.get("service"),
        Some(&FieldValue::String("worker".into()))
    );
    assert_eq!(records[1].fields.len(), 2);

    dlog::set_shared_logger(previous);
}

#[test]
fn test_panic_level_unwinds_with_message() {
    let _guard = lock_slot();

    let capture = CaptureLogger::new();
    let previous = dlog::set_logger(capture.clone());

    let result = std::panic::catch_unwind(|| {
        dlog::panic!("state corrupted at offset {}", 7);
    });

    let payload = result.expect_err("facade panic must unwind");
    let message = payload
        .downcast_ref::<String>()
        .expect("panic payload should be the formatted message");
    assert_eq!(message, "state corrupted at offset 7");

    let records = capture.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::Panic);
    assert_eq!(records[0].message, "state corrupted at offset 7");

    dlog::set_shared_logger(previous);
}

#[cfg(feature = "log-backend")]
mod log_backend {
    use super::*;
    use dlog::adapters::LogAdapter;
    use std::sync::{Arc, OnceLock};

    type Sink = Arc<Mutex<Vec<(log::Level, String)>>>;

    struct SinkLog(Sink);

    impl log::Log for SinkLog {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            self.0
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }

        fn flush(&self) {}
    }

    // `log` allows exactly one installed logger per process
    fn sink() -> &'static Sink {
        static SINK: OnceLock<Sink> = OnceLock::new();
        SINK.get_or_init(|| {
            let sink: Sink = Arc::new(Mutex::new(Vec::new()));
            log::set_boxed_logger(Box::new(SinkLog(Arc::clone(&sink))))
                .expect("no other log backend installed in this test binary");
            log::set_max_level(log::LevelFilter::Trace);
            sink
        })
    }

    #[test]
    fn test_log_adapter_forwards_with_level_mapping() {
        let _guard = lock_slot();
        let sink = sink();
        sink.lock().unwrap().clear();

        let previous = LogAdapter::register();

        dlog::debug("at debug");
        dlog::info("at info");
        dlog::warn("at warn");
        dlog::error("at error");
        // Fatal and panic collapse to Error in the `log` crate's level set;
        // call `log` on the handle to observe the mapping without the
        // facade's exit/unwind tail.
        dlog::logger().log(Level::Fatal, format_args!("at fatal"));
        dlog::logger().log(Level::Panic, format_args!("at panic"));

        let events = sink.lock().unwrap().clone();
        assert_eq!(events.len(), 6);
        assert_eq!(events[0].0, log::Level::Debug);
        assert_eq!(events[1].0, log::Level::Info);
        assert_eq!(events[2].0, log::Level::Warn);
        assert_eq!(events[3].0, log::Level::Error);
        assert_eq!(events[4].0, log::Level::Error);
        assert_eq!(events[5].0, log::Level::Error);
        assert_eq!(events[4].1, "at fatal");

        dlog::set_shared_logger(previous);
    }

    #[test]
    fn test_log_adapter_appends_fields_to_message() {
        let _guard = lock_slot();
        let sink = sink();
        sink.lock().unwrap().clear();

        let previous = LogAdapter::register();

        dlog::with_field("request_id", "abc").with_field("attempt", 2).info("retrying");

        let events = sink.lock().unwrap().clone();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].1, "retrying attempt=2 request_id=abc");

        dlog::set_shared_logger(previous);
    }
}

#[cfg(feature = "tracing-backend")]
mod tracing_backend {
    use super::*;
    use dlog::adapters::TracingAdapter;
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::Arc;

    type Events = Arc<Mutex<Vec<(tracing::Level, HashMap<String, String>)>>>;

    struct CaptureSubscriber(Events);

    impl tracing::Subscriber for CaptureSubscriber {
        fn enabled(&self, _metadata: &tracing::Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _attrs: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            tracing::span::Id::from_u64(1)
        }

        fn record(&self, _id: &tracing::span::Id, _values: &tracing::span::Record<'_>) {}

        fn record_follows_from(&self, _id: &tracing::span::Id, _follows: &tracing::span::Id) {}

        fn event(&self, event: &tracing::Event<'_>) {
            let mut visitor = FieldCollector::default();
            event.record(&mut visitor);
            self.0
                .lock()
                .unwrap()
                .push((*event.metadata().level(), visitor.0));
        }

        fn enter(&self, _id: &tracing::span::Id) {}

        fn exit(&self, _id: &tracing::span::Id) {}
    }

    #[derive(Default)]
    struct FieldCollector(HashMap<String, String>);

    impl tracing::field::Visit for FieldCollector {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
            self.0
                .insert(field.name().to_string(), format!("{:?}", value));
        }
    }

    #[test]
    fn test_tracing_adapter_forwards_with_level_mapping() {
        let _guard = lock_slot();

        let events: Events = Arc::new(Mutex::new(Vec::new()));
        let subscriber = CaptureSubscriber(Arc::clone(&events));

        let previous = TracingAdapter::register();

        tracing::subscriber::with_default(subscriber, || {
            dlog::info("plain event");
            dlog::with_field("job", "resize").warn("with fields");
            dlog::logger().log(Level::Fatal, format_args!("fatal event"));
        });

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 3);

        assert_eq!(events[0].0, tracing::Level::INFO);
        assert_eq!(events[0].1.get("message").unwrap(), "plain event");

        assert_eq!(events[1].0, tracing::Level::WARN);
        assert_eq!(events[1].1.get("fields").unwrap(), "job=resize");

        // No fatal level in tracing: collapses to ERROR
        assert_eq!(events[2].0, tracing::Level::ERROR);

        dlog::set_shared_logger(previous);
    }
}
