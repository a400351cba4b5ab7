//! # dlog
//!
//! A delegating logging facade: leveled, structured log calls dispatched to
//! a swappable backend.
//!
//! Application code logs through the package-level functions and macros
//! without depending on a concrete backend; the backend occupying the
//! process-wide slot is swapped by registering a different [`Logger`].
//! Until something is registered, a plain text logger over standard error
//! is used.
//!
//! ```
//! use dlog::testing::CaptureLogger;
//!
//! // Register a backend (here the in-memory one used in tests).
//! dlog::set_logger(CaptureLogger::new());
//!
//! dlog::info("server starting");
//! dlog::info!("listening on port {}", 8080);
//! dlog::with_field("request_id", "abc-123")
//!     .with_field("attempt", 2)
//!     .warn("retrying upstream call");
//! ```
//!
//! ## Features
//!
//! - `color` (default): colored level names on the built-in text backend
//! - `log-backend`: [`adapters::LogAdapter`], forwarding to the `log` crate
//! - `tracing-backend`: [`adapters::TracingAdapter`], forwarding to `tracing`

pub mod adapters;
pub mod core;
pub mod global;
pub mod testing;

pub mod prelude {
    pub use crate::core::{
        FieldValue, Fields, Level, LogError, Logger, Result, SharedLogger, TextLogger,
    };
    pub use crate::global::{logger, set_logger, set_shared_logger};
}

pub use core::{FieldValue, Fields, Level, LogError, Logger, Result, SharedLogger, TextLogger};
pub use global::{
    at_level, debug, error, fatal, flush, info, log, logger, panic, set_logger,
    set_shared_logger, warn, with_field, with_fields,
};

// Declared last: the exported macros shadow names like `panic!` in textual
// scope from this point on.
pub mod macros;
