//! Logging macros over the global logger
//!
//! These are the `format!`-style variants of the package-level functions:
//! `info!("listening on {}", port)` formats and forwards to whatever logger
//! is currently registered. The plain functions (`dlog::info(...)`) cover
//! the preformatted-message case.

/// Log at an explicit level with `format!` syntax.
///
/// # Examples
///
/// ```
/// use dlog::{log, Level};
/// log!(Level::Info, "retrying in {}ms", 250);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {
        $crate::log($level, format_args!($($arg)+))
    };
}

/// Log a debug-level message with `format!` syntax.
///
/// # Examples
///
/// ```
/// use dlog::debug;
/// debug!("cache miss for {}", "user:42");
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::log($crate::Level::Debug, format_args!($($arg)+))
    };
}

/// Log an info-level message with `format!` syntax.
///
/// # Examples
///
/// ```
/// use dlog::info;
/// info!("listening on port {}", 8080);
/// ```
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::log($crate::Level::Info, format_args!($($arg)+))
    };
}

/// Log a warn-level message with `format!` syntax.
///
/// # Examples
///
/// ```
/// use dlog::warn;
/// warn!("retry {} of {}", 2, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::log($crate::Level::Warn, format_args!($($arg)+))
    };
}

/// Log an error-level message with `format!` syntax.
///
/// # Examples
///
/// ```
/// use dlog::error;
/// error!("request failed with status {}", 502);
/// ```
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::log($crate::Level::Error, format_args!($($arg)+))
    };
}

/// Log a fatal-level message with `format!` syntax, then exit with status 1.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        $crate::fatal(format_args!($($arg)+))
    };
}

/// Log a panic-level message with `format!` syntax, then panic with it.
///
/// Invoke path-qualified (`dlog::panic!`) to keep the standard `panic!`
/// macro untouched in the calling scope.
#[macro_export]
macro_rules! panic {
    ($($arg:tt)+) => {
        $crate::panic(format_args!($($arg)+))
    };
}
