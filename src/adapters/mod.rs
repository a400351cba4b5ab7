//! Pass-through adapters to ecosystem logging backends
//!
//! Each adapter satisfies [`crate::Logger`] by forwarding every call to its
//! backend, remapping levels where the backend's level set does not line up
//! with the facade's. Adapters carry their own field set and minimum level
//! so `with_fields` and `at_level` behave the same regardless of what the
//! backend supports natively.

#[cfg(feature = "log-backend")]
pub mod log;
#[cfg(feature = "tracing-backend")]
pub mod tracing;

#[cfg(feature = "log-backend")]
pub use self::log::LogAdapter;
#[cfg(feature = "tracing-backend")]
pub use self::tracing::TracingAdapter;
