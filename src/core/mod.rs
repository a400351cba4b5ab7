//! Core facade types and traits

pub mod error;
pub mod fields;
pub mod level;
pub mod logger;
pub mod text;

pub use error::{LogError, Result};
pub use fields::{FieldValue, Fields};
pub use level::Level;
pub use logger::{Logger, SharedLogger};
pub use text::{TextLogger, LEVEL_ENV_VAR};
