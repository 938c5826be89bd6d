pub mod analytics;
pub mod ansi;
pub mod casing;
pub mod color;
pub mod encode;
pub mod file_size;
pub mod flatten;
pub mod html;
pub mod platform;
pub mod shortcut;

pub use crate::domain::model::{HealthStatus, Platform};
pub use crate::domain::ports::{EventSink, FileSystem};
pub use crate::utils::error::Result;
