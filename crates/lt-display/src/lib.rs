//! LogiTrack Display Helpers
//!
//! Pure formatters the dashboard applies to record fields before
//! rendering: timestamps, status badge classes, and cell truncation.
//! Everything here is total; invalid input clamps to a placeholder string
//! instead of propagating.

#![warn(unreachable_pub)]

mod format;
mod status;
mod text;

pub use format::{format_date, format_datetime};
pub use status::{class_for, status_color_class};
pub use text::{truncate, DEFAULT_TRUNCATE_LEN};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
