//! LogiTrack Search Debouncing
//!
//! The dashboard search box fires on every keystroke; queries should only
//! run once typing pauses. [`Debouncer`] implements the trailing-edge
//! window: each call re-arms a single pending timer, so only the last call
//! within the window executes.

#![warn(unreachable_pub)]

mod debounce;

pub use debounce::Debouncer;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
