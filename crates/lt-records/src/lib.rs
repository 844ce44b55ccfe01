//! LogiTrack Records
//!
//! The shipment-document domain around the extraction normalizer: record
//! model, an in-memory store serving dashboard queries, and stat rollups.
//!
//! Nothing here persists or talks to a network. The store holds whatever
//! the upstream pipeline has delivered so far and answers the dashboard's
//! search/filter/lookup needs over it.

#![warn(unreachable_pub)]

// Core modules
mod document;
mod stats;
mod store;

// Re-exports
pub use document::{DocumentId, ShipmentDocument, ShipmentStatus};
pub use stats::ShipmentStats;
pub use store::{DocumentFilter, DocumentStore, StoreError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
