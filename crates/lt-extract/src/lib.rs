//! LogiTrack Extraction Normalizer
//!
//! The trusted boundary between the upstream OCR/extraction pipeline and
//! the display layer.
//!
//! Upstream extraction backends are untrusted: a record's raw payload may
//! arrive as an already-decoded document, as clean JSON text, as JSON
//! buried in prose or markdown fences, or as garbage. [`normalize`] folds
//! all of that into one uniform, display-ready result.
//!
//! # Core Concepts
//!
//! - [`RawPayload`]: tagged union of what the upstream can deliver
//! - [`normalize`]: the tolerant decode ladder (strict decode, then
//!   bracket-span recovery)
//! - [`ExtractionResult`]: success/data/diagnostic triple consumed by the
//!   display layer
//!
//! # Example
//!
//! ```rust,ignore
//! use lt_extract::{normalize, RawPayload};
//!
//! let raw = RawPayload::from("The scan produced: {\"items\": []} (low confidence)");
//! let result = normalize(raw);
//! assert!(result.success);
//! ```
//!
//! Every failure mode is folded into the result; [`normalize`] never
//! returns an error out-of-band and never panics.

#![warn(unreachable_pub)]

// Core modules
mod error;
mod normalize;
mod payload;
mod result;

// Re-exports
pub use error::ExtractError;
pub use normalize::normalize;
pub use payload::RawPayload;
pub use result::{ExtractedData, ExtractionResult};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
