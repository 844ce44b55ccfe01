//! Testing utilities for the LogiTrack workspace
//!
//! Shared payload fixtures and record constructors.

#![allow(missing_docs)]

use lt_extract::RawPayload;
use lt_records::{DocumentFilter, DocumentStore, ShipmentDocument, ShipmentStatus};
use serde_json::{json, Value};

/// Well-formed object payload, as a clean extraction backend sends it.
pub const CLEAN_OBJECT: &str =
    r#"{"items": [{"name": "Electronics", "qty": 5}], "notes": "Handle with care"}"#;

/// Object payload wrapped in explanatory prose, as OCR backends tend to
/// produce.
pub const PROSE_WRAPPED_OBJECT: &str =
    r#"The extractor found these fields: {"total": 42, "currency": "USD"} (confidence 0.93)"#;

/// Object payload inside a markdown fence.
pub const FENCED_OBJECT: &str = "```json\n{\"items\": [], \"notes\": \"empty manifest\"}\n```";

/// Array payload wrapped in prose.
pub const PROSE_WRAPPED_ARRAY: &str = "Line items follow: [1, 2, 3] end of report";

/// Text no decode strategy can recover anything from.
pub const GARBAGE: &str = "not json at all";

/// The document the clean-object fixture decodes to.
pub fn clean_object_document() -> Value {
    json!({"items": [{"name": "Electronics", "qty": 5}], "notes": "Handle with care"})
}

pub fn text_payload(text: &str) -> RawPayload {
    RawPayload::from(text)
}

pub fn structured_payload(value: Value) -> RawPayload {
    RawPayload::from_value(value)
}

pub fn demo_store() -> DocumentStore {
    DocumentStore::demo()
}

pub fn processing_upload(file_name: &str) -> ShipmentDocument {
    ShipmentDocument::from_upload(file_name)
}

pub fn status_filter(status: ShipmentStatus) -> DocumentFilter {
    DocumentFilter::new().with_status(status)
}
