//! Normalization over the shared payload fixtures.

use lt_extract::normalize;
use lt_test_utils::{
    clean_object_document, structured_payload, text_payload, CLEAN_OBJECT, FENCED_OBJECT,
    GARBAGE, PROSE_WRAPPED_ARRAY, PROSE_WRAPPED_OBJECT,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn clean_object_fixture_decodes_directly() {
    let result = normalize(text_payload(CLEAN_OBJECT));
    assert!(result.success);
    assert_eq!(result.structured_data(), Some(&clean_object_document()));
}

#[test]
fn already_decoded_fixture_passes_through() {
    let result = normalize(structured_payload(clean_object_document()));
    assert!(result.success);
    assert_eq!(result.structured_data(), Some(&clean_object_document()));
}

#[test]
fn prose_wrapped_object_fixture_is_recovered() {
    let result = normalize(text_payload(PROSE_WRAPPED_OBJECT));
    assert!(result.success);
    assert_eq!(
        result.structured_data(),
        Some(&json!({"total": 42, "currency": "USD"}))
    );
}

#[test]
fn fenced_object_fixture_is_recovered() {
    let result = normalize(text_payload(FENCED_OBJECT));
    assert!(result.success);
    assert_eq!(
        result.structured_data(),
        Some(&json!({"items": [], "notes": "empty manifest"}))
    );
}

#[test]
fn prose_wrapped_array_fixture_is_recovered() {
    let result = normalize(text_payload(PROSE_WRAPPED_ARRAY));
    assert!(result.success);
    assert_eq!(result.structured_data(), Some(&json!([1, 2, 3])));
}

#[test]
fn garbage_fixture_falls_back_to_raw_text() {
    let result = normalize(text_payload(GARBAGE));
    assert!(!result.success);
    assert_eq!(result.raw_text(), Some(GARBAGE));
    assert_eq!(
        result.error.as_deref(),
        Some("Could not parse JSON. Displaying raw content.")
    );
}
