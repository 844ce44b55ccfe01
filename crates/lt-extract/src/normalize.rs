//! Tolerant normalization of raw extraction payloads.
//!
//! Upstream OCR/extraction backends wrap their JSON in explanatory prose,
//! markdown fences, or trailing commentary. The ladder here is strict
//! decode first, then the widest `{..}` span, then the widest `[..]` span.
//! The span step is a greedy heuristic, not a parser: it will mis-extract
//! when the text contains several independent brace-delimited regions.
//! That tradeoff is accepted; the goal is best-effort recovery for
//! display, not validation.

use serde_json::Value;

use crate::error::ExtractError;
use crate::payload::RawPayload;
use crate::result::ExtractionResult;

/// Normalize one raw payload into a display-ready result.
///
/// First match wins:
/// 1. absent input reports `"No data provided"`
/// 2. an already-structured payload passes through untouched
/// 3. the whole text is decoded strictly
/// 4. the first-`{`-to-last-`}` span is decoded
/// 5. the first-`[`-to-last-`]` span is decoded
/// 6. otherwise the original text comes back with a diagnostic
///
/// Never panics and never returns an error out-of-band; callers need no
/// failure handling beyond reading the result.
#[must_use]
pub fn normalize(raw: RawPayload) -> ExtractionResult {
    match raw {
        RawPayload::Absent => ExtractionResult::failed(None, ExtractError::NoData),
        RawPayload::Structured(value) => ExtractionResult::structured(value),
        RawPayload::Text(text) if text.is_empty() => {
            ExtractionResult::failed(None, ExtractError::NoData)
        }
        RawPayload::Text(text) => match decode_text(&text) {
            Ok(value) => ExtractionResult::structured(value),
            Err(err) => ExtractionResult::failed(Some(text), err),
        },
    }
}

/// First-success-wins decode ladder over a text payload.
///
/// An [`ExtractError::Internal`] from a span step is terminal; only an
/// ordinary decode failure moves the ladder along.
fn decode_text(text: &str) -> Result<Value, ExtractError> {
    if let Ok(value) = decode_document(text) {
        return Ok(value);
    }
    match decode_span(text, '{', '}') {
        Err(ExtractError::Unparseable) => decode_span(text, '[', ']'),
        outcome => outcome,
    }
}

/// Strict decode of the whole text as a structured document.
///
/// A bare scalar document (`"42"`, `"true"`) is rejected here: the result
/// contract only calls a mapping or sequence a success.
fn decode_document(text: &str) -> Result<Value, ExtractError> {
    match serde_json::from_str::<Value>(text) {
        Ok(value) if is_document(&value) => Ok(value),
        _ => Err(ExtractError::Unparseable),
    }
}

/// Greedy span recovery: decode the region from the first `open` to the
/// last `close`.
fn decode_span(text: &str, open: char, close: char) -> Result<Value, ExtractError> {
    let start = text.find(open).ok_or(ExtractError::Unparseable)?;
    let end = text.rfind(close).ok_or(ExtractError::Unparseable)?;
    if end <= start {
        return Err(ExtractError::Unparseable);
    }
    // find/rfind return char-boundary offsets, so this slice cannot fail;
    // if it ever does the ladder itself is broken, not the payload.
    let span = text.get(start..=end).ok_or(ExtractError::Internal)?;
    serde_json::from_str::<Value>(span).map_err(|_| ExtractError::Unparseable)
}

fn is_document(value: &Value) -> bool {
    value.is_object() || value.is_array()
}
