//! Normalization result shape consumed by the display layer.

use serde::Serialize;
use serde_json::Value;

use crate::error::ExtractError;

/// Recovered document or raw fallback text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExtractedData {
    /// A decoded mapping or sequence.
    Structured(Value),
    /// The original text, kept so the panel can still show something.
    Raw(String),
}

/// Outcome of normalizing one raw payload.
///
/// Invariants:
/// - `success` is `true` exactly when `error` is `None`, exactly when
///   `data` holds a structured document.
/// - On failure `data` carries the original text for display, or `None`
///   when there was no input at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionResult {
    /// Whether a structured document was recovered.
    pub success: bool,
    /// Recovered document, or raw fallback text.
    pub data: Option<ExtractedData>,
    /// Human-readable diagnostic when recovery failed.
    pub error: Option<String>,
}

impl ExtractionResult {
    pub(crate) fn structured(value: Value) -> Self {
        Self {
            success: true,
            data: Some(ExtractedData::Structured(value)),
            error: None,
        }
    }

    pub(crate) fn failed(raw: Option<String>, error: ExtractError) -> Self {
        Self {
            success: false,
            data: raw.map(ExtractedData::Raw),
            error: Some(error.to_string()),
        }
    }

    /// The recovered document, if normalization succeeded.
    #[must_use]
    pub fn structured_data(&self) -> Option<&Value> {
        match &self.data {
            Some(ExtractedData::Structured(value)) => Some(value),
            _ => None,
        }
    }

    /// The raw fallback text, if recovery failed on a text payload.
    #[must_use]
    pub fn raw_text(&self) -> Option<&str> {
        match &self.data {
            Some(ExtractedData::Raw(text)) => Some(text),
            _ => None,
        }
    }
}
