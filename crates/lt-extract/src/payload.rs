//! Raw payload boundary type
//!
//! The upstream extraction field is dynamically typed: depending on the
//! backend it holds an already-decoded document, free text, or nothing.
//! The tag is decided here, once, at the boundary, so the rest of the
//! crate never inspects runtime types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Raw extraction payload as handed over by the upstream document store.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawPayload {
    /// Nothing was supplied.
    #[default]
    Absent,
    /// Free text: possibly JSON, possibly JSON buried in prose, possibly
    /// garbage.
    Text(String),
    /// An already-decoded mapping or sequence, passed through untouched.
    Structured(Value),
}

impl RawPayload {
    /// Classify a dynamically-typed JSON value into a payload tag.
    ///
    /// Scalars are re-rendered as text so that a successful normalization
    /// always carries a mapping or sequence.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::String(text) => Self::Text(text),
            doc @ (Value::Object(_) | Value::Array(_)) => Self::Structured(doc),
            scalar => Self::Text(scalar.to_string()),
        }
    }

    /// Whether this payload carries nothing usable.
    ///
    /// Empty text counts as absent; the upstream frequently sends `""`
    /// where it means "no extraction ran".
    #[must_use]
    pub fn is_absent(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Text(text) => text.is_empty(),
            Self::Structured(_) => false,
        }
    }
}

impl From<&str> for RawPayload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RawPayload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Option<&str>> for RawPayload {
    fn from(text: Option<&str>) -> Self {
        match text {
            Some(text) => Self::Text(text.to_string()),
            None => Self::Absent,
        }
    }
}

impl From<Value> for RawPayload {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl Serialize for RawPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Absent => serializer.serialize_unit(),
            Self::Text(text) => serializer.serialize_str(text),
            Self::Structured(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for RawPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_value(Value::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_tags_null_as_absent() {
        assert_eq!(RawPayload::from_value(Value::Null), RawPayload::Absent);
    }

    #[test]
    fn from_value_tags_string_as_text() {
        let payload = RawPayload::from_value(json!("scanned text"));
        assert_eq!(payload, RawPayload::Text("scanned text".to_string()));
    }

    #[test]
    fn from_value_tags_documents_as_structured() {
        assert!(matches!(
            RawPayload::from_value(json!({"a": 1})),
            RawPayload::Structured(_)
        ));
        assert!(matches!(
            RawPayload::from_value(json!([1, 2])),
            RawPayload::Structured(_)
        ));
    }

    #[test]
    fn from_value_renders_scalars_as_text() {
        assert_eq!(
            RawPayload::from_value(json!(42)),
            RawPayload::Text("42".to_string())
        );
        assert_eq!(
            RawPayload::from_value(json!(true)),
            RawPayload::Text("true".to_string())
        );
    }

    #[test]
    fn empty_text_is_absent() {
        assert!(RawPayload::from("").is_absent());
        assert!(RawPayload::Absent.is_absent());
        assert!(!RawPayload::from("x").is_absent());
    }

    #[test]
    fn serde_roundtrip_preserves_tag() {
        let payload = RawPayload::Structured(json!({"items": []}));
        let encoded = serde_json::to_string(&payload).unwrap();
        let decoded: RawPayload = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, payload);

        let absent: RawPayload = serde_json::from_str("null").unwrap();
        assert_eq!(absent, RawPayload::Absent);
    }
}
