//! Shipment document records
//!
//! One record per tracked shipment, shaped like the upstream wire format
//! (camelCase fields). Everything except `raw_response` is opaque display
//! data; `raw_response` is the untrusted extraction payload that
//! lt-extract normalizes.

use chrono::{DateTime, Utc};
use lt_extract::RawPayload;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Delivery lifecycle state of a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShipmentStatus {
    /// Arrived at the receiver.
    Delivered,
    /// On the road.
    Transit,
    /// Still being extracted/verified.
    Processing,
    /// Not yet picked up.
    Pending,
    /// Cancelled by either party.
    Cancelled,
}

impl ShipmentStatus {
    /// Case-insensitive parse; anything unrecognized or absent is treated
    /// as `Pending` rather than an error, matching the dashboard's
    /// default-badge behavior.
    #[must_use]
    pub fn from_str_lossy(status: Option<&str>) -> Self {
        match status.map(str::to_ascii_lowercase).as_deref() {
            Some("delivered") => Self::Delivered,
            Some("transit") => Self::Transit,
            Some("processing") => Self::Processing,
            Some("cancelled") => Self::Cancelled,
            _ => Self::Pending,
        }
    }

    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Delivered => "delivered",
            Self::Transit => "transit",
            Self::Processing => "processing",
            Self::Pending => "pending",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document identifier in the `LT-XXXXXXX` demo format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(String);

impl DocumentId {
    const PREFIX: &'static str = "LT-";
    const SUFFIX_LEN: usize = 7;
    const ALPHABET: &'static [u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    /// Wrap an existing id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random id (`LT-` plus seven base-36 characters).
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let suffix: String = (0..Self::SUFFIX_LEN)
            .map(|_| Self::ALPHABET[rng.random_range(0..Self::ALPHABET.len())] as char)
            .collect();
        Self(format!("{}{suffix}", Self::PREFIX))
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One shipment record as delivered by the upstream document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentDocument {
    /// Record id (`LT-...`).
    pub id: DocumentId,
    /// Carrier tracking identifier (`TRK-...`).
    pub tracking_number: String,
    /// Shipping party.
    pub sender: String,
    /// Receiving party.
    pub receiver: String,
    /// Declared weight, free text (`"12.5 kg"`, `"TBD"`).
    pub weight: String,
    /// Delivery lifecycle state.
    pub status: ShipmentStatus,
    /// Route origin.
    pub origin: String,
    /// Route destination.
    pub destination: String,
    /// When the record entered the system.
    pub created_at: DateTime<Utc>,
    /// Original upload file name, when the record came in via upload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Untrusted extraction payload, normalized on display by lt-extract.
    #[serde(default)]
    pub raw_response: RawPayload,
}

impl ShipmentDocument {
    /// Placeholder record created the moment a file upload enters the
    /// pipeline. The extraction backend replaces the stub fields once OCR
    /// completes.
    #[must_use]
    pub fn from_upload(file_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: DocumentId::generate(),
            tracking_number: format!("TRK-{}", now.timestamp_millis()),
            sender: "Uploaded Document".to_string(),
            receiver: "Processing...".to_string(),
            weight: "TBD".to_string(),
            status: ShipmentStatus::Processing,
            origin: "Upload".to_string(),
            destination: "Processing".to_string(),
            created_at: now,
            file_name: Some(file_name.into()),
            raw_response: RawPayload::from(r#"{"status": "Processing OCR..."}"#),
        }
    }
}
