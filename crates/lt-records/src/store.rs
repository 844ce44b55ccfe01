//! In-memory document store backing the dashboard views.
//!
//! Holds whatever the upstream pipeline has delivered so far and answers
//! the dashboard's lookup and search/filter queries. Persistence is
//! explicitly out of scope; the store owns its records and nothing else.

use chrono::{DateTime, TimeZone, Utc};
use lt_extract::RawPayload;
use tracing::debug;

use crate::document::{DocumentId, ShipmentDocument, ShipmentStatus};

/// Store lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No document with the requested id.
    #[error("document not found: {0}")]
    NotFound(DocumentId),
}

/// Search/filter parameters for a dashboard query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFilter {
    /// Case-insensitive substring matched against tracking number, sender,
    /// and receiver. Empty or absent means no text filter.
    pub search: Option<String>,
    /// Restrict to one status; `None` matches every status.
    pub status: Option<ShipmentStatus>,
}

impl DocumentFilter {
    /// Filter that matches everything.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a search term.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// With a status restriction.
    #[must_use]
    pub fn with_status(mut self, status: ShipmentStatus) -> Self {
        self.status = Some(status);
        self
    }

    fn matches(&self, doc: &ShipmentDocument) -> bool {
        if let Some(needle) = self.search.as_deref() {
            if !needle.is_empty() {
                let needle = needle.to_lowercase();
                let hit = doc.tracking_number.to_lowercase().contains(&needle)
                    || doc.sender.to_lowercase().contains(&needle)
                    || doc.receiver.to_lowercase().contains(&needle);
                if !hit {
                    return false;
                }
            }
        }
        self.status.map_or(true, |status| doc.status == status)
    }
}

/// In-memory collection of shipment documents.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: Vec<ShipmentDocument>,
}

impl DocumentStore {
    /// Create an empty store.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the five demo shipments.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            documents: demo_documents(),
        }
    }

    /// Add a document. Insertion order is preserved; the dashboard sorts
    /// on display.
    pub fn insert(&mut self, doc: ShipmentDocument) {
        debug!(id = %doc.id, status = %doc.status, "document inserted");
        self.documents.push(doc);
    }

    /// Number of documents held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterate over every document in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ShipmentDocument> {
        self.documents.iter()
    }

    /// Look up a document by id.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] when no document has the id.
    pub fn get(&self, id: &DocumentId) -> Result<&ShipmentDocument, StoreError> {
        self.documents
            .iter()
            .find(|doc| &doc.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    /// Run a search/filter query, preserving insertion order.
    #[must_use]
    pub fn query(&self, filter: &DocumentFilter) -> Vec<&ShipmentDocument> {
        let matched: Vec<_> = self
            .documents
            .iter()
            .filter(|doc| filter.matches(doc))
            .collect();
        debug!(
            total = self.documents.len(),
            matched = matched.len(),
            search = ?filter.search,
            status = ?filter.status,
            "document query"
        );
        matched
    }
}

fn seed_time(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or_default()
}

/// The five demo shipments the dashboard ships with.
fn demo_documents() -> Vec<ShipmentDocument> {
    vec![
        ShipmentDocument {
            id: DocumentId::from("LT-ABC123"),
            tracking_number: "TRK-2024-001".to_string(),
            sender: "Acme Corp".to_string(),
            receiver: "TechStart Inc".to_string(),
            weight: "12.5 kg".to_string(),
            status: ShipmentStatus::Delivered,
            origin: "New York, NY".to_string(),
            destination: "Los Angeles, CA".to_string(),
            created_at: seed_time(2024, 1, 15, 10, 30),
            file_name: None,
            raw_response: RawPayload::from(
                r#"{"items": [{"name": "Electronics", "qty": 5}], "notes": "Handle with care"}"#,
            ),
        },
        ShipmentDocument {
            id: DocumentId::from("LT-DEF456"),
            tracking_number: "TRK-2024-002".to_string(),
            sender: "Global Supplies".to_string(),
            receiver: "Local Store".to_string(),
            weight: "8.2 kg".to_string(),
            status: ShipmentStatus::Transit,
            origin: "Chicago, IL".to_string(),
            destination: "Miami, FL".to_string(),
            created_at: seed_time(2024, 1, 16, 14, 45),
            file_name: None,
            raw_response: RawPayload::from(
                r#"{"items": [{"name": "Office Supplies", "qty": 20}]}"#,
            ),
        },
        ShipmentDocument {
            id: DocumentId::from("LT-GHI789"),
            tracking_number: "TRK-2024-003".to_string(),
            sender: "Fashion House".to_string(),
            receiver: "Retail Outlet".to_string(),
            weight: "3.1 kg".to_string(),
            status: ShipmentStatus::Processing,
            origin: "Dallas, TX".to_string(),
            destination: "Seattle, WA".to_string(),
            created_at: seed_time(2024, 1, 17, 9, 15),
            file_name: None,
            raw_response: RawPayload::from(
                r#"{"items": [{"name": "Apparel", "qty": 15}], "priority": "express"}"#,
            ),
        },
        ShipmentDocument {
            id: DocumentId::from("LT-JKL012"),
            tracking_number: "TRK-2024-004".to_string(),
            sender: "Auto Parts Co".to_string(),
            receiver: "Mechanic Shop".to_string(),
            weight: "25.0 kg".to_string(),
            status: ShipmentStatus::Delivered,
            origin: "Detroit, MI".to_string(),
            destination: "Phoenix, AZ".to_string(),
            created_at: seed_time(2024, 1, 14, 16, 20),
            file_name: None,
            raw_response: RawPayload::from(r#"{"items": [{"name": "Car Parts", "qty": 8}]}"#),
        },
        ShipmentDocument {
            id: DocumentId::from("LT-MNO345"),
            tracking_number: "TRK-2024-005".to_string(),
            sender: "Health Supplies".to_string(),
            receiver: "City Hospital".to_string(),
            weight: "5.7 kg".to_string(),
            status: ShipmentStatus::Transit,
            origin: "Boston, MA".to_string(),
            destination: "Denver, CO".to_string(),
            created_at: seed_time(2024, 1, 17, 11, 0),
            file_name: None,
            raw_response: RawPayload::from(
                r#"{"items": [{"name": "Medical Equipment", "qty": 3}], "fragile": true}"#,
            ),
        },
    ]
}
