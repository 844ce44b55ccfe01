//! Dashboard stat rollups.

use serde::Serialize;

use crate::document::ShipmentStatus;
use crate::store::DocumentStore;

/// Per-status shipment counts for the dashboard stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentStats {
    /// Every document in the store.
    pub total_shipments: usize,
    /// Delivered count.
    pub delivered: usize,
    /// In-transit count.
    pub in_transit: usize,
    /// Still in extraction/verification.
    pub processing: usize,
    /// Awaiting pickup.
    pub pending: usize,
    /// Cancelled count.
    pub cancelled: usize,
}

impl ShipmentStats {
    /// Roll up counts over every document in the store.
    #[must_use]
    pub fn collect(store: &DocumentStore) -> Self {
        let mut stats = Self::default();
        for doc in store.iter() {
            stats.total_shipments += 1;
            match doc.status {
                ShipmentStatus::Delivered => stats.delivered += 1,
                ShipmentStatus::Transit => stats.in_transit += 1,
                ShipmentStatus::Processing => stats.processing += 1,
                ShipmentStatus::Pending => stats.pending += 1,
                ShipmentStatus::Cancelled => stats.cancelled += 1,
            }
        }
        stats
    }
}
