//! Status badge classes.

use lt_records::ShipmentStatus;

/// CSS class pair for a status badge, from a raw status string.
///
/// Lookup is case-insensitive; unknown or absent statuses fall back to
/// the pending style rather than erroring.
#[must_use]
pub fn status_color_class(status: Option<&str>) -> &'static str {
    class_for(ShipmentStatus::from_str_lossy(status))
}

/// CSS class pair for a known status.
#[must_use]
pub const fn class_for(status: ShipmentStatus) -> &'static str {
    match status {
        ShipmentStatus::Delivered => "bg-success text-success-foreground",
        ShipmentStatus::Transit => "bg-warning text-warning-foreground",
        ShipmentStatus::Processing => "bg-info text-info-foreground",
        ShipmentStatus::Pending => "bg-muted text-muted-foreground",
        ShipmentStatus::Cancelled => "bg-destructive text-destructive-foreground",
    }
}
