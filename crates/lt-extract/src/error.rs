//! Error taxonomy for extraction normalization
//!
//! Three failure classes cover everything the decode ladder can hit:
//! absent input, text nothing could be recovered from, and a fault inside
//! the recovery machinery itself.

/// Failure classes produced while normalizing a raw extraction payload.
///
/// Each variant displays as the exact diagnostic the dashboard shows next
/// to the raw fallback text, so `to_string()` is the user-visible message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// No payload was supplied (absent upstream field or empty text).
    #[error("No data provided")]
    NoData,

    /// Text payload that no decode strategy could recover a document from.
    #[error("Could not parse JSON. Displaying raw content.")]
    Unparseable,

    /// The recovery machinery itself misbehaved.
    ///
    /// Ordinary decode and span-match failures are control flow and map to
    /// [`ExtractError::Unparseable`]; this variant signals a broken
    /// invariant inside the ladder and should never surface under the
    /// documented algorithm.
    #[error("Unknown parsing error")]
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_are_the_display_strings() {
        assert_eq!(ExtractError::NoData.to_string(), "No data provided");
        assert_eq!(
            ExtractError::Unparseable.to_string(),
            "Could not parse JSON. Displaying raw content."
        );
        assert_eq!(ExtractError::Internal.to_string(), "Unknown parsing error");
    }
}
