//! Error types shared by every subsystem.
//!
//! All errors are local to the card (or face) being processed. A batch
//! driver is expected to log the error, skip the card and keep going;
//! see `Planner::plan_deck`.

use thiserror::Error;

/// Errors raised while classifying, laying out or fitting a card.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// A semantic field is absent from the source record.
    #[error("Card {card} has no field {field}")]
    MissingField { card: String, field: &'static str },

    /// The face API was misused (faces of a face, face index of a whole card, ...).
    #[error("Invalid face access on {card}: {reason}")]
    InvalidFaceAccess { card: String, reason: String },

    /// A layout key outside the closed taxonomy reached the geometry engine.
    #[error("Unknown layout: {0}")]
    UnknownLayout(String),

    /// No font size at or above the floor fits the requested box.
    #[error("Cannot fit {text:?} in {max_width}x{max_height} at or above size {min_size}")]
    FitImpossible {
        text: String,
        max_width: i32,
        max_height: i32,
        min_size: u32,
    },

    /// A hand-written token specification could not be parsed.
    #[error("Invalid token specification: {0}")]
    InvalidTokenSpec(String),

    /// The source record is not valid JSON for a card.
    #[error("Malformed card record: {0}")]
    MalformedRecord(#[from] serde_json::Error),
}

impl ProxyError {
    pub(crate) fn missing(card: &str, field: &'static str) -> Self {
        ProxyError::MissingField {
            card: card.to_string(),
            field,
        }
    }

    pub(crate) fn face_access(card: &str, reason: impl Into<String>) -> Self {
        ProxyError::InvalidFaceAccess {
            card: card.to_string(),
            reason: reason.into(),
        }
    }
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, ProxyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = ProxyError::missing("Lightning Bolt", "power");
        assert_eq!(err.to_string(), "Card Lightning Bolt has no field power");
    }

    #[test]
    fn test_face_access_message() {
        let err = ProxyError::face_access("Fire // Ice", "faces of a face");
        assert!(err.to_string().contains("Fire // Ice"));
        assert!(matches!(err, ProxyError::InvalidFaceAccess { .. }));
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: ProxyError = parse.unwrap_err().into();
        assert!(matches!(err, ProxyError::MalformedRecord(_)));
    }
}
