// ==========================================
// Excipient Warehouse DSS - Location Codec
// ==========================================
// Responsibility: the one wire format this core owns, a
// percent-escaped two-segment string `room/position` used as a
// URL path segment and printed on physical labels
// Hard rule: consumers treat the code as opaque except via this
// codec; round-trip decode(encode(r, p)) == (r, p) must hold
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ==========================================
// LocationFormatError - malformed location code
// ==========================================
// Never raised for absent optional fields, only for structurally
// malformed input; an unparseable code never blocks allocation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationFormatError {
    #[error("location code must have exactly 2 segments, found {found}")]
    SegmentCount { found: usize },

    #[error("invalid percent-escape in segment '{segment}'")]
    InvalidEscape { segment: String },
}

// ==========================================
// StorageLocation - (room, position) pair
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageLocation {
    pub room_name: String,      // storage room display name
    pub position_label: String, // human-readable position inside the room
}

impl StorageLocation {
    pub fn new(room_name: impl Into<String>, position_label: impl Into<String>) -> Self {
        Self {
            room_name: room_name.into(),
            position_label: position_label.into(),
        }
    }

    /// Canonical identifying string: both segments percent-escaped,
    /// joined with `/`. Safe to embed in a URL path segment.
    pub fn encode(&self) -> String {
        format!(
            "{}/{}",
            urlencoding::encode(&self.room_name),
            urlencoding::encode(&self.position_label)
        )
    }

    /// Parse a canonical identifying string back into its pair.
    ///
    /// Fails when the code does not split into exactly two segments
    /// or when percent-decoding of a segment fails.
    pub fn decode(code: &str) -> Result<Self, LocationFormatError> {
        let segments: Vec<&str> = code.split('/').collect();
        if segments.len() != 2 {
            return Err(LocationFormatError::SegmentCount {
                found: segments.len(),
            });
        }

        let room_name = urlencoding::decode(segments[0])
            .map_err(|_| LocationFormatError::InvalidEscape {
                segment: segments[0].to_string(),
            })?
            .into_owned();
        let position_label = urlencoding::decode(segments[1])
            .map_err(|_| LocationFormatError::InvalidEscape {
                segment: segments[1].to_string(),
            })?
            .into_owned();

        Ok(Self {
            room_name,
            position_label,
        })
    }
}

impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

// ==========================================
// Unit tests
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_escapes_separator() {
        // '/' inside a component must not create a third segment
        let location = StorageLocation::new("Sala 1", "A-12/3");
        let code = location.encode();
        assert_eq!(code.matches('/').count(), 1, "exactly one separator: {}", code);
    }

    #[test]
    fn test_display_is_encoded_form() {
        let location = StorageLocation::new("Sala 1", "B-01");
        assert_eq!(location.to_string(), location.encode());
    }
}
