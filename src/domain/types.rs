// ==========================================
// Excipient Warehouse DSS - Domain Type Definitions
// ==========================================
// Hard rule: aging is tier-based, not score-based
// Serialization format: SCREAMING_SNAKE_CASE (matches the store)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Aging Bucket
// ==========================================
// Severity tier derived from days-in-area; ordered
// Normal < Attention < Warning < Critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgingBucket {
    Normal,    // within tolerance
    Attention, // approaching the warning band
    Warning,   // close to the critical limit
    Critical,  // past the holding limit (expired for release purposes)
}

impl fmt::Display for AgingBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgingBucket::Normal => write!(f, "NORMAL"),
            AgingBucket::Attention => write!(f, "ATTENTION"),
            AgingBucket::Warning => write!(f, "WARNING"),
            AgingBucket::Critical => write!(f, "CRITICAL"),
        }
    }
}

// ==========================================
// Stock Type
// ==========================================
// Adjustment (correction) stock tolerates longer holding than
// regular stock, so the two are classified and reported apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockType {
    Regular,    // ordinary intake stock
    Adjustment, // correction / adjustment stock
}

impl fmt::Display for StockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockType::Regular => write!(f, "REGULAR"),
            StockType::Adjustment => write!(f, "ADJUSTMENT"),
        }
    }
}

// ==========================================
// Space Status
// ==========================================
// Occupied iff at least one active pallet references the space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpaceStatus {
    Empty,
    Occupied,
}

impl fmt::Display for SpaceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpaceStatus::Empty => write!(f, "EMPTY"),
            SpaceStatus::Occupied => write!(f, "OCCUPIED"),
        }
    }
}

impl SpaceStatus {
    /// Parse a status from its stored string form
    pub fn from_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "OCCUPIED" => SpaceStatus::Occupied,
            _ => SpaceStatus::Empty, // default
        }
    }

    /// String form used by the external store
    pub fn to_db_str(&self) -> &'static str {
        match self {
            SpaceStatus::Empty => "EMPTY",
            SpaceStatus::Occupied => "OCCUPIED",
        }
    }
}
