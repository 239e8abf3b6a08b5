// ==========================================
// Excipient Warehouse DSS - Storage Domain Model
// ==========================================
// Hard rule: Pallet/Room/Space are read-only snapshots supplied
// by the external store; the core never mutates or persists them
// ==========================================

use crate::domain::types::{SpaceStatus, StockType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Pallet - physical stock unit (lot on a pallet)
// ==========================================
// Invariant: quantity_kg >= 0; a pallet occupies exactly one space
// Lifecycle: created on intake, decremented by consumption events,
// removed when emptied or relocated (all outside this core)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pallet {
    // ===== Identity =====
    pub pallet_id: String, // unique pallet/lot identifier

    // ===== Material =====
    pub excipient_code: String, // excipient material code
    pub excipient_name: String, // excipient display name
    pub quantity_kg: f64,       // current quantity (kilograms, >= 0)

    // ===== Storage position =====
    pub room_id: String,  // owning room
    pub space_id: String, // occupied space

    // ===== Timing =====
    pub arrived_at: DateTime<Utc>, // arrival timestamp (intake)

    // ===== Order linkage =====
    pub production_order_id: Option<String>, // current production order, if any

    // ===== Classification =====
    pub stock_type: StockType, // regular vs. adjustment stock
}

impl Pallet {
    /// Whole days this pallet has been in the storage area.
    ///
    /// Always recomputed from `now`; the value is never cached on the
    /// pallet because "now" advances independent of data changes.
    /// Arrivals with a timestamp in the future (clock skew between the
    /// store and the caller) count as 0 days.
    pub fn days_in_area(&self, now: DateTime<Utc>) -> i64 {
        (now - self.arrived_at).num_days().max(0)
    }
}

// ==========================================
// Room - storage room with a fixed number of spaces
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub room_id: String,    // unique room identifier
    pub name: String,       // display name
    pub total_spaces: u32,  // fixed capacity (number of spaces)
}

// ==========================================
// Space - single pallet position inside a room
// ==========================================
// Invariant: status is Occupied iff an active pallet references it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Space {
    pub space_id: String,               // unique space identifier
    pub room_id: String,                // back-reference to the room
    pub status: SpaceStatus,            // empty / occupied
    pub position_label: Option<String>, // human-readable position (e.g. "A-12/3")
}
