// ==========================================
// Excipient Warehouse DSS - Occupancy Aggregator
// ==========================================
// Responsibility: per-room fill levels and top excipients by
// pallet count, computed from static topology + ledger snapshot
// Hard rule: percentage is always within [0, 100] and 0 for rooms
// with no declared spaces (no divide-by-zero)
// ==========================================

use crate::domain::pallet::{Pallet, Room, Space};
use crate::domain::types::SpaceStatus;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{instrument, warn};

// ==========================================
// RoomOccupancy - fill summary for one room
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomOccupancy {
    pub room_id: String,
    pub name: String,
    pub occupied: u32,   // occupied spaces observed
    pub total: u32,      // declared room capacity
    pub percentage: f64, // occupied/total * 100, in [0, 100]
}

// ==========================================
// ExcipientCount - distinct-pallet count for one excipient
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExcipientCount {
    pub code: String,  // excipient code
    pub name: String,  // display name (first seen)
    pub count: usize,  // distinct pallets holding this excipient
}

// ==========================================
// OccupancyAggregator
// ==========================================
pub struct OccupancyAggregator {
    // stateless engine, no injected dependencies
}

impl Default for OccupancyAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl OccupancyAggregator {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // Core methods
    // ==========================================

    /// One occupancy entry per room, in input room order.
    ///
    /// `total` is the room's declared capacity; `occupied` counts the
    /// room's spaces with status Occupied. A room with zero declared
    /// spaces reports 0%, never a divide-by-zero fault.
    #[instrument(skip(self, rooms, spaces), fields(rooms = rooms.len(), spaces = spaces.len()))]
    pub fn aggregate(&self, rooms: &[Room], spaces: &[Space]) -> Vec<RoomOccupancy> {
        // Occupied spaces per room in one pass over the topology
        let mut occupied_by_room: HashMap<&str, u32> = HashMap::new();
        for space in spaces {
            if space.status == SpaceStatus::Occupied {
                *occupied_by_room.entry(space.room_id.as_str()).or_insert(0) += 1;
            }
        }

        rooms
            .iter()
            .map(|room| {
                let observed = occupied_by_room
                    .get(room.room_id.as_str())
                    .copied()
                    .unwrap_or(0);
                if observed > room.total_spaces {
                    // Topology inconsistency upstream; report the room as full
                    warn!(
                        room_id = %room.room_id,
                        observed,
                        declared = room.total_spaces,
                        "occupied spaces exceed declared room capacity"
                    );
                }
                let occupied = observed.min(room.total_spaces);
                let percentage = if room.total_spaces == 0 {
                    0.0
                } else {
                    f64::from(occupied) / f64::from(room.total_spaces) * 100.0
                };
                RoomOccupancy {
                    room_id: room.room_id.clone(),
                    name: room.name.clone(),
                    occupied,
                    total: room.total_spaces,
                    percentage,
                }
            })
            .collect()
    }

    /// Top excipients by distinct pallet count.
    ///
    /// Descending count, ties broken by first-seen order in the
    /// ledger (the sort is stable), truncated to `limit`.
    #[instrument(skip(self, pallets), fields(pallet_count = pallets.len()))]
    pub fn top_materials(&self, pallets: &[Pallet], limit: usize) -> Vec<ExcipientCount> {
        let mut index_by_code: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<ExcipientCount> = Vec::new();

        for pallet in pallets {
            match index_by_code.get(pallet.excipient_code.as_str()) {
                Some(&i) => counts[i].count += 1,
                None => {
                    index_by_code.insert(pallet.excipient_code.as_str(), counts.len());
                    counts.push(ExcipientCount {
                        code: pallet.excipient_code.clone(),
                        name: pallet.excipient_name.clone(),
                        count: 1,
                    });
                }
            }
        }

        counts.sort_by_key(|c| std::cmp::Reverse(c.count));
        counts.truncate(limit);
        counts
    }
}
