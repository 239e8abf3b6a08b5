// ==========================================
// Excipient Warehouse DSS - Dashboard API
// ==========================================
// Responsibility: compose the rule engines over one warehouse
// snapshot for the reporting surfaces (occupancy, aging, top
// excipients, forecast, allocation preview)
// Architecture: API layer -> Engine layer; no data access here,
// the caller supplies a fresh snapshot per invocation
// Hard rule: nothing is memoized across calls; results always
// reflect the snapshot that was passed in
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::instrument;

use crate::api::error::ApiResult;
use crate::config::AgingPolicy;
use crate::domain::order::{AllocationResult, DemandRequest};
use crate::domain::pallet::{Pallet, Room, Space};
use crate::domain::types::AgingBucket;
use crate::engine::aging::{AgingClassifier, AgingReport};
use crate::engine::allocation::AllocationEngine;
use crate::engine::occupancy::{ExcipientCount, OccupancyAggregator, RoomOccupancy};
use crate::engine::trend::{AgingForecast, TrendPredictor};

// ==========================================
// WarehouseSnapshot - per-call input records
// ==========================================
// Read-only snapshot from the external store; consistency of the
// snapshot (read-committed vs. stale) is the store's concern
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseSnapshot {
    pub pallets: Vec<Pallet>,
    pub rooms: Vec<Room>,
    pub spaces: Vec<Space>,
}

// ==========================================
// StockOverview - aggregated dashboard payload
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockOverview {
    pub room_occupancy: Vec<RoomOccupancy>,         // per-room fill levels
    pub top_excipients: Vec<ExcipientCount>,        // busiest excipients by pallet count
    pub bucket_counts: BTreeMap<AgingBucket, usize>, // pallets per severity tier
    pub forecast: Vec<AgingForecast>,               // short-horizon aging trend
}

// ==========================================
// DashboardApi
// ==========================================

/// Dashboard API
///
/// Holds only the injected aging policy plus the stateless engines;
/// every method recomputes from the snapshot it receives.
pub struct DashboardApi {
    policy: AgingPolicy,
    aging: AgingClassifier,
    occupancy: OccupancyAggregator,
    allocation: AllocationEngine,
    trend: TrendPredictor,
}

impl DashboardApi {
    /// Create a new DashboardApi with the given aging policy
    pub fn new(policy: AgingPolicy) -> Self {
        Self {
            policy,
            aging: AgingClassifier::new(),
            occupancy: OccupancyAggregator::new(),
            allocation: AllocationEngine::new(),
            trend: TrendPredictor::new(),
        }
    }

    // ==========================================
    // Aggregated queries
    // ==========================================

    /// Full dashboard payload for one snapshot.
    ///
    /// # Arguments
    /// - `top_limit`: number of top-excipient entries to keep
    /// - `horizon_days`: forecast horizon (0 yields an empty forecast)
    #[instrument(skip(self, snapshot), fields(
        pallets = snapshot.pallets.len(),
        rooms = snapshot.rooms.len(),
        spaces = snapshot.spaces.len()
    ))]
    pub fn stock_overview(
        &self,
        snapshot: &WarehouseSnapshot,
        now: DateTime<Utc>,
        top_limit: usize,
        horizon_days: u32,
    ) -> StockOverview {
        let aging_report = self.aging.classify(&snapshot.pallets, now, &self.policy);

        StockOverview {
            room_occupancy: self.occupancy.aggregate(&snapshot.rooms, &snapshot.spaces),
            top_excipients: self.occupancy.top_materials(&snapshot.pallets, top_limit),
            bucket_counts: aging_report.bucket_counts(),
            forecast: self.trend.predict(&snapshot.pallets, now, horizon_days),
        }
    }

    /// Aging partitions for the aging board (oldest lots first)
    pub fn aging_report(&self, snapshot: &WarehouseSnapshot, now: DateTime<Utc>) -> AgingReport {
        self.aging.classify(&snapshot.pallets, now, &self.policy)
    }

    // ==========================================
    // Allocation preview
    // ==========================================

    /// Which pending requests for one excipient can be covered by
    /// the stock on hand right now.
    ///
    /// Sums the ledger quantity for `excipient_code` (0 when no
    /// pallet holds it) and runs the allocation engine; contract
    /// violations from the engine surface unchanged.
    #[instrument(skip(self, snapshot, requests), fields(request_count = requests.len()))]
    pub fn allocation_preview(
        &self,
        snapshot: &WarehouseSnapshot,
        excipient_code: &str,
        requests: &[DemandRequest],
    ) -> ApiResult<AllocationResult> {
        if excipient_code.trim().is_empty() {
            return Err(crate::api::error::ApiError::InvalidInput(
                "excipient code must not be empty".to_string(),
            ));
        }

        let available_kg = self
            .allocation
            .available_by_excipient(&snapshot.pallets)
            .get(excipient_code)
            .copied()
            .unwrap_or(0.0);

        let result = self.allocation.allocate(available_kg, requests)?;
        Ok(result)
    }
}
