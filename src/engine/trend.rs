// ==========================================
// Excipient Warehouse DSS - Trend Predictor
// ==========================================
// Responsibility: short-horizon aging extrapolation for dashboards
// Hard rule: directional signal only, this is a linear
// extrapolation, not a statistical forecast, and it makes no
// storage decisions
// ==========================================

use crate::domain::pallet::Pallet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

// ==========================================
// AgingForecast - one predicted day
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgingForecast {
    pub day: u32,            // 1..=horizon
    pub predicted_aging: i64, // rounded extrapolated mean age
    pub confidence: i64,      // raw linear decay, may reach <= 0
}

// ==========================================
// TrendPredictor
// ==========================================
pub struct TrendPredictor {
    // stateless engine, no injected dependencies
}

impl Default for TrendPredictor {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendPredictor {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // Core method
    // ==========================================

    /// Extrapolate mean aging for day 1..=horizon_days.
    ///
    /// predicted(day)  = round(avg * (1 + 0.1 * (day - 1)))
    /// confidence(day) = round(100 * (1 - 0.1 * (day - 1)))
    ///
    /// Confidence is returned raw so the decay policy stays
    /// inspectable; callers clamp for display. An empty ledger
    /// yields an empty sequence, not an error.
    #[instrument(skip(self, pallets), fields(pallet_count = pallets.len()))]
    pub fn predict(
        &self,
        pallets: &[Pallet],
        now: DateTime<Utc>,
        horizon_days: u32,
    ) -> Vec<AgingForecast> {
        if pallets.is_empty() {
            return Vec::new();
        }

        let total_days: i64 = pallets.iter().map(|p| p.days_in_area(now)).sum();
        let avg_aging_rate = total_days as f64 / pallets.len() as f64;

        (1..=horizon_days)
            .map(|day| {
                let growth = 1.0 + 0.1 * f64::from(day - 1);
                let decay = 1.0 - 0.1 * f64::from(day - 1);
                AgingForecast {
                    day,
                    predicted_aging: (avg_aging_rate * growth).round() as i64,
                    confidence: (100.0 * decay).round() as i64,
                }
            })
            .collect()
    }
}
