// ==========================================
// Excipient Warehouse DSS - Aging Classifier
// ==========================================
// Hard rule: days-in-area is recomputed on every call from the
// caller's "now", never cached on the pallet
// Hard rule: bucket thresholds come from AgingPolicy, never from
// constants inside this engine
// ==========================================
// Responsibility: partition the ledger by stock class, order each
// partition oldest-first, and bucket every pallet by severity
// Input: pallet snapshot + now + aging policy
// Output: AgingReport (pure function, no side effects)
// ==========================================

use crate::config::AgingPolicy;
use crate::domain::pallet::Pallet;
use crate::domain::types::AgingBucket;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::instrument;

// ==========================================
// AgingReport - classifier output
// ==========================================
#[derive(Debug, Clone)]
pub struct AgingReport {
    /// Regular-stock pallets, descending days-in-area (stable)
    pub regular_lots: Vec<Pallet>,
    /// Adjustment-stock pallets, descending days-in-area (stable)
    pub adjustment_lots: Vec<Pallet>,
    /// Every input pallet keyed by its severity bucket
    pub by_bucket: BTreeMap<AgingBucket, Vec<Pallet>>,
}

impl AgingReport {
    /// Pallet count per bucket (dashboard tiles)
    pub fn bucket_counts(&self) -> BTreeMap<AgingBucket, usize> {
        self.by_bucket
            .iter()
            .map(|(bucket, pallets)| (*bucket, pallets.len()))
            .collect()
    }
}

// ==========================================
// AgingClassifier
// ==========================================
pub struct AgingClassifier {
    // stateless engine, no injected dependencies
}

impl Default for AgingClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl AgingClassifier {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // Core method
    // ==========================================

    /// Classify a ledger snapshot.
    ///
    /// Rules:
    /// 1) Split into adjustment-stock vs. regular-stock partitions.
    /// 2) Sort each partition by descending days-in-area; the sort is
    ///    stable, equal ages keep the input order.
    /// 3) Bucket every pallet with the threshold set of its own stock
    ///    class (adjustment stock tolerates longer holding).
    #[instrument(skip(self, pallets, policy), fields(pallets = pallets.len()))]
    pub fn classify(
        &self,
        pallets: &[Pallet],
        now: DateTime<Utc>,
        policy: &AgingPolicy,
    ) -> AgingReport {
        let mut regular_lots = Vec::new();
        let mut adjustment_lots = Vec::new();
        let mut by_bucket: BTreeMap<AgingBucket, Vec<Pallet>> = BTreeMap::new();

        for pallet in pallets {
            let days = pallet.days_in_area(now);
            let bucket = policy.bucket_for(pallet.stock_type, days);
            by_bucket.entry(bucket).or_default().push(pallet.clone());

            match pallet.stock_type {
                crate::domain::types::StockType::Regular => regular_lots.push(pallet.clone()),
                crate::domain::types::StockType::Adjustment => adjustment_lots.push(pallet.clone()),
            }
        }

        // Oldest first; stable, so equal ages keep input order
        regular_lots.sort_by_key(|p| std::cmp::Reverse(p.days_in_area(now)));
        adjustment_lots.sort_by_key(|p| std::cmp::Reverse(p.days_in_area(now)));

        AgingReport {
            regular_lots,
            adjustment_lots,
            by_bucket,
        }
    }
}
