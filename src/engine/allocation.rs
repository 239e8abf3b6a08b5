// ==========================================
// Excipient Warehouse DSS - Allocation Engine
// ==========================================
// Hard rule: a request is atomic, it is either fully covered or
// not covered at all (a production order cannot proceed on a
// partial weigh-out)
// ==========================================
// Responsibility: greedy, priority-ordered, non-splitting
// allocation of on-hand stock to pending demand requests,
// one excipient per run
// Input: available quantity + demand request queue (snapshot)
// Output: AllocationResult (processed order preserved)
// ==========================================

use crate::domain::order::{AllocationLine, AllocationResult, DemandRequest};
use crate::domain::pallet::Pallet;
use crate::engine::error::{EngineError, EngineResult};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::instrument;

// ==========================================
// AllocationEngine
// ==========================================
pub struct AllocationEngine {
    // stateless engine, no injected dependencies
}

impl Default for AllocationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AllocationEngine {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // Core method
    // ==========================================

    /// Allocate available stock of one excipient to a demand queue.
    ///
    /// Rules:
    /// 1) Requests are processed in priority order: requests without
    ///    an order number first (unassigned consumption is resolved
    ///    before any numbered order), then ascending lexicographic
    ///    order number. The sort is stable, equal priorities keep
    ///    their input order.
    /// 2) Single pass over the queue with a running `remaining`
    ///    counter. A request is satisfied iff `remaining` covers its
    ///    full quantity; otherwise `remaining` is left untouched.
    /// 3) No reordering to maximize the satisfied count: once a
    ///    higher-priority request is skipped, later requests may
    ///    still fit, but priority fidelity wins over bin packing.
    ///
    /// Contract: `available_kg` must be finite and >= 0, every
    /// request quantity must be finite and > 0. Violations are
    /// rejected before sorting, never skipped or clamped.
    #[instrument(skip(self, requests), fields(request_count = requests.len()))]
    pub fn allocate(
        &self,
        available_kg: f64,
        requests: &[DemandRequest],
    ) -> EngineResult<AllocationResult> {
        // Contract checks first, before any ordering work
        if !available_kg.is_finite() || available_kg < 0.0 {
            return Err(EngineError::ContractViolation(format!(
                "available quantity must be finite and >= 0, got {}",
                available_kg
            )));
        }
        for request in requests {
            if !request.quantity_kg.is_finite() || request.quantity_kg <= 0.0 {
                return Err(EngineError::ContractViolation(format!(
                    "request order_no={:?} has non-positive quantity {}",
                    request.order_no, request.quantity_kg
                )));
            }
        }

        // Priority order: absent order number first, then lexicographic.
        // sort_by is stable, ties keep input order.
        let mut queue: Vec<&DemandRequest> = requests.iter().collect();
        queue.sort_by(|a, b| Self::priority_order(a, b));

        // Single greedy pass
        let mut remaining_kg = available_kg;
        let mut lines = Vec::with_capacity(queue.len());
        for request in queue {
            let satisfied = remaining_kg >= request.quantity_kg;
            if satisfied {
                remaining_kg -= request.quantity_kg;
            }
            lines.push(AllocationLine {
                request: request.clone(),
                satisfied,
            });
        }

        Ok(AllocationResult {
            lines,
            remaining_kg,
        })
    }

    // ==========================================
    // Supporting queries
    // ==========================================

    /// Sum on-hand quantity per excipient code across the ledger.
    ///
    /// Feeds `allocate` with the available quantity for one
    /// excipient; codes with no pallets are simply absent.
    pub fn available_by_excipient(&self, pallets: &[Pallet]) -> HashMap<String, f64> {
        let mut totals: HashMap<String, f64> = HashMap::new();
        for pallet in pallets {
            *totals.entry(pallet.excipient_code.clone()).or_insert(0.0) += pallet.quantity_kg;
        }
        totals
    }

    /// Priority comparator: None sorts before Some, Some values
    /// compare lexicographically ascending
    fn priority_order(a: &DemandRequest, b: &DemandRequest) -> Ordering {
        a.order_no.as_deref().cmp(&b.order_no.as_deref())
    }
}
