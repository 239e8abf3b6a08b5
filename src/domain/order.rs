// ==========================================
// Excipient Warehouse DSS - Demand Domain Model
// ==========================================
// Hard rule: demand requests are immutable inputs, the allocation
// engine never mutates them and never satisfies one partially
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// DemandRequest - production order line for one excipient
// ==========================================
// order_no may be absent: consumption not yet assigned to an order;
// operationally those are resolved before any numbered order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandRequest {
    pub order_no: Option<String>, // production order number (may be absent)
    pub excipient_name: String,   // requested excipient
    pub quantity_kg: f64,         // requested quantity (must be > 0)
}

// ==========================================
// AllocationLine - one request with its allocation verdict
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationLine {
    pub request: DemandRequest, // the (unmodified) demand request
    pub satisfied: bool,        // fully covered by on-hand stock
}

// ==========================================
// AllocationResult - outcome of one allocation run
// ==========================================
// Ephemeral: computed fresh on every invocation, never cached.
// `lines` preserves the processed (priority) order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationResult {
    pub lines: Vec<AllocationLine>, // every request, in processed order
    pub remaining_kg: f64,          // stock left after all satisfied requests
}

impl AllocationResult {
    /// Satisfied requests, in processed order
    pub fn satisfied(&self) -> Vec<&DemandRequest> {
        self.lines
            .iter()
            .filter(|l| l.satisfied)
            .map(|l| &l.request)
            .collect()
    }

    /// Unsatisfied requests, in processed order
    pub fn unsatisfied(&self) -> Vec<&DemandRequest> {
        self.lines
            .iter()
            .filter(|l| !l.satisfied)
            .map(|l| &l.request)
            .collect()
    }

    /// Total quantity consumed by satisfied requests
    pub fn satisfied_quantity(&self) -> f64 {
        self.lines
            .iter()
            .filter(|l| l.satisfied)
            .map(|l| l.request.quantity_kg)
            .sum()
    }
}
