// ==========================================
// Excipient Warehouse DSS - Engine Layer Errors
// ==========================================
// Responsibility: errors raised by the rule engines
// Hard rule: contract violations are surfaced immediately, never
// retried and never silently corrected (clamping would hide a
// data-quality bug upstream)
// ==========================================

use thiserror::Error;

/// Engine layer error type
#[derive(Error, Debug)]
pub enum EngineError {
    /// Caller passed input that violates an engine contract
    /// (negative available stock, non-positive request quantity)
    #[error("contract violation: {0}")]
    ContractViolation(String),
}

/// Result alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
