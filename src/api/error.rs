// ==========================================
// Excipient Warehouse DSS - API Layer Errors
// ==========================================
// Responsibility: API-facing error type, converts engine and codec
// errors into messages a consumer can act on
// Hard rule: every error carries an explicit reason
// ==========================================

use crate::engine::error::EngineError;
use crate::location::LocationFormatError;
use thiserror::Error;

/// API layer error type
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // Caller contract errors
    // ==========================================
    /// Input violated an engine contract (never silently corrected)
    #[error("contract violation: {0}")]
    ContractViolation(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // ==========================================
    // Location codec errors
    // ==========================================
    /// Malformed location code; never blocks allocation or aging
    #[error("malformed location code: {0}")]
    LocationFormat(#[from] LocationFormatError),

    // ==========================================
    // Generic errors
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// Conversion from EngineError
// Purpose: engine contract failures surface unchanged to the API
// consumer, with the engine's reason text preserved
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::ContractViolation(msg) => ApiError::ContractViolation(msg),
        }
    }
}

/// Result type alias
pub type ApiResult<T> = Result<T, ApiError>;
