// ==========================================
// Excipient Warehouse DSS - Configuration Layer
// ==========================================
// Responsibility: load, validate and expose policy configuration
// ==========================================

pub mod aging_policy;

pub use aging_policy::{AgingPolicy, AgingThresholds};

use thiserror::Error;

// ==========================================
// ConfigError - configuration load/validation errors
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid aging thresholds: {0}")]
    InvalidThresholds(String),

    #[error("config file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
