// ==========================================
// Excipient Warehouse DSS - Core Library
// ==========================================
// System role: decision support for bulk excipient storage
// (allocation of on-hand stock to production orders, lot aging,
// room occupancy). Persistence, UI and data refresh are owned by
// the surrounding product; this crate only computes over snapshots.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities & types
pub mod domain;

// Engine layer - business rules
pub mod engine;

// Configuration layer - aging policy
pub mod config;

// Location codec - room/position label strings
pub mod location;

// Logging
pub mod logging;

// API layer - composition over engines
pub mod api;

// ==========================================
// Re-exports of core types
// ==========================================

// Domain types
pub use domain::types::{AgingBucket, SpaceStatus, StockType};

// Domain entities
pub use domain::{AllocationLine, AllocationResult, DemandRequest, Pallet, Room, Space};

// Engines
pub use engine::{
    AgingClassifier, AgingForecast, AgingReport, AllocationEngine, EngineError, EngineResult,
    ExcipientCount, OccupancyAggregator, RoomOccupancy, TrendPredictor,
};

// Configuration
pub use config::{AgingPolicy, AgingThresholds, ConfigError};

// Location codec
pub use location::{LocationFormatError, StorageLocation};

// API
pub use api::{ApiError, ApiResult, DashboardApi, StockOverview, WarehouseSnapshot};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// System name
pub const APP_NAME: &str = "Excipient Warehouse Stock Core";

// ==========================================
// Compile-time sanity checks
// ==========================================
