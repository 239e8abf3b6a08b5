// ==========================================
// Excipient Warehouse DSS - Engine Layer
// ==========================================
// Responsibility: pure rule engines over immutable snapshots
// Hard rule: engines hold no state, perform no I/O and never cache
// results; every call recomputes from its inputs
// ==========================================

pub mod aging;
pub mod allocation;
pub mod error;
pub mod occupancy;
pub mod trend;

// Re-export core engines
pub use aging::{AgingClassifier, AgingReport};
pub use allocation::AllocationEngine;
pub use error::{EngineError, EngineResult};
pub use occupancy::{ExcipientCount, OccupancyAggregator, RoomOccupancy};
pub use trend::{AgingForecast, TrendPredictor};
