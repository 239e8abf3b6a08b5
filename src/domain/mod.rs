// ==========================================
// Excipient Warehouse DSS - Domain Layer
// ==========================================
// Responsibility: entities and types shared by the engines
// Hard rule: no data access logic, no engine logic
// ==========================================

pub mod order;
pub mod pallet;
pub mod types;

// Re-export core types
pub use order::{AllocationLine, AllocationResult, DemandRequest};
pub use pallet::{Pallet, Room, Space};
pub use types::{AgingBucket, SpaceStatus, StockType};
