// ==========================================
// Excipient Warehouse DSS - API Layer
// ==========================================
// Responsibility: consumer-facing composition over the engines
// ==========================================

pub mod dashboard_api;
pub mod error;

pub use dashboard_api::{DashboardApi, StockOverview, WarehouseSnapshot};
pub use error::{ApiError, ApiResult};
