//! API data transfer objects

pub mod billing;
pub mod common;
pub mod dashboard;

pub use billing::BillingSummary;
pub use common::ApiResponse;
pub use dashboard::{CallRow, DashboardQuery, DashboardResponse};
