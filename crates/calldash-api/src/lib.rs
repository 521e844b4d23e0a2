//! API layer for CallDash
//!
//! HTTP handlers and DTOs for the calls dashboard: billing summary,
//! dashboard view with billing reconciliation, and session resolution.

#![forbid(unsafe_code)]

pub mod dto;
pub mod handlers;

// Re-export DTOs (common types)
pub use dto::{ApiResponse, BillingSummary, CallRow, DashboardResponse};

// Re-export handler configuration functions
pub use handlers::{configure_billing, configure_dashboard};
