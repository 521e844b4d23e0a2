//! Business logic services for CallDash
//!
//! This crate contains the business logic that sits between the HTTP
//! handlers and the billing store / call provider.
//!
//! # Architecture
//!
//! Services are designed to be composable and testable:
//! - Each service is generic over the repository traits it depends on
//! - Services are wrapped in Arc for safe sharing across async tasks
//! - All operations are instrumented with tracing
//! - Comprehensive error handling with AppError
//!
//! # Services
//!
//! - `ReconciliationService` - per-call credit balance reconciliation

pub mod reconciliation;

pub use reconciliation::{ReconciliationService, ReconciliationSummary};
