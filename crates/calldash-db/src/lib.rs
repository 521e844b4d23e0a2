//! CallDash Database Layer
//!
//! This crate provides PostgreSQL database access and repository
//! implementations for the CallDash service. It includes:
//!
//! - Connection pool management with sqlx
//! - Billing profile repository with atomic balance debits
//! - Session repository backing the external session provider lookup

pub mod pool;
pub mod repositories;

pub use pool::create_pool;
pub use repositories::*;

// Re-export commonly used types
pub use calldash_core::{AppError, AppResult};
pub use sqlx::PgPool;
