//! Repository implementations
//!
//! Concrete implementations of the repository traits defined in
//! calldash-core, using sqlx for PostgreSQL access.

pub mod billing_repo;
pub mod session_repo;

pub use billing_repo::PgBillingRepository;
pub use session_repo::PgSessionRepository;
