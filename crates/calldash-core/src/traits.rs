//! Common traits for repositories and external services
//!
//! Defines abstractions over the billing store, the session provider, and
//! the remote call-listing service.

use crate::error::AppError;
use crate::models::{BillingProfile, CallRecord, Session};
use async_trait::async_trait;
use uuid::Uuid;

/// Billing store access
#[async_trait]
pub trait BillingRepository: Send + Sync {
    /// Find the billing profile for a user
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<BillingProfile>, AppError>;

    /// Atomically debit a balance keyed by subscription id
    ///
    /// The subtraction happens server-side in a single statement, so
    /// concurrent debits cannot lose updates. Returns the new balance in
    /// cents.
    async fn debit_by_subscription(
        &self,
        subscription_id: &str,
        amount_cents: i64,
    ) -> Result<i64, AppError>;
}

/// Session provider access
///
/// Yields the current user identity for a token, or none.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Resolve an opaque session token
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, AppError>;
}

/// Remote call-listing service
#[async_trait]
pub trait CallProvider: Send + Sync {
    /// List up to `limit` recent calls
    async fn list_calls(&self, limit: u32) -> Result<Vec<CallRecord>, AppError>;
}
