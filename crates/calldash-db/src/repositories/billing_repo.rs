//! Billing profile repository implementation
//!
//! PostgreSQL-backed storage for billing profiles. The balance debit is a
//! single server-side arithmetic UPDATE keyed by subscription id, so
//! concurrent dashboard refreshes cannot lose updates. Uses runtime queries
//! (not compile-time macros) to avoid requiring a database connection at
//! build time.

use async_trait::async_trait;
use calldash_core::{models::BillingProfile, traits::BillingRepository, AppError, AppResult};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, error, instrument};
use uuid::Uuid;

/// PostgreSQL implementation of BillingRepository
pub struct PgBillingRepository {
    pool: PgPool,
}

impl PgBillingRepository {
    /// Create a new billing repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const BILLING_SELECT_COLUMNS: &str = r#"
    id, user_id, credit_balance_cents, stripe_subscription_id,
    created_at, updated_at
"#;

#[async_trait]
impl BillingRepository for PgBillingRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<BillingProfile>> {
        debug!("Finding billing profile for user: {}", user_id);

        let query = format!(
            "SELECT {} FROM billing_profiles WHERE user_id = $1",
            BILLING_SELECT_COLUMNS
        );

        let result = sqlx::query_as::<sqlx::Postgres, BillingProfileRow>(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("Database error finding billing profile for {}: {}", user_id, e);
                AppError::Database(format!("Failed to find billing profile: {}", e))
            })?;

        Ok(result.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn debit_by_subscription(
        &self,
        subscription_id: &str,
        amount_cents: i64,
    ) -> AppResult<i64> {
        debug!(
            "Debiting {} cents from subscription {}",
            amount_cents, subscription_id
        );

        let result: (i64,) = sqlx::query_as(
            r#"
            UPDATE billing_profiles
            SET credit_balance_cents = credit_balance_cents - $2,
                updated_at = NOW()
            WHERE stripe_subscription_id = $1
            RETURNING credit_balance_cents
            "#,
        )
        .bind(subscription_id)
        .bind(amount_cents)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Database error debiting subscription {}: {}",
                subscription_id, e
            );
            AppError::Database(format!("Failed to debit balance: {}", e))
        })?
        .ok_or_else(|| {
            AppError::BalanceUpdate(format!(
                "No billing profile for subscription {}",
                subscription_id
            ))
        })?;

        Ok(result.0)
    }
}

/// Helper struct for mapping database rows to the domain model
#[derive(Debug, sqlx::FromRow)]
struct BillingProfileRow {
    id: i64,
    user_id: Uuid,
    credit_balance_cents: i64,
    stripe_subscription_id: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BillingProfileRow> for BillingProfile {
    fn from(row: BillingProfileRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            credit_balance_cents: row.credit_balance_cents,
            stripe_subscription_id: row.stripe_subscription_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billing_row_conversion() {
        let now = Utc::now();
        let row = BillingProfileRow {
            id: 1,
            user_id: Uuid::new_v4(),
            credit_balance_cents: 1000,
            stripe_subscription_id: Some("sub_123".to_string()),
            created_at: now,
            updated_at: now,
        };

        let profile: BillingProfile = row.into();
        assert_eq!(profile.credit_balance_cents, 1000);
        assert!(profile.has_active_subscription());
    }
}
