//! Billing profile model
//!
//! A user's credit balance and subscription linkage. Owned by the billing
//! store; this service reads it and applies atomic debits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Billing profile for a dashboard user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingProfile {
    /// Unique identifier
    pub id: i64,

    /// Owning user
    pub user_id: Uuid,

    /// Credit balance in whole cents
    pub credit_balance_cents: i64,

    /// Stripe subscription identifier, if billing is set up
    pub stripe_subscription_id: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl BillingProfile {
    /// Check if the profile has an active subscription
    ///
    /// Charging is gated on this; profiles without a subscription id are
    /// shown the billing-setup panel instead.
    #[inline]
    pub fn has_active_subscription(&self) -> bool {
        self.stripe_subscription_id
            .as_deref()
            .is_some_and(|id| !id.is_empty())
    }
}

impl Default for BillingProfile {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            user_id: Uuid::nil(),
            credit_balance_cents: 0,
            stripe_subscription_id: None,
            created_at: now,
            updated_at: now,
        }
    }
}
