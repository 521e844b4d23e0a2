//! Billing reconciliation service
//!
//! Walks a freshly fetched call list and debits the owner's credit balance
//! for every call the provider has rated, applying the configured markup
//! multiplier. Charging is gated on an active subscription. A failed debit
//! is logged and skipped; it never aborts the remaining calls.

use calldash_core::{
    models::{BillingProfile, CallRecord},
    traits::BillingRepository,
    AppResult,
};
use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

/// Billing reconciliation service
///
/// Generic over the billing repository so tests can substitute an
/// in-memory implementation.
pub struct ReconciliationService<B: BillingRepository> {
    billing_repo: Arc<B>,
    markup_multiplier: u32,
}

/// Outcome of one reconciliation pass
#[derive(Debug, Clone, Default)]
pub struct ReconciliationSummary {
    /// Calls that produced a successful debit
    pub charged_calls: usize,

    /// Calls skipped (no cost attached, or no active subscription)
    pub skipped_calls: usize,

    /// Calls whose debit failed and was ignored
    pub failed_debits: usize,

    /// Total amount debited in cents
    pub total_debited_cents: i64,

    /// Balance after the last successful debit, if any
    pub final_balance_cents: Option<i64>,
}

impl<B: BillingRepository> ReconciliationService<B> {
    /// Create a new reconciliation service
    pub fn new(billing_repo: Arc<B>, markup_multiplier: u32) -> Self {
        Self {
            billing_repo,
            markup_multiplier,
        }
    }

    /// Compute the marked-up charge for a rated call, in whole cents
    ///
    /// Provider costs arrive in fractional cents; the debit column is
    /// integer cents, so the product is rounded with banker's rounding.
    /// Returns None when the cost is outside the representable range.
    fn charge_cents(&self, combined_cost: Decimal) -> Option<i64> {
        combined_cost
            .checked_mul(Decimal::from(self.markup_multiplier))?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
            .to_i64()
    }

    /// Reconcile the credit balance against a call list
    ///
    /// For each call carrying a cost, and only when the profile has an
    /// active subscription, debits `cost × multiplier` from the stored
    /// balance keyed by subscription id. Individual debit failures are
    /// logged and skipped.
    #[instrument(skip(self, profile, calls), fields(user_id = %profile.user_id, calls = calls.len()))]
    pub async fn reconcile(
        &self,
        profile: &BillingProfile,
        calls: &[CallRecord],
    ) -> AppResult<ReconciliationSummary> {
        let mut summary = ReconciliationSummary::default();

        let Some(subscription_id) = profile
            .stripe_subscription_id
            .as_deref()
            .filter(|id| !id.is_empty())
        else {
            debug!("No active subscription; skipping reconciliation");
            summary.skipped_calls = calls.len();
            return Ok(summary);
        };

        for call in calls {
            let Some(cost) = call.combined_cost() else {
                summary.skipped_calls += 1;
                continue;
            };

            let Some(amount_cents) = self.charge_cents(cost) else {
                error!(
                    "Charge for call {} is out of range (cost {}); not debited",
                    call.call_id, cost
                );
                summary.failed_debits += 1;
                continue;
            };

            match self
                .billing_repo
                .debit_by_subscription(subscription_id, amount_cents)
                .await
            {
                Ok(new_balance) => {
                    debug!(
                        "Debited {} cents for call {}; balance now {}",
                        amount_cents, call.call_id, new_balance
                    );
                    summary.charged_calls += 1;
                    summary.total_debited_cents += amount_cents;
                    summary.final_balance_cents = Some(new_balance);
                }
                Err(e) => {
                    // Best-effort: a single failed debit must not abort the pass
                    error!("Failed to debit for call {}: {}", call.call_id, e);
                    summary.failed_debits += 1;
                }
            }
        }

        if summary.failed_debits > 0 {
            warn!(
                "Reconciliation finished with {} failed debits out of {} calls",
                summary.failed_debits,
                calls.len()
            );
        }

        Ok(summary)
    }
}
