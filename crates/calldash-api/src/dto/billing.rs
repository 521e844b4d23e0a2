//! Billing-related DTOs

use calldash_core::models::BillingProfile;
use serde::Serialize;

/// Billing summary shown at the top of the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct BillingSummary {
    /// Credit balance in whole cents
    pub credit_balance_cents: i64,

    /// Balance formatted for display (e.g. "$4.00")
    pub credit_balance_display: String,

    /// Whether an active subscription is linked
    pub has_subscription: bool,

    /// Whether the billing-setup panel should be shown instead
    pub needs_setup: bool,
}

impl BillingSummary {
    /// Build a summary from a billing profile, if one exists
    ///
    /// A missing profile renders as zero balance with the setup panel,
    /// matching a user who has never configured billing.
    pub fn from_profile(profile: Option<&BillingProfile>) -> Self {
        match profile {
            Some(p) => {
                let has_subscription = p.has_active_subscription();
                Self {
                    credit_balance_cents: p.credit_balance_cents,
                    credit_balance_display: format_cents(p.credit_balance_cents),
                    has_subscription,
                    needs_setup: !has_subscription,
                }
            }
            None => Self {
                credit_balance_cents: 0,
                credit_balance_display: format_cents(0),
                has_subscription: false,
                needs_setup: true,
            },
        }
    }

    /// Build a summary with a balance observed after reconciliation
    pub fn with_balance(profile: &BillingProfile, balance_cents: i64) -> Self {
        let has_subscription = profile.has_active_subscription();
        Self {
            credit_balance_cents: balance_cents,
            credit_balance_display: format_cents(balance_cents),
            has_subscription,
            needs_setup: !has_subscription,
        }
    }
}

/// Format a cents amount as a dollar string
fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, abs / 100, abs % 100)
}
