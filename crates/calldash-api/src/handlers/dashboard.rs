//! Dashboard handler
//!
//! Serves the calls dashboard: fetches recent calls from the provider,
//! reconciles the credit balance against per-call costs, and returns
//! display-ready rows plus the billing summary. Also the manual-refresh
//! entry point; there is no in-flight guard, overlapping refreshes simply
//! race and the last response wins on the client.

use crate::dto::{ApiResponse, BillingSummary, CallRow, DashboardQuery, DashboardResponse};
use crate::handlers::session::resolve_session;
use actix_web::{
    web::{self, Data, Json, Query},
    HttpRequest, Result,
};
use calldash_core::{
    traits::{BillingRepository, CallProvider},
    AppConfig, AppError,
};
use calldash_db::PgBillingRepository;
use calldash_provider::HttpCallProvider;
use calldash_services::ReconciliationService;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// Get the dashboard view
///
/// GET /api/v1/dashboard
///
/// # Errors
///
/// Returns 401 without a live session, 502 when the provider fails or
/// returns a non-array payload, 500 on database failures. Individual debit
/// failures during reconciliation are logged and do not fail the request.
#[instrument(skip(req, query, db, provider, config))]
pub async fn get_dashboard(
    req: HttpRequest,
    query: Query<DashboardQuery>,
    db: Data<PgPool>,
    provider: Data<HttpCallProvider>,
    config: Data<AppConfig>,
) -> Result<Json<ApiResponse<DashboardResponse>>> {
    query.validate().map_err(|e| {
        warn!("Invalid dashboard query: {}", e);
        AppError::Validation(e.to_string())
    })?;

    let session = resolve_session(&req, db.get_ref()).await?;

    let billing_repo = Arc::new(PgBillingRepository::new(db.get_ref().clone()));
    let profile = billing_repo.find_by_user(session.user_id).await?;

    let limit = query.limit.unwrap_or(config.provider.fetch_limit);
    debug!("Fetching up to {} calls for user {}", limit, session.user_id);

    let calls = provider.list_calls(limit).await?;

    let billing = match profile {
        Some(ref p) => {
            let reconciler =
                ReconciliationService::new(billing_repo.clone(), config.billing.markup_multiplier);
            let summary = reconciler.reconcile(p, &calls).await?;

            info!(
                "Dashboard for user {}: {} calls, {} charged, {} cents debited",
                session.user_id,
                calls.len(),
                summary.charged_calls,
                summary.total_debited_cents
            );

            match summary.final_balance_cents {
                Some(balance) => BillingSummary::with_balance(p, balance),
                None => BillingSummary::from_profile(Some(p)),
            }
        }
        None => {
            debug!("No billing profile for user {}", session.user_id);
            BillingSummary::from_profile(None)
        }
    };

    let rows: Vec<CallRow> = calls.iter().map(CallRow::from).collect();

    Ok(Json(ApiResponse::success(DashboardResponse {
        billing,
        calls: rows,
    })))
}

/// Configure dashboard routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/dashboard", web::get().to(get_dashboard));
}
