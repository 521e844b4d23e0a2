//! Billing summary handler
//!
//! The frontend loads the billing panel independently of the call table;
//! this endpoint serves that panel: current balance and whether the
//! billing-setup prompt should be shown.

use crate::dto::{ApiResponse, BillingSummary};
use crate::handlers::session::resolve_session;
use actix_web::{
    web::{self, Data, Json},
    HttpRequest, Result,
};
use calldash_core::traits::BillingRepository;
use calldash_db::PgBillingRepository;
use sqlx::PgPool;
use tracing::{debug, instrument};

/// Get the billing summary for the current user
///
/// GET /api/v1/billing
///
/// # Errors
///
/// Returns 401 when no live session is presented; database failures map to
/// 500. A missing billing profile is not an error, it renders as the setup
/// prompt.
#[instrument(skip(req, db))]
pub async fn get_billing(
    req: HttpRequest,
    db: Data<PgPool>,
) -> Result<Json<ApiResponse<BillingSummary>>> {
    let session = resolve_session(&req, db.get_ref()).await?;

    let repo = PgBillingRepository::new(db.get_ref().clone());
    let profile = repo.find_by_user(session.user_id).await?;

    debug!(
        "Billing summary for user {}: profile present = {}",
        session.user_id,
        profile.is_some()
    );

    Ok(Json(ApiResponse::success(BillingSummary::from_profile(
        profile.as_ref(),
    ))))
}

/// Configure billing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/billing", web::get().to(get_billing));
}
