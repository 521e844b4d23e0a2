//! Session resolution for handlers
//!
//! Authentication itself lives in an external session provider; handlers
//! only translate a bearer token into a user identity, or fail with 401.

use actix_web::HttpRequest;
use calldash_core::{models::Session, traits::SessionRepository, AppError, AppResult};
use calldash_db::PgSessionRepository;
use sqlx::PgPool;
use tracing::debug;

/// Extract the bearer token from the Authorization header
pub fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Reject a session whose expiry has passed
///
/// The repository already filters expired rows in SQL; this re-checks
/// against the application clock so a stale row can never slip through.
fn ensure_live(session: Session) -> AppResult<Session> {
    if session.is_expired() {
        return Err(AppError::SessionExpired);
    }
    Ok(session)
}

/// Resolve the current session for a request
///
/// # Errors
///
/// `MissingSession` when no bearer token is present, `SessionExpired` when
/// the token does not resolve to a live session.
pub async fn resolve_session(req: &HttpRequest, pool: &PgPool) -> AppResult<Session> {
    let token = bearer_token(req).ok_or(AppError::MissingSession)?;

    let repo = PgSessionRepository::new(pool.clone());
    let session = repo
        .find_by_token(token)
        .await?
        .ok_or(AppError::SessionExpired)
        .and_then(ensure_live)?;

    debug!("Resolved session for user {}", session.user_id);
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_bearer_token_extraction() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer tok_abc"))
            .to_http_request();
        assert_eq!(bearer_token(&req), Some("tok_abc"));
    }

    #[test]
    fn test_bearer_token_missing_header() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(bearer_token(&req), None);
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
            .to_http_request();
        assert_eq!(bearer_token(&req), None);
    }

    #[test]
    fn test_bearer_token_empty() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer "))
            .to_http_request();
        assert_eq!(bearer_token(&req), None);
    }

    #[test]
    fn test_ensure_live_rejects_expired_session() {
        use chrono::{Duration, Utc};
        use uuid::Uuid;

        let live = Session {
            token: "tok".to_string(),
            user_id: Uuid::new_v4(),
            expires_at: Some(Utc::now() + Duration::hours(1)),
            created_at: Utc::now(),
        };
        assert!(ensure_live(live).is_ok());

        let expired = Session {
            token: "tok".to_string(),
            user_id: Uuid::new_v4(),
            expires_at: Some(Utc::now() - Duration::seconds(1)),
            created_at: Utc::now(),
        };
        let err = ensure_live(expired).unwrap_err();
        assert_eq!(err.error_code(), "session_expired");
    }
}
