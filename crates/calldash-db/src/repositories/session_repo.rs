//! Session repository implementation
//!
//! Resolves opaque session tokens written by the external session provider.
//! Expired rows are filtered in SQL so callers only ever see live sessions.

use async_trait::async_trait;
use calldash_core::{models::Session, traits::SessionRepository, AppError, AppResult};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, error, instrument};
use uuid::Uuid;

/// PostgreSQL implementation of SessionRepository
pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    /// Create a new session repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    #[instrument(skip(self, token))]
    async fn find_by_token(&self, token: &str) -> AppResult<Option<Session>> {
        debug!("Resolving session token");

        let result = sqlx::query_as::<sqlx::Postgres, SessionRow>(
            r#"
            SELECT token, user_id, expires_at, created_at
            FROM sessions
            WHERE token = $1
              AND (expires_at IS NULL OR expires_at > NOW())
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Database error resolving session: {}", e);
            AppError::Database(format!("Failed to resolve session: {}", e))
        })?;

        Ok(result.map(Into::into))
    }
}

/// Helper struct for mapping database rows to the domain model
#[derive(Debug, sqlx::FromRow)]
struct SessionRow {
    token: String,
    user_id: Uuid,
    expires_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<SessionRow> for Session {
    fn from(row: SessionRow) -> Self {
        Self {
            token: row.token,
            user_id: row.user_id,
            expires_at: row.expires_at,
            created_at: row.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_row_conversion() {
        let now = Utc::now();
        let row = SessionRow {
            token: "tok_abc".to_string(),
            user_id: Uuid::new_v4(),
            expires_at: None,
            created_at: now,
        };

        let session: Session = row.into();
        assert_eq!(session.token, "tok_abc");
        assert!(!session.is_expired());
    }
}
