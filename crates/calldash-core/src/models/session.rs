//! Session model
//!
//! Authentication is delegated to an external session provider; this service
//! only resolves an opaque token to a user identity, or none.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque session token
    pub token: String,

    /// Authenticated user
    pub user_id: Uuid,

    /// Expiry timestamp (None = non-expiring)
    pub expires_at: Option<DateTime<Utc>>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Check whether the session has expired
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| at <= Utc::now())
    }
}
