//! Dashboard DTOs
//!
//! Display-ready call rows with derived values (status color, duration
//! string, sentiment color, normalized disconnect reason) plus the billing
//! summary, mirroring exactly what the dashboard table renders.

use super::billing::BillingSummary;
use calldash_core::display::{
    format_duration_ms, humanize_disconnect_reason, sentiment_color, status_color,
};
use calldash_core::models::CallRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Dashboard query parameters
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct DashboardQuery {
    /// Override the number of recent calls to fetch
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u32>,
}

/// Full dashboard view
#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    /// Billing summary (or setup prompt)
    pub billing: BillingSummary,

    /// Display-ready call rows, most recent first as returned by the provider
    pub calls: Vec<CallRow>,
}

/// One row of the calls table
#[derive(Debug, Clone, Serialize)]
pub struct CallRow {
    /// Provider call id
    pub id: String,

    /// Per-call detail route
    pub detail_path: String,

    /// Raw status value
    pub status: String,

    /// Badge color class for the status
    pub status_color: String,

    /// Call type (voice or video)
    pub call_type: String,

    /// Call direction
    pub direction: String,

    /// Caller number
    pub from_number: Option<String>,

    /// Called number
    pub to_number: Option<String>,

    /// Call start time
    pub start_time: Option<DateTime<Utc>>,

    /// Duration formatted as "Xh Ym Zs"
    pub duration_display: String,

    /// Combined cost in cents, if rated
    pub cost_cents: Option<String>,

    /// Detected sentiment
    pub sentiment: Option<String>,

    /// Text color class for the sentiment
    pub sentiment_color: Option<String>,

    /// Disconnect reason, humanized for display
    pub disconnect_reason: Option<String>,
}

impl From<&CallRecord> for CallRow {
    fn from(call: &CallRecord) -> Self {
        let sentiment = call.sentiment().map(str::to_string);
        Self {
            id: call.call_id.clone(),
            detail_path: format!("/calls/{}", call.call_id),
            status: call.call_status.clone(),
            status_color: status_color(&call.call_status).to_string(),
            call_type: call.call_type.clone(),
            direction: call.direction.clone(),
            from_number: call.from_number.clone(),
            to_number: call.to_number.clone(),
            start_time: call.start_time(),
            duration_display: format_duration_ms(call.duration_ms.unwrap_or(0)),
            cost_cents: call.combined_cost().map(|c| c.to_string()),
            sentiment_color: sentiment.as_deref().map(|s| sentiment_color(s).to_string()),
            sentiment,
            disconnect_reason: call
                .disconnection_reason
                .as_deref()
                .map(humanize_disconnect_reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calldash_core::models::{CallAnalysis, CallCost};
    use rust_decimal_macros::dec;

    #[test]
    fn test_call_row_derivation() {
        let call = CallRecord {
            call_id: "call_abc".to_string(),
            call_status: "ended".to_string(),
            call_type: "voice".to_string(),
            direction: "inbound".to_string(),
            from_number: Some("+15551234567".to_string()),
            to_number: Some("+15557654321".to_string()),
            duration_ms: Some(61_000),
            call_cost: Some(CallCost {
                combined_cost: dec!(200),
            }),
            call_analysis: Some(CallAnalysis {
                user_sentiment: Some("Positive".to_string()),
                call_successful: Some(true),
            }),
            disconnection_reason: Some("USER_HANGUP".to_string()),
            ..Default::default()
        };

        let row = CallRow::from(&call);
        assert_eq!(row.detail_path, "/calls/call_abc");
        assert_eq!(row.status_color, "bg-green-100 text-green-800");
        assert_eq!(row.duration_display, "1m 1s");
        assert_eq!(row.cost_cents.as_deref(), Some("200"));
        assert_eq!(row.sentiment.as_deref(), Some("Positive"));
        assert_eq!(row.sentiment_color.as_deref(), Some("text-green-600"));
        assert_eq!(row.disconnect_reason.as_deref(), Some("user hangup"));
    }

    #[test]
    fn test_call_row_sparse_record() {
        let call = CallRecord {
            call_id: "call_min".to_string(),
            call_status: "error".to_string(),
            ..Default::default()
        };

        let row = CallRow::from(&call);
        assert_eq!(row.duration_display, "0s");
        assert_eq!(row.status_color, "bg-red-100 text-red-800");
        assert!(row.cost_cents.is_none());
        assert!(row.sentiment.is_none());
        assert!(row.disconnect_reason.is_none());
    }

    #[test]
    fn test_dashboard_query_validation() {
        let query = DashboardQuery { limit: Some(50) };
        assert!(query.validate().is_ok());

        let query = DashboardQuery { limit: Some(0) };
        assert!(query.validate().is_err());

        let query = DashboardQuery { limit: None };
        assert!(query.validate().is_ok());
    }
}
