//! Call record model
//!
//! Represents one phone/video interaction as reported by the external
//! call-listing provider. Records are read-only from this service's
//! perspective; unknown provider fields are ignored on deserialize.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A call record returned by the call-listing provider
///
/// Semi-structured by design: most fields are optional because the provider
/// omits them for calls that never connected or are still in progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallRecord {
    /// Provider-assigned call identifier
    pub call_id: String,

    /// Call status (registered, ongoing, ended, error)
    #[serde(default)]
    pub call_status: String,

    /// Call type (voice or video)
    #[serde(default)]
    pub call_type: String,

    /// Call direction (inbound or outbound)
    #[serde(default)]
    pub direction: String,

    /// Caller number
    pub from_number: Option<String>,

    /// Called number
    pub to_number: Option<String>,

    /// Call start as milliseconds since the Unix epoch
    pub start_timestamp: Option<i64>,

    /// Call duration in milliseconds
    pub duration_ms: Option<i64>,

    /// Cost breakdown (absent while the provider is still rating the call)
    pub call_cost: Option<CallCost>,

    /// Post-call analysis (sentiment, success)
    pub call_analysis: Option<CallAnalysis>,

    /// Provider disconnect reason token (e.g. "USER_HANGUP")
    pub disconnection_reason: Option<String>,
}

/// Cost figures attached to a rated call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallCost {
    /// Total cost of the call in cents, as reported by the provider
    pub combined_cost: Decimal,
}

/// Post-call analysis attached by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallAnalysis {
    /// Detected caller sentiment (positive, neutral, negative)
    pub user_sentiment: Option<String>,

    /// Whether the provider judged the call successful
    pub call_successful: Option<bool>,
}

impl CallRecord {
    /// Check if the provider attached a cost to this call
    #[inline]
    pub fn has_cost(&self) -> bool {
        self.call_cost.is_some()
    }

    /// Combined cost in cents, if rated
    pub fn combined_cost(&self) -> Option<Decimal> {
        self.call_cost.as_ref().map(|c| c.combined_cost)
    }

    /// Check if the call has finished
    #[inline]
    pub fn is_ended(&self) -> bool {
        self.call_status.eq_ignore_ascii_case("ended")
    }

    /// Call start as a UTC timestamp, if the provider reported one
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_timestamp
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    }

    /// Detected sentiment, if analysis is present
    pub fn sentiment(&self) -> Option<&str> {
        self.call_analysis
            .as_ref()
            .and_then(|a| a.user_sentiment.as_deref())
    }
}

impl Default for CallRecord {
    fn default() -> Self {
        Self {
            call_id: String::new(),
            call_status: "ended".to_string(),
            call_type: "voice".to_string(),
            direction: "outbound".to_string(),
            from_number: None,
            to_number: None,
            start_timestamp: None,
            duration_ms: None,
            call_cost: None,
            call_analysis: None,
            disconnection_reason: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_call_record_cost() {
        let mut call = CallRecord::default();
        assert!(!call.has_cost());
        assert_eq!(call.combined_cost(), None);

        call.call_cost = Some(CallCost {
            combined_cost: dec!(200),
        });
        assert!(call.has_cost());
        assert_eq!(call.combined_cost(), Some(dec!(200)));
    }

    #[test]
    fn test_call_record_start_time() {
        let call = CallRecord {
            start_timestamp: Some(1_700_000_000_000),
            ..Default::default()
        };
        let start = call.start_time().unwrap();
        assert_eq!(start.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{
            "call_id": "call_abc",
            "call_status": "ended",
            "call_type": "voice",
            "direction": "inbound",
            "duration_ms": 61000,
            "call_cost": {"combined_cost": 200, "product_costs": []},
            "call_analysis": {"user_sentiment": "positive", "call_successful": true},
            "disconnection_reason": "USER_HANGUP",
            "agent_id": "agent_123"
        }"#;

        let call: CallRecord = serde_json::from_str(json).unwrap();
        assert_eq!(call.call_id, "call_abc");
        assert_eq!(call.duration_ms, Some(61_000));
        assert_eq!(call.sentiment(), Some("positive"));
        assert_eq!(call.disconnection_reason.as_deref(), Some("USER_HANGUP"));
    }
}
