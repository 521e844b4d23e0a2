//! Integration tests for dashboard API DTOs
//!
//! These tests exercise the display derivation and billing summary logic
//! with representative provider data. For full integration testing, set
//! DATABASE_URL environment variable.

#[cfg(test)]
mod tests {
    use calldash_api::dto::{BillingSummary, CallRow, DashboardResponse};
    use calldash_core::display::format_duration_ms;
    use calldash_core::models::{BillingProfile, CallAnalysis, CallCost, CallRecord};
    use rust_decimal_macros::dec;

    fn sample_call() -> CallRecord {
        CallRecord {
            call_id: "call_123".to_string(),
            call_status: "ended".to_string(),
            call_type: "video".to_string(),
            direction: "outbound".to_string(),
            from_number: Some("+15550001111".to_string()),
            to_number: Some("+15550002222".to_string()),
            start_timestamp: Some(1_700_000_000_000),
            duration_ms: Some(3_661_000),
            call_cost: Some(CallCost {
                combined_cost: dec!(200),
            }),
            call_analysis: Some(CallAnalysis {
                user_sentiment: Some("negative".to_string()),
                call_successful: Some(false),
            }),
            disconnection_reason: Some("DIAL_NO_ANSWER".to_string()),
        }
    }

    #[test]
    fn test_call_row_display_values() {
        let row = CallRow::from(&sample_call());

        assert_eq!(row.id, "call_123");
        assert_eq!(row.detail_path, "/calls/call_123");
        assert_eq!(row.duration_display, "1h 1m 1s");
        assert_eq!(row.sentiment_color.as_deref(), Some("text-red-600"));
        assert_eq!(row.disconnect_reason.as_deref(), Some("dial no answer"));
        assert!(row.start_time.is_some());
    }

    #[test]
    fn test_duration_properties() {
        assert_eq!(format_duration_ms(0), "0s");
        assert_eq!(format_duration_ms(61_000), "1m 1s");
        assert_eq!(format_duration_ms(3_661_000), "1h 1m 1s");
    }

    #[test]
    fn test_billing_summary_setup_panel_gate() {
        // No profile at all -> setup panel
        let summary = BillingSummary::from_profile(None);
        assert!(summary.needs_setup);

        // Profile without subscription id -> setup panel
        let profile = BillingProfile::default();
        let summary = BillingSummary::from_profile(Some(&profile));
        assert!(summary.needs_setup);
        assert!(!summary.has_subscription);

        // Subscription linked -> balance display
        let profile = BillingProfile {
            credit_balance_cents: 400,
            stripe_subscription_id: Some("sub_123".to_string()),
            ..Default::default()
        };
        let summary = BillingSummary::from_profile(Some(&profile));
        assert!(!summary.needs_setup);
        assert_eq!(summary.credit_balance_display, "$4.00");
    }

    #[test]
    fn test_dashboard_response_serialization() {
        let profile = BillingProfile {
            credit_balance_cents: 400,
            stripe_subscription_id: Some("sub_123".to_string()),
            ..Default::default()
        };

        let response = DashboardResponse {
            billing: BillingSummary::from_profile(Some(&profile)),
            calls: vec![CallRow::from(&sample_call())],
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"credit_balance_cents\":400"));
        assert!(json.contains("\"detail_path\":\"/calls/call_123\""));
        assert!(json.contains("\"duration_display\":\"1h 1m 1s\""));
    }

    #[test]
    fn test_call_rows_preserve_provider_order() {
        let mut first = sample_call();
        first.call_id = "call_a".to_string();
        let mut second = sample_call();
        second.call_id = "call_b".to_string();

        let rows: Vec<CallRow> = [&first, &second].into_iter().map(CallRow::from).collect();
        assert_eq!(rows[0].id, "call_a");
        assert_eq!(rows[1].id, "call_b");
    }
}
