//! HTTP client for the call-listing service
//!
//! Sends `{action: "listCalls", limit}` to the configured endpoint with a
//! bearer API key. The service must answer with a JSON array of call
//! records; any non-array payload is treated as a provider error.

use async_trait::async_trait;
use calldash_core::{
    config::ProviderConfig, models::CallRecord, traits::CallProvider, AppError, AppResult,
};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

/// Request body for the listCalls remote procedure
#[derive(Debug, Serialize)]
struct ListCallsRequest {
    action: &'static str,
    limit: u32,
}

/// HTTP implementation of CallProvider
pub struct HttpCallProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpCallProvider {
    /// Create a provider client from configuration
    pub fn new(config: &ProviderConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Provider(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Parse a listCalls response body
    ///
    /// The service is expected to return a bare JSON array; anything else
    /// (error object, string, null) surfaces as `ProviderResponse`.
    fn parse_call_list(payload: Value) -> AppResult<Vec<CallRecord>> {
        if !payload.is_array() {
            warn!("Provider returned a non-array payload");
            return Err(AppError::ProviderResponse(
                "expected an array of call records".to_string(),
            ));
        }

        serde_json::from_value(payload).map_err(|e| {
            AppError::ProviderResponse(format!("Failed to decode call records: {}", e))
        })
    }
}

#[async_trait]
impl CallProvider for HttpCallProvider {
    #[instrument(skip(self))]
    async fn list_calls(&self, limit: u32) -> AppResult<Vec<CallRecord>> {
        debug!("Requesting up to {} recent calls", limit);

        let request = ListCallsRequest {
            action: "listCalls",
            limit,
        };

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Call provider request failed: {}", e);
                AppError::Provider(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Call provider returned HTTP {}", status);
            return Err(AppError::Provider(format!(
                "Provider returned HTTP {}",
                status
            )));
        }

        let payload: Value = response.json().await.map_err(|e| {
            error!("Failed to read provider response body: {}", e);
            AppError::Provider(format!("Failed to read response body: {}", e))
        })?;

        let calls = Self::parse_call_list(payload)?;
        debug!("Provider returned {} calls", calls.len());

        Ok(calls)
    }
}
