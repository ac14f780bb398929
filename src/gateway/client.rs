//! HTTP client for the portfolio's contact endpoint
//!
//! The wire shape is a JSON POST of the form fields plus a request id and
//! timestamp; the endpoint answers `{"success": bool, "message": string}`.

use super::traits::{SendOutcome, SubmissionGateway};
use crate::state::ContactFormData;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Default contact endpoint.
const DEFAULT_ENDPOINT: &str = "https://zhaoyangmou.dev/api/contact";

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Errors raised while delivering a submission.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("could not reach the contact endpoint: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("contact endpoint returned HTTP {0}")]
    Status(u16),
    #[error("contact endpoint returned an unreadable response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Body POSTed to the contact endpoint.
#[derive(Debug, Serialize)]
struct SubmissionRequest<'a> {
    request_id: Uuid,
    submitted_at: DateTime<Utc>,
    #[serde(flatten)]
    form: &'a ContactFormData,
}

/// Body the contact endpoint answers with.
#[derive(Debug, Deserialize)]
struct SubmissionResponse {
    success: bool,
    #[serde(default)]
    message: String,
}

/// Gateway that delivers submissions over HTTP.
pub struct HttpGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGateway {
    /// Create a gateway for the given endpoint.
    ///
    /// The `FOLIO_CONTACT_ENDPOINT` environment variable overrides both
    /// the argument and the built-in default.
    pub fn new(endpoint: Option<String>, timeout_secs: Option<u64>) -> Result<Self> {
        let endpoint = std::env::var("FOLIO_CONTACT_ENDPOINT")
            .ok()
            .or(endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(
                timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ))
            .build()
            .map_err(GatewayError::Transport)?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionGateway for HttpGateway {
    async fn send(&self, submission: &ContactFormData) -> Result<SendOutcome> {
        let request = SubmissionRequest {
            request_id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            form: submission,
        };

        tracing::debug!(request_id = %request.request_id, "posting contact submission");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(GatewayError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status.as_u16()).into());
        }

        let body: SubmissionResponse =
            response.json().await.map_err(GatewayError::Decode)?;

        tracing::debug!(success = body.success, "contact endpoint answered");

        Ok(SendOutcome {
            success: body.success,
            message: body.message,
        })
    }
}
