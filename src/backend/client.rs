// HTTP client for the scam-scoring backend.
//
// POSTs the message to /api/analyze and normalizes the JSON payload into an
// AnalysisResult. The wire format tolerates missing fields — an absent score
// defaults to 0, absent label/reasons to empty, absent probabilities stay
// absent — so the client never fails just because the model left a field out.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::error::AnalysisError;
use crate::analysis::models::{AnalysisRequest, AnalysisResult, Probabilities};

use super::traits::MessageAnalyzer;

/// Default base URL for a locally running backend.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Relative path of the analyze endpoint.
const ANALYZE_PATH: &str = "/api/analyze";

/// HTTP client for the scoring service.
pub struct HttpAnalysisClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAnalysisClient {
    /// Create a client pointing at the given base URL.
    ///
    /// The timeout applies to the whole request; an expired timeout surfaces
    /// as a transport failure like any other network error.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("grift/0.1")
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check whether the backend is up — GET on the service root.
    pub async fn health(&self) -> Result<BackendHealth, AnalysisError> {
        let url = format!("{}/", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(format!("request to {url} failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AnalysisError::Transport(format!(
                "backend returned {status}"
            )));
        }

        response
            .json::<BackendHealth>()
            .await
            .map_err(|e| AnalysisError::Transport(format!("failed to parse health response: {e}")))
    }
}

#[async_trait]
impl MessageAnalyzer for HttpAnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        let url = format!("{}{}", self.base_url, ANALYZE_PATH);

        debug!(url = %url, chars = request.message().len(), "Submitting message for analysis");

        let body = AnalyzeRequest {
            message: request.message(),
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(format!("request to {url} failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Transport(format!(
                "backend returned {status}: {body}"
            )));
        }

        let payload: AnalyzePayload = response
            .json()
            .await
            .map_err(|e| AnalysisError::Transport(format!("failed to parse backend response: {e}")))?;

        Ok(normalize(payload))
    }
}

/// Normalize a wire payload into the domain result.
///
/// The safe-class probability is spelled `not_scam` by newer model builds and
/// `ham` by older ones; `not_scam` wins when both are present, and missing
/// both means 0.
pub fn normalize(payload: AnalyzePayload) -> AnalysisResult {
    let probabilities = payload.probabilities.map(|p| Probabilities {
        scam: p.scam,
        safe: p.not_scam.or(p.ham).unwrap_or(0.0),
    });

    AnalysisResult::new(payload.score, payload.label, payload.reasons, probabilities)
}

// --- Wire types for the backend API ---

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    message: &'a str,
}

/// Response payload from `/api/analyze`. Every field is optional on the
/// wire; the defaults here implement the tolerance contract.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzePayload {
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default)]
    pub probabilities: Option<ProbabilitiesPayload>,
}

/// Wire probabilities — `scam` plus the safe class under one of two keys.
#[derive(Debug, Default, Deserialize)]
pub struct ProbabilitiesPayload {
    #[serde(default)]
    pub scam: f64,
    #[serde(default)]
    pub not_scam: Option<f64>,
    #[serde(default)]
    pub ham: Option<f64>,
}

/// Backend health as reported by its index route.
#[derive(Debug, Deserialize)]
pub struct BackendHealth {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}
