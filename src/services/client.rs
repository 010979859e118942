//! Upstream client adapter
//!
//! Encapsulates HTTP communication with the classification API: builds the
//! upstream payload for one variant, performs the call, and reshapes a
//! successful response. Failures never propagate; a failed lookup is
//! reported as "no result" and logged at WARN with its cause.

use crate::config::settings::UpstreamConfig;
use crate::models::franklin::{ClassifyRequest, ClassifyResponse};
use crate::models::variant::{VariantRequest, VariantResult};
use crate::utils::error::{AppResult, ClassifyError};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Classification API client.
///
/// Holds a `reqwest` connection pool. The coordinator builds one per batch
/// and drops it after the join, so pooled connections do not outlive the
/// batch.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    classify_url: String,
}

impl UpstreamClient {
    /// Create a new client instance with the configured per-call timeout.
    pub fn new(config: &UpstreamConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(concat!("variantproxy/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            classify_url: config.classify_url.clone(),
        })
    }

    /// Look up the classification for one variant.
    ///
    /// Returns `None` on any failure (transport, non-2xx status, or decode),
    /// after logging the failing input and cause. No retry is attempted.
    pub async fn classify(&self, variant: &VariantRequest) -> Option<VariantResult> {
        match self.classify_inner(variant).await {
            Ok(result) => Some(result),
            Err(e) => {
                warn!("Failed to fetch data for variant {}: {}", variant, e);
                None
            }
        }
    }

    async fn classify_inner(
        &self,
        variant: &VariantRequest,
    ) -> Result<VariantResult, ClassifyError> {
        let payload = ClassifyRequest::from_variant(variant);

        debug!("Sending classification request for {}", variant);

        let response = self
            .client
            .post(&self.classify_url)
            .json(&payload)
            .send()
            .await
            .map_err(ClassifyError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifyError::Status(status));
        }

        let body: ClassifyResponse = response.json().await.map_err(ClassifyError::Decode)?;

        Ok(body.into_result(variant))
    }
}
