//! Batch coordinator
//!
//! Fans a batch of variants out to the upstream client concurrently, joins
//! all lookups, and returns the successful results in input order.

use crate::config::settings::UpstreamConfig;
use crate::models::variant::{VariantRequest, VariantResult};
use crate::services::client::UpstreamClient;
use crate::utils::error::AppResult;
use futures::future;
use std::time::Instant;
use tracing::info;

/// Coordinates one classification batch.
#[derive(Debug, Clone)]
pub struct BatchCoordinator {
    upstream: UpstreamConfig,
}

impl BatchCoordinator {
    pub fn new(upstream: UpstreamConfig) -> Self {
        Self { upstream }
    }

    /// Classify a batch of variants.
    ///
    /// Launches one concurrent lookup per variant with no concurrency cap,
    /// then waits for all of them; a lookup failing does not cancel its
    /// siblings. The output keeps the input order and contains only the
    /// variants whose lookup succeeded.
    pub async fn classify_batch(
        &self,
        variants: &[VariantRequest],
    ) -> AppResult<Vec<VariantResult>> {
        let start = Instant::now();

        // Fresh connection pool per batch, shared by every lookup and
        // dropped after the join.
        let client = UpstreamClient::new(&self.upstream)?;

        let lookups = variants.iter().map(|variant| client.classify(variant));
        let outcomes = future::join_all(lookups).await;

        let results: Vec<VariantResult> = outcomes.into_iter().flatten().collect();

        info!(
            "Processed {} variants in {:.3} seconds",
            variants.len(),
            start.elapsed().as_secs_f64()
        );

        Ok(results)
    }
}
