//! Variant classification handler
//!
//! Accepts a batch of variants, hands it to the coordinator and returns the
//! reshaped results. Malformed bodies are rejected by the `Json` extractor
//! before this handler runs; per-variant upstream failures never surface
//! here, they are simply missing from the response array.

use crate::handlers::AppState;
use crate::models::variant::{VariantRequest, VariantResult};
use crate::utils::error::AppResult;
use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::debug;

/// Handle a variant classification batch
///
/// POST /classify_variants/
pub async fn classify_variants(
    State(state): State<Arc<AppState>>,
    Json(variants): Json<Vec<VariantRequest>>,
) -> AppResult<Json<Vec<VariantResult>>> {
    debug!("Received classification batch of {} variants", variants.len());

    let results = state.coordinator.classify_batch(&variants).await?;

    Ok(Json(results))
}
