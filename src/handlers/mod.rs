//! HTTP handlers module
//!
//! Contains all HTTP endpoint handling logic

pub mod classify;
pub mod health;

use crate::config::Settings;
use crate::services::BatchCoordinator;
use anyhow::Result;
use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
    pub coordinator: BatchCoordinator,
}

/// Create application router
pub async fn create_router(settings: Settings) -> Result<Router> {
    let coordinator = BatchCoordinator::new(settings.upstream.clone());

    let app_state = Arc::new(AppState {
        settings,
        coordinator,
    });

    // Create middleware stack
    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Create routes
    let router = Router::new()
        .route("/classify_variants/", post(classify::classify_variants))
        .route("/health", get(health::health_check))
        .with_state(app_state)
        .layer(middleware_stack);

    Ok(router)
}
