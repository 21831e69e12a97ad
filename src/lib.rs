pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod resolver;
pub mod types;
pub mod validation;

#[cfg(test)]
pub mod testing;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::database::RecordStore;

/// Shared state handed to every handler
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn RecordStore>) -> Self {
        Self { config, store }
    }
}

/// Build the router with all routes and middleware
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // Public
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        // Record operations
        .route("/graphql", post(handlers::graphql_post))
        .layer(from_fn_with_state(state.clone(), middleware::session_middleware))
        // Global middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
