//! API route definitions

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::handlers;
use crate::interpreter::PlanInterpreter;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub interpreter: Arc<PlanInterpreter>,
    pub service_name: Arc<str>,
}

impl AppState {
    pub fn new(interpreter: PlanInterpreter, service_name: impl Into<Arc<str>>) -> Self {
        Self {
            interpreter: Arc::new(interpreter),
            service_name: service_name.into(),
        }
    }
}

/// Build the complete API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/v1/tools", get(handlers::list_tools))
        .route("/api/v1/goals/parse", post(handlers::parse_goal))
        .route("/api/v1/plans", post(handlers::create_plan))
        .route("/api/v1/plans/validate", post(handlers::validate_plan))
        .route("/api/v1/plans/render-prompt", post(handlers::render_prompt))
        .route("/api/v1/plans/explain", post(handlers::explain_plan))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
