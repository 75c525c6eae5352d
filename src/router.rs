//! Router construction for the skill service.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers;
use crate::matcher::SkillMatcher;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub matcher: Arc<SkillMatcher>,
}

impl AppState {
    pub fn new(matcher: SkillMatcher) -> Self {
        Self {
            matcher: Arc::new(matcher),
        }
    }
}

/// Build the full axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Liveness
        .route("/", get(handlers::health::root))
        .route("/test", get(handlers::health::test))
        // Skill detection
        .route("/predict-skills", post(handlers::skills::predict_skills))
        .route(
            "/predict-skills/explain",
            post(handlers::skills::explain_skills),
        )
        .route("/skills", get(handlers::skills::list_skills))
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}
