//! GET / and GET /test — static liveness acknowledgements.

use axum::Json;
use serde::Serialize;
use tracing::{info, instrument};

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[instrument]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "NLP Service is running",
    })
}

#[instrument]
pub async fn test() -> Json<MessageResponse> {
    info!("Test endpoint called");
    Json(MessageResponse {
        message: "NLP Service is working!",
    })
}
