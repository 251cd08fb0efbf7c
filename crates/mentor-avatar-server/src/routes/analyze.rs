//! Analyze Route - Trait derivation without rendering

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use crate::models::{AnalyzeRequest, AnalyzeResponse};
use crate::routes::error_response;
use crate::AppState;

/// Derive traits from behaviours
#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Derived traits", body = AnalyzeResponse),
        (status = 400, description = "Unknown role or profile")
    ),
    tag = "Analyze"
)]
pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, String)> {
    let (role, profile) = payload.role_and_profile().map_err(error_response)?;
    let traits = state
        .avatar_service
        .analyze(&payload.behaviours, role, profile);

    Ok(Json(traits.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/analyze", post(analyze))
}
