//! Form Route - The input page

use axum::{extract::State, http::StatusCode, response::Html, routing::get, Router};

use crate::AppState;

/// Serve the two-block input form
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, (StatusCode, String)> {
    state
        .templates
        .index()
        .map(Html)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
