//! Generate Route - Render avatars from the submitted form

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::post,
    Form, Router,
};

use crate::models::GenerateForm;
use crate::routes::error_response;
use crate::AppState;

/// Render one or two avatars and return the preview page
pub async fn generate(
    State(state): State<AppState>,
    Form(form): Form<GenerateForm>,
) -> Result<Html<String>, (StatusCode, String)> {
    let requests = form.into_requests();

    let mut avatars = Vec::with_capacity(requests.len());
    for request in requests {
        let avatar = state
            .avatar_service
            .generate(request)
            .await
            .map_err(error_response)?;
        avatars.push(avatar);
    }

    state
        .templates
        .result(&avatars)
        .map(Html)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/generate", post(generate))
}
