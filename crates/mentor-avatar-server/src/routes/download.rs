//! Download Route - Serve stored avatars

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use mentor_avatar::is_safe_filename;

use crate::models::DownloadQuery;
use crate::routes::error_response;
use crate::AppState;

const NOT_FOUND_MESSAGE: &str = "File not found";

/// Return a stored PNG, inline with `?inline=1`, otherwise as an attachment
pub async fn download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    Query(query): Query<DownloadQuery>,
) -> Response {
    if !is_safe_filename(&filename) {
        return (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response();
    }

    let png = match state.avatar_service.fetch(&filename).await {
        Ok(Some(png)) => png,
        Ok(None) => return (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response(),
        Err(e) => return error_response(e).into_response(),
    };

    if query.is_inline() {
        ([(header::CONTENT_TYPE, "image/png".to_string())], png).into_response()
    } else {
        (
            [
                (header::CONTENT_TYPE, "image/png".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", filename),
                ),
            ],
            png,
        )
            .into_response()
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/download/:filename", get(download))
}
