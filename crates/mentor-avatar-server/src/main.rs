use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;
mod templates;

use adapters::FsAvatarStore;
use anyhow::Context;
use application::AvatarService;
use config::ServerConfig;
use mentor_avatar::FontFace;
use templates::Templates;

/// Application service with the concrete store
pub type AppAvatarService = AvatarService<FsAvatarStore>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub avatar_service: Arc<AppAvatarService>,
    pub templates: Arc<Templates>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Mentor Avatar is running - behaviours become faces".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// All routes with shared state applied
pub fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::form::router())
        .merge(routes::generate::router())
        .merge(routes::download::router())
        .merge(routes::analyze::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🎨 Mentor Avatar initializing...");

    let config = ServerConfig::from_secrets(&secrets);

    let store = FsAvatarStore::open(&config.output_dir)
        .await
        .context("Failed to open avatar output directory")?;
    tracing::info!("📁 Avatars stored in {}", store.root().display());

    let font = FontFace::load(config.font_path.as_deref());
    if font.is_builtin() {
        tracing::warn!("⚠️  No TrueType font found - using built-in bitmap font");
    } else {
        tracing::info!("🔤 TrueType font loaded");
    }

    let templates = Templates::new().context("Failed to compile page templates")?;

    let state = AppState {
        avatar_service: Arc::new(AvatarService::new(Arc::new(store), font)),
        templates: Arc::new(templates),
    };

    let router = build_router(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Mentor Avatar ready");

    Ok(router.into())
}
