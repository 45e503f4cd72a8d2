//! Web server for the project showcase page
//!
//! Serves the page with the two loader buttons, the endpoints they post to,
//! a JSON view of the cached projects and, optionally, the image/link files
//! the records point at.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json, Redirect},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use showcase_common::ProjectRecord;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::loader::ProjectLoader;
use crate::page::render_page;

/// Shared application state
#[derive(Clone)]
struct AppState {
    loader: Arc<ProjectLoader>,
}

/// API response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// GET / - The page with the current container contents
async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let page = state
        .loader
        .container_html()
        .and_then(|container| render_page(&container));

    match page {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            log::error!("Failed to render page: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /load/local
async fn load_local_handler(State(state): State<AppState>) -> Redirect {
    let outcome = state.loader.load_local();
    log::debug!("Local load finished: {:?}", outcome);
    Redirect::to("/")
}

/// POST /load/remote
async fn load_remote_handler(State(state): State<AppState>) -> Redirect {
    let outcome = state.loader.load_remote().await;
    log::debug!("Remote load finished: {:?}", outcome);
    Redirect::to("/")
}

/// GET /api/projects - The cached collection (empty if nothing cached)
async fn projects_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ProjectRecord>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.loader.repository().load() {
        Ok(projects) => Ok(Json(ApiResponse {
            success: true,
            data: Some(projects.unwrap_or_default()),
            error: None,
        })),
        Err(e) => {
            log::error!("Failed to read project cache: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse {
                    success: false,
                    data: None,
                    error: Some(e.to_string()),
                }),
            ))
        }
    }
}

/// Build the web server router.
///
/// When `assets_dir` is given, any path not matched by a route is served from
/// it, so relative `imageUrl`/`link` values resolve against the page root.
pub fn create_router(loader: Arc<ProjectLoader>, assets_dir: Option<&Path>) -> Router {
    let state = AppState { loader };

    let router = Router::new()
        .route("/", get(index_handler))
        .route("/load/local", post(load_local_handler))
        .route("/load/remote", post(load_remote_handler))
        .route("/api/projects", get(projects_handler));

    let router = match assets_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router.with_state(state)
}

/// Start the web server (async)
///
/// Binds to 0.0.0.0 (all interfaces).
pub async fn serve(
    loader: Arc<ProjectLoader>,
    port: u16,
    assets_dir: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(loader, assets_dir);
    let addr = format!("0.0.0.0:{}", port);

    log::info!("Showcase listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
