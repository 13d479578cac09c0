//! HTTP routes for the search proxy

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::error;

use crate::folders::FolderService;
use crate::middleware;
use crate::search::{SearchRequest, SearchService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchService>,
    pub folders: Arc<FolderService>,
}

/// Build the application router with all routes and middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/search", post(search_handler))
        .route("/api/folders", get(folders_handler))
        .with_state(state)
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer())
}

/// Forward a search request to the indexing service and pass its response
/// body through. A malformed payload is rejected by the `Json` extractor
/// with a 400 before this handler runs.
async fn search_handler(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Response {
    match state.search.search(&request).await {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(err) => {
            error!(error = %err, "Search request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}

/// List the corpus mailbox/folder structure.
async fn folders_handler(State(state): State<AppState>) -> Json<BTreeMap<String, Vec<String>>> {
    Json(state.folders.folders())
}
