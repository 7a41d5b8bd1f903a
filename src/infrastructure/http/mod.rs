//! HTTP routes - The page and its JSON API

mod media_routes;
mod page;
mod session_routes;

use axum::{
    http::StatusCode,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::domain::value_objects::SessionId;
use crate::infrastructure::session::SessionHandle;
use crate::infrastructure::state::AppState;

/// Create all routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(page::index))
        // Session routes
        .route("/api/sessions", post(session_routes::create_session))
        .route("/api/sessions/{id}", get(session_routes::get_session))
        .route(
            "/api/sessions/{id}/symphony",
            post(session_routes::run_symphony),
        )
        .route(
            "/api/sessions/{id}/challenges",
            post(session_routes::regenerate_challenges),
        )
        .route(
            "/api/sessions/{id}/challenges/{index}",
            put(session_routes::toggle_challenge),
        )
        .route(
            "/api/sessions/{id}/species",
            post(session_routes::reveal_species),
        )
        .route("/api/sessions/{id}/ngos", post(session_routes::refresh_ngos))
        // Media routes
        .route(
            "/api/sessions/{id}/media/music",
            get(media_routes::get_music),
        )
        .route(
            "/api/sessions/{id}/media/image",
            get(media_routes::get_image),
        )
        .route(
            "/api/sessions/{id}/media/species/{index}",
            get(media_routes::get_species_image),
        )
}

type RouteError = (StatusCode, String);

fn parse_session_id(id: &str) -> Result<SessionId, RouteError> {
    id.parse()
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid session ID".to_string()))
}

/// Look up the lockable handle of a session
async fn session_handle(state: &AppState, id: &str) -> Result<SessionHandle, RouteError> {
    let id = parse_session_id(id)?;
    state
        .sessions
        .read()
        .await
        .get_session(id)
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Session not found".to_string()))
}
