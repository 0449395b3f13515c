use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use parking_lot::Mutex;
use tower_http::services::ServeDir;
use twenty48_host::HostSession;

use crate::routes;

/// Shared server state. The mutex serializes every game call, so a move is
/// never applied while another is in flight.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<HostSession>>,
    pub swipe_threshold: f64,
}

impl AppState {
    pub fn new(session: HostSession, swipe_threshold: f64) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            swipe_threshold,
        }
    }
}

/// Build the router. Static files from `ui_path`, if any, are served for
/// every path the API does not claim.
pub fn router(state: AppState, ui_path: Option<&Path>) -> Router {
    let api = Router::new()
        .route("/health", get(routes::get_health))
        .route("/game", get(routes::get_game))
        .route("/game/new", post(routes::new_game))
        .route("/game/move", post(routes::post_move))
        .route("/game/key", post(routes::post_key))
        .route("/game/swipe", post(routes::post_swipe))
        .with_state(state);
    match ui_path {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api,
    }
}
