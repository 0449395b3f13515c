use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::debug;
use twenty48_core::engine::{Direction, MoveOutcome, SIZE};
use twenty48_core::input::Swipe;
use twenty48_core::palette::tile_color;
use twenty48_host::HostSession;

use crate::app::AppState;

#[derive(Serialize)]
pub(crate) struct HealthResponse {
    status: String,
}

#[derive(Serialize)]
pub(crate) struct GameResponse {
    grid: [[u64; SIZE]; SIZE],
    colors: [[&'static str; SIZE]; SIZE],
    score: u64,
    best_score: u64,
    game_over: bool,
    highest_tile: u64,
    moved: bool,
    gained: u64,
}

#[derive(Deserialize)]
pub struct MoveRequest {
    direction: Direction,
}

#[derive(Deserialize)]
pub struct KeyRequest {
    key: String,
}

fn game_response(session: &HostSession, outcome: MoveOutcome) -> Json<GameResponse> {
    let snap = session.snapshot();
    let grid = snap.grid.rows();
    Json(GameResponse {
        grid,
        colors: grid.map(|row| row.map(tile_color)),
        score: snap.score,
        best_score: snap.best_score,
        game_over: snap.game_over,
        highest_tile: snap.highest_tile,
        moved: outcome.moved,
        gained: outcome.gained,
    })
}

/// Apply `direction` if there is one; an unrecognized input leaves the game untouched.
fn apply(state: &AppState, direction: Option<Direction>) -> Json<GameResponse> {
    let mut session = state.session.lock();
    let outcome = match direction {
        Some(dir) => {
            let outcome = session.apply(dir);
            debug!(%dir, moved = outcome.moved, gained = outcome.gained, "move");
            outcome
        }
        None => MoveOutcome::default(),
    };
    game_response(&session, outcome)
}

pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn get_game(State(state): State<AppState>) -> Json<GameResponse> {
    let session = state.session.lock();
    game_response(&session, MoveOutcome::default())
}

pub async fn new_game(State(state): State<AppState>) -> Json<GameResponse> {
    let mut session = state.session.lock();
    session.new_game();
    game_response(&session, MoveOutcome::default())
}

pub async fn post_move(
    State(state): State<AppState>,
    Json(req): Json<MoveRequest>,
) -> Json<GameResponse> {
    apply(&state, Some(req.direction))
}

pub async fn post_key(
    State(state): State<AppState>,
    Json(req): Json<KeyRequest>,
) -> Json<GameResponse> {
    let direction = Direction::from_key(&req.key);
    if direction.is_none() {
        debug!(key = %req.key, "ignoring key");
    }
    apply(&state, direction)
}

pub async fn post_swipe(
    State(state): State<AppState>,
    Json(swipe): Json<Swipe>,
) -> Json<GameResponse> {
    let direction = swipe.direction(state.swipe_threshold);
    apply(&state, direction)
}
