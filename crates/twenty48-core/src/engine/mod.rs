//! Engine module: the 4x4 grid, the slide/merge ops and the owned game state.
//!
//! - `Grid` is the plain 4x4 matrix of tile values with a few helpers.
//! - `ops` holds the pure functions: one left-slide routine plus the
//!   rotations/reflections that map every direction onto it.
//! - `GridEngine` owns grid, score, game-over flag and RNG.

mod game;
mod ops;
pub mod state;

pub use game::{GridEngine, MoveOutcome};
pub use ops::{
    Shift, denormalize, has_adjacent_pair, is_game_over, normalize, shift, slide_row_left,
    spawn_tile,
};
pub use state::{Direction, Grid, SIZE, Score};
