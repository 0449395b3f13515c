//! A playable game: engine plus best-score bookkeeping, as held by a front-end.

use log::info;
use serde::Serialize;

use crate::best_score::{BestScore, BestScoreStore};
use crate::engine::{Direction, Grid, GridEngine, MoveOutcome, Score};

/// Everything a renderer needs after a state-affecting call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub grid: Grid,
    pub score: Score,
    pub best_score: Score,
    pub game_over: bool,
    pub highest_tile: u64,
}

pub struct Session<S> {
    engine: GridEngine,
    best: BestScore<S>,
}

impl<S: BestScoreStore> Session<S> {
    /// Wrap an already initialized engine.
    pub fn new(engine: GridEngine, store: S) -> Self {
        let mut session = Self {
            engine,
            best: BestScore::open(store),
        };
        session.best.observe(session.engine.score());
        session
    }

    /// Start over with a fresh grid; the best score carries over.
    pub fn new_game(&mut self) {
        self.engine.initialize();
        info!("new game, best score {}", self.best.get());
        self.best.observe(self.engine.score());
    }

    pub fn apply(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = self.engine.apply_move(direction);
        if outcome.moved {
            self.best.observe(self.engine.score());
            if self.engine.is_game_over() {
                info!(
                    "game over: score {}, highest tile {}",
                    self.engine.score(),
                    self.engine.highest_tile()
                );
            }
        }
        outcome
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.engine.grid(),
            score: self.engine.score(),
            best_score: self.best.get(),
            game_over: self.engine.is_game_over(),
            highest_tile: self.engine.highest_tile(),
        }
    }

    pub fn best_score(&self) -> Score {
        self.best.get()
    }
}
