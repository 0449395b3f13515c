use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::ops;
use super::state::{Direction, Grid, Score};

/// What a single [`GridEngine::apply_move`] call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The grid changed (and therefore a tile was spawned).
    pub moved: bool,
    /// Score added by merges during this move.
    pub gained: Score,
    /// The tile placed after the move, as `(row, col, value)`.
    pub spawned: Option<(usize, usize, u64)>,
}

/// Owned 2048 game: grid, score, game-over flag and the RNG used for spawns.
///
/// Transitions are one-way from playing to game over; only
/// [`initialize`](Self::initialize) goes back.
///
/// ```
/// use twenty48_core::engine::{Direction, GridEngine};
/// let mut game = GridEngine::with_seed(42);
/// assert_eq!(game.grid().count_empty(), 14);
/// let _ = game.apply_move(Direction::Left);
/// assert!(game.score() % 2 == 0);
/// ```
#[derive(Debug, Clone)]
pub struct GridEngine {
    grid: Grid,
    score: Score,
    game_over: bool,
    rng: StdRng,
}

impl GridEngine {
    /// Start a new game seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Start a new game with a reproducible tile sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        let mut engine = Self {
            grid: Grid::EMPTY,
            score: 0,
            game_over: false,
            rng,
        };
        engine.initialize();
        engine
    }

    /// Resume from a known position without spawning anything.
    ///
    /// The game-over flag is derived from `grid`. Every cell must be 0 or a
    /// power of two >= 2, and below 2^63 so a merge cannot overflow.
    pub fn from_parts(grid: Grid, score: Score, seed: u64) -> Self {
        debug_assert!(
            grid.tiles().all(is_valid_tile),
            "grid holds a value that is not 0 or a power of two >= 2: {grid:?}"
        );
        Self {
            grid,
            score,
            game_over: ops::is_game_over(&grid),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Clear the grid and score, then place two starting tiles.
    pub fn initialize(&mut self) {
        self.grid = Grid::EMPTY;
        self.score = 0;
        self.game_over = false;
        self.spawn_tile();
        self.spawn_tile();
    }

    /// Place a 2 (90%) or 4 (10%) on a random empty cell. No-op on a full grid.
    pub fn spawn_tile(&mut self) -> Option<(usize, usize, u64)> {
        let placed = ops::spawn_tile(&mut self.grid, &mut self.rng);
        if let Some((r, c, v)) = placed {
            debug!("spawned {v} at ({r}, {c})");
        }
        placed
    }

    /// Slide in `direction`. Spawns a tile and re-checks game over only if
    /// something moved; otherwise the call leaves every field untouched.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.game_over {
            return MoveOutcome::default();
        }
        let shifted = ops::shift(self.grid, direction);
        if !shifted.moved {
            return MoveOutcome::default();
        }
        self.grid = shifted.grid;
        self.score += shifted.gained;
        let spawned = self.spawn_tile();
        self.check_game_over();
        MoveOutcome {
            moved: true,
            gained: shifted.gained,
            spawned,
        }
    }

    /// Latch the game-over flag when the grid is full and nothing can merge.
    pub fn check_game_over(&mut self) -> bool {
        if !self.game_over && ops::is_game_over(&self.grid) {
            debug!("game over with score {}", self.score);
            self.game_over = true;
        }
        self.game_over
    }

    /// Snapshot of the current grid.
    #[inline]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[inline]
    pub fn score(&self) -> Score {
        self.score
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[inline]
    pub fn highest_tile(&self) -> u64 {
        self.grid.highest_tile()
    }
}

/// 0, or a power of two from 2 up to 2^62.
pub(crate) fn is_valid_tile(v: u64) -> bool {
    v == 0 || (v >= 2 && v.is_power_of_two() && v < 1 << 63)
}

impl Default for GridEngine {
    fn default() -> Self {
        Self::new()
    }
}
