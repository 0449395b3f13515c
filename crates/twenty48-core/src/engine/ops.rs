use rand::Rng;
use rand::seq::SliceRandom;

use super::state::{Direction, Grid, Row, SIZE, Score, Tile};

/// Result of sliding a grid without spawning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    pub grid: Grid,
    /// Sum of every merge result produced by this slide.
    pub gained: Score,
    /// True if at least one cell changed.
    pub moved: bool,
}

/// Slide/merge tiles in the given direction. No randomness.
///
/// Every direction is mapped onto "slide left" first, then mapped back.
pub fn shift(grid: Grid, direction: Direction) -> Shift {
    let mut work = normalize(grid, direction);
    let mut gained = 0;
    let mut moved = false;
    for row in work.0.iter_mut() {
        let (new_row, row_gain) = slide_row_left(*row);
        if new_row != *row {
            moved = true;
        }
        *row = new_row;
        gained += row_gain;
    }
    Shift {
        grid: denormalize(work, direction),
        gained,
        moved,
    }
}

/// Rotate/reflect `grid` so that moving in `direction` becomes a left slide.
pub fn normalize(grid: Grid, direction: Direction) -> Grid {
    match direction {
        Direction::Left => grid,
        Direction::Right => grid.reverse_rows(),
        Direction::Up => grid.transpose(),
        Direction::Down => grid.transpose().reverse_rows(),
    }
}

/// Exact inverse of [`normalize`].
pub fn denormalize(grid: Grid, direction: Direction) -> Grid {
    match direction {
        Direction::Left => grid,
        Direction::Right => grid.reverse_rows(),
        Direction::Up => grid.transpose(),
        Direction::Down => grid.reverse_rows().transpose(),
    }
}

/// Compact a row to the left and merge equal neighbours once each.
///
/// Returns the new row and the score gained (sum of merged values).
///
/// ```
/// use twenty48_core::engine::slide_row_left;
/// assert_eq!(slide_row_left([2, 2, 2, 0]), ([4, 2, 0, 0], 4));
/// ```
pub fn slide_row_left(row: Row) -> (Row, Score) {
    let mut out = [0; SIZE];
    let mut gained = 0;
    let mut len = 0;
    // Last tile placed in `out` that is still allowed to absorb an equal one.
    let mut pending: Option<Tile> = None;
    for val in row.into_iter().filter(|&v| v != 0) {
        if pending == Some(val) {
            out[len - 1] = val * 2;
            gained += val * 2;
            pending = None;
        } else {
            out[len] = val;
            len += 1;
            pending = Some(val);
        }
    }
    (out, gained)
}

/// Pick a uniformly random empty cell and put a 2 (90%) or 4 (10%) into it.
///
/// Returns the placed `(row, col, value)`, or `None` if the grid is full.
pub fn spawn_tile<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Option<(usize, usize, u64)> {
    let empties = grid.empty_cells();
    let &(r, c) = empties.choose(rng)?;
    let value = generate_random_tile(rng);
    grid.set(r, c, value);
    Some((r, c, value))
}

pub(crate) fn generate_random_tile<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    if rng.gen_range(0..10) < 9 { 2 } else { 4 }
}

/// True if any cell equals its right or lower neighbour.
pub fn has_adjacent_pair(grid: &Grid) -> bool {
    let cells = &grid.0;
    for r in 0..SIZE {
        for c in 0..SIZE {
            let val = cells[r][c];
            if c + 1 < SIZE && val == cells[r][c + 1] {
                return true;
            }
            if r + 1 < SIZE && val == cells[r + 1][c] {
                return true;
            }
        }
    }
    false
}

/// True if the grid is full and no adjacent pair can merge.
pub fn is_game_over(grid: &Grid) -> bool {
    grid.is_full() && !has_adjacent_pair(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn row_grid(row: Row) -> Grid {
        Grid::from_rows([row, [0; 4], [0; 4], [0; 4]])
    }

    #[test]
    fn it_slide_row_left() {
        assert_eq!(slide_row_left([0, 0, 0, 0]), ([0, 0, 0, 0], 0));
        assert_eq!(slide_row_left([2, 4, 2, 4]), ([2, 4, 2, 4], 0));
        assert_eq!(slide_row_left([2, 2, 4, 4]), ([4, 8, 0, 0], 12));
        assert_eq!(slide_row_left([2, 0, 0, 2]), ([4, 0, 0, 0], 4));
        assert_eq!(slide_row_left([0, 0, 0, 8]), ([8, 0, 0, 0], 0));
        assert_eq!(slide_row_left([4, 4, 4, 4]), ([8, 8, 0, 0], 16));
    }

    #[test]
    fn it_merges_each_tile_once() {
        // The fresh 4 must not absorb the trailing 2, nor the fresh 8 the next 8.
        assert_eq!(slide_row_left([2, 2, 2, 0]), ([4, 2, 0, 0], 4));
        assert_eq!(slide_row_left([2, 2, 4, 0]), ([4, 4, 0, 0], 4));
        assert_eq!(slide_row_left([4, 4, 8, 8]), ([8, 16, 0, 0], 24));
        assert_eq!(slide_row_left([8, 4, 4, 0]), ([8, 8, 0, 0], 8));
        assert_eq!(slide_row_left([2, 2, 2, 2]), ([4, 4, 0, 0], 8));
    }

    #[test]
    fn test_shift_left() {
        let s = shift(row_grid([2, 2, 2, 0]), Direction::Left);
        assert_eq!(s.grid, row_grid([4, 2, 0, 0]));
        assert_eq!(s.gained, 4);
        assert!(s.moved);
    }

    #[test]
    fn test_shift_right() {
        let s = shift(row_grid([2, 2, 4, 4]), Direction::Right);
        assert_eq!(s.grid, row_grid([0, 0, 4, 8]));
        assert_eq!(s.gained, 12);
        assert!(s.moved);

        let s = shift(row_grid([0, 2, 2, 2]), Direction::Right);
        assert_eq!(s.grid, row_grid([0, 0, 2, 4]));
    }

    #[test]
    fn test_shift_up() {
        let g = Grid::from_rows([[2, 0, 4, 0], [2, 0, 0, 0], [4, 0, 4, 0], [4, 8, 0, 2]]);
        let s = shift(g, Direction::Up);
        assert_eq!(
            s.grid,
            Grid::from_rows([[4, 8, 8, 2], [8, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]])
        );
        assert_eq!(s.gained, 4 + 8 + 8);
    }

    #[test]
    fn test_shift_down() {
        let g = Grid::from_rows([[2, 0, 4, 0], [2, 0, 0, 0], [4, 0, 4, 0], [4, 8, 0, 2]]);
        let s = shift(g, Direction::Down);
        assert_eq!(
            s.grid,
            Grid::from_rows([[0, 0, 0, 0], [0, 0, 0, 0], [4, 0, 0, 0], [8, 8, 8, 2]])
        );
        assert_eq!(s.gained, 4 + 8 + 8);
    }

    #[test]
    fn test_down_keeps_columns_in_place() {
        // A single tile in each column must stay in its own column.
        let g = Grid::from_rows([[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]]);
        let s = shift(g, Direction::Down);
        assert_eq!(s.grid, Grid::from_rows([[0; 4], [0; 4], [0; 4], [2, 4, 8, 16]]));
    }

    #[test]
    fn test_up_is_transposed_left() {
        let g = Grid::from_rows([[2, 4, 2, 0], [2, 0, 2, 8], [4, 4, 0, 8], [0, 4, 2, 2]]);
        let up = shift(g, Direction::Up);
        let left = shift(g.transpose(), Direction::Left);
        assert_eq!(up.grid, left.grid.transpose());
        assert_eq!(up.gained, left.gained);
        assert_eq!(up.moved, left.moved);
    }

    #[test]
    fn test_normalize_roundtrip() {
        let g = Grid::from_rows([[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 14, 15, 16]]);
        for dir in Direction::ALL {
            assert_eq!(denormalize(normalize(g, dir), dir), g, "{dir}");
        }
    }

    #[test]
    fn test_blocked_shift_is_noop() {
        let g = Grid::from_rows([[2, 4, 0, 0], [8, 0, 0, 0], [0; 4], [0; 4]]);
        let s = shift(g, Direction::Left);
        assert!(!s.moved);
        assert_eq!(s.grid, g);
        assert_eq!(s.gained, 0);
    }

    #[test]
    fn it_spawns_into_empty_cells_only() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut g = Grid::EMPTY;
        for _ in 0..16 {
            let (r, c, v) = spawn_tile(&mut g, &mut rng).expect("room left");
            assert!(v == 2 || v == 4);
            assert_eq!(g.get(r, c), v);
        }
        assert!(g.is_full());
        let before = g;
        assert_eq!(spawn_tile(&mut g, &mut rng), None);
        assert_eq!(g, before);
    }

    #[test]
    fn it_spawns_mostly_twos() {
        let mut rng = StdRng::seed_from_u64(99);
        let fours = (0..10_000)
            .filter(|_| generate_random_tile(&mut rng) == 4)
            .count();
        assert!((700..1300).contains(&fours), "fours = {fours}");
    }

    #[test]
    fn it_detects_game_over() {
        let stuck = Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(is_game_over(&stuck));

        let mut pair = stuck;
        pair.set(3, 3, 4);
        assert!(has_adjacent_pair(&pair));
        assert!(!is_game_over(&pair));

        let mut hole = stuck;
        hole.set(1, 1, 0);
        assert!(!is_game_over(&hole));
    }
}
