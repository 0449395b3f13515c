use std::fmt;

use serde::{Deserialize, Serialize};

/// Side length of the square grid.
pub const SIZE: usize = 4;

pub(crate) type Tile = u64;
pub(crate) type Row = [Tile; SIZE];
pub(crate) type Cells = [Row; SIZE];
pub type Score = u64;

/// A direction to slide/merge tiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// 4x4 2048 grid of tile values, row-major.
///
/// `0` marks an empty cell; every other cell holds a power of two >= 2.
/// Values are stored as-is (not as exponents) so there is no upper bound
/// short of `u64` itself.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid(pub(crate) Cells);

impl Grid {
    /// A constant empty grid (all zeros).
    pub const EMPTY: Grid = Grid([[0; SIZE]; SIZE]);

    /// Build a grid from explicit rows.
    ///
    /// ```
    /// use twenty48_core::engine::Grid;
    /// let g = Grid::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
    /// assert_eq!(g.get(0, 1), 2);
    /// ```
    #[inline]
    pub fn from_rows(rows: [[u64; SIZE]; SIZE]) -> Self {
        Grid(rows)
    }

    /// Copy of the underlying rows.
    #[inline]
    pub fn rows(&self) -> [[u64; SIZE]; SIZE] {
        self.0
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.0[row][col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u64) {
        self.0[row][col] = value;
    }

    /// Coordinates of every empty cell in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::with_capacity(SIZE * SIZE);
        for (r, row) in self.0.iter().enumerate() {
            for (c, &val) in row.iter().enumerate() {
                if val == 0 {
                    cells.push((r, c));
                }
            }
        }
        cells
    }

    /// Count the number of empty cells on the grid.
    pub fn count_empty(&self) -> usize {
        self.0.iter().flatten().filter(|&&v| v == 0).count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }

    /// Return the highest tile value present, or 0 for an empty grid.
    pub fn highest_tile(&self) -> u64 {
        self.0.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Iterate over tile values in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = u64> + '_ {
        self.0.iter().flatten().copied()
    }

    /// Swap rows and columns.
    pub fn transpose(self) -> Self {
        let mut out = [[0; SIZE]; SIZE];
        for (r, row) in self.0.iter().enumerate() {
            for (c, &val) in row.iter().enumerate() {
                out[c][r] = val;
            }
        }
        Grid(out)
    }

    /// Mirror every row left-to-right.
    pub fn reverse_rows(mut self) -> Self {
        for row in self.0.iter_mut() {
            row.reverse();
        }
        self
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({:?})", self.0)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.0.iter().enumerate() {
            if r > 0 {
                writeln!(f, "-------------------------------")?;
            }
            let cells: Vec<String> = row.iter().map(format_val).collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

fn format_val(val: &u64) -> String {
    match val {
        0 => " ".repeat(7),
        x => format!("{x:^7}"),
    }
}
