//! A single cell of the board and its fixed neighborhood.
//!
//! Each [`Cell`] knows its own [`Position`] and carries the list of
//! in-bounds neighbor positions, computed once when the board is built.
//! Because the list never contains out-of-bounds coordinates, neighbor
//! counting cannot index outside the board.

/// Row/column coordinate of a cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Zero-based row, counted from the top.
    pub row: usize,
    /// Zero-based column, counted from the left.
    pub col: usize,
}

impl Position {
    /// Create a position from a row and column.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset this position by `(d_row, d_col)`, returning `None` if the
    /// result falls outside `0..rows` x `0..cols`.
    pub fn offset(self, d_row: isize, d_col: isize, rows: usize, cols: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row).filter(|r| *r < rows)?;
        let col = self.col.checked_add_signed(d_col).filter(|c| *c < cols)?;
        Some(Self { row, col })
    }
}

/// Relative offsets of the eight surrounding cells (orthogonal + diagonal).
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One cell of the board.
///
/// `live_neighbors` is transient: it is overwritten by the counting phase
/// of every tick and only meaningful between that phase and the rule phase.
/// Equality compares position and alive state only.
#[derive(Debug, Clone)]
pub struct Cell {
    alive: bool,
    position: Position,
    neighbors: Vec<Position>,
    live_neighbors: u8,
}

impl Cell {
    /// Create a cell at `position` on a `rows` x `cols` board.
    ///
    /// The neighbor list keeps only positions inside the board, so corner
    /// cells get 3 neighbors, edge cells 5 and interior cells 8.
    pub fn new(position: Position, alive: bool, rows: usize, cols: usize) -> Self {
        let neighbors = NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| position.offset(d_row, d_col, rows, cols))
            .collect();
        Self {
            alive,
            position,
            neighbors,
            live_neighbors: 0,
        }
    }

    /// Whether the cell is currently alive.
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// The cell's fixed position.
    pub const fn position(&self) -> Position {
        self.position
    }

    /// In-bounds neighbor positions.
    pub fn neighbors(&self) -> &[Position] {
        &self.neighbors
    }

    /// Live-neighbor count from the most recent counting phase.
    pub const fn live_neighbors(&self) -> u8 {
        self.live_neighbors
    }

    pub(crate) const fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    pub(crate) const fn set_live_neighbors(&mut self, count: u8) {
        self.live_neighbors = count;
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.alive == other.alive && self.position == other.position
    }
}

impl Eq for Cell {}
