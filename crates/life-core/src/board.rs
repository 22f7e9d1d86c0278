//! The fixed-size grid of cells and its generation step.
//!
//! A [`Board`] is built once per session (or restart) and never changes
//! shape. Advancing a generation is split into two explicit phases so the
//! update is simultaneous for every cell:
//!
//! 1. [`Board::count_neighbors`] stores each cell's live-neighbor count,
//!    reading only the current alive flags.
//! 2. [`Board::apply_rule`] derives every new alive flag from the stored
//!    count and the cell's own previous state.
//!
//! No alive flag is written until every count has been taken, so the
//! order in which cells are visited cannot influence the result.

use rand::Rng;
use tracing::trace;

use crate::cell::{Cell, Position};
use crate::rule;

/// Number of rows and columns on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl Dimensions {
    /// Create dimensions of `rows` x `cols`.
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    pub const fn cell_count(self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Whether `pos` lies on the board.
    pub const fn contains(self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Row-major index of `pos`, or `None` if it is off the board.
    fn index(self, pos: Position) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        pos.row.checked_mul(self.cols)?.checked_add(pos.col)
    }
}

/// Outcome of one generation step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepSummary {
    /// Dead cells that came alive.
    pub births: usize,
    /// Live cells that died.
    pub deaths: usize,
    /// Live cells after the step.
    pub population: usize,
}

/// Fixed-size grid of cells stored row-major.
///
/// Two boards are equal when they have the same dimensions and the same
/// cells alive; neighbor counts left over from a step are not compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl Board {
    /// Build a board where every cell is dead.
    pub fn dead(dims: Dimensions) -> Self {
        Self::build(dims, |_| false)
    }

    /// Build a board where each cell is independently alive with
    /// probability `density`.
    ///
    /// Densities outside `[0, 1]` are clamped; a non-finite density yields
    /// an all-dead board.
    pub fn random<R: Rng>(dims: Dimensions, density: f64, rng: &mut R) -> Self {
        let density = if density.is_finite() {
            density.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self::build(dims, |_| rng.random_bool(density))
    }

    fn build(dims: Dimensions, mut alive: impl FnMut(Position) -> bool) -> Self {
        let mut cells = Vec::with_capacity(dims.cell_count());
        for row in 0..dims.rows {
            for col in 0..dims.cols {
                let position = Position::new(row, col);
                cells.push(Cell::new(position, alive(position), dims.rows, dims.cols));
            }
        }
        Self { dims, cells }
    }

    /// The board's dimensions, fixed at construction.
    pub const fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at `pos`, if it is on the board.
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.dims.index(pos).and_then(|i| self.cells.get(i))
    }

    /// Whether the cell at `pos` is alive. Off-board positions are dead.
    pub fn is_alive(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(Cell::is_alive)
    }

    /// Set the cell at `pos` alive or dead.
    ///
    /// Returns `false` (and changes nothing) if `pos` is off the board.
    pub fn set_alive(&mut self, pos: Position, alive: bool) -> bool {
        let Some(cell) = self.dims.index(pos).and_then(|i| self.cells.get_mut(i)) else {
            return false;
        };
        cell.set_alive(alive);
        true
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Phase one: record every cell's live-neighbor count from the current
    /// generation. Alive flags are not touched.
    pub fn count_neighbors(&mut self) {
        let counts: Vec<u8> = self
            .cells
            .iter()
            .map(|cell| {
                let live = cell
                    .neighbors()
                    .iter()
                    .filter(|&&p| self.is_alive(p))
                    .count();
                u8::try_from(live).unwrap_or(u8::MAX)
            })
            .collect();

        for (cell, count) in self.cells.iter_mut().zip(counts) {
            cell.set_live_neighbors(count);
        }
    }

    /// Phase two: apply the rule to every cell using the counts stored by
    /// [`count_neighbors`](Self::count_neighbors).
    pub fn apply_rule(&mut self) -> StepSummary {
        let mut summary = StepSummary::default();
        for cell in &mut self.cells {
            let was_alive = cell.is_alive();
            let alive = rule::next_state(was_alive, cell.live_neighbors());
            match (was_alive, alive) {
                (false, true) => summary.births = summary.births.saturating_add(1),
                (true, false) => summary.deaths = summary.deaths.saturating_add(1),
                _ => {}
            }
            if alive {
                summary.population = summary.population.saturating_add(1);
            }
            cell.set_alive(alive);
        }
        summary
    }

    /// Advance one generation: count neighbors, then apply the rule.
    pub fn step(&mut self) -> StepSummary {
        self.count_neighbors();
        let summary = self.apply_rule();
        trace!(
            births = summary.births,
            deaths = summary.deaths,
            population = summary.population,
            "Board stepped"
        );
        summary
    }
}
