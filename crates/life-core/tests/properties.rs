//! Behavioral properties of the generation step and the driver, exercised
//! through the public API only.

#![allow(clippy::unwrap_used)]

use life_core::{Board, Dimensions, Driver, GameConfig, Position, Rect, Surface};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn board_with(dims: Dimensions, alive: &[(usize, usize)]) -> Board {
    let mut board = Board::dead(dims);
    for &(row, col) in alive {
        board.set_alive(Position::new(row, col), true);
    }
    board
}

/// Live cell at the center of a 5x5 board surrounded by `n` live
/// neighbors, taken in a fixed order.
fn center_with_neighbors(center_alive: bool, n: usize) -> Board {
    let ring = [
        (1, 1),
        (1, 2),
        (1, 3),
        (2, 1),
        (2, 3),
        (3, 1),
        (3, 2),
        (3, 3),
    ];
    let mut board = board_with(Dimensions::new(5, 5), ring.get(..n).unwrap_or(&ring));
    board.set_alive(Position::new(2, 2), center_alive);
    board
}

const CENTER: Position = Position::new(2, 2);

#[test]
fn all_dead_stays_dead() {
    let mut board = Board::dead(Dimensions::new(12, 17));
    for _ in 0..5 {
        let summary = board.step();
        assert_eq!(summary.births, 0);
        assert_eq!(summary.population, 0);
    }
    assert_eq!(board, Board::dead(Dimensions::new(12, 17)));
}

#[test]
fn dead_cell_with_three_neighbors_is_born() {
    let mut board = center_with_neighbors(false, 3);
    board.step();
    assert!(board.is_alive(CENTER));
}

#[test]
fn dead_cell_without_exactly_three_stays_dead() {
    for n in [0, 1, 2, 4, 5, 6, 7, 8] {
        let mut board = center_with_neighbors(false, n);
        board.step();
        assert!(!board.is_alive(CENTER), "born with {n} neighbors");
    }
}

#[test]
fn live_cell_survival() {
    for n in 0..=8 {
        let mut board = center_with_neighbors(true, n);
        board.step();
        let expected = n == 2 || n == 3;
        assert_eq!(board.is_alive(CENTER), expected, "{n} neighbors");
    }
}

#[test]
fn block_is_still_life() {
    let block = [(2, 2), (2, 3), (3, 2), (3, 3)];
    let mut board = board_with(Dimensions::new(6, 6), &block);
    let start = board.clone();
    for _ in 0..4 {
        let summary = board.step();
        assert_eq!(summary.births, 0);
        assert_eq!(summary.deaths, 0);
        assert_eq!(summary.population, 4);
        assert_eq!(board, start);
    }
}

#[test]
fn block_in_corner_is_still_life() {
    // Edge cells have fewer neighbors but the block is still stable.
    let mut board = board_with(Dimensions::new(4, 4), &[(0, 0), (0, 1), (1, 0), (1, 1)]);
    board.step();
    assert_eq!(board.population(), 4);
    assert!(board.is_alive(Position::new(0, 0)));
    assert!(board.is_alive(Position::new(1, 1)));
}

#[test]
fn no_wraparound_at_edges() {
    // A vertical blinker against the left edge would gain a neighbor on
    // the far right column on a torus. Here the far column stays dead.
    let mut board = board_with(Dimensions::new(5, 5), &[(1, 0), (2, 0), (3, 0)]);
    board.step();
    for row in 0..5 {
        assert!(!board.is_alive(Position::new(row, 4)));
    }
    assert!(board.is_alive(Position::new(2, 0)));
    assert!(board.is_alive(Position::new(2, 1)));
    assert_eq!(board.population(), 2);
}

#[test]
fn corner_neighbors_are_in_bounds() {
    let dims = Dimensions::new(7, 9);
    let board = Board::dead(dims);
    for corner in [
        Position::new(0, 0),
        Position::new(0, 8),
        Position::new(6, 0),
        Position::new(6, 8),
    ] {
        let neighbors = board.get(corner).unwrap().neighbors();
        assert_eq!(neighbors.len(), 3);
        assert!(neighbors.iter().all(|p| dims.contains(*p)));
    }
}

#[test]
fn glider_travels_diagonally() {
    let mut board = board_with(
        Dimensions::new(10, 10),
        &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    );
    for _ in 0..4 {
        board.step();
    }
    let expected = board_with(
        Dimensions::new(10, 10),
        &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)],
    );
    assert_eq!(board, expected);
}

struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self) {}
    fn fill_rect(&mut self, _rect: Rect, _css_color: &str) {}
}

#[test]
fn restart_keeps_dimensions_and_reseeds() {
    let config = GameConfig::default();
    let layout = config.layout(800, 600).unwrap();
    let mut driver = Driver::new(&config, layout, NullSurface, StdRng::seed_from_u64(3));
    let first = driver.board().clone();

    for _ in 0..3 {
        driver.restart();
        assert_eq!(driver.board().dimensions(), Dimensions::new(60, 80));
        assert_ne!(driver.board(), &first);
    }
}
