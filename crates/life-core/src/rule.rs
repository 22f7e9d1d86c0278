//! The Conway transition rule (B3/S23).

/// Next alive state for a cell given its current state and live-neighbor
/// count.
///
/// A live cell with 2 or 3 live neighbors survives; a dead cell with
/// exactly 3 is born; every other cell is dead in the next generation.
pub const fn next_state(alive: bool, live_neighbors: u8) -> bool {
    matches!((alive, live_neighbors), (true, 2 | 3) | (false, 3))
}
