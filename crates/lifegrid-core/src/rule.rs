//! The per-cell transition rule (standard Game of Life, B3/S23).
//!
//! A pure function from `(current state, live neighbor count)` to the
//! next state. The rule is purely local: it never inspects the board,
//! only the one cell and its neighbor tally, which is what makes the
//! step engine's iteration order irrelevant.

use crate::board::{ALIVE, DEAD};

/// Compute the next state of a single cell.
///
/// - A dead cell with exactly 3 live neighbors becomes alive (birth).
/// - A live cell with fewer than 2 live neighbors dies (underpopulation).
/// - A live cell with more than 3 live neighbors dies (overcrowding).
/// - Every other combination leaves the cell unchanged.
///
/// Equivalently: a cell is alive next generation exactly when it is a
/// dead cell with 3 live neighbors or a live cell with 2 or 3. The
/// function is total over all `u8` inputs; neighbor counts above 8 are
/// unreachable from a Moore neighborhood but still well-defined.
pub const fn next_state(current: u8, live_neighbors: u8) -> u8 {
    match (current, live_neighbors) {
        (DEAD, 3) | (ALIVE, 2 | 3) => ALIVE,
        _ => DEAD,
    }
}
