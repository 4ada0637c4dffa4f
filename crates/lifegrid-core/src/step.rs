//! Step engine: compute generation `g + 1` from generation `g`.
//!
//! [`advance`] walks every cell in row-major order, tallies its eight
//! Moore neighbors through the toroidal wrap, applies the transition
//! rule, and commits the freshly built cell array together with the
//! generation increment as one atomic unit. The function is total: a
//! well-formed [`Board`] can always be advanced.
//!
//! The iteration order carries no meaning -- the rule is purely local
//! and reads only the previous generation -- but every cell is visited
//! exactly once.

use crate::board::{ALIVE, Board, DEAD};
use crate::rule;

/// The eight Moore-neighborhood offsets around a cell, as
/// `(row delta, column delta)` pairs. The cell itself is excluded.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Summary of a single step's execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSummary {
    /// The generation number the board holds after this step.
    pub generation: u64,
    /// Number of live cells after this step.
    pub population: u64,
    /// Cells that went from dead to alive during this step.
    pub births: u64,
    /// Cells that went from alive to dead during this step.
    pub deaths: u64,
}

/// Count the live cells among the eight toroidal Moore neighbors of
/// `(row, col)`.
///
/// Each neighbor is read through [`Board::get`], so coordinates off any
/// edge wrap to the opposite edge. The result is in `0..=8`.
pub fn live_neighbors(board: &Board, row: i64, col: i64) -> u8 {
    let mut sum: u8 = 0;
    for (row_delta, col_delta) in NEIGHBOR_OFFSETS {
        let value = board.get(row.saturating_add(row_delta), col.saturating_add(col_delta));
        sum = sum.saturating_add(value);
    }
    sum
}

/// Advance the board by exactly one generation.
///
/// A new cell array is fully computed from the current one before
/// anything on the board changes; the swap and the generation increment
/// happen together, so callers never observe an intermediate state.
pub fn advance(board: &mut Board) -> StepSummary {
    let rows = i64::from(board.rows());
    let columns = i64::from(board.columns());

    let mut next = vec![DEAD; board.cell_count()];
    let mut births: u64 = 0;
    let mut deaths: u64 = 0;

    for row in 0..rows {
        for col in 0..columns {
            let current = board.get(row, col);
            let neighbors = live_neighbors(board, row, col);
            let value = rule::next_state(current, neighbors);

            if value != current {
                if value == ALIVE {
                    births = births.saturating_add(1);
                } else {
                    deaths = deaths.saturating_add(1);
                }
            }

            let idx = board.index(row, col);
            if let Some(slot) = next.get_mut(idx) {
                *slot = value;
            }
        }
    }

    board.commit_generation(next);

    StepSummary {
        generation: board.generation(),
        population: board.population(),
        births,
        deaths,
    }
}
