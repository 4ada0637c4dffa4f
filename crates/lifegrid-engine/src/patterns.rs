//! Named starting patterns for demonstration runs.
//!
//! Each pattern is a list of live `(row, col)` cells stamped onto an
//! otherwise dead board. Coordinates wrap toroidally, so a pattern
//! defined for a 10x10 board also lands sensibly on larger ones.

use lifegrid_core::{Board, BoardError};

/// A named set of live cells.
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    /// Pattern name, matched case-insensitively against the config.
    pub name: &'static str,
    /// Live cells as `(row, col)` pairs.
    pub cells: &'static [(i64, i64)],
}

/// Built-in pattern library.
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "blinker",
        cells: &[(2, 1), (2, 2), (2, 3)],
    },
    Pattern {
        name: "glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "toad",
        cells: &[(2, 2), (2, 3), (2, 4), (3, 1), (3, 2), (3, 3)],
    },
    Pattern {
        name: "beacon",
        cells: &[
            (1, 1),
            (1, 2),
            (2, 1),
            (2, 2),
            (3, 3),
            (3, 4),
            (4, 3),
            (4, 4),
        ],
    },
    Pattern {
        name: "block",
        cells: &[(1, 1), (1, 2), (2, 1), (2, 2)],
    },
];

/// Look up a pattern by name, case-insensitively.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Stamp a pattern onto a fresh board of the given dimensions.
///
/// # Errors
///
/// Returns [`BoardError::ZeroDimension`] if either dimension is 0.
pub fn stamp(pattern: &Pattern, columns: u32, rows: u32) -> Result<Board, BoardError> {
    Board::with_live_cells(columns, rows, pattern.cells)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use lifegrid_core::{DEFAULT_GENERATION_CAP, Termination, run_to_completion};

    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(find("Blinker").is_some());
        assert!(find("GLIDER").is_some());
        assert!(find("no-such-pattern").is_none());
    }

    #[test]
    fn stamped_pattern_has_expected_population() {
        for pattern in PATTERNS {
            let board = stamp(pattern, 10, 10).ok();
            assert!(board.is_some(), "pattern {}", pattern.name);
            if let Some(board) = board {
                let expected = u64::try_from(pattern.cells.len()).unwrap();
                assert_eq!(board.population(), expected, "pattern {}", pattern.name);
            }
        }
    }

    #[test]
    fn every_oscillator_pattern_stabilizes_on_the_default_board() {
        // All built-in patterns are still lifes, oscillators, or a
        // glider; every one of them cycles within the default cap on a
        // 10x10 torus except the glider, which needs a full lap.
        for name in ["blinker", "toad", "beacon", "block"] {
            let pattern = find(name);
            assert!(pattern.is_some());
            if let Some(pattern) = pattern {
                let board = stamp(pattern, 10, 10).ok();
                assert!(board.is_some());
                if let Some(mut board) = board {
                    let outcome = run_to_completion(&mut board, DEFAULT_GENERATION_CAP);
                    assert_eq!(outcome.termination, Termination::Cycle, "pattern {name}");
                }
            }
        }
    }
}
