//! Game board: dimensions, flat cell array, and generation counter.
//!
//! The [`Board`] is the single value exchanged between the kernel and
//! the embedding layer. Cells are stored row-major in a flat `Vec<u8>`
//! of `0`/`1` values; the cell at `(row, col)` lives at index
//! `row * columns + col`.
//!
//! The grid is toroidal: [`Board::index`] maps *any* integer coordinate
//! pair onto the grid with a mathematically-correct modulo, so the top
//! edge neighbors the bottom edge and the left edge neighbors the right
//! edge.
//!
//! # Invariants
//!
//! - `cells.len() == rows * columns` at all times.
//! - Every element of `cells` is 0 or 1.
//! - `generation` starts at 1 and increments by exactly 1 per step.
//!
//! Both invariants are checked at construction and preserved by the
//! step engine, which replaces the whole cell array and bumps the
//! generation as one atomic unit. Callers never observe a partially
//! updated board.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// Value of a dead cell in the flat cell array.
pub const DEAD: u8 = 0;

/// Value of a live cell in the flat cell array.
pub const ALIVE: u8 = 1;

/// Default board width when the caller does not specify one.
pub const DEFAULT_COLUMNS: u32 = 10;

/// Default board height when the caller does not specify one.
pub const DEFAULT_ROWS: u32 = 10;

/// Generation number assigned to a freshly constructed board.
const INITIAL_GENERATION: u64 = 1;

/// A toroidal two-state cell grid with a generation counter.
///
/// Fields are private: the only mutation path is the step engine in
/// [`crate::step`], which keeps the invariants documented at module
/// level. The board is otherwise an immutable value passed between
/// layers.
///
/// Deserialization goes through [`RawBoard`] so boards arriving from
/// the embedding boundary face the same checks as [`Board::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    /// Grid width, fixed for the lifetime of the board.
    columns: u32,
    /// Grid height, fixed for the lifetime of the board.
    rows: u32,
    /// Number of the configuration currently held in `cells`.
    generation: u64,
    /// Row-major cell values, each 0 (dead) or 1 (alive).
    cells: Vec<u8>,
}

impl Board {
    /// Create a board from an explicit cell sequence.
    ///
    /// The supplied sequence becomes the initial state exactly as
    /// given; nothing is randomized, truncated, or padded.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ZeroDimension`] if either dimension is 0,
    /// [`BoardError::CellCountMismatch`] if `cells.len()` is not
    /// `rows * columns`, or [`BoardError::InvalidCellValue`] if any
    /// value is outside `{0, 1}`.
    pub fn new(columns: u32, rows: u32, cells: Vec<u8>) -> Result<Self, BoardError> {
        let expected = checked_cell_count(columns, rows)?;
        if cells.len() != expected {
            return Err(BoardError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        if let Some((index, &value)) = cells.iter().enumerate().find(|&(_, &v)| v > ALIVE) {
            return Err(BoardError::InvalidCellValue { index, value });
        }
        Ok(Self {
            columns,
            rows,
            generation: INITIAL_GENERATION,
            cells,
        })
    }

    /// Create a board with each cell independently dead or alive with
    /// probability 1/2.
    ///
    /// The random source is supplied by the caller so embedding layers
    /// and tests can seed it deterministically (for example with
    /// `StdRng::seed_from_u64`). The kernel never reaches for a
    /// process-wide generator.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ZeroDimension`] if either dimension is 0.
    pub fn random<R: Rng>(columns: u32, rows: u32, rng: &mut R) -> Result<Self, BoardError> {
        let cell_count = checked_cell_count(columns, rows)?;
        let cells = (0..cell_count)
            .map(|_| u8::from(rng.random_bool(0.5)))
            .collect();
        Ok(Self {
            columns,
            rows,
            generation: INITIAL_GENERATION,
            cells,
        })
    }

    /// Create a board with the listed `(row, col)` cells alive and
    /// every other cell dead.
    ///
    /// Coordinates wrap toroidally exactly like any other lookup, so
    /// pattern definitions may use out-of-range offsets.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ZeroDimension`] if either dimension is 0.
    pub fn with_live_cells(
        columns: u32,
        rows: u32,
        live: &[(i64, i64)],
    ) -> Result<Self, BoardError> {
        let cell_count = checked_cell_count(columns, rows)?;
        let mut board = Self {
            columns,
            rows,
            generation: INITIAL_GENERATION,
            cells: vec![DEAD; cell_count],
        };
        for &(row, col) in live {
            let idx = board.index(row, col);
            if let Some(slot) = board.cells.get_mut(idx) {
                *slot = ALIVE;
            }
        }
        Ok(board)
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    /// Grid width.
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Grid height.
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of the configuration currently held by the board.
    /// Starts at 1 and increments by exactly 1 per step.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// The row-major cell values.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Total number of cells (`rows * columns`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of live cells in the current configuration.
    pub fn population(&self) -> u64 {
        self.cells.iter().map(|&c| u64::from(c)).sum()
    }

    /// Whether every cell is dead.
    pub fn is_extinct(&self) -> bool {
        self.population() == 0
    }

    // -------------------------------------------------------------------
    // Toroidal coordinate mapping
    // -------------------------------------------------------------------

    /// Map any integer `(row, col)` pair onto a valid flat index.
    ///
    /// Out-of-range and negative coordinates wrap around via
    /// `rem_euclid`, whose result is always in `[0, rows)` /
    /// `[0, columns)`. A truncating remainder would return negative
    /// values for negative coordinates and break the wraparound.
    pub fn index(&self, row: i64, col: i64) -> usize {
        // Dimensions are validated positive at construction, so none
        // of the checked operations below can fail.
        let r = row.checked_rem_euclid(i64::from(self.rows)).unwrap_or(0);
        let c = col.checked_rem_euclid(i64::from(self.columns)).unwrap_or(0);
        let flat = r
            .checked_mul(i64::from(self.columns))
            .and_then(|v| v.checked_add(c))
            .unwrap_or(0);
        usize::try_from(flat).unwrap_or(0)
    }

    /// Read the cell at `(row, col)` with toroidal wraparound.
    pub fn get(&self, row: i64, col: i64) -> u8 {
        let idx = self.index(row, col);
        self.cells.get(idx).copied().unwrap_or(DEAD)
    }

    // -------------------------------------------------------------------
    // Step-engine hook
    // -------------------------------------------------------------------

    /// Replace the cell array and increment the generation counter as
    /// one atomic unit.
    ///
    /// Only the step engine calls this; `next` is always a full,
    /// rule-derived configuration of the same length, so the board
    /// invariants hold after the swap.
    pub(crate) fn commit_generation(&mut self, next: Vec<u8>) {
        self.cells = next;
        self.generation = self.generation.saturating_add(1);
    }
}

/// Unvalidated wire form of a [`Board`].
///
/// Deserialization lands here first; [`TryFrom`] then applies the
/// [`Board::new`] checks and validates the generation, so a
/// deserialized board upholds the same invariants as a constructed
/// one.
#[derive(Deserialize)]
struct RawBoard {
    columns: u32,
    rows: u32,
    generation: u64,
    cells: Vec<u8>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if raw.generation < INITIAL_GENERATION {
            return Err(BoardError::ZeroGeneration);
        }
        let mut board = Self::new(raw.columns, raw.rows, raw.cells)?;
        board.generation = raw.generation;
        Ok(board)
    }
}

/// Compute `rows * columns` as a `usize`, rejecting zero dimensions
/// and overflow.
fn checked_cell_count(columns: u32, rows: u32) -> Result<usize, BoardError> {
    if columns == 0 || rows == 0 {
        return Err(BoardError::ZeroDimension { columns, rows });
    }
    u64::from(columns)
        .checked_mul(u64::from(rows))
        .and_then(|count| usize::try_from(count).ok())
        .ok_or(BoardError::TooManyCells { columns, rows })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn make_board(columns: u32, rows: u32, cells: Vec<u8>) -> Board {
        Board::new(columns, rows, cells).unwrap()
    }

    #[test]
    fn explicit_cells_are_reproduced_exactly() {
        let cells = vec![0, 1, 0, 1, 1, 0];
        let board = make_board(3, 2, cells.clone());
        assert_eq!(board.cells(), cells.as_slice());
        assert_eq!(board.columns(), 3);
        assert_eq!(board.rows(), 2);
        assert_eq!(board.generation(), 1);
    }

    #[test]
    fn zero_dimension_rejected() {
        assert!(matches!(
            Board::new(0, 5, Vec::new()),
            Err(BoardError::ZeroDimension { .. })
        ));
        assert!(matches!(
            Board::new(5, 0, Vec::new()),
            Err(BoardError::ZeroDimension { .. })
        ));
    }

    #[test]
    fn wrong_length_rejected() {
        let result = Board::new(3, 3, vec![0; 8]);
        assert!(matches!(
            result,
            Err(BoardError::CellCountMismatch {
                expected: 9,
                actual: 8
            })
        ));
    }

    #[test]
    fn non_binary_value_rejected() {
        let result = Board::new(2, 2, vec![0, 1, 2, 0]);
        assert!(matches!(
            result,
            Err(BoardError::InvalidCellValue { index: 2, value: 2 })
        ));
    }

    #[test]
    fn seeded_random_is_deterministic() {
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = Board::random(10, 10, &mut rng_a);
        let b = Board::random(10, 10, &mut rng_b);
        assert!(a.is_ok());
        assert_eq!(a.ok(), b.ok());
    }

    #[test]
    fn random_board_has_binary_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::random(8, 8, &mut rng);
        assert!(board.is_ok());
        if let Ok(board) = board {
            assert_eq!(board.cell_count(), 64);
            assert!(board.cells().iter().all(|&c| c <= ALIVE));
        }
    }

    #[test]
    fn with_live_cells_sets_exactly_the_listed_cells() {
        let board = Board::with_live_cells(4, 3, &[(0, 0), (2, 3), (-1, -1)]).unwrap();
        // (-1, -1) wraps onto (2, 3), already alive.
        assert_eq!(board.population(), 2);
        assert_eq!(board.get(0, 0), ALIVE);
        assert_eq!(board.get(2, 3), ALIVE);
        assert_eq!(board.get(1, 1), DEAD);
    }

    #[test]
    fn index_is_row_major() {
        let board = make_board(4, 3, vec![0; 12]);
        assert_eq!(board.index(0, 0), 0);
        assert_eq!(board.index(0, 3), 3);
        assert_eq!(board.index(1, 0), 4);
        assert_eq!(board.index(2, 3), 11);
    }

    #[test]
    fn index_wraps_negative_coordinates() {
        let board = make_board(4, 3, vec![0; 12]);
        // (-1, -1) wraps to the bottom-right corner (2, 3).
        assert_eq!(board.index(-1, -1), board.index(2, 3));
        // One full wrap in each direction is the identity.
        assert_eq!(board.index(3, 4), board.index(0, 0));
        assert_eq!(board.index(-3, -4), board.index(0, 0));
    }

    #[test]
    fn get_reads_through_the_wrap() {
        let mut cells = vec![0; 12];
        if let Some(last) = cells.last_mut() {
            *last = ALIVE;
        }
        let board = make_board(4, 3, cells);
        assert_eq!(board.get(2, 3), ALIVE);
        assert_eq!(board.get(-1, -1), ALIVE);
        assert_eq!(board.get(5, 7), ALIVE);
    }

    #[test]
    fn population_counts_live_cells() {
        let board = make_board(3, 2, vec![1, 0, 1, 0, 0, 1]);
        assert_eq!(board.population(), 3);
        assert!(!board.is_extinct());

        let dead = make_board(3, 2, vec![0; 6]);
        assert_eq!(dead.population(), 0);
        assert!(dead.is_extinct());
    }

    #[test]
    fn board_roundtrips_through_json() {
        let board = make_board(2, 2, vec![1, 0, 0, 1]);
        let json = serde_json::to_string(&board).ok();
        assert!(json.is_some());
        let restored: Option<Board> =
            json.as_deref().and_then(|j| serde_json::from_str(j).ok());
        assert_eq!(restored, Some(board));
    }

    #[test]
    fn deserialization_rejects_invariant_violations() {
        // Length mismatch and a non-binary value in one payload.
        let short: Result<Board, _> =
            serde_json::from_str(r#"{"columns":3,"rows":3,"generation":1,"cells":[9,0]}"#);
        assert!(short.is_err());

        // Right length, bad value.
        let non_binary: Result<Board, _> =
            serde_json::from_str(r#"{"columns":2,"rows":1,"generation":1,"cells":[2,0]}"#);
        assert!(non_binary.is_err());

        // Zero dimension.
        let zero_dim: Result<Board, _> =
            serde_json::from_str(r#"{"columns":0,"rows":3,"generation":1,"cells":[]}"#);
        assert!(zero_dim.is_err());

        // Generations are numbered from 1.
        let zero_gen: Result<Board, _> =
            serde_json::from_str(r#"{"columns":1,"rows":1,"generation":0,"cells":[1]}"#);
        assert!(zero_gen.is_err());
    }

    #[test]
    fn deserialization_preserves_an_advanced_generation() {
        let json = r#"{"columns":2,"rows":2,"generation":7,"cells":[1,0,0,1]}"#;
        let board: Option<Board> = serde_json::from_str(json).ok();
        assert!(board.is_some());
        if let Some(board) = board {
            assert_eq!(board.generation(), 7);
            assert_eq!(board.cells(), &[1, 0, 0, 1]);
        }
    }
}
