//! Error types for the `lifegrid-core` crate.
//!
//! The kernel's error surface is narrow: only board construction can
//! fail. Every step operation is total over a well-formed [`Board`].
//!
//! [`Board`]: crate::board::Board

/// Errors raised when constructing a board from caller-supplied input.
///
/// The kernel rejects malformed input outright; it never truncates or
/// pads a cell sequence to fit.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// One or both dimensions are zero.
    #[error("board dimensions must be positive, got {columns}x{rows}")]
    ZeroDimension {
        /// Requested number of columns.
        columns: u32,
        /// Requested number of rows.
        rows: u32,
    },

    /// The cell count `rows * columns` does not fit in memory addressing.
    #[error("board of {columns}x{rows} cells exceeds the addressable size")]
    TooManyCells {
        /// Requested number of columns.
        columns: u32,
        /// Requested number of rows.
        rows: u32,
    },

    /// The supplied cell sequence has the wrong length.
    #[error("cell sequence has length {actual}, expected rows * columns = {expected}")]
    CellCountMismatch {
        /// Required length (`rows * columns`).
        expected: usize,
        /// Length of the supplied sequence.
        actual: usize,
    },

    /// A cell value outside `{0, 1}` was supplied.
    #[error("cell at index {index} has value {value}, expected 0 or 1")]
    InvalidCellValue {
        /// Flat index of the offending cell.
        index: usize,
        /// The rejected value.
        value: u8,
    },

    /// A serialized board carried a generation of 0. Generations are
    /// numbered from 1.
    #[error("board generation must be at least 1, got 0")]
    ZeroGeneration,
}
