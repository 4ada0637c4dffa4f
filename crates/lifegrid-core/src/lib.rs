//! Toroidal Game of Life kernel for the Lifegrid simulation.
//!
//! This crate owns the simulation kernel: the board representation, the
//! per-cell transition rule, the step engine, and the run controller
//! with its termination policies. The embedding layer (HTTP routing,
//! persistence, id generation) lives outside this crate and exchanges
//! owned [`Board`] values with it.
//!
//! # Modules
//!
//! - [`board`] -- [`Board`] data model: dimensions, flat cell array,
//!   generation counter, and toroidal coordinate mapping.
//! - [`rule`] -- The pure per-cell transition rule.
//! - [`step`] -- Step engine: computes a full next generation by applying
//!   the rule to every cell with Moore-neighborhood lookup.
//! - [`runner`] -- Run controller: bounded multi-step advancement and
//!   run-to-completion with extinction, cycle, and cap termination.
//! - [`error`] -- [`BoardError`] construction failures.

pub mod board;
pub mod error;
pub mod rule;
pub mod runner;
pub mod step;

// Re-export the public surface at crate root for convenience.
pub use board::{ALIVE, Board, DEAD, DEFAULT_COLUMNS, DEFAULT_ROWS};
pub use error::BoardError;
pub use rule::next_state;
pub use runner::{
    BoundedOutcome, DEFAULT_GENERATION_CAP, NoOpCallback, RunOutcome, StepCallback, Termination,
    advance_up_to, run_to_completion, run_to_completion_with,
};
pub use step::{StepSummary, advance, live_neighbors};
