//! Run controller: drive 1..N generations and decide when to stop.
//!
//! Three operating modes share one stopping policy, evaluated after
//! every generation:
//!
//! - **Single step**: call [`crate::step::advance`] directly.
//! - **Bounded multi-step** ([`advance_up_to`]): advance up to a fixed
//!   number of generations, stopping early at the first extinct one.
//! - **Run to completion** ([`run_to_completion`]): advance until the
//!   board goes extinct, repeats a configuration already produced
//!   during the run, or exhausts the generation cap.
//!
//! Cycle detection compares configurations by *content*: a
//! `HashSet<Vec<u8>>` of every cell array seen so far, the initial one
//! included, holding at most `cap + 1` entries. Every generation
//! allocates a fresh array, so only content equality can detect a
//! repeat.
//!
//! The controller is synchronous and blocking. It defines no
//! cancellation or timeout of its own; an embedding layer that needs
//! one can observe every generation boundary through [`StepCallback`].

use std::collections::HashSet;

use tracing::{debug, info};

use crate::board::Board;
use crate::step::{self, StepSummary};

/// Default generation cap for run-to-completion.
pub const DEFAULT_GENERATION_CAP: u64 = 10;

/// Why a run-to-completion invocation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Every cell died. Success-terminal.
    Extinct,
    /// The board repeated a configuration already produced during this
    /// run. Success-terminal.
    Cycle,
    /// The generation cap was exhausted without stabilizing.
    /// Failure-terminal, but an expected outcome rather than a fault.
    Capped,
}

impl Termination {
    /// Whether the run reached a stable state (extinction or a cycle)
    /// within its cap.
    pub const fn is_stable(self) -> bool {
        !matches!(self, Self::Capped)
    }
}

/// Result of a run-to-completion invocation.
///
/// The board itself is left at whatever generation it reached; advances
/// are never rolled back, not even on [`Termination::Capped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Why the run stopped.
    pub termination: Termination,
    /// Number of generations actually advanced.
    pub generations: u64,
    /// Live-cell count of the final configuration.
    pub final_population: u64,
}

/// Result of a bounded multi-step invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedOutcome {
    /// Number of generations actually advanced.
    pub generations: u64,
    /// Whether the board is extinct after the last advanced generation.
    pub extinct: bool,
}

/// Callback invoked after each generation completes.
///
/// Implementations can use this to render frames, collect summaries,
/// or checkpoint state. Each generation is a discrete unit of work, so
/// this boundary is also where an embedding layer would hook its own
/// cancellation if it needs one.
pub trait StepCallback {
    /// Called after a generation has been committed to the board.
    fn on_generation(&mut self, summary: &StepSummary, board: &Board);
}

/// A no-op step callback.
pub struct NoOpCallback;

impl StepCallback for NoOpCallback {
    fn on_generation(&mut self, _summary: &StepSummary, _board: &Board) {}
}

/// Advance the board by up to `max_steps` generations, stopping early
/// at the first generation in which every cell is dead.
///
/// Requesting zero steps is a no-op: the board is left untouched and
/// the outcome reports the board's current extinction state.
pub fn advance_up_to(board: &mut Board, max_steps: u64) -> BoundedOutcome {
    let mut generations: u64 = 0;

    for _ in 0..max_steps {
        let summary = step::advance(board);
        generations = generations.saturating_add(1);

        if summary.population == 0 {
            debug!(
                generation = summary.generation,
                generations, "Population extinct, stopping early"
            );
            break;
        }
    }

    BoundedOutcome {
        generations,
        extinct: board.is_extinct(),
    }
}

/// Run the board to a terminal condition, bounded by `cap` generations.
///
/// Equivalent to [`run_to_completion_with`] with a [`NoOpCallback`].
pub fn run_to_completion(board: &mut Board, cap: u64) -> RunOutcome {
    run_to_completion_with(board, cap, &mut NoOpCallback)
}

/// Run the board to a terminal condition, bounded by `cap` generations,
/// invoking `callback` after every committed generation.
///
/// After each generation two checks fire in order: extinction first,
/// then the content-equality cycle check. The initial configuration is
/// part of the seen-set, and an already-extinct board terminates with
/// [`Termination::Extinct`] before any step runs (0 generations
/// advanced).
pub fn run_to_completion_with(
    board: &mut Board,
    cap: u64,
    callback: &mut dyn StepCallback,
) -> RunOutcome {
    info!(
        columns = board.columns(),
        rows = board.rows(),
        generation = board.generation(),
        population = board.population(),
        cap,
        "Run to completion starting"
    );

    let mut seen: HashSet<Vec<u8>> = HashSet::new();
    seen.insert(board.cells().to_vec());

    if board.is_extinct() {
        info!(generation = board.generation(), "Board already extinct");
        return RunOutcome {
            termination: Termination::Extinct,
            generations: 0,
            final_population: 0,
        };
    }

    let mut generations: u64 = 0;

    while generations < cap {
        let summary = step::advance(board);
        generations = generations.saturating_add(1);

        debug!(
            generation = summary.generation,
            population = summary.population,
            births = summary.births,
            deaths = summary.deaths,
            "Generation advanced"
        );

        callback.on_generation(&summary, board);

        if summary.population == 0 {
            info!(generation = summary.generation, generations, "Terminated: extinct");
            return RunOutcome {
                termination: Termination::Extinct,
                generations,
                final_population: 0,
            };
        }

        if !seen.insert(board.cells().to_vec()) {
            info!(
                generation = summary.generation,
                generations,
                population = summary.population,
                "Terminated: cycle detected"
            );
            return RunOutcome {
                termination: Termination::Cycle,
                generations,
                final_population: summary.population,
            };
        }
    }

    info!(
        cap,
        generation = board.generation(),
        population = board.population(),
        "Did not stabilize within generation cap"
    );
    RunOutcome {
        termination: Termination::Capped,
        generations,
        final_population: board.population(),
    }
}
