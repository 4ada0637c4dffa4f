//! ASCII board rendering for terminal output.
//!
//! Live cells print as `#`, dead cells as `.`, one text row per board
//! row. [`RenderCallback`] plugs the renderer into the run controller
//! so every generation is printed as it is produced.

use lifegrid_core::{ALIVE, Board, StepCallback, StepSummary};
use tracing::info;

/// Render the board as one `#`/`.` line per row.
pub fn render(board: &Board) -> String {
    let columns = usize::try_from(board.columns()).unwrap_or(usize::MAX);
    let mut out = String::new();
    for (idx, &cell) in board.cells().iter().enumerate() {
        out.push(if cell == ALIVE { '#' } else { '.' });
        let at_row_end = idx
            .checked_add(1)
            .and_then(|n| n.checked_rem(columns))
            == Some(0);
        if at_row_end {
            out.push('\n');
        }
    }
    out
}

/// Step callback that logs a per-generation summary and prints the
/// rendered board to stdout.
pub struct RenderCallback {
    /// Whether to print the full board, or only log the summary line.
    print_board: bool,
}

impl RenderCallback {
    /// Create a callback; `print_board` controls frame output.
    pub const fn new(print_board: bool) -> Self {
        Self { print_board }
    }
}

impl StepCallback for RenderCallback {
    fn on_generation(&mut self, summary: &StepSummary, board: &Board) {
        info!(
            generation = summary.generation,
            population = summary.population,
            births = summary.births,
            deaths = summary.deaths,
            "Generation complete"
        );
        if self.print_board {
            println!("generation {}\n{}", summary.generation, render(board));
        }
    }
}
