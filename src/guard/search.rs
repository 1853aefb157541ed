use rayon::prelude::*;
use tracing::debug;

use super::grid::{Cell, Grid, GridError, Position};
use super::walker::Walker;

/// How the independent insertion trials are scheduled. Both modes give the
/// same count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    #[default]
    Sequential,
    Parallel,
}

/// Cells that may receive the extra obstacle: everything still empty, so
/// never the start marker and never an existing obstacle.
pub fn candidates(grid: &Grid) -> Vec<Position> {
    grid.cells()
        .filter(|&(_, cell)| cell == Cell::Empty)
        .map(|(pos, _)| pos)
        .collect()
}

/// Walks a fresh copy of `grid` with one obstacle added at `obstacle`.
pub fn induces_loop(grid: &Grid, start: Position, obstacle: Position) -> Result<bool, GridError> {
    let mut trial = grid.clone();
    trial.set(obstacle, Cell::Obstacle)?;
    Ok(Walker::with_start(trial, start)?.run().is_loop())
}

pub fn count_loop_insertions(grid: &Grid, mode: SearchMode) -> Result<usize, GridError> {
    let start = grid.start_position()?;
    let candidates = candidates(grid);
    debug!(candidates = candidates.len(), ?mode, %start, "trying obstacle insertions");

    let trial = |&obstacle: &Position| induces_loop(grid, start, obstacle).map(usize::from);
    let looping = match mode {
        SearchMode::Sequential => candidates.iter().map(trial).sum::<Result<usize, _>>()?,
        SearchMode::Parallel => candidates.par_iter().map(trial).sum::<Result<usize, _>>()?,
    };

    debug!(looping, "obstacle search finished");
    Ok(looping)
}
