use anyhow::{bail, Result};
use tracing::{debug, trace};

use crate::guard::{count_loop_insertions, Grid, SearchMode, Walker};

pub fn solve(part: u8, input: &str, mode: SearchMode) -> Result<String> {
    let grid = Grid::parse(input)?;
    debug!(rows = grid.height(), cells = grid.cells().count(), "parsed patrol grid");
    if part == 1 {
        let mut walker = Walker::new(grid)?;
        let outcome = walker.run();
        trace!("patrolled grid:\n{}", walker.grid());
        let Some(unique_positions) = outcome.unique_positions() else {
            bail!("guard never leaves the grid")
        };
        Ok(unique_positions.to_string())
    } else {
        Ok(count_loop_insertions(&grid, mode)?.to_string())
    }
}
