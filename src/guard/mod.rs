//! Guard patrol simulation.
//!
//! An agent walks a grid of obstacles, turning clockwise whenever the next
//! cell is blocked, until it either leaves the grid or keeps treading over
//! its own trail long enough to count as a loop. The search on top tries
//! every single extra obstacle and counts the ones that trap the agent.

pub mod grid;
pub mod search;
pub mod walker;

pub use grid::{Cell, Direction, Grid, GridError, Position};
pub use search::{count_loop_insertions, SearchMode};
pub use walker::{WalkOutcome, WalkStatus, Walker, LOOP_STREAK_THRESHOLD};
