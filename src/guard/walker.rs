use tracing::trace;

use super::grid::{Cell, Direction, Grid, GridError, Position};

/// Consecutive steps onto already visited cells after which a walk is
/// declared a loop.
pub const LOOP_STREAK_THRESHOLD: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStatus {
    Running,
    ExitedBounds,
    LoopDetected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOutcome {
    Exited { unique_positions: usize },
    Looped,
}

impl WalkOutcome {
    pub fn unique_positions(self) -> Option<usize> {
        match self {
            Self::Exited { unique_positions } => Some(unique_positions),
            Self::Looped => None,
        }
    }

    pub fn is_loop(self) -> bool {
        self == Self::Looped
    }
}

/// Moves the agent through its own copy of the grid, leaving `Visited`
/// markers behind it.
///
/// The exit move always counts as one more unique position, even when the
/// last cell before the edge had been walked over already.
#[derive(Debug, Clone)]
pub struct Walker {
    grid: Grid,
    position: Position,
    direction: Direction,
    unique_positions: usize,
    revisit_streak: u32,
    status: WalkStatus,
}

impl Walker {
    pub fn new(grid: Grid) -> Result<Self, GridError> {
        let start = grid.start_position()?;
        Self::with_start(grid, start)
    }

    /// Starts facing up at `start` without scanning the grid for the marker.
    pub fn with_start(grid: Grid, start: Position) -> Result<Self, GridError> {
        if !grid.contains(start) {
            return Err(GridError::OutOfBounds(start));
        }
        Ok(Self {
            grid,
            position: start,
            direction: Direction::Up,
            unique_positions: 0,
            revisit_streak: 0,
            status: WalkStatus::Running,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn unique_positions(&self) -> usize {
        self.unique_positions
    }

    pub fn revisit_streak(&self) -> u32 {
        self.revisit_streak
    }

    pub fn status(&self) -> WalkStatus {
        self.status
    }

    /// Turns as often as needed, then moves one cell. Terminal states stick.
    pub fn step(&mut self) -> WalkStatus {
        if self.status != WalkStatus::Running {
            return self.status;
        }

        // four turns in place without a free cell means obstacles on every side
        for _ in 0..4 {
            let next = self.position.step(self.direction);
            let Some(cell) = self.grid.get(next) else {
                self.unique_positions += 1;
                self.status = WalkStatus::ExitedBounds;
                trace!(%next, unique = self.unique_positions, "left the grid");
                return self.status;
            };

            match cell {
                Cell::Obstacle => {
                    self.direction = self.direction.turn_right();
                    continue;
                }
                Cell::Visited => {
                    self.revisit_streak += 1;
                    if self.revisit_streak >= LOOP_STREAK_THRESHOLD {
                        self.status = WalkStatus::LoopDetected;
                        trace!(position = %self.position, "revisit streak reached threshold");
                        return self.status;
                    }
                }
                Cell::Empty | Cell::Agent(_) => {
                    self.revisit_streak = 0;
                    self.unique_positions += 1;
                }
            }

            if let Some(current) = self.grid.get_mut(self.position) {
                *current = Cell::Visited;
            }
            self.position = next;
            if let Some(current) = self.grid.get_mut(next) {
                *current = Cell::Agent(self.direction);
            }
            trace!(
                position = %self.position,
                direction = ?self.direction,
                unique = self.unique_positions,
                streak = self.revisit_streak,
                "step"
            );
            return self.status;
        }

        self.status = WalkStatus::LoopDetected;
        trace!(position = %self.position, "boxed in by obstacles");
        self.status
    }

    pub fn outcome(&self) -> Option<WalkOutcome> {
        match self.status {
            WalkStatus::Running => None,
            WalkStatus::ExitedBounds => Some(WalkOutcome::Exited {
                unique_positions: self.unique_positions,
            }),
            WalkStatus::LoopDetected => Some(WalkOutcome::Looped),
        }
    }

    pub fn run(&mut self) -> WalkOutcome {
        loop {
            if let Some(outcome) = self.outcome() {
                return outcome;
            }
            self.step();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(input: &str) -> WalkOutcome {
        let grid = Grid::parse(input).expect("parse");
        Walker::new(grid).expect("start").run()
    }

    #[test]
    fn leaves_upwards_from_the_middle() {
        assert_eq!(walk("...\n.^.\n..."), WalkOutcome::Exited { unique_positions: 2 });
    }

    #[test]
    fn leaves_immediately_from_the_top_edge() {
        assert_eq!(walk("^..\n...\n..."), WalkOutcome::Exited { unique_positions: 1 });
    }

    #[test]
    fn turns_around_obstacles() {
        assert_eq!(walk(".#.\n.^#\n..."), WalkOutcome::Exited { unique_positions: 2 });
    }

    #[test]
    fn exits_through_the_short_side_of_a_ragged_row() {
        // row 1 ends right after the start, so turning right leaves the grid
        assert_eq!(walk(".#.\n.^\n..."), WalkOutcome::Exited { unique_positions: 1 });
    }

    #[test]
    fn exit_counts_even_when_leaving_from_a_revisited_cell() {
        // up, turn twice, back down over the start and off the bottom edge
        let grid = Grid::parse(".#.\n..#\n.^.").expect("parse");
        let mut walker = Walker::new(grid).expect("start");
        assert_eq!(walker.run(), WalkOutcome::Exited { unique_positions: 2 });
        assert_eq!(walker.revisit_streak(), 1);
        assert_eq!(walker.position(), Position::new(2, 1));
    }

    #[test]
    fn step_marks_trail_and_facing() {
        let grid = Grid::parse("#..\n...\n.^.").expect("parse");
        let mut walker = Walker::new(grid).expect("start");
        assert_eq!(walker.step(), WalkStatus::Running);
        assert_eq!(walker.position(), Position::new(1, 1));
        assert_eq!(walker.grid().to_string(), "#..\n.^.\n.X.");
        assert_eq!(walker.unique_positions(), 1);
        assert_eq!(walker.step(), WalkStatus::Running);
        assert_eq!(walker.step(), WalkStatus::ExitedBounds);
        assert_eq!(walker.outcome(), Some(WalkOutcome::Exited { unique_positions: 3 }));
    }

    #[test]
    fn turns_then_moves_within_one_step() {
        let grid = Grid::parse(".#.\n.^.\n...").expect("parse");
        let mut walker = Walker::new(grid).expect("start");
        walker.step();
        assert_eq!(walker.direction(), Direction::Right);
        assert_eq!(walker.position(), Position::new(1, 2));
        assert_eq!(walker.unique_positions(), 1);
    }

    #[test]
    fn closed_ring_is_a_loop() {
        assert_eq!(walk(".#...\n....#\n.^...\n#....\n...#."), WalkOutcome::Looped);
    }

    #[test]
    fn loop_is_reported_after_the_streak_threshold() {
        let grid = Grid::parse(".#...\n....#\n.^...\n#....\n...#.").expect("parse");
        let mut walker = Walker::new(grid).expect("start");
        let mut steps = 0;
        while walker.step() == WalkStatus::Running {
            steps += 1;
            assert!(walker.revisit_streak() < LOOP_STREAK_THRESHOLD);
        }
        assert_eq!(walker.status(), WalkStatus::LoopDetected);
        assert_eq!(walker.revisit_streak(), LOOP_STREAK_THRESHOLD);
        // seven fresh cells lead back to the start, every later move is a revisit
        assert_eq!(steps, 7 + LOOP_STREAK_THRESHOLD as usize - 1);
    }

    #[test]
    fn boxed_in_agent_is_a_loop() {
        assert_eq!(walk("###\n#^#\n###"), WalkOutcome::Looped);
    }

    #[test]
    fn terminal_state_is_sticky() {
        let grid = Grid::parse("^").expect("parse");
        let mut walker = Walker::new(grid).expect("start");
        assert_eq!(walker.step(), WalkStatus::ExitedBounds);
        assert_eq!(walker.step(), WalkStatus::ExitedBounds);
        assert_eq!(walker.unique_positions(), 1);
    }

    #[test]
    fn start_outside_the_grid_is_rejected() {
        let grid = Grid::parse("...").expect("parse");
        assert_eq!(
            Walker::with_start(grid, Position::new(3, 0)).unwrap_err(),
            GridError::OutOfBounds(Position::new(3, 0))
        );
    }
}
