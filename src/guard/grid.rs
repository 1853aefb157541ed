use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Clockwise: up, right, down, left, up.
    pub fn turn_right(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }

    /// `(row, col)` offset of one step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Up => '^',
            Self::Right => '>',
            Self::Down => 'v',
            Self::Left => '<',
        }
    }
}

/// A grid coordinate. Signed so that a step off the top or left edge is
/// still representable; leaving the grid is how a walk ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: isize,
    pub col: isize,
}

impl Position {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    pub fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self::new(self.row + dr, self.col + dc)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Obstacle,
    Visited,
    Agent(Direction),
}

impl Cell {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Empty),
            '#' => Some(Self::Obstacle),
            '^' => Some(Self::Agent(Direction::Up)),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Obstacle => '#',
            Self::Visited => 'X',
            Self::Agent(dir) => dir.symbol(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("position {0} lies outside the grid")]
    OutOfBounds(Position),
    #[error("unexpected cell '{ch}' at row {row}, column {col}")]
    UnexpectedCell { ch: char, row: usize, col: usize },
    #[error("no start position found")]
    NoStart,
    #[error("ambiguous start position: agents at {first} and {second}")]
    AmbiguousStart { first: Position, second: Position },
}

/// Rows of cells. Rows keep their own lengths; nothing forces the grid to
/// be rectangular, so every bounds check looks at the addressed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn parse(input: &str) -> Result<Self, GridError> {
        let rows = input
            .trim()
            .lines()
            .enumerate()
            .map(|(ri, line)| {
                line.chars()
                    .enumerate()
                    .map(|(ci, ch)| {
                        Cell::from_char(ch).ok_or(GridError::UnexpectedCell { ch, row: ri, col: ci })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rows })
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        self.rows.get(row)?.get(col).copied()
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        self.rows.get_mut(row)?.get_mut(col)
    }

    pub fn at(&self, pos: Position) -> Result<Cell, GridError> {
        self.get(pos).ok_or(GridError::OutOfBounds(pos))
    }

    pub fn set(&mut self, pos: Position, cell: Cell) -> Result<(), GridError> {
        let slot = self.get_mut(pos).ok_or(GridError::OutOfBounds(pos))?;
        *slot = cell;
        Ok(())
    }

    /// Every in-bounds cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(ri, row)| {
            row.iter()
                .enumerate()
                .map(move |(ci, &cell)| (Position::new(ri as isize, ci as isize), cell))
        })
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells().filter(|&(_, c)| c == cell).count()
    }

    /// The single up-facing agent marker. Zero or several markers are both
    /// rejected instead of picking one.
    pub fn start_position(&self) -> Result<Position, GridError> {
        let mut agents = self
            .cells()
            .filter(|&(_, cell)| cell == Cell::Agent(Direction::Up))
            .map(|(pos, _)| pos);
        let first = agents.next().ok_or(GridError::NoStart)?;
        match agents.next() {
            Some(second) => Err(GridError::AmbiguousStart { first, second }),
            None => Ok(first),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (ri, row) in self.rows.iter().enumerate() {
            if ri > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turning_cycles_clockwise() {
        let mut dir = Direction::Up;
        let mut seen = vec![];
        for _ in 0..4 {
            dir = dir.turn_right();
            seen.push(dir);
        }
        assert_eq!(
            seen,
            [Direction::Right, Direction::Down, Direction::Left, Direction::Up]
        );
    }

    #[test]
    fn steps_follow_direction() {
        let pos = Position::new(1, 1);
        assert_eq!(pos.step(Direction::Up), Position::new(0, 1));
        assert_eq!(pos.step(Direction::Down), Position::new(2, 1));
        assert_eq!(pos.step(Direction::Left), Position::new(1, 0));
        assert_eq!(pos.step(Direction::Right), Position::new(1, 2));
    }

    #[test]
    fn parses_and_finds_start() {
        let grid = Grid::parse("...\n.^.\n...").expect("parse");
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.start_position(), Ok(Position::new(1, 1)));
        assert_eq!(grid.at(Position::new(0, 0)), Ok(Cell::Empty));
        assert_eq!(grid.count(Cell::Empty), 8);
    }

    #[test]
    fn walled_start_parses() {
        let grid = Grid::parse("###\n#^#\n###").expect("parse");
        assert_eq!(grid.count(Cell::Obstacle), 8);
        assert_eq!(grid.start_position(), Ok(Position::new(1, 1)));
    }

    #[test]
    fn ragged_rows_use_their_own_length() {
        let grid = Grid::parse("....\n.^\n...").expect("parse");
        assert!(grid.contains(Position::new(0, 3)));
        assert!(!grid.contains(Position::new(1, 2)));
        assert!(grid.contains(Position::new(2, 2)));
        assert_eq!(
            grid.at(Position::new(1, 3)),
            Err(GridError::OutOfBounds(Position::new(1, 3)))
        );
    }

    #[test]
    fn negative_positions_are_out_of_bounds() {
        let grid = Grid::parse("^").expect("parse");
        assert!(!grid.contains(Position::new(-1, 0)));
        assert!(!grid.contains(Position::new(0, -1)));
    }

    #[test]
    fn set_overwrites_and_checks_bounds() {
        let mut grid = Grid::parse("^.").expect("parse");
        grid.set(Position::new(0, 1), Cell::Obstacle).expect("set");
        assert_eq!(grid.to_string(), "^#");
        assert_eq!(
            grid.set(Position::new(1, 0), Cell::Obstacle),
            Err(GridError::OutOfBounds(Position::new(1, 0)))
        );
    }

    #[test]
    fn clones_are_independent() {
        let grid = Grid::parse(".^.").expect("parse");
        let mut copy = grid.clone();
        copy.set(Position::new(0, 0), Cell::Visited).expect("set");
        assert_eq!(grid.to_string(), ".^.");
        assert_eq!(copy.to_string(), "X^.");
    }

    #[test]
    fn rejects_missing_start() {
        let grid = Grid::parse("...\n.#.").expect("parse");
        assert_eq!(grid.start_position(), Err(GridError::NoStart));
    }

    #[test]
    fn rejects_ambiguous_start() {
        let grid = Grid::parse(".^.\n..^").expect("parse");
        assert_eq!(
            grid.start_position(),
            Err(GridError::AmbiguousStart {
                first: Position::new(0, 1),
                second: Position::new(1, 2),
            })
        );
    }

    #[test]
    fn rejects_unknown_symbols() {
        assert_eq!(
            Grid::parse("..\n.>").unwrap_err(),
            GridError::UnexpectedCell { ch: '>', row: 1, col: 1 }
        );
    }
}
