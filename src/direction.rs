use serde::Serialize;

/// A `(row, col)` coordinate in the maze.
///
/// Coordinates are signed so the neighbours of cells on the top or left edge can
/// still be expressed (and rejected by the grid).
pub type Position = (isize, isize);

/// Represents the heading of the robot.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
    /// No heading yet, or the last one was lost.
    #[default]
    None,
}

impl Direction {
    /// The four headings the robot can actually move in, clockwise from `Up`.
    pub const CARDINAL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Returns the `(row, col)` offset of a single step in this direction.
    pub fn to_delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::None => (0, 0),
        }
    }

    /// Returns the direction of the step taking `from` to `to`.
    ///
    /// `Direction::None` is returned when the two positions are not 4-adjacent.
    pub fn between(from: Position, to: Position) -> Direction {
        let delta = (to.0 - from.0, to.1 - from.1);

        Direction::CARDINAL
            .into_iter()
            .find(|direction| direction.to_delta() == delta)
            .unwrap_or(Direction::None)
    }

    /// Returns the position one step away from `position` in this direction.
    pub fn step(self, position: Position) -> Position {
        let (d_row, d_col) = self.to_delta();
        (position.0 + d_row, position.1 + d_col)
    }

    pub fn turn_right(self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
            Direction::None => Direction::None,
        }
    }

    pub fn turn_left(self) -> Direction {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
            Direction::None => Direction::None,
        }
    }

    pub fn opposite(self) -> Direction {
        self.turn_right().turn_right()
    }
}
