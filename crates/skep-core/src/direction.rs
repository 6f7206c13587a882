//! Bee headings and their raw map codes.

use crate::error::CodeError;

/// The four headings a bee can carry on the hive map.
///
/// Raw map codes are 1 through 4 in clockwise order starting from `Up`.
/// Code 0 is an empty cell, not a heading — see [`Cell`](crate::Cell).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards smaller rows (code 1).
    Up,
    /// Towards larger columns (code 2).
    Right,
    /// Towards larger rows (code 3).
    Down,
    /// Towards smaller columns (code 4).
    Left,
}

impl Direction {
    /// All headings in code order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// The reversed heading: up↔down, left↔right.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// The raw map code for this heading (1 through 4).
    pub fn code(self) -> i32 {
        match self {
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Down => 3,
            Direction::Left => 4,
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = CodeError;

    fn try_from(code: i32) -> Result<Self, CodeError> {
        match code {
            1 => Ok(Direction::Up),
            2 => Ok(Direction::Right),
            3 => Ok(Direction::Down),
            4 => Ok(Direction::Left),
            _ => Err(CodeError::UnknownDirection { code }),
        }
    }
}
