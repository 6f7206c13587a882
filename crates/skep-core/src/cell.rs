//! The hive-map cell alphabet and its raw integer codes.

use crate::direction::Direction;
use crate::error::CodeError;

/// One cell of a hive map.
///
/// Raw codes follow the original map encoding: `-1` amnesiac bee, `0`
/// empty, `1..=4` bee with heading, `5` wall, `6` heater, `7` cooler.
///
/// Bees and amnesiac bees occupy a cell ([`is_bee`](Cell::is_bee));
/// walls, heaters, and coolers block movement
/// ([`is_obstacle`](Cell::is_obstacle)).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// A bee that has forgotten its heading (code -1).
    Amnesia,
    /// Nothing here (code 0).
    Empty,
    /// A bee travelling in the given heading (codes 1 through 4).
    Bee(Direction),
    /// Impassable wall (code 5).
    Wall,
    /// Heat source (code 6).
    Heater,
    /// Cold source (code 7).
    Cooler,
}

impl Cell {
    /// Decode a raw map code.
    pub fn from_code(code: i32) -> Result<Cell, CodeError> {
        match code {
            -1 => Ok(Cell::Amnesia),
            0 => Ok(Cell::Empty),
            1..=4 => Ok(Cell::Bee(Direction::try_from(code)?)),
            5 => Ok(Cell::Wall),
            6 => Ok(Cell::Heater),
            7 => Ok(Cell::Cooler),
            _ => Err(CodeError::UnknownCell { code }),
        }
    }

    /// The raw map code for this cell.
    pub fn code(self) -> i32 {
        match self {
            Cell::Amnesia => -1,
            Cell::Empty => 0,
            Cell::Bee(dir) => dir.code(),
            Cell::Wall => 5,
            Cell::Heater => 6,
            Cell::Cooler => 7,
        }
    }

    /// Whether a bee occupies this cell (directed or amnesiac).
    pub fn is_bee(self) -> bool {
        matches!(self, Cell::Bee(_) | Cell::Amnesia)
    }

    /// Whether this cell blocks movement: wall, heater, or cooler.
    pub fn is_obstacle(self) -> bool {
        matches!(self, Cell::Wall | Cell::Heater | Cell::Cooler)
    }
}
