//! Cell contents and stone colours.

use crate::error::EngineError;
use derive_more::Display;

/// One of the two stone colours. Black always moves first.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Display)]
pub enum Color {
    #[display("black")]
    Black,
    #[display("white")]
    White,
}

impl Default for Color {
    /// Gets the starting colour (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the opposing colour.
    fn not(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl Color {
    /// The layout symbol for stones of this colour.
    pub fn symbol(self) -> char {
        Cell::from(self).symbol()
    }
}

impl std::str::FromStr for Color {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let symbol = chars
            .next()
            .ok_or(EngineError::InvalidColor { symbol: ' ' })?;

        match (symbol, chars.next()) {
            ('B', None) => Ok(Color::Black),
            ('W', None) => Ok(Color::White),
            _ => Err(EngineError::InvalidColor { symbol }),
        }
    }
}

/// The content of a single board cell.
///
/// A [`Cell::Hole`] is permanent: it never holds a stone and takes no part in
/// move generation, flipping or counting.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Display)]
pub enum Cell {
    #[display("B")]
    Black,
    #[display("W")]
    White,
    #[display("-")]
    Empty,
    #[display("#")]
    Hole,
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl Cell {
    /// The layout symbol for this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Black => 'B',
            Cell::White => 'W',
            Cell::Empty => '-',
            Cell::Hole => '#',
        }
    }

    /// Returns whether this cell holds a stone of either colour.
    #[inline]
    pub fn is_stone(self) -> bool {
        matches!(self, Cell::Black | Cell::White)
    }

    /// Returns whether this cell holds a stone of `color`.
    #[inline]
    pub fn is(self, color: Color) -> bool {
        self == Cell::from(color)
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

impl TryFrom<char> for Cell {
    type Error = EngineError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'B' => Ok(Cell::Black),
            'W' => Ok(Cell::White),
            '-' => Ok(Cell::Empty),
            '#' => Ok(Cell::Hole),
            _ => Err(EngineError::InvalidSymbol { symbol }),
        }
    }
}

impl TryFrom<Cell> for Color {
    type Error = EngineError;

    fn try_from(cell: Cell) -> Result<Self, Self::Error> {
        match cell {
            Cell::Black => Ok(Color::Black),
            Cell::White => Ok(Color::White),
            Cell::Empty | Cell::Hole => Err(EngineError::InvalidColor {
                symbol: cell.symbol(),
            }),
        }
    }
}
