//! Code for working with [`Position`]s and [`Rectangle`]s on the board.

use crate::MAX_COLS;
use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};

/// A cell address: a column letter (`A` = 0) and a line (`1` = row 0).
///
/// Positions are not tied to a board; whether one exists on a given board is
/// answered by [`Board::contains`](crate::Board::contains).
///
/// The derived ordering is lexicographic by column, then row. Move lists are
/// presented in the reverse of this order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Position {
    column: u8,
    row: u8,
}

impl Position {
    /// Convert from 0-based column and row coordinates.
    pub fn from_coords(column: usize, row: usize) -> Self {
        assert!(column < MAX_COLS && row <= u8::MAX as usize);
        Self {
            column: column as u8,
            row: row as u8,
        }
    }

    /// Build from a column letter and a 1-based line.
    /// Returns `None` for letters outside `A..=Z` or line 0.
    pub fn from_label(letter: char, line: usize) -> Option<Self> {
        if !letter.is_ascii_uppercase() {
            return None;
        }
        let row = u8::try_from(line.checked_sub(1)?).ok()?;
        Some(Self {
            column: letter as u8 - b'A',
            row,
        })
    }

    /// 0-based column index.
    #[inline]
    pub fn column(self) -> usize {
        self.column as usize
    }

    /// 0-based row index.
    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// The column letter.
    pub fn letter(self) -> char {
        (b'A' + self.column) as char
    }

    /// The 1-based line number.
    pub fn line(self) -> usize {
        self.row() + 1
    }

    /// The neighbouring position one step along `(dc, dr)`, if its coordinates
    /// are non-negative and below `cols` and `rows`.
    #[inline]
    pub(crate) fn offset(self, (dc, dr): (isize, isize), cols: usize, rows: usize) -> Option<Self> {
        let column = self.column().checked_add_signed(dc)?;
        let row = self.row().checked_add_signed(dr)?;
        if column < cols && row < rows {
            Some(Self::from_coords(column, row))
        } else {
            None
        }
    }
}

/// Convert this [`Position`] into string notation ("C4").
impl fmt::Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char(self.letter())?;
        write!(f, "{}", self.line())
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display("invalid position string")]
pub struct ParsePositionError;

/// Build a [`Position`] from string notation: one letter and a 1-based line
/// of one or two digits ("A4", "z12").
impl std::str::FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(ParsePositionError)?.to_ascii_uppercase();
        let digits = chars.as_str();

        if digits.is_empty() || digits.len() > 2 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParsePositionError);
        }

        let line: usize = digits.parse().map_err(|_| ParsePositionError)?;
        Self::from_label(letter, line).ok_or(ParsePositionError)
    }
}

/// An axis-aligned block of cells given by its upper-left and lower-right
/// corners, both inclusive.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rectangle {
    first: Position,
    last: Position,
}

impl Rectangle {
    /// Returns `None` unless `first` is left of or level with `last` and
    /// above or level with it. Corner order matters.
    pub fn new(first: Position, last: Position) -> Option<Self> {
        if first.column <= last.column && first.row <= last.row {
            Some(Self { first, last })
        } else {
            None
        }
    }

    pub fn first(self) -> Position {
        self.first
    }

    pub fn last(self) -> Position {
        self.last
    }

    /// Number of cells covered.
    pub fn area(self) -> usize {
        (self.last.column() - self.first.column() + 1) * (self.last.row() - self.first.row() + 1)
    }

    pub fn contains(self, position: Position) -> bool {
        (self.first.column..=self.last.column).contains(&position.column)
            && (self.first.row..=self.last.row).contains(&position.row)
    }

    /// Iterate over the covered cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        let columns = self.first.column()..=self.last.column();
        (self.first.row()..=self.last.row()).flat_map(move |row| {
            columns
                .clone()
                .map(move |column| Position::from_coords(column, row))
        })
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.first, self.last)
    }
}
