//! The board engine: grid storage, hole placement, move generation and
//! flipping.
//!
//! [`Board`] knows nothing about players or turns. Moves can only be applied
//! through a [`Move`] taken from a [`MoveList`] computed on the same board
//! position, so an illegal placement is never representable.

use crate::cell::{Cell, Color};
use crate::error::EngineError;
use crate::location::{Position, Rectangle};
use crate::{utils, MAX_COLS, MAX_ROWS, MIN_EDGE};
use std::fmt::{self, Display, Formatter};
use std::ops::Index;
use tracing::{debug, trace};

/// Column and row steps for the eight scan directions, clockwise from
/// north-west.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

/// A rectangular Othello board with even dimensions.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    // Bumped on every mutation; stamps move lists so stale moves are refused.
    revision: u64,
}

/// A legal placement for one colour on one board position.
/// Only obtainable from a [`MoveList`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Move {
    position: Position,
    color: Color,
    revision: u64,
}

/// The deduplicated legal destinations for one colour, sorted descending by
/// column letter and then descending by line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MoveList {
    color: Color,
    revision: u64,
    positions: Vec<Position>,
}

/// Split a comma-separated layout string into its rows.
pub fn parse_layout(layout: &str) -> Vec<&str> {
    layout.trim().split(',').collect()
}

fn validate_dimensions(rows: usize, cols: usize) -> Result<(), EngineError> {
    if rows % 2 != 0 || !(MIN_EDGE..=MAX_ROWS).contains(&rows) {
        return Err(EngineError::InvalidRows { rows });
    }
    if cols % 2 != 0 || !(MIN_EDGE..=MAX_COLS).contains(&cols) {
        return Err(EngineError::InvalidColumns { cols });
    }
    Ok(())
}

impl Board {
    /// Construct a board with the four starting stones in the centre.
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        validate_dimensions(rows, cols)?;

        let mut board = Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            revision: 0,
        };

        let (row, col) = (rows / 2, cols / 2);
        board.set(Position::from_coords(col - 1, row - 1), Cell::White);
        board.set(Position::from_coords(col, row - 1), Cell::Black);
        board.set(Position::from_coords(col, row), Cell::White);
        board.set(Position::from_coords(col - 1, row), Cell::Black);

        Ok(board)
    }

    /// Construct a board from one string per row, using the symbols
    /// `B`, `W`, `#` and `-`.
    pub fn with_layout<I, S>(rows: usize, cols: usize, layout: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        validate_dimensions(rows, cols)?;

        let mut cells = Vec::with_capacity(rows * cols);
        let mut found = 0;

        for line in layout {
            let line = line.as_ref();
            found += 1;

            if line.is_empty() {
                return Err(EngineError::EmptyRow { line: found });
            }

            let row = line
                .chars()
                .map(Cell::try_from)
                .collect::<Result<Vec<Cell>, EngineError>>()?;

            if row.len() != cols {
                return Err(EngineError::RowLength {
                    line: found,
                    expected: cols,
                    found: row.len(),
                });
            }

            cells.extend(row);
        }

        if found != rows {
            return Err(EngineError::RowCount {
                expected: rows,
                found,
            });
        }

        Ok(Self {
            rows,
            cols,
            cells,
            revision: 0,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns whether `position` lies on this board.
    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        position.column() < self.cols && position.row() < self.rows
    }

    /// Get the content of a cell, or `None` if it is off the board.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        if self.contains(position) {
            Some(self[position])
        } else {
            None
        }
    }

    /// Returns whether `first` and `second` are upper-left and lower-right
    /// corners of a rectangle.
    pub fn is_rectangle(&self, first: Position, second: Position) -> bool {
        Rectangle::new(first, second).is_some()
    }

    /// Returns whether [`set_hole`](Self::set_hole) would succeed.
    pub fn hole_is_allowed(&self, first: Position, second: Position) -> bool {
        self.hole_area(first, second).is_ok()
    }

    /// Turn every cell of the rectangle spanned by `first` and `second` into
    /// a hole. Nothing is changed if any check fails.
    pub fn set_hole(&mut self, first: Position, second: Position) -> Result<(), EngineError> {
        let area = self.hole_area(first, second)?;

        for position in area.cells() {
            self.set(position, Cell::Hole);
        }
        self.revision += 1;

        debug!(%area, cells = area.area(), "placed hole");
        Ok(())
    }

    fn hole_area(&self, first: Position, second: Position) -> Result<Rectangle, EngineError> {
        for position in [first, second] {
            if !self.contains(position) {
                return Err(EngineError::PointOutOfBounds { position });
            }
        }

        let area = Rectangle::new(first, second)
            .ok_or(EngineError::NotARectangle { first, second })?;

        if area.cells().any(|position| self[position].is_stone()) {
            return Err(EngineError::HoleOverlapsStones);
        }

        Ok(area)
    }

    /// Compute every empty cell where `color` can place a stone.
    ///
    /// From each stone of `color`, each direction is walked across a run of
    /// opposing stones; an empty cell directly after a non-empty run is a
    /// destination. The edge, holes and own stones end a walk without one.
    pub fn legal_moves(&self, color: Color) -> MoveList {
        let mut positions: Vec<Position> = self
            .positions()
            .filter(|&origin| self[origin].is(color))
            .flat_map(|origin| {
                DIRECTIONS
                    .iter()
                    .filter_map(move |&direction| match self.walk(origin, direction, color) {
                        (crossed, Some(end)) if crossed > 0 && self[end] == Cell::Empty => {
                            Some(end)
                        }
                        _ => None,
                    })
            })
            .collect();

        positions.sort_unstable_by(|a, b| b.cmp(a));
        positions.dedup();

        trace!(%color, count = positions.len(), "computed legal moves");

        MoveList {
            color,
            revision: self.revision,
            positions,
        }
    }

    /// Place the stone for `mv` and flip every bracketed run of opposing
    /// stones. Returns the number of stones flipped.
    pub fn apply_move(&mut self, mv: Move) -> Result<usize, EngineError> {
        if mv.revision != self.revision {
            return Err(EngineError::StaleMove);
        }

        let stone = Cell::from(mv.color);
        self.set(mv.position, stone);

        let mut flipped = 0;
        for &direction in DIRECTIONS.iter() {
            let (crossed, end) = self.walk(mv.position, direction, mv.color);
            let bracketed = crossed > 0 && end.map_or(false, |end| self[end] == stone);
            if !bracketed {
                continue;
            }

            let run: Vec<Position> = self.ray(mv.position, direction).take(crossed).collect();
            for position in run {
                self.set(position, stone);
            }
            flipped += crossed;
        }
        self.revision += 1;

        debug!(position = %mv.position, color = %mv.color, flipped, "applied move");
        Ok(flipped)
    }

    /// Count the stones of `color`.
    pub fn count_stones(&self, color: Color) -> usize {
        self.count(Cell::from(color))
    }

    pub fn count_empty(&self) -> usize {
        self.count(Cell::Empty)
    }

    pub fn count_holes(&self) -> usize {
        self.count(Cell::Hole)
    }

    /// The grid as one symbol string per row, top row first.
    /// Feeding the result to [`Board::with_layout`] rebuilds the same grid.
    pub fn field(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    /// Iterate over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let cols = self.cols;
        (0..self.rows * self.cols).map(move |index| Position::from_coords(index % cols, index / cols))
    }

    fn count(&self, target: Cell) -> usize {
        self.cells.iter().filter(|&&cell| cell == target).count()
    }

    /// Positions strictly after `origin` along `direction`, up to the edge.
    fn ray(&self, origin: Position, direction: (isize, isize)) -> impl Iterator<Item = Position> {
        let (cols, rows) = (self.cols, self.rows);
        std::iter::successors(origin.offset(direction, cols, rows), move |position| {
            position.offset(direction, cols, rows)
        })
    }

    /// Walk from `origin` along `direction` over stones opposing `color`.
    /// Returns how many were crossed and the first cell that is not one,
    /// or `None` if the walk ran off the board.
    fn walk(&self, origin: Position, direction: (isize, isize), color: Color) -> (usize, Option<Position>) {
        let opponent = Cell::from(!color);
        let mut crossed = 0;

        for position in self.ray(origin, direction) {
            if self[position] != opponent {
                return (crossed, Some(position));
            }
            crossed += 1;
        }

        (crossed, None)
    }

    #[inline]
    fn set(&mut self, position: Position, cell: Cell) {
        let index = self.index_of(position);
        self.cells[index] = cell;
    }

    #[inline]
    fn index_of(&self, position: Position) -> usize {
        debug_assert!(self.contains(position));
        position.row() * self.cols + position.column()
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    /// Panics if `position` is off the board.
    fn index(&self, position: Position) -> &Cell {
        assert!(self.contains(position), "{} is not on the board", position);
        &self.cells[self.index_of(position)]
    }
}

/// The plain form prints one symbol row per line; the alternate form (`{:#}`)
/// adds column letters and line numbers.
impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return utils::format_grid(
                self.cells.iter().map(|cell| cell.symbol()),
                self.cols,
                self.rows,
                f,
            );
        }

        for (index, row) in self.field().iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

impl Move {
    #[inline]
    pub fn position(self) -> Position {
        self.position
    }

    #[inline]
    pub fn color(self) -> Color {
        self.color
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.position, f)
    }
}

impl MoveList {
    /// The colour these moves are for.
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns whether `position` is a legal destination.
    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    /// The move to `position`, if it is a legal destination.
    pub fn get(&self, position: Position) -> Option<Move> {
        if self.contains(position) {
            Some(self.make(position))
        } else {
            None
        }
    }

    /// The destinations, in presentation order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Iterate over the moves in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.positions.iter().map(move |&position| self.make(position))
    }

    fn make(&self, position: Position) -> Move {
        Move {
            position,
            color: self.color,
            revision: self.revision,
        }
    }
}

impl Display for MoveList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let string = self
            .positions
            .iter()
            .map(|position| position.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    fn labels(moves: &MoveList) -> Vec<String> {
        moves.positions().iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn default_layout_8x8() {
        let board = Board::new(8, 8).unwrap();
        assert_eq!(
            board.field(),
            [
                "--------",
                "--------",
                "--------",
                "---WB---",
                "---BW---",
                "--------",
                "--------",
                "--------",
            ]
        );
    }

    #[test]
    fn default_layout_rectangular() {
        let board = Board::new(2, 6).unwrap();
        assert_eq!(board.field(), ["--WB--", "--BW--"]);
    }

    #[test]
    fn invalid_dimensions() {
        assert_eq!(Board::new(0, 8), Err(EngineError::InvalidRows { rows: 0 }));
        assert_eq!(Board::new(7, 8), Err(EngineError::InvalidRows { rows: 7 }));
        assert_eq!(Board::new(100, 8), Err(EngineError::InvalidRows { rows: 100 }));
        assert_eq!(Board::new(8, 28), Err(EngineError::InvalidColumns { cols: 28 }));
        assert_eq!(Board::new(8, 5), Err(EngineError::InvalidColumns { cols: 5 }));
        assert!(Board::new(98, 26).is_ok());
        assert!(Board::new(2, 2).is_ok());
    }

    #[test]
    fn layout_validation_order() {
        assert_eq!(
            Board::with_layout(3, 4, ["----"]),
            Err(EngineError::InvalidRows { rows: 3 })
        );
        assert_eq!(
            Board::with_layout(2, 2, ["-x", "---"]),
            Err(EngineError::InvalidSymbol { symbol: 'x' })
        );
        assert_eq!(
            Board::with_layout(2, 2, ["---", "-x"]),
            Err(EngineError::RowLength {
                line: 1,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            Board::with_layout(2, 2, ["BW", ""]),
            Err(EngineError::EmptyRow { line: 2 })
        );
        assert_eq!(
            Board::with_layout(2, 2, parse_layout("BW,WB,")),
            Err(EngineError::EmptyRow { line: 3 })
        );
        assert_eq!(
            Board::with_layout(4, 2, ["BW", "WB"]),
            Err(EngineError::RowCount {
                expected: 4,
                found: 2
            })
        );
    }

    #[test]
    fn field_round_trips_through_layout() {
        let layout = ["B#W-", "--WB"];
        let board = Board::with_layout(2, 4, layout).unwrap();
        assert_eq!(board.field(), layout);
        assert_eq!(Board::with_layout(2, 4, board.field()).unwrap(), board);
    }

    #[test]
    fn parse_layout_splits_rows() {
        assert_eq!(parse_layout("B-,-W"), ["B-", "-W"]);
        assert_eq!(parse_layout("BW"), ["BW"]);
    }

    #[test]
    fn opening_moves_8x8() {
        let board = Board::new(8, 8).unwrap();
        let moves = board.legal_moves(Color::Black);
        assert_eq!(labels(&moves), ["F5", "E6", "D3", "C4"]);
        assert_eq!(moves.color(), Color::Black);

        let moves = board.legal_moves(Color::White);
        assert_eq!(labels(&moves), ["F4", "E3", "D6", "C5"]);
    }

    #[test]
    fn duplicate_destinations_collapse() {
        // C1 is reachable from A1 (east) and from C3 (north).
        let board = Board::with_layout(4, 4, ["BW--", "----", "--B-", "----"]);
        let mut board = board.unwrap();
        board.set(pos("C2"), Cell::White);
        let moves = board.legal_moves(Color::Black);
        assert_eq!(labels(&moves), ["C1"]);
    }

    #[test]
    fn holes_block_scans() {
        let board = Board::with_layout(2, 4, ["BW#-", "----"]).unwrap();
        assert!(board.legal_moves(Color::Black).is_empty());
    }

    #[test]
    fn runs_to_the_edge_yield_no_move() {
        let board = Board::with_layout(2, 4, ["-BWW", "----"]).unwrap();
        assert!(board.legal_moves(Color::Black).is_empty());
        assert_eq!(labels(&board.legal_moves(Color::White)), ["A1"]);
    }

    #[test]
    fn apply_flips_bracketed_runs() {
        let mut board = Board::new(8, 8).unwrap();
        let mv = board.legal_moves(Color::Black).get(pos("D3")).unwrap();
        assert_eq!(board.apply_move(mv), Ok(1));
        assert_eq!(board[pos("D3")], Cell::Black);
        assert_eq!(board[pos("D4")], Cell::Black);
        assert_eq!(board.count_stones(Color::Black), 4);
        assert_eq!(board.count_stones(Color::White), 1);
    }

    #[test]
    fn apply_flips_several_directions() {
        let mut board = Board::with_layout(
            4,
            4,
            ["B-B-", "WWW-", "-WB-", "B---"],
        )
        .unwrap();
        let mv = board.legal_moves(Color::Black).get(pos("A3")).unwrap();
        assert_eq!(board.apply_move(mv), Ok(3));
        assert_eq!(board.field(), ["B-B-", "BBW-", "BBB-", "B---"]);
    }

    #[test]
    fn apply_does_not_flip_runs_ending_in_holes() {
        let mut board = Board::with_layout(4, 4, ["-WB-", "-W--", "--#-", "----"]).unwrap();
        let mv = board.legal_moves(Color::Black).get(pos("A1")).unwrap();
        assert_eq!(board.apply_move(mv), Ok(1));
        assert_eq!(board.field(), ["BBB-", "-W--", "--#-", "----"]);
    }

    #[test]
    fn stale_moves_are_rejected() {
        let mut board = Board::new(8, 8).unwrap();
        let moves = board.legal_moves(Color::Black);
        let first = moves.get(pos("D3")).unwrap();
        let second = moves.get(pos("C4")).unwrap();
        board.apply_move(first).unwrap();
        assert_eq!(board.apply_move(second), Err(EngineError::StaleMove));
        assert_eq!(board.apply_move(first), Err(EngineError::StaleMove));
    }

    #[test]
    fn hole_checks() {
        let mut board = Board::new(4, 4).unwrap();
        assert_eq!(
            board.set_hole(pos("A1"), pos("E1")),
            Err(EngineError::PointOutOfBounds {
                position: pos("E1")
            })
        );
        assert_eq!(
            board.set_hole(pos("A5"), pos("A1")),
            Err(EngineError::PointOutOfBounds {
                position: pos("A5")
            })
        );
        assert_eq!(
            board.set_hole(pos("B1"), pos("A2")),
            Err(EngineError::NotARectangle {
                first: pos("B1"),
                second: pos("A2")
            })
        );
        assert_eq!(
            board.set_hole(pos("A1"), pos("B2")),
            Err(EngineError::HoleOverlapsStones)
        );
        assert!(!board.hole_is_allowed(pos("A1"), pos("B2")));
        assert_eq!(board.count_holes(), 0);

        assert!(board.hole_is_allowed(pos("A1"), pos("D1")));
        board.set_hole(pos("A1"), pos("D1")).unwrap();
        assert_eq!(board.field()[0], "####");

        // Cells that are already holes may be covered again.
        board.set_hole(pos("A1"), pos("A1")).unwrap();
        assert_eq!(board.count_holes(), 4);
    }

    #[test]
    fn contains_is_strict() {
        let board = Board::new(4, 6).unwrap();
        assert!(board.contains(pos("F4")));
        assert!(!board.contains(pos("G4")));
        assert!(!board.contains(pos("F5")));
        assert_eq!(board.cell(pos("G1")), None);
        assert_eq!(board.cell(pos("C2")), Some(Cell::White));
    }

    #[test]
    fn display() {
        let board = Board::new(2, 2).unwrap();
        assert_eq!(board.to_string(), "WB\nBW");
        assert_eq!(format!("{:#}", board), "    A B\n  1 W B\n  2 B W");
    }

    #[test]
    fn move_list_display() {
        let board = Board::new(8, 8).unwrap();
        assert_eq!(
            board.legal_moves(Color::Black).to_string(),
            "[F5, E6, D3, C4]"
        );
    }
}
