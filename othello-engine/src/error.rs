//! Errors raised by the board and the game controller.

use crate::location::Position;
use derive_more::{Display, Error};

/// The broad class an [`EngineError`] belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum ErrorKind {
    /// Invalid dimensions or a malformed layout.
    Configuration,
    /// The game is in the wrong state for the operation.
    Precondition,
    /// A position or rectangle that does not fit the board.
    Geometry,
    /// A cell value was used where a stone colour is required.
    Argument,
}

/// A caller-visible failure of the engine.
///
/// The `Display` text is the human-readable message, without any prefix.
#[derive(Clone, Debug, Eq, PartialEq, Display, Error)]
pub enum EngineError {
    #[display("Line length is invalid.")]
    InvalidRows { rows: usize },

    #[display("Column length is invalid.")]
    InvalidColumns { cols: usize },

    #[display("Invalid board parameters.")]
    InvalidSymbol { symbol: char },

    #[display("Invalid board parameters.")]
    EmptyRow { line: usize },

    #[display("Board columns not equal to columns.")]
    RowLength { line: usize, expected: usize, found: usize },

    #[display("Board lines not equal to lines.")]
    RowCount { expected: usize, found: usize },

    #[display("No active game.")]
    NoActiveGame,

    #[display("There is already an active game.")]
    GameAlreadyActive,

    #[display("Cannot add hole area. Game has already started!")]
    GameAlreadyStarted,

    #[display("Point: {position} does not exist.")]
    PointOutOfBounds { position: Position },

    /// A move target off the board; unlike hole corners, the message does not
    /// name the point.
    #[display("Point does not exist.")]
    MoveOutOfBounds { position: Position },

    #[display("The entry is not a rectangle.")]
    NotARectangle { first: Position, second: Position },

    #[display("Hole is not allowed. Stones between the hole!")]
    HoleOverlapsStones,

    #[display("Invalid color. Expected B or W.")]
    InvalidColor { symbol: char },

    #[display("Move was computed for an earlier board position.")]
    StaleMove,
}

impl EngineError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        use EngineError::*;

        match self {
            InvalidRows { .. }
            | InvalidColumns { .. }
            | InvalidSymbol { .. }
            | EmptyRow { .. }
            | RowLength { .. }
            | RowCount { .. } => ErrorKind::Configuration,
            NoActiveGame | GameAlreadyActive | GameAlreadyStarted | StaleMove => {
                ErrorKind::Precondition
            }
            PointOutOfBounds { .. }
            | MoveOutOfBounds { .. }
            | NotARectangle { .. }
            | HoleOverlapsStones => ErrorKind::Geometry,
            InvalidColor { .. } => ErrorKind::Argument,
        }
    }
}
