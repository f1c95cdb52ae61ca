//! `othello-engine` implements the rules of Othello on rectangular boards of
//! any even size, with optional custom layouts and permanent holes.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`Board`] owns the grid: layouts, holes, legal-move generation and
//!    flipping. It has no notion of players or turns. Moves can only be
//!    applied through a [`Move`] drawn from a fresh [`MoveList`].
//!  - [`GameController`] layers a two-player game on top: turn order,
//!    passing, the end of the game and its result.

pub mod test_utils;

mod board;
mod cell;
mod error;
mod game;
mod location;
mod utils;

pub use board::*;
pub use cell::*;
pub use error::*;
pub use game::*;
pub use location::*;

/// The smallest allowed number of rows or columns.
pub const MIN_EDGE: usize = 2;

/// The largest allowed number of rows.
pub const MAX_ROWS: usize = 98;

/// The largest allowed number of columns: one per letter `A..=Z`.
pub const MAX_COLS: usize = 26;
