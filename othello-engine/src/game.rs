//! Implements game-level Othello logic: two players, turn order, passing and
//! the end of the game.
//!
//! For correctness this is the preferred interface; [`Board`] is the engine
//! underneath and never consulted for turn state.

use crate::board::{parse_layout, Board, MoveList};
use crate::cell::Color;
use crate::error::EngineError;
use crate::location::Position;
use derive_more::Display;
use tracing::{debug, info};

/// One of the two participants. Equality is by name and colour.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Player {
    name: String,
    color: Color,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// The result of a finished or aborted game.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum Outcome {
    #[display("Game Over! {winner} has won ({winner_stones}:{loser_stones})!")]
    Win {
        winner: Color,
        winner_stones: usize,
        loser_stones: usize,
    },
    #[display("Game has ended in a draw.")]
    Draw,
}

impl Outcome {
    /// Decide the result from the final stone counts.
    pub fn from_counts(black: usize, white: usize) -> Self {
        use std::cmp::Ordering;

        match black.cmp(&white) {
            Ordering::Less => Outcome::Win {
                winner: Color::White,
                winner_stones: white,
                loser_stones: black,
            },
            Ordering::Greater => Outcome::Win {
                winner: Color::Black,
                winner_stones: black,
                loser_stones: white,
            },
            Ordering::Equal => Outcome::Draw,
        }
    }

    /// The winning colour, or `None` for a draw.
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Win { winner, .. } => Some(winner),
            Outcome::Draw => None,
        }
    }
}

/// A non-error message produced by starting a game, placing a hole or
/// submitting a move.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum Notice {
    /// The submitted position is not a legal destination; nothing changed.
    #[display("Move not possible.")]
    MoveNotPossible,
    /// The given colour had no legal move and the turn passed over.
    #[display("{_0} passes.")]
    Pass(Color),
    /// Neither colour can move; the game is over and has been released.
    #[display("{_0}")]
    GameOver(Outcome),
}

/// Everything that lives exactly as long as one game.
#[derive(Clone, Debug)]
struct Session {
    board: Board,
    players: [Player; 2],
    active: usize,
    // Legal moves of the active player on the current board.
    moves: MoveList,
    started: bool,
}

impl Session {
    fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    /// Hand the turn to the other player after a move and refresh the move
    /// cache.
    fn switch_player(&mut self) {
        self.active = 1 - self.active;
        self.refresh_moves();
    }

    fn refresh_moves(&mut self) {
        self.moves = self.board.legal_moves(self.active_player().color());
    }

    fn outcome(&self) -> Outcome {
        Outcome::from_counts(
            self.board.count_stones(self.players[0].color()),
            self.board.count_stones(self.players[1].color()),
        )
    }
}

/// Runs one game at a time between a black and a white player.
///
/// States: no game, active but not started (holes may be placed), and started
/// (after the first submitted move). Aborting or finishing returns to no game.
#[derive(Clone, Debug, Default)]
pub struct GameController {
    session: Option<Session>,
}

impl GameController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a game on a `rows` x `cols` board, from the default setup or from
    /// a comma-separated `layout`. Black moves first.
    ///
    /// Returns a notice if black cannot move on the new board.
    pub fn new_game(
        &mut self,
        rows: usize,
        cols: usize,
        layout: Option<&str>,
    ) -> Result<Option<Notice>, EngineError> {
        if self.is_active() {
            return Err(EngineError::GameAlreadyActive);
        }

        let board = match layout {
            Some(layout) => Board::with_layout(rows, cols, parse_layout(layout))?,
            None => Board::new(rows, cols)?,
        };
        let players = [
            Player::new("Black", Color::Black),
            Player::new("White", Color::White),
        ];
        let moves = board.legal_moves(players[0].color());

        info!(rows, cols, custom_layout = layout.is_some(), "started new game");
        self.session = Some(Session {
            board,
            players,
            active: 0,
            moves,
            started: false,
        });

        Ok(self.check_moves())
    }

    /// Returns whether a game is in progress.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Returns whether a move has been submitted in the current game.
    pub fn has_started(&self) -> bool {
        self.session.as_ref().map_or(false, |session| session.started)
    }

    pub fn board(&self) -> Result<&Board, EngineError> {
        Ok(&self.session()?.board)
    }

    pub fn active_player(&self) -> Result<&Player, EngineError> {
        Ok(self.session()?.active_player())
    }

    pub fn active_color(&self) -> Result<Color, EngineError> {
        Ok(self.active_player()?.color())
    }

    /// The active player's legal moves, in presentation order.
    pub fn legal_moves(&self) -> Result<&MoveList, EngineError> {
        Ok(&self.session()?.moves)
    }

    /// Returns whether the active player may move to `position`.
    pub fn is_legal(&self, position: Position) -> Result<bool, EngineError> {
        Ok(self.session()?.moves.contains(position))
    }

    pub fn contains(&self, position: Position) -> Result<bool, EngineError> {
        Ok(self.session()?.board.contains(position))
    }

    pub fn is_rectangle(&self, first: Position, second: Position) -> Result<bool, EngineError> {
        Ok(self.session()?.board.is_rectangle(first, second))
    }

    pub fn hole_is_allowed(&self, first: Position, second: Position) -> Result<bool, EngineError> {
        Ok(self.session()?.board.hole_is_allowed(first, second))
    }

    /// Turn the rectangle from `first` to `second` into holes. Only allowed
    /// before the first move.
    ///
    /// The holes may take away every legal move of the active player, in
    /// which case the usual pass handling runs and its notice is returned.
    pub fn hole(&mut self, first: Position, second: Position) -> Result<Option<Notice>, EngineError> {
        let session = self.session_mut()?;
        if session.started {
            return Err(EngineError::GameAlreadyStarted);
        }

        session.board.set_hole(first, second)?;
        session.refresh_moves();

        Ok(self.check_moves())
    }

    /// Submit a move for the active player.
    ///
    /// Marks the game as started even if the move is refused. An illegal
    /// destination yields [`Notice::MoveNotPossible`] and changes nothing else.
    pub fn make_move(&mut self, position: Position) -> Result<Option<Notice>, EngineError> {
        let session = self.session_mut()?;
        if !session.board.contains(position) {
            return Err(EngineError::MoveOutOfBounds { position });
        }
        session.started = true;

        let mv = match session.moves.get(position) {
            Some(mv) => mv,
            None => {
                debug!(%position, "refused illegal move");
                return Ok(Some(Notice::MoveNotPossible));
            }
        };

        session.board.apply_move(mv)?;
        session.switch_player();

        Ok(self.check_moves())
    }

    /// End the current game early and report the standing result.
    pub fn abort(&mut self) -> Result<Outcome, EngineError> {
        self.session()?;
        Ok(self.finish())
    }

    /// The board rows followed by a `turn: <colour>` line.
    pub fn print(&self) -> Result<Vec<String>, EngineError> {
        let session = self.session()?;
        let mut lines = session.board.field();
        lines.push(format!("turn: {}", session.active_player().color()));
        Ok(lines)
    }

    /// If the active player cannot move, the turn goes to the second player
    /// (white); if that player cannot move either, the game is over. A white
    /// pass therefore always ends the game.
    fn check_moves(&mut self) -> Option<Notice> {
        let session = self.session.as_mut()?;
        if !session.moves.is_empty() {
            return None;
        }

        let passing = session.active_player().color();
        session.active = 1;
        session.refresh_moves();

        if session.moves.is_empty() {
            return Some(Notice::GameOver(self.finish()));
        }

        debug!(color = %passing, "player passes");
        Some(Notice::Pass(passing))
    }

    /// Release the current game and return its result.
    fn finish(&mut self) -> Outcome {
        let outcome = self
            .session
            .take()
            .map_or(Outcome::Draw, |session| session.outcome());
        info!(%outcome, "game ended");
        outcome
    }

    fn session(&self) -> Result<&Session, EngineError> {
        self.session.as_ref().ok_or(EngineError::NoActiveGame)
    }

    fn session_mut(&mut self) -> Result<&mut Session, EngineError> {
        self.session.as_mut().ok_or(EngineError::NoActiveGame)
    }
}
