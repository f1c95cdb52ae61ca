//! Executing commands against a [`GameController`].
//!
//! Dispatch is a function of the input line and the controller; it performs no
//! I/O, so a whole session can be replayed from a list of lines.

use crate::command::Command;
use itertools::Itertools;
use othello_engine::{EngineError, GameController};
use tracing::debug;

/// Prefix of every error line.
pub const ERROR_PREFIX: &str = "Error! ";

/// What the shell prints for one input line, and whether to stop afterwards.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Response {
    pub lines: Vec<String>,
    pub quit: bool,
}

impl Response {
    fn lines(lines: Vec<String>) -> Self {
        Self { lines, quit: false }
    }

    fn error(message: impl std::fmt::Display) -> Self {
        Self::lines(vec![format!("{}{}", ERROR_PREFIX, message)])
    }
}

/// Parse and execute one line of input.
pub fn run_line(game: &mut GameController, line: &str) -> Response {
    match line.parse::<Command>() {
        Ok(command) => execute(game, command),
        Err(err) => {
            debug!(%err, line, "rejected input");
            Response::error(err)
        }
    }
}

/// Execute a parsed command.
pub fn execute(game: &mut GameController, command: Command) -> Response {
    debug!(?command, "executing");

    if command == Command::Quit {
        return Response {
            lines: Vec::new(),
            quit: true,
        };
    }

    match dispatch(game, command) {
        Ok(lines) => Response::lines(lines),
        Err(err) => {
            debug!(%err, kind = %err.kind(), "command failed");
            Response::error(err)
        }
    }
}

fn dispatch(game: &mut GameController, command: Command) -> Result<Vec<String>, EngineError> {
    let lines = match command {
        Command::NewGame { cols, rows, layout } => game
            .new_game(rows, cols, layout.as_deref())?
            .map(|notice| notice.to_string())
            .into_iter()
            .collect(),
        Command::Hole { first, second } => game
            .hole(first, second)?
            .map(|notice| notice.to_string())
            .into_iter()
            .collect(),
        Command::Move(position) => game
            .make_move(position)?
            .map(|notice| notice.to_string())
            .into_iter()
            .collect(),
        Command::Print => game.print()?,
        Command::PossibleMoves => {
            let moves = game.legal_moves()?;
            vec![format!("Possible moves: {}", moves.positions().iter().join(","))]
        }
        Command::Abort => vec![game.abort()?.to_string()],
        Command::Quit => Vec::new(),
    };

    Ok(lines)
}
