//! Parsing shell input lines into [`Command`]s.

use derive_more::{Display, Error};
use othello_engine::Position;

/// One line of shell input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    /// `newGame <columns> <lines> [layout]`
    NewGame {
        cols: usize,
        rows: usize,
        layout: Option<String>,
    },
    /// `hole <first>:<second>`
    Hole { first: Position, second: Position },
    /// `move <position>`
    Move(Position),
    Print,
    PossibleMoves,
    Abort,
    Quit,
}

#[derive(Clone, Debug, Eq, PartialEq, Display, Error)]
pub enum ParseCommandError {
    #[display("Unknown command: '{command}'")]
    Unknown { command: String },

    #[display("Wrong number of parameters. {expected} expected.")]
    WrongArity { expected: &'static str },

    #[display("Invalid lines number for character.")]
    InvalidLines,

    #[display("Invalid columns number for character.")]
    InvalidColumns,

    #[display("Invalid hole parameters.")]
    InvalidHole,

    #[display("Invalid move parameters.")]
    InvalidMove,
}

impl std::str::FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (name, args) = match tokens.split_first() {
            Some((name, args)) => (*name, args),
            None => ("", &[][..]),
        };

        match name {
            "newGame" => parse_new_game(args),
            "hole" => match args {
                [area] => parse_hole(area),
                _ => Err(ParseCommandError::WrongArity { expected: "Two parameters" }),
            },
            "move" => match args {
                [point] => point
                    .parse()
                    .map(Command::Move)
                    .map_err(|_| ParseCommandError::InvalidMove),
                _ => Err(ParseCommandError::WrongArity { expected: "Two parameters" }),
            },
            "print" => no_args(args, Command::Print),
            "possibleMoves" => no_args(args, Command::PossibleMoves),
            "abort" => no_args(args, Command::Abort),
            "quit" => no_args(args, Command::Quit),
            _ => Err(ParseCommandError::Unknown {
                command: name.to_string(),
            }),
        }
    }
}

fn no_args(args: &[&str], command: Command) -> Result<Command, ParseCommandError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(ParseCommandError::WrongArity { expected: "One parameter" })
    }
}

fn parse_number(token: &str) -> Option<usize> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

fn parse_new_game(args: &[&str]) -> Result<Command, ParseCommandError> {
    let (cols, rows, layout) = match args {
        [cols, rows] => (cols, rows, None),
        [cols, rows, layout] => (cols, rows, Some(layout.to_string())),
        _ => {
            return Err(ParseCommandError::WrongArity {
                expected: "Three or four parameters",
            })
        }
    };

    let rows = parse_number(rows).ok_or(ParseCommandError::InvalidLines)?;
    let cols = parse_number(cols).ok_or(ParseCommandError::InvalidColumns)?;

    Ok(Command::NewGame { cols, rows, layout })
}

fn parse_hole(area: &str) -> Result<Command, ParseCommandError> {
    let (first, second) = area.split_once(':').ok_or(ParseCommandError::InvalidHole)?;
    let first = first.parse().map_err(|_| ParseCommandError::InvalidHole)?;
    let second = second.parse().map_err(|_| ParseCommandError::InvalidHole)?;

    Ok(Command::Hole { first, second })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn parse_new_game() {
        assert_eq!(
            "newGame 6 4".parse(),
            Ok(Command::NewGame {
                cols: 6,
                rows: 4,
                layout: None
            })
        );
        assert_eq!(
            "  newGame 2 2   WB,BW ".parse(),
            Ok(Command::NewGame {
                cols: 2,
                rows: 2,
                layout: Some("WB,BW".to_string())
            })
        );
        assert_eq!(
            "newGame 8".parse::<Command>(),
            Err(ParseCommandError::WrongArity {
                expected: "Three or four parameters"
            })
        );
        assert_eq!(
            "newGame 8 x".parse::<Command>(),
            Err(ParseCommandError::InvalidLines)
        );
        assert_eq!(
            "newGame -8 8".parse::<Command>(),
            Err(ParseCommandError::InvalidColumns)
        );
    }

    #[test]
    fn parse_hole_and_move() {
        assert_eq!(
            "hole A1:B12".parse(),
            Ok(Command::Hole {
                first: pos("A1"),
                second: pos("B12")
            })
        );
        assert_eq!(
            "hole A1B2".parse::<Command>(),
            Err(ParseCommandError::InvalidHole)
        );
        assert_eq!(
            "hole A1:B2 C3".parse::<Command>(),
            Err(ParseCommandError::WrongArity {
                expected: "Two parameters"
            })
        );
        assert_eq!("move D3".parse(), Ok(Command::Move(pos("D3"))));
        assert_eq!(
            "move D".parse::<Command>(),
            Err(ParseCommandError::InvalidMove)
        );
    }

    #[test]
    fn parse_bare_commands() {
        assert_eq!("print".parse(), Ok(Command::Print));
        assert_eq!("possibleMoves".parse(), Ok(Command::PossibleMoves));
        assert_eq!("abort".parse(), Ok(Command::Abort));
        assert_eq!("quit".parse(), Ok(Command::Quit));
        assert_eq!(
            "quit now".parse::<Command>().unwrap_err().to_string(),
            "Wrong number of parameters. One parameter expected."
        );
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            "Print".parse::<Command>().unwrap_err().to_string(),
            "Unknown command: 'Print'"
        );
        assert_eq!(
            "".parse::<Command>(),
            Err(ParseCommandError::Unknown {
                command: String::new()
            })
        );
    }
}
