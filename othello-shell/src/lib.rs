//! An interactive text shell over `othello-engine`.
//!
//! Input lines are parsed into [`Command`]s and run against a
//! [`GameController`](othello_engine::GameController); see [`run_line`].

mod command;
mod shell;

pub use command::{Command, ParseCommandError};
pub use shell::{execute, run_line, Response, ERROR_PREFIX};
