use anyhow::Result;
use clap::Parser;
use othello_engine::GameController;
use othello_shell::run_line;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Othello on custom boards from the command line.", long_about = None)]
struct Args {
    /// Text shown before each input line
    #[arg(long, default_value = "othello> ")]
    prompt: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG takes precedence over --debug.
    let default_level = if args.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let mut game = GameController::new();

    loop {
        write!(stdout, "{}", args.prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let response = run_line(&mut game, line.trim());
        for output in &response.lines {
            writeln!(stdout, "{}", output)?;
        }
        if response.quit {
            break;
        }
    }

    Ok(())
}
