use minesweeper::*;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Exit status when the player selects a mine.
const LOSS_EXIT_CODE: u8 = 3;

fn main() -> anyhow::Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // --- 1. Initialization ---
    let config = Config::from_args(std::env::args().skip(1))?;
    let mut board = Board::generate(&config, &mut rand::rng())?;
    info!(?config, "Starting game");

    // --- 2. Game Loop ---
    let stdin = io::stdin();
    let final_state = play(&mut board, stdin.lock(), io::stdout().lock())?;

    // --- 3. Final Result ---
    Ok(match final_state {
        GameState::Lost => ExitCode::from(LOSS_EXIT_CODE),
        GameState::Won | GameState::InProgress => ExitCode::SUCCESS,
    })
}

/// Runs turns until the game ends or the input runs out, returning the last state.
///
/// Each turn prints the prompt and the board, reads one line and reveals the chosen
/// cell. Bad input and unknown ids only cost a re-prompt.
fn play(
    board: &mut Board,
    mut input: impl BufRead,
    mut out: impl Write,
) -> anyhow::Result<GameState> {
    let mut line = String::new();

    while !board.state().is_over() {
        writeln!(out, "Pick a cell # between 0 and {}:", board.cell_count() - 1)?;
        writeln!(out, "{}", board.render_ids())?;
        write!(out, "{}", board.render())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("Input closed, leaving the game");
            return Ok(board.state());
        }

        let id: usize = match line.trim().parse() {
            Ok(id) => id,
            Err(_) => {
                writeln!(out, "'{}' is not a cell number", line.trim())?;
                continue;
            }
        };

        let result = match board.reveal(id) {
            Ok(result) => result,
            Err(err @ GameError::NotFound(_)) => {
                warn!(id, "Rejected selection");
                writeln!(out, "{err}")?;
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        match result.outcome {
            GameState::Lost => {
                let cell = board.find_cell(id)?;
                writeln!(out, "You chose a mine!! {}", cell.describe())?;
            }
            GameState::Won => writeln!(out, "All safe cells are clear. You win!")?,
            GameState::InProgress => {}
        }
    }

    write!(out, "{}", board.render())?;
    Ok(board.state())
}
