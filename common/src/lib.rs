//! Core of a single-player text Minesweeper: board generation with randomly placed
//! mines, flood-fill reveal of connected safe cells, win/loss detection and text
//! rendering.
//!
//! ```
//! use minesweeper::{Board, GameState};
//!
//! let mut board = Board::new(6)?;
//! let first_safe = board.cells().iter().find(|cell| !cell.is_mine()).map(|cell| cell.id);
//! if let Some(id) = first_safe {
//!     let result = board.reveal(id)?;
//!     assert_ne!(result.outcome, GameState::Lost);
//! }
//! println!("{}", board.render());
//! # Ok::<(), minesweeper::GameError>(())
//! ```

pub mod board;
pub mod config;
pub mod render;
pub mod reveal;

pub use board::{Board, Cell, MIN_SIZE, MINE_PROBABILITY, Neighborhood};
pub use config::Config;
pub use reveal::{GameState, RevealResult};

/// Everything that can go wrong while setting up or playing a game.
///
/// Hitting a mine is not an error; it is reported as [`GameState::Lost`].
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("grid size {size} is too small, it must be at least {min}")]
    Config { size: usize, min: usize },
    #[error("cannot find cell with id {0}")]
    NotFound(usize),
    #[error("the game is already over ({0:?})")]
    GameEnded(GameState),
    #[error("invalid game state encoding: {0}")]
    Codec(#[from] bcs::Error),
    #[error("decoded board is inconsistent: {0}")]
    Layout(String),
}
