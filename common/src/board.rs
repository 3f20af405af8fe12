use itertools::iproduct;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Config;
use crate::reveal::GameState;
use crate::GameError;

/// The smallest grid edge a board accepts.
pub const MIN_SIZE: usize = 3;

/// Chance that any single cell is generated as a mine.
pub const MINE_PROBABILITY: f64 = 0.34;

/// Proximity sentinel marking a cell as a mine.
pub const MINE: i8 = -1;

/// A single grid position.
///
/// `proximity` is negative for a mine. For every other cell it holds the number of
/// neighboring mines once the cell has been swept, and 0 before that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub id: usize,
    pub row: usize,
    pub col: usize,
    pub proximity: i8,
    /// Once set, never cleared.
    pub revealed: bool,
}

impl Cell {
    pub fn is_mine(&self) -> bool {
        self.proximity < 0
    }

    /// One-line summary used when reporting a cell to the player.
    pub fn describe(&self) -> String {
        format!(
            "id: {} row: {} col: {} proximity: {} revealed: {}",
            self.id, self.row, self.col, self.proximity, self.revealed
        )
    }
}

/// Which surrounding cells count as neighbors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Neighborhood {
    /// The full 3x3 ring around a cell, excluding the cell itself.
    #[default]
    Ring,
    /// Only the cells up and to the left: `row-1..=row` x `col-1..=col`, excluding
    /// the cell itself. Undercounts compared to the usual rules.
    HalfWindow,
}

/// A square grid of cells stored in row-major order, so `id == row * size + col`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    neighborhood: Neighborhood,
    cells: Vec<Cell>,
    pub(crate) state: GameState,
}

impl Board {
    /// Creates a board with randomly placed mines and the default neighbor relation.
    pub fn new(size: usize) -> Result<Self, GameError> {
        let config = Config {
            size,
            ..Config::default()
        };
        Self::generate(&config, &mut rand::rng())
    }

    /// Creates a board where every cell independently becomes a mine with
    /// probability [`MINE_PROBABILITY`]. There is no guarantee on the total mine count.
    pub fn generate<R: Rng>(config: &Config, rng: &mut R) -> Result<Self, GameError> {
        let board = Self::build(config, |_, _| rng.random_bool(MINE_PROBABILITY))?;
        info!(
            size = board.size,
            mines = board.mine_count(),
            "Generated board"
        );
        Ok(board)
    }

    /// Creates a board whose mines sit exactly at the given `(row, col)` positions.
    /// Positions outside the grid are ignored.
    pub fn with_mines(
        config: &Config,
        mines: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GameError> {
        let mines: Vec<(usize, usize)> = mines.into_iter().collect();
        Self::build(config, |row, col| mines.contains(&(row, col)))
    }

    fn build(
        config: &Config,
        mut is_mine: impl FnMut(usize, usize) -> bool,
    ) -> Result<Self, GameError> {
        let size = config.size;
        if size < MIN_SIZE {
            return Err(GameError::Config {
                size,
                min: MIN_SIZE,
            });
        }

        let cells = iproduct!(0..size, 0..size)
            .enumerate()
            .map(|(id, (row, col))| Cell {
                id,
                row,
                col,
                proximity: if is_mine(row, col) { MINE } else { 0 },
                revealed: false,
            })
            .collect();

        let mut board = Board {
            size,
            neighborhood: config.neighborhood,
            cells,
            state: GameState::InProgress,
        };
        // A board made only of mines has no safe cell left to find.
        if board.check_win() {
            board.state = GameState::Won;
        }
        Ok(board)
    }

    /// Decodes a board previously produced by [`Board::to_bytes`], rejecting any
    /// payload that breaks the row-major grid layout.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        let board: Board = bcs::from_bytes(bytes)?;
        board.validate()?;
        Ok(board)
    }

    fn validate(&self) -> Result<(), GameError> {
        if self.size < MIN_SIZE {
            return Err(GameError::Config {
                size: self.size,
                min: MIN_SIZE,
            });
        }
        let expected = self
            .size
            .checked_mul(self.size)
            .ok_or_else(|| GameError::Layout(format!("grid size {} overflows", self.size)))?;
        if self.cells.len() != expected {
            return Err(GameError::Layout(format!(
                "{} cells for a {}x{} grid",
                self.cells.len(),
                self.size,
                self.size
            )));
        }
        for (index, cell) in self.cells.iter().enumerate() {
            let (row, col) = (index / self.size, index % self.size);
            if (cell.id, cell.row, cell.col) != (index, row, col) {
                return Err(GameError::Layout(format!(
                    "cell at index {index} claims id {} at ({}, {})",
                    cell.id, cell.row, cell.col
                )));
            }
            if cell.proximity > 8 {
                return Err(GameError::Layout(format!(
                    "cell {index} has proximity {}",
                    cell.proximity
                )));
            }
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        Ok(bcs::to_bytes(self)?)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn mine_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_mine()).count()
    }

    /// Looks up a cell by id. Every id in `0..cell_count()` is valid.
    pub fn find_cell(&self, id: usize) -> Result<&Cell, GameError> {
        self.cells.get(id).ok_or(GameError::NotFound(id))
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.size && col < self.size {
            self.cells.get(self.index_of(row, col))
        } else {
            None
        }
    }

    pub(crate) fn cell_mut(&mut self, index: usize) -> &mut Cell {
        &mut self.cells[index]
    }

    fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Returns the indices of the in-bounds neighbors of the cell at `index`,
    /// according to the board's [`Neighborhood`].
    pub fn neighbors(&self, index: usize) -> Vec<usize> {
        let row = (index / self.size) as isize;
        let col = (index % self.size) as isize;
        let (row_end, col_end) = match self.neighborhood {
            Neighborhood::Ring => (row + 1, col + 1),
            Neighborhood::HalfWindow => (row, col),
        };
        let size = self.size as isize;

        iproduct!(row - 1..=row_end, col - 1..=col_end)
            .filter(|&(r, c)| (r, c) != (row, col))
            .filter(|&(r, c)| r >= 0 && r < size && c >= 0 && c < size)
            .map(|(r, c)| self.index_of(r as usize, c as usize))
            .collect()
    }

    /// True when every cell that is not a mine has been revealed.
    pub fn check_win(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_mine() || cell.revealed)
    }
}
