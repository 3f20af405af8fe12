use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::board::{Board, Cell};
use crate::GameError;

/// Represents the current state of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub fn is_over(self) -> bool {
        !matches!(self, GameState::InProgress)
    }
}

/// What a single selection did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealResult {
    /// Cells whose `revealed` flag flipped during this call, in sweep order,
    /// with their final state.
    pub changed: Vec<Cell>,
    pub outcome: GameState,
}

impl Board {
    /// The primary operation, called when the player selects a cell.
    ///
    /// Selecting a mine loses the game without touching any cell. Otherwise the
    /// selected cell is swept and the reveal floods through every connected cell
    /// whose proximity is 0, stopping at numbered cells.
    pub fn reveal(&mut self, id: usize) -> Result<RevealResult, GameError> {
        let selected = *self.find_cell(id)?;
        if self.state.is_over() {
            return Err(GameError::GameEnded(self.state));
        }

        if selected.is_mine() {
            self.state = GameState::Lost;
            debug!(id, "Selected a mine");
            return Ok(RevealResult {
                changed: Vec::new(),
                outcome: self.state,
            });
        }

        let mut changed = Vec::new();
        let mut stack = vec![id];
        while let Some(index) = stack.pop() {
            stack.extend(self.sweep_cell(index, &mut changed));
        }

        if self.check_win() {
            self.state = GameState::Won;
        }

        debug!(
            id,
            outcome = ?self.state,
            changed = changed.len(),
            "Revealed cell"
        );

        Ok(RevealResult {
            changed: changed.into_iter().map(|index| self.cells()[index]).collect(),
            outcome: self.state,
        })
    }

    /// Resolves one safe cell and returns the neighbors the flood should continue with.
    ///
    /// Does nothing for a cell that is already revealed. Mines next to the cell are
    /// marked revealed but keep their sentinel. Only a cell with no mine neighbors
    /// expands, and then only into covered neighbors that are not mines.
    fn sweep_cell(&mut self, index: usize, changed: &mut Vec<usize>) -> Vec<usize> {
        if self.cell_mut(index).revealed {
            return Vec::new();
        }
        self.cell_mut(index).revealed = true;
        changed.push(index);

        let mut proximity = 0;
        let mut expansion = Vec::new();
        for neighbor in self.neighbors(index) {
            let cell = self.cell_mut(neighbor);
            if cell.is_mine() {
                proximity += 1;
                if !cell.revealed {
                    cell.revealed = true;
                    changed.push(neighbor);
                }
            } else if !cell.revealed {
                expansion.push(neighbor);
            }
        }

        self.cell_mut(index).proximity = proximity;
        trace!(id = index, proximity, "Swept cell");

        if proximity > 0 {
            // Don't flood past a cell that borders a mine.
            return Vec::new();
        }
        expansion
    }
}
