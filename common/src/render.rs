use std::fmt;

use itertools::Itertools;

use crate::board::{Board, Cell};
use crate::reveal::GameState;

pub const BORDER: &str = "<!------------------ Minesweeper ------------------>";

const COVERED: char = '-';
const BLANK: char = ' ';
const MINE_GLYPH: char = 'X';

impl Cell {
    /// The character shown for this cell. Mines stay covered, even when exposed by a
    /// neighboring sweep, unless `show_mines` is set.
    pub fn glyph(&self, show_mines: bool) -> char {
        match (self.revealed, self.proximity) {
            (_, p) if p < 0 && show_mines => MINE_GLYPH,
            (false, _) => COVERED,
            (true, p) if p < 0 => COVERED,
            (true, 0) => BLANK,
            (true, p) => char::from_digit(p as u32, 10).unwrap_or('?'),
        }
    }
}

impl Board {
    /// Renders the board as text. Once the game is lost, every mine is shown.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Renders the id of every cell in the same layout as [`Board::render`].
    pub fn render_ids(&self) -> String {
        let width = (self.cell_count() - 1).to_string().len();
        self.cells()
            .chunks(self.size())
            .map(|row| row.iter().map(|cell| format!("{:>width$}", cell.id)).join(" "))
            .join("\n")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show_mines = self.state() == GameState::Lost;

        writeln!(f, "{BORDER}")?;
        for row in self.cells().chunks(self.size()) {
            let line = row
                .iter()
                .map(|cell| format!("{:^3}", cell.glyph(show_mines)))
                .join("");
            writeln!(f, "{}", line.trim_end())?;
        }
        writeln!(f, "{BORDER}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Neighborhood;
    use crate::config::Config;

    fn board(size: usize, mines: &[(usize, usize)]) -> Board {
        let config = Config {
            size,
            neighborhood: Neighborhood::Ring,
        };
        Board::with_mines(&config, mines.iter().copied()).unwrap()
    }

    fn grid(board: &Board) -> Vec<String> {
        board
            .render()
            .lines()
            .filter(|line| *line != BORDER)
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn test_fresh_board_is_covered() {
        let board = board(3, &[(0, 0)]);
        let rendered = board.render();

        assert!(rendered.starts_with(BORDER));
        assert!(rendered.trim_end().ends_with(BORDER));
        assert_eq!(grid(&board), vec![" -  -  -"; 3]);
    }

    #[test]
    fn test_glyphs() {
        let mut cell = Cell {
            id: 0,
            row: 0,
            col: 0,
            proximity: 0,
            revealed: false,
        };
        assert_eq!(cell.glyph(false), '-');

        cell.revealed = true;
        assert_eq!(cell.glyph(false), ' ');

        cell.proximity = 3;
        assert_eq!(cell.glyph(false), '3');

        cell.proximity = -1;
        assert_eq!(cell.glyph(false), '-');
        assert_eq!(cell.glyph(true), 'X');
    }

    #[test]
    fn test_revealed_board_shows_numbers_and_blanks() {
        // The exposed wall stays covered while the left side opens up
        let wall: Vec<(usize, usize)> = (0..3).map(|row| (row, 2)).collect();
        let mut board = board(3, &wall);
        board.reveal(0).unwrap();

        assert_eq!(grid(&board), vec!["    2  -", "    3  -", "    2  -"]);
    }

    #[test]
    fn test_lost_board_shows_mines() {
        let mut board = board(3, &[(1, 1)]);
        board.reveal(4).unwrap();

        assert_eq!(grid(&board), vec![" -  -  -", " -  X  -", " -  -  -"]);
    }

    #[test]
    fn test_render_ids() {
        let board = board(4, &[]);
        assert_eq!(
            board.render_ids(),
            " 0  1  2  3\n 4  5  6  7\n 8  9 10 11\n12 13 14 15"
        );
    }
}
