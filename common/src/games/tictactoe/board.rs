use super::error::{GameError, InvalidMoveReason};
use super::types::{CELL_COUNT, GameStatus, Mark, WinningLine};
use super::win_detector::{check_win, check_win_with_line};

/// The 3×3 grid, cells indexed row-major from 0 (top left) to 8 (bottom right).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// Places `mark` at `index`. The board is left untouched on error.
    /// Turn order is not checked here; `TicTacToeGameState` enforces it.
    pub fn apply(&mut self, index: usize, mark: Mark) -> Result<(), GameError> {
        if index >= CELL_COUNT {
            return Err(InvalidMoveReason::OutOfRange { index }.into());
        }
        if mark == Mark::Empty {
            return Err(InvalidMoveReason::EmptyMark.into());
        }
        if self.cells[index] != Mark::Empty {
            return Err(InvalidMoveReason::Occupied { index }.into());
        }
        if self.terminal_status().is_over() {
            return Err(InvalidMoveReason::GameOver.into());
        }

        self.cells[index] = mark;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn winner(&self, mark: Mark) -> bool {
        check_win(&self.cells, mark)
    }

    pub fn terminal_status(&self) -> GameStatus {
        if self.winner(Mark::X) {
            GameStatus::Won(Mark::X)
        } else if self.winner(Mark::O) {
            GameStatus::Won(Mark::O)
        } else if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }

    /// X moves whenever both marks have been placed equally often.
    pub fn to_move(&self) -> Option<Mark> {
        if self.terminal_status().is_over() {
            return None;
        }
        if self.count(Mark::X) == self.count(Mark::O) {
            Some(Mark::X)
        } else {
            Some(Mark::O)
        }
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Builds a board from a 9-character layout (`X`, `O`, anything else empty)
    /// without any turn-order checks.
    #[cfg(test)]
    pub(crate) fn from_layout(layout: &str) -> Self {
        let mut board = Self::new();
        for (index, ch) in layout.chars().take(CELL_COUNT).enumerate() {
            board.cells[index] = match ch {
                'X' => Mark::X,
                'O' => Mark::O,
                _ => Mark::Empty,
            };
        }
        board
    }
}
