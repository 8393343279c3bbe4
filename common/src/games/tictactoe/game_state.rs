use super::board::Board;
use super::bot_controller::{SearchResult, search};
use super::error::{GameError, InvalidMoveReason};
use super::types::{GameStatus, Mark, WinningLine};

/// One human-versus-computer game. X always opens; whoever holds X moves first.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    human_mark: Mark,
    computer_mark: Mark,
    last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(human_mark: Mark) -> Result<Self, GameError> {
        let computer_mark = human_mark
            .opponent()
            .ok_or(GameError::InvalidMove(InvalidMoveReason::EmptyMark))?;

        Ok(Self {
            board: Board::new(),
            human_mark,
            computer_mark,
            last_move: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn computer_mark(&self) -> Mark {
        self.computer_mark
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn current_mark(&self) -> Option<Mark> {
        self.board.to_move()
    }

    pub fn status(&self) -> GameStatus {
        self.board.terminal_status()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.board.winning_line()
    }

    pub fn is_computer_turn(&self) -> bool {
        self.current_mark() == Some(self.computer_mark)
    }

    pub fn place_human_mark(&mut self, index: usize) -> Result<(), GameError> {
        self.place_mark(self.human_mark, index)
    }

    pub fn play_computer_move(&mut self) -> Result<SearchResult, GameError> {
        if self.status().is_over() {
            return Err(GameError::NoLegalMove);
        }
        if !self.is_computer_turn() {
            return Err(InvalidMoveReason::NotYourTurn {
                mark: self.computer_mark,
            }
            .into());
        }

        let result = search(&self.board, self.computer_mark)?;
        self.place_mark(self.computer_mark, result.index)?;
        Ok(result)
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.last_move = None;
    }

    fn place_mark(&mut self, mark: Mark, index: usize) -> Result<(), GameError> {
        if let Some(expected) = self.current_mark()
            && expected != mark
        {
            return Err(InvalidMoveReason::NotYourTurn { mark }.into());
        }

        self.board.apply(index, mark)?;
        self.last_move = Some(index);
        Ok(())
    }
}
