mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{SearchResult, best_move, search};
pub use error::{GameError, InvalidMoveReason};
pub use game_state::TicTacToeGameState;
pub use types::{BOARD_SIZE, CELL_COUNT, GameStatus, Mark, WinningLine};
pub use win_detector::{WIN_PATTERNS, check_win, check_win_with_line};

pub fn new_game() -> Board {
    Board::new()
}

/// Returns the board with `mark` placed at `index`; the input board is never modified.
pub fn apply_move(board: Board, index: usize, mark: Mark) -> Result<Board, GameError> {
    let mut next = board;
    next.apply(index, mark)?;
    Ok(next)
}

pub fn status(board: &Board) -> GameStatus {
    board.terminal_status()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_api_plays_a_game() {
        let board = new_game();
        assert_eq!(status(&board), GameStatus::InProgress);

        let board = apply_move(board, 4, Mark::X).unwrap();
        let reply = best_move(&board, Mark::O).unwrap();
        assert_ne!(reply, 4);
        let board = apply_move(board, reply, Mark::O).unwrap();
        assert_eq!(board.count(Mark::X), 1);
        assert_eq!(board.count(Mark::O), 1);
    }

    #[test]
    fn test_apply_move_failure_returns_error() {
        let board = apply_move(new_game(), 0, Mark::X).unwrap();
        assert_eq!(
            apply_move(board, 0, Mark::O),
            Err(GameError::InvalidMove(InvalidMoveReason::Occupied { index: 0 }))
        );
        assert_eq!(
            apply_move(board, 12, Mark::O),
            Err(GameError::InvalidMove(InvalidMoveReason::OutOfRange { index: 12 }))
        );
    }

    #[test]
    fn test_status_reports_row_win() {
        let board = [0, 4, 1]
            .into_iter()
            .zip([Mark::X, Mark::O, Mark::X])
            .try_fold(new_game(), |board, (index, mark)| apply_move(board, index, mark))
            .unwrap();
        let board = apply_move(board, 2, Mark::X).unwrap();
        assert_eq!(status(&board), GameStatus::Won(Mark::X));
    }
}
