use super::board::Board;
use super::error::GameError;
use super::types::{CELL_COUNT, Mark};
use super::win_detector::check_win;

const WIN_SCORE: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub index: usize,
    pub score: i32,
    pub nodes: u64,
}

pub fn best_move(board: &Board, bot_mark: Mark) -> Result<usize, GameError> {
    search(board, bot_mark).map(|result| result.index)
}

/// Exhaustive minimax with alpha-beta pruning for `bot_mark`.
///
/// Scores are from `bot_mark`'s point of view: `10 - depth` for a win, `depth - 10`
/// for a loss, `0` for a draw, where depth counts plies after the candidate move.
/// Equal scores keep the lowest cell index.
pub fn search(board: &Board, bot_mark: Mark) -> Result<SearchResult, GameError> {
    let opponent_mark = bot_mark.opponent().ok_or(GameError::NoLegalMove)?;
    if board.terminal_status().is_over() {
        return Err(GameError::NoLegalMove);
    }

    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return Err(GameError::NoLegalMove);
    }

    let mut searcher = Searcher {
        cells: *board.cells(),
        bot_mark,
        opponent_mark,
        nodes: 0,
    };

    let mut best: Option<(usize, i32)> = None;

    for index in available_moves {
        searcher.cells[index] = bot_mark;
        let score = searcher.minimax(0, false, i32::MIN, i32::MAX);
        searcher.cells[index] = Mark::Empty;

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    let (index, score) = best.ok_or(GameError::NoLegalMove)?;
    Ok(SearchResult {
        index,
        score,
        nodes: searcher.nodes,
    })
}

struct Searcher {
    cells: [Mark; CELL_COUNT],
    bot_mark: Mark,
    opponent_mark: Mark,
    nodes: u64,
}

impl Searcher {
    fn terminal_score(&self, depth: i32) -> Option<i32> {
        if check_win(&self.cells, self.bot_mark) {
            return Some(WIN_SCORE - depth);
        }
        if check_win(&self.cells, self.opponent_mark) {
            return Some(depth - WIN_SCORE);
        }
        if self.cells.iter().all(|&cell| cell != Mark::Empty) {
            return Some(0);
        }
        None
    }

    fn minimax(&mut self, depth: i32, is_maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;

        if let Some(score) = self.terminal_score(depth) {
            return score;
        }

        if is_maximizing {
            let mut max_eval = i32::MIN;
            for index in 0..CELL_COUNT {
                if self.cells[index] != Mark::Empty {
                    continue;
                }
                self.cells[index] = self.bot_mark;
                let eval = self.minimax(depth + 1, false, alpha, beta);
                self.cells[index] = Mark::Empty;

                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = i32::MAX;
            for index in 0..CELL_COUNT {
                if self.cells[index] != Mark::Empty {
                    continue;
                }
                self.cells[index] = self.opponent_mark;
                let eval = self.minimax(depth + 1, true, alpha, beta);
                self.cells[index] = Mark::Empty;

                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    break;
                }
            }
            min_eval
        }
    }
}
