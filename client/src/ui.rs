use tictactoe_common::games::tictactoe::{BOARD_SIZE, Board, CELL_COUNT, GameStatus, Mark, WinningLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Place(usize),
    Quit,
}

/// Cells of the winning line are wrapped in brackets.
pub fn render_board(board: &Board, winning_line: Option<WinningLine>, empty_cell: char) -> String {
    let separator = format!("\n{}\n", vec!["---"; BOARD_SIZE].join("+"));
    (0..BOARD_SIZE)
        .map(|row| {
            (0..BOARD_SIZE)
                .map(|col| {
                    let index = row * BOARD_SIZE + col;
                    let symbol = match board.cell(index) {
                        Some(Mark::X) => 'X',
                        Some(Mark::O) => 'O',
                        _ => empty_cell,
                    };
                    if winning_line.is_some_and(|line| line.contains(index)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join(&separator)
}

/// Accepts cell numbers 1-9 as shown on a phone keypad layout (top left is 1).
pub fn parse_input(line: &str) -> Result<InputCommand, String> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Ok(InputCommand::Quit);
    }

    let number: usize = trimmed
        .parse()
        .map_err(|_| format!("'{}' is not a cell number", trimmed))?;
    if !(1..=CELL_COUNT).contains(&number) {
        return Err(format!("Cell number must be between 1 and {}", CELL_COUNT));
    }
    Ok(InputCommand::Place(number - 1))
}

pub fn describe_status(status: GameStatus, human_mark: Mark) -> String {
    match status {
        GameStatus::InProgress => "Game in progress".to_string(),
        GameStatus::Draw => "Draw!".to_string(),
        GameStatus::Won(mark) if mark == human_mark => format!("{} Wins! You beat the computer.", mark),
        GameStatus::Won(mark) => format!("{} Wins!", mark),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::games::tictactoe::apply_move;

    #[test]
    fn test_render_empty_board() {
        let rendered = render_board(&Board::new(), None, '.');
        assert_eq!(
            rendered,
            " . | . | . \n---+---+---\n . | . | . \n---+---+---\n . | . | . "
        );
    }

    #[test]
    fn test_render_highlights_winning_line() {
        let board = [(0, Mark::X), (3, Mark::O), (1, Mark::X), (4, Mark::O), (2, Mark::X)]
            .into_iter()
            .try_fold(Board::new(), |board, (index, mark)| apply_move(board, index, mark))
            .unwrap();
        let rendered = render_board(&board, board.winning_line(), '.');
        let first_row = rendered.lines().next().unwrap();
        assert_eq!(first_row, "[X]|[X]|[X]");
        assert!(rendered.contains(" O | O | . "));
    }

    #[test]
    fn test_parse_cell_numbers() {
        assert_eq!(parse_input("1\n"), Ok(InputCommand::Place(0)));
        assert_eq!(parse_input(" 9 "), Ok(InputCommand::Place(8)));
        assert!(parse_input("0").is_err());
        assert!(parse_input("10").is_err());
        assert!(parse_input("abc").is_err());
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(parse_input("q"), Ok(InputCommand::Quit));
        assert_eq!(parse_input("QUIT"), Ok(InputCommand::Quit));
    }

    #[test]
    fn test_describe_status() {
        assert_eq!(describe_status(GameStatus::Draw, Mark::X), "Draw!");
        assert_eq!(describe_status(GameStatus::Won(Mark::O), Mark::X), "O Wins!");
        assert!(describe_status(GameStatus::Won(Mark::X), Mark::X).contains("You beat"));
    }
}
