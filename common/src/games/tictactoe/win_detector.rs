use super::types::{CELL_COUNT, Mark, WinningLine};

pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(cells: &[Mark; CELL_COUNT], mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    WIN_PATTERNS
        .iter()
        .any(|pattern| pattern.iter().all(|&index| cells[index] == mark))
}

/// First completed line in pattern order, X before O.
pub fn check_win_with_line(cells: &[Mark; CELL_COUNT]) -> Option<WinningLine> {
    [Mark::X, Mark::O].into_iter().find_map(|mark| {
        WIN_PATTERNS
            .iter()
            .find(|pattern| pattern.iter().all(|&index| cells[index] == mark))
            .map(|&pattern| WinningLine::new(mark, pattern))
    })
}
