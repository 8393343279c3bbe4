use std::io::{BufRead, Write};
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{GameError, GameStatus, InvalidMoveReason, TicTacToeGameState};
use tictactoe_common::{debug_log, log};

use crate::config::Config;
use crate::ui::{InputCommand, describe_status, parse_input, render_board};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Finished(GameStatus),
    Quit,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub human_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
}

pub struct TicTacToeRunner<R: BufRead, W: Write> {
    input: R,
    output: W,
    config: Config,
    rng: SessionRng,
}

impl<R: BufRead, W: Write> TicTacToeRunner<R, W> {
    pub fn new(input: R, output: W, config: Config, rng: SessionRng) -> Self {
        Self {
            input,
            output,
            config,
            rng,
        }
    }

    /// Plays games until the player quits, declines a restart, or input ends.
    pub fn run(&mut self) -> Result<SessionSummary, Box<dyn std::error::Error>> {
        let mut summary = SessionSummary::default();
        log!("Session started with seed {}", self.rng.seed());

        loop {
            let human_mark = self.config.tictactoe.human_side.resolve(&mut self.rng);
            let mut state = TicTacToeGameState::new(human_mark)?;

            match self.play_game(&mut state)? {
                GameOutcome::Quit => break,
                GameOutcome::Finished(status) => match status {
                    GameStatus::Won(mark) if mark == human_mark => summary.human_wins += 1,
                    GameStatus::Won(_) => summary.computer_wins += 1,
                    GameStatus::Draw => summary.draws += 1,
                    GameStatus::InProgress => {}
                },
            }

            if !self.config.tictactoe.ask_restart || !self.ask_restart()? {
                break;
            }
        }

        log!(
            "Session over: {} won, {} lost, {} drawn",
            summary.human_wins, summary.computer_wins, summary.draws
        );
        Ok(summary)
    }

    pub fn play_game(
        &mut self,
        state: &mut TicTacToeGameState,
    ) -> Result<GameOutcome, Box<dyn std::error::Error>> {
        writeln!(
            self.output,
            "New game: you play {}, the computer plays {}.",
            state.human_mark(),
            state.computer_mark()
        )?;
        log!("New game, human plays {}", state.human_mark());

        loop {
            let status = state.status();
            if status.is_over() {
                self.show_board(state)?;
                writeln!(self.output, "{}", describe_status(status, state.human_mark()))?;
                log!("Game over: {:?}", status);
                return Ok(GameOutcome::Finished(status));
            }

            if state.is_computer_turn() {
                let result = state.play_computer_move()?;
                writeln!(self.output, "Computer plays {}.", result.index + 1)?;
                debug_log!(
                    "Computer chose cell {} (score {}, {} positions)",
                    result.index, result.score, result.nodes
                );
                if self.config.display.show_search_stats {
                    log!(
                        "Search: cell {} score {} after {} positions",
                        result.index, result.score, result.nodes
                    );
                }
                continue;
            }

            self.show_board(state)?;
            write!(self.output, "Your move (1-9, q to quit): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(GameOutcome::Quit);
            };

            match parse_input(&line) {
                Ok(InputCommand::Quit) => return Ok(GameOutcome::Quit),
                Ok(InputCommand::Place(index)) => match state.place_human_mark(index) {
                    Ok(()) => debug_log!("Human placed {} at {}", state.human_mark(), index),
                    Err(GameError::InvalidMove(InvalidMoveReason::Occupied { index })) => {
                        writeln!(self.output, "Cell {} is already taken.", index + 1)?;
                    }
                    Err(GameError::InvalidMove(reason)) => {
                        writeln!(self.output, "Invalid move: {}.", reason)?;
                    }
                    Err(e) => return Err(e.into()),
                },
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }
    }

    fn show_board(&mut self, state: &TicTacToeGameState) -> std::io::Result<()> {
        let rendered = render_board(
            state.board(),
            state.winning_line(),
            self.config.display.empty_cell(),
        );
        writeln!(self.output, "\n{}\n", rendered)
    }

    fn ask_restart(&mut self) -> Result<bool, Box<dyn std::error::Error>> {
        write!(self.output, "Play again? [y/N]: ")?;
        self.output.flush()?;
        Ok(self
            .read_line()?
            .is_some_and(|line| line.trim().eq_ignore_ascii_case("y")))
    }

    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HumanSide, TicTacToeConfig};
    use std::io::Cursor;
    use tictactoe_common::games::tictactoe::Mark;

    fn config(human_side: HumanSide, ask_restart: bool) -> Config {
        Config {
            tictactoe: TicTacToeConfig {
                human_side,
                ask_restart,
            },
            ..Config::default()
        }
    }

    fn runner(input: &str, config: Config) -> TicTacToeRunner<Cursor<Vec<u8>>, Vec<u8>> {
        TicTacToeRunner::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            config,
            SessionRng::new(3),
        )
    }

    fn output_of(runner: &TicTacToeRunner<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(&runner.output).into_owned()
    }

    #[test]
    fn test_quit_before_first_move() {
        let mut runner = runner("q\n", config(HumanSide::X, true));
        let summary = runner.run().unwrap();
        assert_eq!(summary, SessionSummary::default());
        assert!(output_of(&runner).contains("you play X"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut runner = runner("", config(HumanSide::X, true));
        assert_eq!(runner.run().unwrap(), SessionSummary::default());
    }

    #[test]
    fn test_invalid_inputs_are_reported_and_game_continues() {
        let mut runner = runner("abc\n5\n5\nq\n", config(HumanSide::X, false));
        runner.run().unwrap();
        let output = output_of(&runner);
        assert!(output.contains("'abc' is not a cell number"));
        assert!(output.contains("Computer plays"));
        assert!(output.contains("Cell 5 is already taken."));
    }

    #[test]
    fn test_human_never_beats_engine() {
        // Keep offering every cell; occupied ones are rejected and the next is tried.
        let moves: String = (0..20).map(|i| format!("{}\n", i % 9 + 1)).collect();
        let mut runner = runner(&moves, config(HumanSide::X, false));
        let summary = runner.run().unwrap();
        assert_eq!(summary.human_wins, 0);
        assert_eq!(summary.computer_wins + summary.draws, 1);
    }

    #[test]
    fn test_computer_opens_when_human_plays_o() {
        let mut runner = runner("q\n", config(HumanSide::O, false));
        runner.run().unwrap();
        let output = output_of(&runner);
        let computer_line = output.find("Computer plays").unwrap();
        let prompt = output.find("Your move").unwrap();
        assert!(computer_line < prompt);
    }

    /// Human input for a game where X always takes the lowest free cell.
    fn scripted_game_as_x() -> String {
        let mut state = TicTacToeGameState::new(Mark::X).unwrap();
        let mut lines = String::new();
        while !state.status().is_over() {
            if state.is_computer_turn() {
                state.play_computer_move().unwrap();
                continue;
            }
            let index = state.board().available_moves()[0];
            state.place_human_mark(index).unwrap();
            lines.push_str(&format!("{}\n", index + 1));
        }
        lines
    }

    #[test]
    fn test_restart_plays_another_game() {
        let game = scripted_game_as_x();
        let input = format!("{}y\n{}n\n", game, game);
        let mut runner = runner(&input, config(HumanSide::X, true));
        let summary = runner.run().unwrap();
        assert_eq!(summary.human_wins + summary.computer_wins + summary.draws, 2);
        assert_eq!(output_of(&runner).matches("Play again?").count(), 2);
    }

    #[test]
    fn test_declining_restart_ends_session() {
        let input = format!("{}n\n", scripted_game_as_x());
        let mut runner = runner(&input, config(HumanSide::X, true));
        let summary = runner.run().unwrap();
        assert_eq!(summary.human_wins + summary.computer_wins + summary.draws, 1);
    }
}
