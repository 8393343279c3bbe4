use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::Mark;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum HumanSide {
    X,
    O,
    Random,
}

impl HumanSide {
    pub fn resolve(&self, rng: &mut SessionRng) -> Mark {
        match self {
            HumanSide::X => Mark::X,
            HumanSide::O => Mark::O,
            HumanSide::Random => {
                if rng.random_bool() {
                    Mark::X
                } else {
                    Mark::O
                }
            }
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeConfig {
    pub human_side: HumanSide,
    #[serde(default = "default_ask_restart")]
    pub ask_restart: bool,
}

fn default_ask_restart() -> bool {
    true
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            human_side: HumanSide::X,
            ask_restart: default_ask_restart(),
        }
    }
}
