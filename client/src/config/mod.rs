mod config;
mod display_config;
mod tictactoe_config;

pub use config::{Config, get_config_manager};
pub use display_config::DisplayConfig;
pub use tictactoe_config::{HumanSide, TicTacToeConfig};
