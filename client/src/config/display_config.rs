use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    pub empty_cell_symbol: String,
    pub show_search_stats: bool,
}

impl DisplayConfig {
    pub fn empty_cell(&self) -> char {
        self.empty_cell_symbol.chars().next().unwrap_or('.')
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        let mut chars = self.empty_cell_symbol.chars();
        let (Some(symbol), None) = (chars.next(), chars.next()) else {
            return Err(format!(
                "empty_cell_symbol must be a single character, got {:?}",
                self.empty_cell_symbol
            ));
        };
        if matches!(symbol.to_ascii_uppercase(), 'X' | 'O') {
            return Err(format!("empty_cell_symbol {:?} clashes with a player mark", symbol));
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            empty_cell_symbol: ".".to_string(),
            show_search_stats: false,
        }
    }
}
