mod config;
mod offline;
mod ui;

use clap::Parser;
use std::path::PathBuf;
use tictactoe_common::games::SessionRng;
use tictactoe_common::{log, logger};

use config::{HumanSide, get_config_manager};
use offline::TicTacToeRunner;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a minimax opponent")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    use_log_prefix: bool,
    /// Also log debug messages, including search statistics
    #[arg(long)]
    verbose: bool,
    /// Which mark the human plays; overrides the config file
    #[arg(long, value_enum)]
    human: Option<HumanSide>,
    /// Seed for the random side choice
    #[arg(long)]
    seed: Option<u64>,
    /// Write the effective config back to the config file
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager = get_config_manager(args.config);
    let mut config = config_manager.get_config()?;
    if let Some(human_side) = args.human {
        config.tictactoe.human_side = human_side;
    }
    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved");
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let stdin = std::io::stdin();
    let mut runner = TicTacToeRunner::new(stdin.lock(), std::io::stdout(), config, rng);
    runner.run()?;

    Ok(())
}
