mod command;
mod console;

use std::path::PathBuf;

use clap::Parser;
use tictactoe_common::config::{ConfigManager, GameConfig};
use tictactoe_common::games::tictactoe::{TicTacToeGameState, TicTacToeSettings};
use tictactoe_common::{log, logger};

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    #[arg(long, default_value = "tictactoe.yaml")]
    config: PathBuf,

    /// Overrides the configured board size
    #[arg(long, allow_negative_numbers = true)]
    size: Option<i64>,

    /// Writes the effective config back to the config file
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager: ConfigManager<GameConfig> = ConfigManager::from_yaml_file(&args.config);
    let mut config = config_manager.get_config()?;
    if let Some(size) = args.size {
        config.board_size = size;
    }
    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved config to {}", args.config.display());
    }

    let settings = TicTacToeSettings::from(&config);
    let state = TicTacToeGameState::new(&settings)?;

    log!(
        "Starting a {}x{} game, computer plays {}",
        state.size(),
        state.size(),
        state.engine().player().mark()
    );

    console::run(state, &config).await?;

    log!("Bye");
    Ok(())
}
