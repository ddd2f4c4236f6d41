use std::process::ExitCode;

use log::{error, info};

use chess_bot::config::GameConfig;
use chess_bot::orchestrator::Orchestrator;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::from_env();
    info!("starting game: {:?}", config);

    let mut game = match Orchestrator::from_config(&config) {
        Ok(game) => game,
        Err(err) => {
            error!("bad starting position: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let result = game.play();
    println!("{:?}", result);
    println!("{}", game.state().to_fen());
    ExitCode::SUCCESS
}
