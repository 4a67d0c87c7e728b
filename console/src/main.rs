use std::{env, io};

use anyhow::Context;
use config::ConsoleConfig;
use libgame::Game;
use rand::{SeedableRng, rngs::StdRng};

mod cli;
mod config;

pub struct State {
    game: Game,
    config: ConsoleConfig,
    rng: StdRng,
}

impl State {
    fn new(config: ConsoleConfig) -> anyhow::Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let game = match &config.grid_path {
            Some(grid_path) => Game::load_with_limit(grid_path, config.max_generations)
                .with_context(|| format!("Couldn't load starting grid {grid_path}"))?,
            None => Game::new_with_rng(
                config.rows,
                config.cols,
                config.randomize,
                config.max_generations,
                &mut rng,
            )
            .context("Couldn't create starting grid")?,
        };

        Ok(Self { game, config, rng })
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match env::args().nth(1) {
        Some(config_path) => ConsoleConfig::load(&config_path)
            .with_context(|| format!("Couldn't use config {config_path}"))?,
        None => ConsoleConfig::default(),
    };

    let mut state = State::new(config)?;

    let (rows, cols) = state.game.dimensions();
    log::info!(
        "Started {rows}x{cols} grid with {} alive cells",
        state.game.population()
    );

    cli::run_cli(&mut state, io::stdin().lock(), io::stdout().lock())
}
