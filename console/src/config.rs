use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub rows: usize,
    pub cols: usize,

    /// Fill the starting grid with coin-flip cells instead of leaving it dead.
    pub randomize: bool,

    pub max_generations: Option<usize>,

    /// Seed for the random fill, so a run can be repeated.
    pub seed: Option<u64>,

    /// Grid file to start from. Overrides rows, cols and randomize.
    pub grid_path: Option<String>,

    /// How many steps `run` takes at most when no budget is given.
    pub step_budget: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            randomize: true,
            max_generations: None,
            seed: None,
            grid_path: None,
            step_budget: 1000,
        }
    }
}

impl ConsoleConfig {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config_serialized = fs::read(path).context("Couldn't read config")?;
        let config =
            serde_json::from_slice(&config_serialized).context("Couldn't deserialize config")?;
        Ok(config)
    }
}
