use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use cpim_core::config::AppConfig;
use cpim_data::InitialCondition;

/// Generation cap applied to headless runs that set none.
pub const DEFAULT_HEADLESS_GENERATIONS: u64 = 1000;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Mode to run the simulation in
    #[arg(short, long, value_enum, default_value = "tui")]
    pub mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Seed for the random source (overrides the config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Initial condition option, 1 to 5
    #[arg(long)]
    pub init: Option<u8>,

    /// Stop after this many generations
    #[arg(short, long)]
    pub generations: Option<u64>,

    /// Export the final lattice in headless mode
    #[arg(long)]
    pub export: bool,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Tui,
    Headless,
}

impl Args {
    /// Applies the command-line values on top of `config` and revalidates.
    pub fn apply_to(&self, config: &mut AppConfig) -> Result<()> {
        if let Some(seed) = self.seed {
            config.lattice.seed = Some(seed);
        }
        if let Some(option) = self.init {
            config.parameters.init_option = InitialCondition::try_from(option)?;
        }
        if let Some(generations) = self.generations {
            config.run.max_generations = Some(generations);
        }
        if self.mode == Mode::Headless && config.run.max_generations.is_none() {
            config.run.max_generations = Some(DEFAULT_HEADLESS_GENERATIONS);
        }
        config.validate()
    }
}
