pub mod generate;
pub mod play;

use clap::{Parser, Subcommand};
use equiz_common::config::Config;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(name = "equiz")]
#[command(about = "An interactive linear equation quiz.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Seed the random source for a reproducible problem sequence
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Suppress decorative output (repeat for results only)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Solve randomly generated equation systems interactively
    #[command(alias = "p")]
    Play,
    /// Print a batch of equation systems without playing
    #[command(alias = "g")]
    Generate {
        /// How many systems to print
        #[arg(short, long, default_value_t = 5)]
        count: u32,
        /// Also print the solutions
        #[arg(short, long)]
        reveal: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Random source for one command invocation, seeded when the user asked
/// for reproducibility.
pub(crate) fn session_rng(cfg: &Config) -> StdRng {
    match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
