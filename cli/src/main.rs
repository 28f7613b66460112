mod commands;
mod terminal;

use commands::{CommandLine, Commands, generate, play};
use equiz_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        quiet: commands.quiet,
        seed: commands.seed,
    };

    match commands.command {
        Commands::Play => {
            print::banner(cfg.quiet);
            play::play(&cfg)
        }
        Commands::Generate { count, reveal } => {
            print::header("generating worksheet", cfg.quiet);
            generate::generate(count, reveal, &cfg)
        }
    }
}
