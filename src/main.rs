//! Palabrle - CLI
//!
//! Spanish five-letter word game with TUI and line-based modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use palabrle::{
    commands::{run_simple, score_guess},
    config::{Config, ThemeChoice},
    logging::{init_cli_logger, init_file_logger},
    output::{print_score_result, print_stats},
    stats::StatsStore,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "palabrle",
    about = "Adivina la palabra de cinco letras (Spanish Wordle with accents)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for stats and logs (default: $PALABRLE_HOME or ~/.palabrle)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Color theme for the TUI
    #[arg(long, global = true, value_enum, default_value_t = ThemeChoice::Dark)]
    theme: ThemeChoice,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based game without the TUI
    Simple,

    /// Show saved win/loss stats
    Stats,

    /// Score a guess against a secret and list the keys it rules out
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.data_dir, cli.words, cli.theme, cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            init_file_logger(&config.log_path(), config.verbose)?;
            run_play_command(&config)
        }
        Commands::Simple => {
            init_cli_logger(config.verbose);
            run_simple_command(&config)
        }
        Commands::Stats => {
            init_cli_logger(config.verbose);
            run_stats_command(&config)
        }
        Commands::Score { guess, secret } => {
            init_cli_logger(config.verbose);
            run_score_command(&guess, &secret)
        }
    }
}

fn run_play_command(config: &Config) -> Result<()> {
    use palabrle::interactive::{App, Theme, run_tui};

    let dictionary = config.load_dictionary()?;
    let store = config.stats_store();
    let app = App::new(&dictionary, &store, Theme::from_choice(config.theme));
    run_tui(app)
}

fn run_simple_command(config: &Config) -> Result<()> {
    let dictionary = config.load_dictionary()?;
    let store = config.stats_store();
    run_simple(&dictionary, &store, &mut rand::rng())
}

fn run_stats_command(config: &Config) -> Result<()> {
    let stats = config.stats_store().load()?;
    print_stats(&stats);
    Ok(())
}

fn run_score_command(guess: &str, secret: &str) -> Result<()> {
    let result = score_guess(guess, secret)?;
    print_score_result(&result);
    Ok(())
}
