//! Command-line roller for storyteller d10 dice pools.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use wwdice_core::RollerConfig;

#[derive(Parser)]
#[command(
    name = "wwdice",
    about = "Roll storyteller d10 dice pools",
    version,
    propagate_version = true
)]
struct Cli {
    /// RNG seed for reproducible rolls
    #[arg(long, global = true, env = "WWDICE_SEED")]
    seed: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll dice notation such as 5d6 (five dice, difficulty 6); append ! to explode 10s
    Roll {
        /// Dice notation: <count>d<difficulty>[!]
        notation: String,
    },

    /// Roll a trait formula such as str+athletics+1! for a character
    Check {
        /// Trait formula: names and bonuses joined by +, with ! to explode 10s
        formula: String,

        /// Difficulty of the roll (1-10)
        #[arg(short, long, env = "WWDICE_DIFFICULTY")]
        difficulty: Option<u8>,

        /// JSON file of trait scores
        #[arg(short, long)]
        sheet: Option<PathBuf>,

        /// Trait score as NAME=VALUE; overrides the sheet (repeatable)
        #[arg(short = 't', long = "trait", value_parser = commands::parse_trait)]
        traits: Vec<(String, u8)>,
    },

    /// Show a character's traits and check its core attributes
    Sheet {
        /// JSON file of trait scores
        #[arg(short, long)]
        sheet: Option<PathBuf>,

        /// Trait score as NAME=VALUE; overrides the sheet (repeatable)
        #[arg(short = 't', long = "trait", value_parser = commands::parse_trait)]
        traits: Vec<(String, u8)>,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let mut config = RollerConfig::default();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let result = match cli.command {
        Commands::Roll { notation } => commands::roll::run(&config, &notation, cli.json),
        Commands::Check {
            formula,
            difficulty,
            sheet,
            traits,
        } => {
            let character = commands::load_character(sheet.as_deref(), &traits);
            character.and_then(|c| {
                commands::check::run(&config, &c, &formula, difficulty, cli.json)
            })
        }
        Commands::Sheet { sheet, traits } => commands::load_character(sheet.as_deref(), &traits)
            .and_then(|c| commands::sheet::run(&c, cli.json)),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to stderr, filtered by `WWDICE_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("WWDICE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
