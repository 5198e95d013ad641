//! CLI frontend for the Alembic crafting engine.

mod commands;

use std::path::PathBuf;
use std::process;

use al_mechanics::CraftConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "alembic",
    about = "Alembic: crafting outcomes and harvest rolls for tabletop alchemy",
    version,
    propagate_version = true
)]
struct Cli {
    /// JSON file with default settings (seed, drop_rate, harvest_count, preferred)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the rarity tiers, or the tier for a single influence total
    Rarity {
        /// Influence total to look up
        sum: Option<u32>,
    },

    /// Resolve a craft from influence sums and a check result
    Resolve {
        /// Combat influence
        #[arg(long, default_value = "0")]
        combat: u32,

        /// Utility influence
        #[arg(long, default_value = "0")]
        utility: u32,

        /// Entropy influence
        #[arg(long, default_value = "0")]
        entropy: u32,

        /// Skill check total
        #[arg(long, allow_negative_numbers = true)]
        check: i32,

        /// Difficulty class
        #[arg(long, allow_negative_numbers = true)]
        dc: i32,

        /// Force the output category (combat, utility, entropy)
        #[arg(short, long)]
        prefer: Option<String>,

        /// RNG seed for the reduction dice
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Brew a consumable from one to three reagents
    Brew {
        /// JSON file with the reagent catalog
        #[arg(short, long)]
        reagents: PathBuf,

        /// Reagent ids, one per alembic slot
        #[arg(required = true, num_args = 1..=3)]
        ids: Vec<String>,

        /// Use this check total instead of rolling
        #[arg(long, allow_negative_numbers = true, conflicts_with = "modifier")]
        check: Option<i32>,

        /// Modifier for a rolled check
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        modifier: i32,

        /// Force the output category (combat, utility, entropy)
        #[arg(short, long)]
        prefer: Option<String>,

        /// RNG seed for the check and reduction dice
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Roll a harvest table
    Harvest {
        /// JSON file with harvest tables
        #[arg(short, long)]
        tables: PathBuf,

        /// Id of the table to roll
        table: String,

        /// Number of attempts
        #[arg(short = 'n', long)]
        count: Option<u32>,

        /// Override the table's drop rate (percent)
        #[arg(short, long)]
        drop_rate: Option<f64>,

        /// RNG seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the harvest tables in a file
    Tables {
        /// JSON file with harvest tables
        #[arg(short, long)]
        tables: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&std::path::Path>) -> Result<CraftConfig, String> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            CraftConfig::load(path).map_err(|e| e.to_string())
        }
        None => Ok(CraftConfig::default()),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Rarity { sum } => commands::rarity::run(sum),
        Commands::Resolve {
            combat,
            utility,
            entropy,
            check,
            dc,
            prefer,
            seed,
            json,
        } => commands::resolve::run(
            &config,
            commands::resolve::Args {
                sums: al_core::IpSums::new(combat, utility, entropy),
                check,
                dc,
                prefer,
                seed,
                json,
            },
        ),
        Commands::Brew {
            reagents,
            ids,
            check,
            modifier,
            prefer,
            seed,
            json,
        } => commands::brew::run(
            &config,
            commands::brew::Args {
                reagents,
                ids,
                check,
                modifier,
                prefer,
                seed,
                json,
            },
        ),
        Commands::Harvest {
            tables,
            table,
            count,
            drop_rate,
            seed,
            json,
        } => commands::harvest::run(
            &config,
            commands::harvest::Args {
                tables,
                table,
                count,
                drop_rate,
                seed,
                json,
            },
        ),
        Commands::Tables { tables } => commands::harvest::list(&tables),
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
