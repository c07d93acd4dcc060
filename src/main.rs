//! Command-line host for the battle arena.

use clap::{Parser, Subcommand};
use pokemon_battle_arena::mcp_interface::{
    available_pokemon_display, battle_error_message, battle_report, battle_text,
    pokemon_details_display,
};
use pokemon_battle_arena::{
    resolve_battle_with_config, ArenaConfig, Catalog, CreatureLookup, SeededRng,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "pokemon-battle-arena")]
#[command(about = "Resolve battles between two Pokémon from a catalog")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog file (.json or .ron) to use instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every Pokémon in the catalog
    List,
    /// Show the full entry for one Pokémon
    Show { name: String },
    /// Fight two Pokémon until one faints
    Battle {
        pokemon1: String,
        pokemon2: String,

        /// Seed for a reproducible battle
        #[arg(long)]
        seed: Option<u64>,

        /// Turn limit before the battle is declared a draw
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        max_turns: Option<u32>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match ArenaConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => ArenaConfig::default(),
    };
    if let Some(path) = &cli.catalog {
        config.catalog_path = Some(path.clone());
    }

    let default_level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    match run(cli.command, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprint!("{}", message);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, mut config: ArenaConfig) -> Result<(), String> {
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path),
        None => Catalog::builtin(),
    }
    .map_err(|e| format!("Error loading catalog: {}\n", e))?;

    match command {
        Commands::List => {
            print!("{}", available_pokemon_display(&catalog));
        }
        Commands::Show { name } => {
            let details = pokemon_details_display(&catalog, &name);
            if catalog.lookup(&name).is_none() {
                return Err(details);
            }
            print!("{}", details);
        }
        Commands::Battle {
            pokemon1,
            pokemon2,
            seed,
            max_turns,
            json,
        } => {
            if let Some(max_turns) = max_turns {
                config.battle.max_turns = max_turns;
            }

            let mut rng = seed.map(SeededRng::new).unwrap_or_else(SeededRng::from_entropy);
            let outcome =
                resolve_battle_with_config(&pokemon1, &pokemon2, &catalog, &mut rng, &config.battle)
                    .map_err(|e| battle_error_message(&catalog, &e))?;

            if json {
                let report = battle_report(&outcome, rng.seed());
                let text = serde_json::to_string_pretty(&report)
                    .map_err(|e| format!("Failed to serialize report: {}\n", e))?;
                println!("{}", text);
            } else {
                print!("{}", battle_text(&outcome));
                println!("Seed: {}", rng.seed());
            }
        }
    }
    Ok(())
}
