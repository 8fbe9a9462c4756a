//! # Questgen Main Entry Point
//!
//! Command line front end for the quest and item atlas generators.

use clap::{Parser, Subcommand};
use log::{error, info};
use questgen::atlas::{self, AtlasOptions};
use questgen::{
    generation::utils::create_rng, save_collection, Category, GenerationConfig, Generator,
    QuestGenError, QuestGenResult, QuestGenerator,
};
use std::path::PathBuf;

/// Command line arguments for questgen.
#[derive(Parser, Debug)]
#[command(name = "questgen")]
#[command(about = "Generate quest configurations and item atlas sources for Minecraft servers")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a randomized quest configuration
    Quests {
        /// Number of quests to generate
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        num_quests: Option<i64>,

        /// Output file
        #[arg(short, long, default_value = questgen::DEFAULT_QUESTS_FILE)]
        output: PathBuf,

        /// Random seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Generate every quest in this category
        #[arg(short, long)]
        category: Option<Category>,

        /// TOML file with generation settings
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Convert an item atlas into character constant classes
    Atlas {
        /// Atlas JSON file
        #[arg(long, default_value = atlas::DEFAULT_ATLAS_FILE)]
        atlas: PathBuf,

        /// Material list file
        #[arg(long, default_value = atlas::DEFAULT_MATERIALS_FILE)]
        materials: PathBuf,

        /// Output source file
        #[arg(short, long, default_value = atlas::DEFAULT_SOURCE_FILE)]
        output: PathBuf,
    },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = initialize_logging(&args.log_level) {
        eprintln!("questgen: {}", e);
        std::process::exit(2);
    }

    info!("Starting questgen v{}", questgen::VERSION);

    if let Err(e) = run(args.command) {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Dispatches a subcommand.
fn run(command: Command) -> QuestGenResult<()> {
    match command {
        Command::Quests {
            num_quests,
            output,
            seed,
            category,
            config,
        } => run_quests(num_quests, output, seed, category, config),
        Command::Atlas {
            atlas: atlas_path,
            materials,
            output,
        } => atlas::convert_files(
            &atlas_path,
            &materials,
            &output,
            &AtlasOptions::default(),
        ),
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) -> QuestGenResult<()> {
    let level = match log_level.to_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        other => {
            return Err(QuestGenError::InvalidConfig(format!(
                "unknown log level '{}'",
                other
            )))
        }
    };

    #[cfg(feature = "dev-tools")]
    {
        tracing_subscriber::fmt()
            .with_max_level(level_to_tracing(level))
            .with_target(false)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .filter_level(level)
            .format_target(false)
            .init();
    }

    Ok(())
}

#[cfg(feature = "dev-tools")]
fn level_to_tracing(level: log::LevelFilter) -> tracing_subscriber::filter::LevelFilter {
    use tracing_subscriber::filter::LevelFilter;
    match level {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    }
}

/// Builds the run config, generates the quests, writes them and prints a summary.
fn run_quests(
    num_quests: Option<i64>,
    output: PathBuf,
    seed: Option<u64>,
    category: Option<Category>,
    config_path: Option<PathBuf>,
) -> QuestGenResult<()> {
    let config = match config_path {
        Some(path) => GenerationConfig::from_toml_file(path)?,
        None => GenerationConfig::default(),
    }
    .with_overrides(num_quests, seed, category);
    info!(
        "Generating {} quests with seed: {}",
        config.quest_count,
        config.seed.unwrap_or_default()
    );

    let generator = QuestGenerator::new();
    let mut rng = create_rng(&config);
    let collection = generator.generate(&config, &mut rng)?;
    save_collection(&collection, &output)?;

    println!(
        "Generated quest configuration saved to {}",
        output.display()
    );
    println!();
    println!("{}", collection.summary());
    Ok(())
}
