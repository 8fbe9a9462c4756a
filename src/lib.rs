//! # Questgen
//!
//! Content generators for a Minecraft server running the NotQuests plugin.
//!
//! ## Architecture Overview
//!
//! - **Quest Model**: serializable quest, objective, reward and settings types
//! - **Generation System**: seeded, weighted-random quest generation over
//!   fixed per-category content tables
//! - **Output**: YAML configuration writer for generated collections
//! - **Item Atlas**: converter from a font item atlas to character-constant
//!   source classes
//!
//! Every random draw goes through a `StdRng` passed in by the caller, so a
//! run is reproducible from its seed.

pub mod atlas;
pub mod generation;
pub mod output;
pub mod quest;

pub use generation::*;
pub use output::*;
pub use quest::*;

pub use generation::{
    describe_objective, generate_quests, objective_amount, GenerationConfig, Generator,
    QuestGenerator,
};

/// Core error type for quest and atlas generation.
#[derive(thiserror::Error, Debug)]
pub enum QuestGenError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// Item atlas content is malformed
    #[error("Invalid item atlas: {0}")]
    AtlasFormat(String),
}

/// Result type used throughout the questgen codebase.
pub type QuestGenResult<T> = Result<T, QuestGenError>;

/// Version information for the tool.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
