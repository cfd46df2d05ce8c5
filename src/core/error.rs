use thiserror::Error;

use crate::core::types::Species;

#[derive(Error, Debug)]
pub enum PetError {
    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Unknown mood: {0}")]
    UnknownMood(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid profile for {species}: {reason}")]
    InvalidProfile { species: Species, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PetError>;
