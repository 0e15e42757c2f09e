use thiserror::Error;

use crate::core::types::{ColonyId, Species, Tick};

#[derive(Error, Debug)]
pub enum FarmError {
    #[error("Species mismatch in chamber {chamber}: expected {expected:?}, found {found:?}")]
    SpeciesMismatch {
        chamber: String,
        expected: Species,
        found: Species,
    },

    #[error("Chamber not found: {0}")]
    ChamberNotFound(String),

    #[error("Chamber already exists: {0}")]
    DuplicateChamber(String),

    #[error("Colony not found: {0:?}")]
    ColonyNotFound(ColonyId),

    #[error("Ant unavailable: {0}")]
    AntUnavailable(&'static str),

    #[error("Simulation terminated at tick {0}")]
    SimulationTerminated(Tick),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, FarmError>;
