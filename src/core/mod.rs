pub mod config;
pub mod error;
pub mod types;

pub use config::{ActivityPolicy, SimulationConfig};
pub use error::{FarmError, Result};
pub use types::{AntId, ColonyId, Species, Tick};
