//! Simulation layer - the tick loop, its events, and setup/output helpers

pub mod events;
pub mod manager;
pub mod output;
pub mod scenario;

pub use events::{Event, EventLog, SimulationEvent};
pub use manager::{SimulationManager, SimulationState, TickReport};
pub use output::{SimulationOutput, SimulationStats};
pub use scenario::ScenarioConfig;
