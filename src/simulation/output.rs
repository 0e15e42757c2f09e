//! Simulation output and serialization

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::colony::AntFarm;
use crate::core::types::{ColonyId, Tick};
use crate::simulation::events::{EventLog, SimulationEvent};
use crate::simulation::manager::{SimulationManager, SimulationState};

/// Complete simulation output
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationOutput {
    pub final_state: SimulationState,
    pub colonies: Vec<(ColonyId, AntFarm)>,
    pub history: EventLog,
    pub statistics: SimulationStats,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationStats {
    pub ticks_simulated: Tick,
    pub simulation_time_ms: u64,
    pub total_events: u32,
    pub battles_fought: u32,
    pub chambers_completed: u32,
    pub ants_died: u32,
    pub colonies_registered: u32,
    pub colonies_active: u32,
}

impl SimulationOutput {
    pub fn new(manager: &SimulationManager, elapsed: Duration) -> Self {
        let history = manager.history().clone();
        let count = |pred: fn(&SimulationEvent) -> bool| {
            history.events.iter().filter(|e| pred(&e.event)).count() as u32
        };

        let statistics = SimulationStats {
            ticks_simulated: manager.current_tick(),
            simulation_time_ms: elapsed.as_millis() as u64,
            total_events: history.len() as u32,
            battles_fought: count(|e| matches!(e, SimulationEvent::Battle { .. })),
            chambers_completed: count(|e| matches!(e, SimulationEvent::ChamberCompleted { .. })),
            ants_died: count(|e| matches!(e, SimulationEvent::AntDied { .. })),
            colonies_registered: manager.registered_slots() as u32,
            colonies_active: manager.active_count() as u32,
        };

        Self {
            final_state: manager.state(),
            colonies: manager
                .colonies()
                .map(|(id, farm)| (id, farm.clone()))
                .collect(),
            history,
            statistics,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn summary(&self) -> String {
        format!(
            "Simulated {} ticks in {}ms ({:?})\n\
             {} events, {} battles, {} chambers completed, {} ants died, \
             {} of {} colonies active",
            self.statistics.ticks_simulated,
            self.statistics.simulation_time_ms,
            self.final_state,
            self.statistics.total_events,
            self.statistics.battles_fought,
            self.statistics.chambers_completed,
            self.statistics.ants_died,
            self.statistics.colonies_active,
            self.statistics.colonies_registered,
        )
    }
}
