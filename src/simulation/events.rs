//! Events and history logging

use serde::{Deserialize, Serialize};

use crate::ant::{BattleOutcome, Behavior};
use crate::core::types::{AntId, ColonyId, Species, Tick};

/// Something that changed during a tick
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SimulationEvent {
    // Food
    Fed { colony: ColonyId, species: String, consumed: i32, remaining: i32 },
    Starving { colony: ColonyId, species: String },
    AntDied { colony: ColonyId, ant: AntId },

    // Construction
    ChamberAdvanced { colony: ColonyId, chamber: String, progress: u32, required: u32 },
    ChamberCompleted { colony: ColonyId, chamber: String },

    // Behavior
    AntActed { colony: ColonyId, ant: AntId, species: Species, behavior: Behavior },
    Battle {
        attacker: (ColonyId, AntId),
        defender: (ColonyId, AntId),
        outcome: BattleOutcome,
    },

    // Lifecycle
    SimulationEnded { active_colonies: usize },
}

impl SimulationEvent {
    /// Colonies taking part in this event
    pub fn colonies(&self) -> Vec<ColonyId> {
        match self {
            SimulationEvent::Fed { colony, .. }
            | SimulationEvent::Starving { colony, .. }
            | SimulationEvent::AntDied { colony, .. }
            | SimulationEvent::ChamberAdvanced { colony, .. }
            | SimulationEvent::ChamberCompleted { colony, .. }
            | SimulationEvent::AntActed { colony, .. } => vec![*colony],
            SimulationEvent::Battle { attacker, defender, .. } => vec![attacker.0, defender.0],
            SimulationEvent::SimulationEnded { .. } => Vec::new(),
        }
    }
}

/// A logged event with the tick it happened on
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub tick: Tick,
    pub event: SimulationEvent,
}

/// The complete event history of a simulation
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventLog {
    pub events: Vec<Event>,
    next_event_id: u32,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_event(&mut self, tick: Tick, event: SimulationEvent) -> u32 {
        let id = self.next_event_id;
        self.next_event_id += 1;
        self.events.push(Event { id, tick, event });
        id
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events_for_tick(&self, tick: Tick) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.tick == tick)
    }

    pub fn events_for_colony(&self, colony: ColonyId) -> impl Iterator<Item = &Event> {
        self.events
            .iter()
            .filter(move |e| e.event.colonies().contains(&colony))
    }
}
