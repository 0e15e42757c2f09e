//! Simulation manager - drives colonies one tick at a time
//!
//! Tick order:
//! 1. Feed every colony (registration order), starving colonies lose health
//! 2. Staffed chambers advance construction
//! 3. Able ants act
//! 4. Skirmishes between ants of different colonies
//! 5. Termination check
//!
//! Once the number of active colonies drops to one or zero the manager is
//! terminated and rejects further ticks. The host decides what to do next.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::colony::{AntFarm, ConstructionProgress, FeedOutcome};
use crate::core::config::{ActivityPolicy, SimulationConfig};
use crate::core::error::{FarmError, Result};
use crate::core::types::{AntId, ColonyId, Tick};
use crate::simulation::events::{EventLog, SimulationEvent};

/// Lifecycle of a simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationState {
    Running,
    Terminated,
}

/// Everything that happened during one tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickReport {
    pub tick: Tick,
    pub status: SimulationState,
    pub active_colonies: usize,
    pub events: Vec<SimulationEvent>,
}

impl TickReport {
    pub fn is_terminated(&self) -> bool {
        self.status == SimulationState::Terminated
    }
}

/// Owns the colonies and advances them
///
/// Colonies sit in registration slots. Removing a colony empties its slot
/// so the remaining ids and the feeding order stay stable.
pub struct SimulationManager {
    config: SimulationConfig,
    colonies: Vec<Option<AntFarm>>,
    state: SimulationState,
    current_tick: Tick,
    history: EventLog,
    rng: ChaCha8Rng,
}

impl SimulationManager {
    pub fn new(config: SimulationConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            config,
            colonies: Vec::new(),
            state: SimulationState::Running,
            current_tick: 0,
            history: EventLog::new(),
            rng,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == SimulationState::Terminated
    }

    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    pub fn history(&self) -> &EventLog {
        &self.history
    }

    /// Register a colony; it is fed after every colony registered before it
    pub fn add_colony(&mut self, farm: AntFarm) -> ColonyId {
        let id = ColonyId(self.colonies.len() as u32);
        tracing::info!("Registered colony {} as {:?}", farm.species(), id);
        self.colonies.push(Some(farm));
        id
    }

    /// Drop a colony from the simulation, handing it back to the caller
    pub fn remove_colony(&mut self, id: ColonyId) -> Result<AntFarm> {
        let farm = self
            .colonies
            .get_mut(id.index())
            .and_then(Option::take)
            .ok_or(FarmError::ColonyNotFound(id))?;
        tracing::info!("Removed colony {} ({:?})", farm.species(), id);
        Ok(farm)
    }

    pub fn colony(&self, id: ColonyId) -> Option<&AntFarm> {
        self.colonies.get(id.index()).and_then(Option::as_ref)
    }

    pub fn colony_mut(&mut self, id: ColonyId) -> Option<&mut AntFarm> {
        self.colonies.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Registered colonies in registration order
    pub fn colonies(&self) -> impl Iterator<Item = (ColonyId, &AntFarm)> {
        self.colonies
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|farm| (ColonyId(i as u32), farm)))
    }

    /// Number of colony slots ever registered, including removed ones
    pub fn registered_slots(&self) -> usize {
        self.colonies.len()
    }

    /// Colonies that count towards keeping the simulation running
    pub fn active_count(&self) -> usize {
        let registered = self.colonies.iter().flatten();
        match self.config.activity {
            ActivityPolicy::Registered => registered.count(),
            ActivityPolicy::Viable => registered.filter(|farm| farm.is_viable()).count(),
        }
    }

    /// Advance the simulation by one tick
    ///
    /// Rejected with [`FarmError::SimulationTerminated`] once terminated.
    pub fn tick(&mut self) -> Result<TickReport> {
        if self.is_terminated() {
            return Err(FarmError::SimulationTerminated(self.current_tick));
        }

        self.current_tick += 1;
        let mut events = Vec::new();

        self.feed_colonies(&mut events);
        if self.config.advance_chambers {
            self.advance_construction(&mut events);
        }
        self.run_actions(&mut events);
        self.run_battles(&mut events);

        let active_colonies = self.active_count();
        if active_colonies <= 1 {
            self.state = SimulationState::Terminated;
            events.push(SimulationEvent::SimulationEnded { active_colonies });
        }

        for event in &events {
            log_event(self.current_tick, event);
            self.history.add_event(self.current_tick, event.clone());
        }

        Ok(TickReport {
            tick: self.current_tick,
            status: self.state,
            active_colonies,
            events,
        })
    }

    /// Tick until terminated or `max_ticks` ticks have run
    pub fn run_for(&mut self, max_ticks: u64) -> Vec<TickReport> {
        let mut reports = Vec::new();
        for _ in 0..max_ticks {
            match self.tick() {
                Ok(report) => {
                    let done = report.is_terminated();
                    reports.push(report);
                    if done {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
        reports
    }

    fn feed_colonies(&mut self, events: &mut Vec<SimulationEvent>) {
        let damage = self.config.starvation_damage;
        for (i, slot) in self.colonies.iter_mut().enumerate() {
            let Some(farm) = slot else { continue };
            let colony = ColonyId(i as u32);

            match farm.feed() {
                FeedOutcome::Fed { consumed, remaining } => events.push(SimulationEvent::Fed {
                    colony,
                    species: farm.species().to_string(),
                    consumed,
                    remaining,
                }),
                FeedOutcome::Starving => {
                    events.push(SimulationEvent::Starving {
                        colony,
                        species: farm.species().to_string(),
                    });
                    for ant in farm.starve(damage) {
                        events.push(SimulationEvent::AntDied { colony, ant });
                    }
                }
            }
        }
    }

    fn advance_construction(&mut self, events: &mut Vec<SimulationEvent>) {
        for (i, slot) in self.colonies.iter_mut().enumerate() {
            let Some(farm) = slot else { continue };
            let colony = ColonyId(i as u32);

            for (chamber, progress) in farm.advance_staffed_chambers() {
                match progress {
                    ConstructionProgress::InProgress { progress, required } => {
                        events.push(SimulationEvent::ChamberAdvanced {
                            colony,
                            chamber,
                            progress,
                            required,
                        })
                    }
                    ConstructionProgress::Completed { .. } => {
                        events.push(SimulationEvent::ChamberCompleted { colony, chamber })
                    }
                    ConstructionProgress::AlreadyComplete => {}
                }
            }
        }
    }

    fn run_actions(&self, events: &mut Vec<SimulationEvent>) {
        for (colony, farm) in self.colonies() {
            for ant_id in farm.able_ants() {
                let Some(ant) = farm.ant(ant_id) else { continue };
                if let Ok(behavior) = ant.act() {
                    events.push(SimulationEvent::AntActed {
                        colony,
                        ant: ant_id,
                        species: ant.species(),
                        behavior,
                    });
                }
            }
        }
    }

    fn run_battles(&mut self, events: &mut Vec<SimulationEvent>) {
        for _ in 0..self.config.battles_per_tick {
            let candidates: Vec<(usize, Vec<AntId>)> = self
                .colonies
                .iter()
                .enumerate()
                .filter_map(|(i, slot)| slot.as_ref().map(|farm| (i, farm.able_ants())))
                .filter(|(_, ants)| !ants.is_empty())
                .collect();

            if candidates.len() < 2 {
                return;
            }

            let first = self.rng.gen_range(0..candidates.len());
            let mut second = self.rng.gen_range(0..candidates.len() - 1);
            if second >= first {
                second += 1;
            }

            let (attacker_colony, attacker_ants) = &candidates[first];
            let (defender_colony, defender_ants) = &candidates[second];
            let attacker_id = attacker_ants[self.rng.gen_range(0..attacker_ants.len())];
            let defender_id = defender_ants[self.rng.gen_range(0..defender_ants.len())];

            let (attacker_slot, defender_slot) =
                pair_mut(&mut self.colonies, *attacker_colony, *defender_colony);
            let (Some(attacker_farm), Some(defender_farm)) =
                (attacker_slot.as_mut(), defender_slot.as_mut())
            else {
                continue;
            };
            let (Some(attacker), Some(defender)) =
                (attacker_farm.ant_mut(attacker_id), defender_farm.ant_mut(defender_id))
            else {
                continue;
            };

            match attacker.battle(defender) {
                Ok(outcome) => events.push(SimulationEvent::Battle {
                    attacker: (ColonyId(*attacker_colony as u32), attacker_id),
                    defender: (ColonyId(*defender_colony as u32), defender_id),
                    outcome,
                }),
                Err(e) => tracing::warn!("Battle skipped: {}", e),
            }
        }
    }
}

impl Default for SimulationManager {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

/// Mutable access to two distinct slots
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    assert_ne!(a, b, "pair_mut needs distinct indices");
    if a < b {
        let (left, right) = items.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

fn log_event(tick: Tick, event: &SimulationEvent) {
    match event {
        SimulationEvent::Starving { species, .. } => {
            tracing::warn!(tick, "No food available. {} are starving", species)
        }
        SimulationEvent::AntDied { colony, ant } => {
            tracing::info!(tick, "Ant {:?} of {:?} died", ant, colony)
        }
        SimulationEvent::ChamberCompleted { chamber, .. } => {
            tracing::info!(tick, "Chamber {} has been completed", chamber)
        }
        SimulationEvent::SimulationEnded { active_colonies } => {
            tracing::info!(tick, active_colonies, "Simulation ended")
        }
        other => tracing::debug!(tick, "{:?}", other),
    }
}
