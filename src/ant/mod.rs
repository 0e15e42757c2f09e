//! Ants - the mortal, combat-capable inhabitants of a colony

pub mod combat;

pub use combat::BattleOutcome;

use serde::{Deserialize, Serialize};

use crate::core::error::{FarmError, Result};
use crate::core::types::Species;

/// What an ant does with its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Behavior {
    Working,
    Patrolling,
    Commanding,
}

impl Behavior {
    pub fn for_species(species: Species) -> Self {
        match species {
            Species::Worker => Behavior::Working,
            Species::Soldier => Behavior::Patrolling,
            Species::Queen => Behavior::Commanding,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Behavior::Working => "working",
            Behavior::Patrolling => "patrolling",
            Behavior::Commanding => "commanding the colony",
        }
    }
}

/// A single ant
///
/// Strength is fixed at birth. Health only grows through battle and only
/// shrinks through [`Ant::take_damage`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ant {
    species: Species,
    health: i32,
    strength: i32,
    resting: bool,
}

impl Ant {
    pub fn new(species: Species) -> Self {
        Self {
            species,
            health: species.base_health(),
            strength: species.strength(),
            resting: false,
        }
    }

    pub fn worker() -> Self {
        Self::new(Species::Worker)
    }

    pub fn soldier() -> Self {
        Self::new(Species::Soldier)
    }

    pub fn queen() -> Self {
        Self::new(Species::Queen)
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn strength(&self) -> i32 {
        self.strength
    }

    pub fn is_resting(&self) -> bool {
        self.resting
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Alive and awake: allowed to act and fight
    pub fn is_able(&self) -> bool {
        self.is_alive() && !self.resting
    }

    pub fn rest(&mut self) {
        self.resting = true;
    }

    pub fn recover(&mut self) {
        self.resting = false;
    }

    /// Apply damage from outside combat (starvation, hazards)
    pub fn take_damage(&mut self, amount: i32) {
        self.health = self.health.saturating_sub(amount.max(0));
    }

    pub(crate) fn heal(&mut self, amount: i32) {
        self.health = self.health.saturating_add(amount);
    }

    /// Perform this ant's species behavior for the turn
    pub fn act(&self) -> Result<Behavior> {
        self.ensure_able()?;
        Ok(Behavior::for_species(self.species))
    }

    pub(crate) fn ensure_able(&self) -> Result<()> {
        if !self.is_alive() {
            return Err(FarmError::AntUnavailable("ant is dead"));
        }
        if self.resting {
            return Err(FarmError::AntUnavailable("ant is resting"));
        }
        Ok(())
    }
}
