//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Simulation tick counter
pub type Tick = u64;

/// Index of an ant inside its colony's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AntId(pub u32);

impl AntId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Registration slot of a colony inside the simulation manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColonyId(pub u32);

impl ColonyId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Species of an ant
///
/// Two ants may share a chamber only if their species are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Worker,
    Soldier,
    Queen,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Worker, Species::Soldier, Species::Queen];

    /// Health an ant of this species is born with
    pub fn base_health(&self) -> i32 {
        match self {
            Species::Worker => 50,
            Species::Soldier => 70,
            Species::Queen => 100,
        }
    }

    /// Strength an ant of this species keeps for life
    pub fn strength(&self) -> i32 {
        match self {
            Species::Worker => 10,
            Species::Soldier => 30,
            Species::Queen => 50,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Species::Worker => "WorkerAnt",
            Species::Soldier => "SoldierAnt",
            Species::Queen => "QueenAnt",
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_stats() {
        assert_eq!(Species::Worker.base_health(), 50);
        assert_eq!(Species::Worker.strength(), 10);
        assert_eq!(Species::Soldier.base_health(), 70);
        assert_eq!(Species::Soldier.strength(), 30);
        assert_eq!(Species::Queen.base_health(), 100);
        assert_eq!(Species::Queen.strength(), 50);
    }

    #[test]
    fn test_species_equality() {
        assert_eq!(Species::Worker, Species::Worker);
        assert_ne!(Species::Worker, Species::Soldier);
    }

    #[test]
    fn test_species_serde_lowercase() {
        let json = serde_json::to_string(&Species::Queen).unwrap();
        assert_eq!(json, "\"queen\"");
        let back: Species = serde_json::from_str("\"soldier\"").unwrap();
        assert_eq!(back, Species::Soldier);
    }

    #[test]
    fn test_ids_index() {
        assert_eq!(AntId(3).index(), 3);
        assert_eq!(ColonyId(7).index(), 7);
    }
}
