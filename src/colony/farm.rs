//! Ant farms - one colony's chambers, ants and food reserve

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::ant::Ant;
use crate::colony::chamber::{Chamber, ConstructionProgress};
use crate::core::config::INITIAL_FOOD;
use crate::core::error::{FarmError, Result};
use crate::core::types::AntId;

/// Result of feeding a colony
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedOutcome {
    /// Food was eaten; one unit per chamber, possibly overdrawing the reserve
    Fed { consumed: i32, remaining: i32 },
    /// The reserve is empty or overdrawn; nothing was eaten
    Starving,
}

/// A colony of a single species label
///
/// Ants live in an arena owned by the farm and are referenced from chambers
/// by [`AntId`]. Ants are never removed from the arena, so ids stay valid
/// after death.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AntFarm {
    species: String,
    food: i32,
    /// Chambers in the order they were dug
    chambers: Vec<Chamber>,
    /// Chamber name -> index into `chambers`
    chamber_index: AHashMap<String, usize>,
    ants: Vec<Ant>,
}

impl AntFarm {
    pub fn new(species: impl Into<String>) -> Self {
        Self::with_food(species, INITIAL_FOOD)
    }

    pub fn with_food(species: impl Into<String>, food: i32) -> Self {
        Self {
            species: species.into(),
            food,
            chambers: Vec::new(),
            chamber_index: AHashMap::new(),
            ants: Vec::new(),
        }
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn food(&self) -> i32 {
        self.food
    }

    pub fn chambers(&self) -> &[Chamber] {
        &self.chambers
    }

    pub fn chamber_count(&self) -> usize {
        self.chambers.len()
    }

    pub fn chamber(&self, name: &str) -> Option<&Chamber> {
        self.chamber_index.get(name).map(|&idx| &self.chambers[idx])
    }

    fn chamber_idx(&self, name: &str) -> Result<usize> {
        self.chamber_index
            .get(name)
            .copied()
            .ok_or_else(|| FarmError::ChamberNotFound(name.to_string()))
    }

    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    pub fn ant(&self, id: AntId) -> Option<&Ant> {
        self.ants.get(id.index())
    }

    pub fn ant_mut(&mut self, id: AntId) -> Option<&mut Ant> {
        self.ants.get_mut(id.index())
    }

    /// Ants living in the named chamber, in arrival order
    pub fn ants_in(&self, chamber: &str) -> Result<Vec<(AntId, &Ant)>> {
        let idx = self.chamber_idx(chamber)?;
        Ok(self.chambers[idx]
            .members()
            .iter()
            .map(|&id| (id, &self.ants[id.index()]))
            .collect())
    }

    pub fn alive_count(&self) -> usize {
        self.ants.iter().filter(|a| a.is_alive()).count()
    }

    /// Ids of ants that may act and fight this tick
    pub fn able_ants(&self) -> Vec<AntId> {
        self.ants
            .iter()
            .enumerate()
            .filter(|(_, ant)| ant.is_able())
            .map(|(i, _)| AntId(i as u32))
            .collect()
    }

    /// True while at least one chamber holds a living ant
    pub fn is_viable(&self) -> bool {
        self.chambers.iter().any(|chamber| {
            chamber
                .members()
                .iter()
                .any(|id| self.ants[id.index()].is_alive())
        })
    }

    /// Dig a new chamber; names are unique within the colony
    pub fn add_chamber(&mut self, name: impl Into<String>, required_ticks: u32) -> Result<()> {
        let name = name.into();
        if self.chamber_index.contains_key(&name) {
            tracing::warn!("{}: chamber {} already dug", self.species, name);
            return Err(FarmError::DuplicateChamber(name));
        }

        let chamber = Chamber::new(name.clone(), self.species.clone(), required_ticks);
        self.chamber_index.insert(name, self.chambers.len());
        self.chambers.push(chamber);
        Ok(())
    }

    /// Place a new ant in the named chamber
    ///
    /// The ant only joins the colony if the chamber accepts it.
    pub fn add_member(&mut self, chamber: &str, ant: Ant) -> Result<AntId> {
        let id = AntId(self.ants.len() as u32);
        let joined = self
            .chamber_idx(chamber)
            .and_then(|idx| self.chambers[idx].add_member(id, &ant));
        if let Err(e) = joined {
            tracing::warn!("{}: rejected {} ant: {}", self.species, ant.species(), e);
            return Err(e);
        }
        self.ants.push(ant);
        Ok(id)
    }

    pub fn advance_chamber(&mut self, chamber: &str) -> Result<ConstructionProgress> {
        match self.chamber_idx(chamber) {
            Ok(idx) => Ok(self.chambers[idx].contribute()),
            Err(e) => {
                tracing::warn!("{}: cannot advance chamber: {}", self.species, e);
                Err(e)
            }
        }
    }

    /// Advance every unfinished chamber that has an able ant inside
    pub fn advance_staffed_chambers(&mut self) -> Vec<(String, ConstructionProgress)> {
        let ants = &self.ants;
        self.chambers
            .iter_mut()
            .filter(|chamber| !chamber.is_complete())
            .filter(|chamber| chamber.members().iter().any(|id| ants[id.index()].is_able()))
            .map(|chamber| (chamber.name().to_string(), chamber.contribute()))
            .collect()
    }

    /// Eat one unit of food per chamber
    ///
    /// The whole chamber count is eaten even when the reserve is smaller, so
    /// food may end below zero. Any feed at or below zero is starvation.
    pub fn feed(&mut self) -> FeedOutcome {
        if self.food <= 0 {
            return FeedOutcome::Starving;
        }

        let consumed = self.chambers.len() as i32;
        self.food -= consumed;
        FeedOutcome::Fed {
            consumed,
            remaining: self.food,
        }
    }

    /// Hurt every living ant; returns the ants that died from it
    pub fn starve(&mut self, damage: i32) -> Vec<AntId> {
        if damage <= 0 {
            return Vec::new();
        }

        let mut died = Vec::new();
        for (i, ant) in self.ants.iter_mut().enumerate() {
            if !ant.is_alive() {
                continue;
            }
            ant.take_damage(damage);
            if !ant.is_alive() {
                died.push(AntId(i as u32));
            }
        }
        died
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Species;

    #[test]
    fn test_new_farm_has_initial_food() {
        let farm = AntFarm::new("RedAnts");
        assert_eq!(farm.food(), 100);
        assert_eq!(farm.species(), "RedAnts");
        assert_eq!(farm.chamber_count(), 0);
    }

    #[test]
    fn test_duplicate_chamber_rejected() {
        let mut farm = AntFarm::new("RedAnts");
        farm.add_chamber("Room1", 5).unwrap();

        let result = farm.add_chamber("Room1", 9);

        assert!(matches!(result, Err(FarmError::DuplicateChamber(ref n)) if n == "Room1"));
        assert_eq!(farm.chamber_count(), 1);
        assert_eq!(farm.chamber("Room1").unwrap().required_ticks(), 5);
    }

    #[test]
    fn test_add_member_to_missing_chamber() {
        let mut farm = AntFarm::new("RedAnts");
        let result = farm.add_member("Nowhere", Ant::worker());
        assert!(matches!(result, Err(FarmError::ChamberNotFound(_))));
        assert!(farm.ants().is_empty());
    }

    #[test]
    fn test_rejected_member_not_added_to_arena() {
        let mut farm = AntFarm::new("RedAnts");
        farm.add_chamber("Room1", 5).unwrap();
        farm.add_member("Room1", Ant::worker()).unwrap();

        let result = farm.add_member("Room1", Ant::soldier());

        assert!(matches!(result, Err(FarmError::SpeciesMismatch { .. })));
        assert_eq!(farm.ants().len(), 1);
        assert_eq!(farm.ants_in("Room1").unwrap().len(), 1);
    }

    #[test]
    fn test_chambers_keep_own_species() {
        let mut farm = AntFarm::new("RedAnts");
        farm.add_chamber("Barracks", 4).unwrap();
        farm.add_chamber("Throne", 4).unwrap();
        let soldier = farm.add_member("Barracks", Ant::soldier()).unwrap();
        let queen = farm.add_member("Throne", Ant::queen()).unwrap();

        assert_eq!(farm.chamber("Barracks").unwrap().species(), Some(Species::Soldier));
        assert_eq!(farm.chamber("Throne").unwrap().species(), Some(Species::Queen));
        assert_eq!(farm.ant(soldier).unwrap().strength(), 30);
        assert_eq!(farm.ant(queen).unwrap().strength(), 50);
    }

    #[test]
    fn test_advance_missing_chamber() {
        let mut farm = AntFarm::new("RedAnts");
        assert!(matches!(
            farm.advance_chamber("Room9"),
            Err(FarmError::ChamberNotFound(_))
        ));
    }

    #[test]
    fn test_feed_consumes_one_per_chamber() {
        let mut farm = AntFarm::new("RedAnts");
        farm.add_chamber("A", 5).unwrap();
        farm.add_chamber("B", 5).unwrap();
        farm.add_chamber("C", 5).unwrap();

        assert_eq!(farm.feed(), FeedOutcome::Fed { consumed: 3, remaining: 97 });
        assert_eq!(farm.food(), 97);
    }

    #[test]
    fn test_feed_without_chambers_is_free() {
        let mut farm = AntFarm::new("RedAnts");
        assert_eq!(farm.feed(), FeedOutcome::Fed { consumed: 0, remaining: 100 });
    }

    #[test]
    fn test_feed_empty_reserve_starves() {
        let mut farm = AntFarm::with_food("RedAnts", 0);
        farm.add_chamber("A", 5).unwrap();

        assert_eq!(farm.feed(), FeedOutcome::Starving);
        assert_eq!(farm.feed(), FeedOutcome::Starving);
        assert_eq!(farm.food(), 0);
    }

    #[test]
    fn test_feed_overdraws_small_reserve() {
        let mut farm = AntFarm::with_food("RedAnts", 2);
        for name in ["A", "B", "C"] {
            farm.add_chamber(name, 5).unwrap();
        }

        assert_eq!(farm.feed(), FeedOutcome::Fed { consumed: 3, remaining: -1 });
        assert_eq!(farm.food(), -1);
        assert_eq!(farm.feed(), FeedOutcome::Starving);
        assert_eq!(farm.food(), -1);
    }

    #[test]
    fn test_advance_staffed_chambers_skips_empty_and_resting() {
        let mut farm = AntFarm::new("RedAnts");
        farm.add_chamber("Staffed", 2).unwrap();
        farm.add_chamber("Empty", 2).unwrap();
        farm.add_chamber("Sleepy", 2).unwrap();
        farm.add_member("Staffed", Ant::worker()).unwrap();
        let sleeper = farm.add_member("Sleepy", Ant::worker()).unwrap();
        farm.ant_mut(sleeper).unwrap().rest();

        let advanced = farm.advance_staffed_chambers();

        assert_eq!(advanced.len(), 1);
        assert_eq!(advanced[0].0, "Staffed");
        assert_eq!(farm.chamber("Empty").unwrap().build_progress(), 0);
        assert_eq!(farm.chamber("Sleepy").unwrap().build_progress(), 0);
    }

    #[test]
    fn test_starve_reports_deaths_once() {
        let mut farm = AntFarm::new("RedAnts");
        farm.add_chamber("Room1", 5).unwrap();
        farm.add_chamber("Room2", 5).unwrap();
        let worker = farm.add_member("Room1", Ant::worker()).unwrap();
        farm.add_member("Room2", Ant::queen()).unwrap();

        assert!(farm.starve(40).is_empty());
        assert_eq!(farm.starve(40), vec![worker]);
        assert!(farm.starve(0).is_empty());
        assert_eq!(farm.alive_count(), 1);
        assert!(farm.is_viable());

        farm.starve(100);
        assert_eq!(farm.alive_count(), 0);
        assert!(!farm.is_viable());
    }
}
