//! Declarative colony setup
//!
//! A scenario lists colonies, their chambers and the ants placed in each
//! chamber. Scenarios are plain TOML:
//!
//! ```toml
//! [[colonies]]
//! species = "RedAnts"
//!
//! [[colonies.chambers]]
//! name = "Room1"
//! required_ticks = 5
//! ants = [{ species = "worker", count = 1 }]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ant::Ant;
use crate::colony::AntFarm;
use crate::core::config::SimulationConfig;
use crate::core::error::{FarmError, Result};
use crate::core::types::Species;
use crate::simulation::manager::SimulationManager;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub colonies: Vec<ColonySpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColonySpec {
    pub species: String,
    /// Overrides `SimulationConfig::initial_food` for this colony
    #[serde(default)]
    pub food: Option<i32>,
    #[serde(default)]
    pub chambers: Vec<ChamberSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChamberSpec {
    pub name: String,
    pub required_ticks: u32,
    #[serde(default)]
    pub ants: Vec<AntSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AntSpec {
    pub species: Species,
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_count() -> u32 {
    1
}

impl Default for ScenarioConfig {
    /// Red worker colony against black soldier colony
    fn default() -> Self {
        let colony = |species: &str, room: &str, ant: Species| ColonySpec {
            species: species.into(),
            food: None,
            chambers: vec![ChamberSpec {
                name: room.into(),
                required_ticks: 5,
                ants: vec![AntSpec { species: ant, count: 1 }],
            }],
        };

        Self {
            colonies: vec![
                colony("RedAnts", "Room1", Species::Worker),
                colony("BlackAnts", "Room2", Species::Soldier),
            ],
        }
    }
}

impl ScenarioConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Build the colonies described by this scenario
    ///
    /// Rejected entries are skipped and returned next to the colonies. A
    /// rejected chamber drops the ants listed under it.
    pub fn build_colonies(&self, config: &SimulationConfig) -> (Vec<AntFarm>, Vec<FarmError>) {
        let mut rejections = Vec::new();
        let farms: Vec<AntFarm> = self
            .colonies
            .iter()
            .map(|spec| {
                let food = spec.food.unwrap_or(config.initial_food);
                let mut farm = AntFarm::with_food(spec.species.clone(), food);
                for chamber in &spec.chambers {
                    if let Err(e) = farm.add_chamber(chamber.name.clone(), chamber.required_ticks) {
                        rejections.push(e);
                        continue;
                    }
                    for ants in &chamber.ants {
                        for _ in 0..ants.count {
                            if let Err(e) = farm.add_member(&chamber.name, Ant::new(ants.species)) {
                                rejections.push(e);
                            }
                        }
                    }
                }
                farm
            })
            .collect();
        (farms, rejections)
    }

    /// Build a manager with every colony of this scenario registered in order
    ///
    /// Fails only on an invalid config; rejected scenario entries are returned
    /// with the manager.
    pub fn build(&self, config: SimulationConfig) -> Result<(SimulationManager, Vec<FarmError>)> {
        config.validate()?;
        let (colonies, rejections) = self.build_colonies(&config);
        let mut manager = SimulationManager::new(config);
        for farm in colonies {
            manager.add_colony(farm);
        }
        Ok((manager, rejections))
    }
}
