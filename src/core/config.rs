//! Simulation configuration with documented constants
//!
//! All tunable numbers are collected here with explanations of their purpose
//! and how they interact with each other. Values can be loaded from a TOML
//! file; any field left out keeps its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{FarmError, Result};

/// Food reserve a colony starts with
pub const INITIAL_FOOD: i32 = 100;

/// Decides which colonies count towards the "more than one colony" check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityPolicy {
    /// Every colony still registered with the manager is active
    #[default]
    Registered,
    /// A colony is active only while some chamber holds a living ant
    Viable,
}

/// Configuration for the simulation systems
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for the battle pairing RNG
    ///
    /// The same seed with the same scenario always produces the same history.
    pub seed: u64,

    /// Food each colony starts with
    pub initial_food: i32,

    /// Hard stop for hosts that drive the loop; `None` runs until termination
    pub max_ticks: Option<u64>,

    /// Skirmishes fought per tick between ants of different colonies
    ///
    /// 0 disables combat entirely.
    pub battles_per_tick: u32,

    /// Health lost by every living ant of a colony that failed to feed
    ///
    /// Battles never reduce health, so this is what eventually kills colonies
    /// under the `viable` activity policy. 0 disables attrition.
    pub starvation_damage: i32,

    /// Whether the tick advances construction of occupied chambers
    pub advance_chambers: bool,

    /// How active colonies are counted for termination
    pub activity: ActivityPolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            initial_food: INITIAL_FOOD,
            max_ticks: None,
            battles_per_tick: 1,
            starvation_damage: 10,
            advance_chambers: true,
            activity: ActivityPolicy::Registered,
        }
    }
}

impl SimulationConfig {
    /// Load a config from a TOML file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.initial_food < 0 {
            return Err(FarmError::InvalidConfig(format!(
                "initial_food ({}) must not be negative",
                self.initial_food
            )));
        }

        if self.starvation_damage < 0 {
            return Err(FarmError::InvalidConfig(format!(
                "starvation_damage ({}) must not be negative",
                self.starvation_damage
            )));
        }

        if self.max_ticks == Some(0) {
            return Err(FarmError::InvalidConfig("max_ticks must be at least 1".into()));
        }

        Ok(())
    }
}
