//! Chambers - species-homogeneous rooms built up one tick at a time

use serde::{Deserialize, Serialize};

use crate::ant::Ant;
use crate::core::error::{FarmError, Result};
use crate::core::types::{AntId, Species};

/// Construction state of a chamber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChamberState {
    /// Still being dug out
    UnderConstruction,
    /// Finished; further contributions do nothing
    Complete,
}

/// Result of one contribution to a chamber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstructionProgress {
    /// Progress made, chamber still under construction
    InProgress { progress: u32, required: u32 },
    /// Progress made and the chamber is now complete
    Completed { progress: u32 },
    /// Chamber was already complete
    AlreadyComplete,
}

/// A named room of a colony
///
/// Members are indices into the owning colony's ant arena. The species tag
/// is unset until the first ant moves in and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chamber {
    name: String,
    /// Label of the colony that dug this chamber
    colony: String,
    species: Option<Species>,
    members: Vec<AntId>,
    state: ChamberState,
    build_progress: u32,
    required_ticks: u32,
}

impl Chamber {
    /// Start a new construction site
    pub fn new(name: impl Into<String>, colony: impl Into<String>, required_ticks: u32) -> Self {
        Self {
            name: name.into(),
            colony: colony.into(),
            species: None,
            members: Vec::new(),
            state: ChamberState::UnderConstruction,
            build_progress: 0,
            required_ticks,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn colony(&self) -> &str {
        &self.colony
    }

    pub fn species(&self) -> Option<Species> {
        self.species
    }

    pub fn members(&self) -> &[AntId] {
        &self.members
    }

    pub fn state(&self) -> ChamberState {
        self.state
    }

    pub fn build_progress(&self) -> u32 {
        self.build_progress
    }

    pub fn required_ticks(&self) -> u32 {
        self.required_ticks
    }

    pub fn is_complete(&self) -> bool {
        self.state == ChamberState::Complete
    }

    /// Check whether `ant` would be accepted without mutating anything
    pub fn accepts(&self, ant: &Ant) -> Result<()> {
        match self.species {
            Some(expected) if expected != ant.species() => Err(FarmError::SpeciesMismatch {
                chamber: self.name.clone(),
                expected,
                found: ant.species(),
            }),
            _ => Ok(()),
        }
    }

    /// Move an ant into this chamber
    ///
    /// The first ant fixes the chamber's species. Ants of any other species
    /// are rejected and the chamber is left unchanged.
    pub fn add_member(&mut self, id: AntId, ant: &Ant) -> Result<()> {
        self.accepts(ant)?;
        self.species.get_or_insert(ant.species());
        self.members.push(id);
        Ok(())
    }

    /// Add one tick of construction work
    pub fn contribute(&mut self) -> ConstructionProgress {
        if self.is_complete() {
            return ConstructionProgress::AlreadyComplete;
        }

        self.build_progress += 1;

        if self.build_progress >= self.required_ticks {
            self.state = ChamberState::Complete;
            ConstructionProgress::Completed {
                progress: self.build_progress,
            }
        } else {
            ConstructionProgress::InProgress {
                progress: self.build_progress,
                required: self.required_ticks,
            }
        }
    }
}
