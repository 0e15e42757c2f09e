//! Battle resolution
//!
//! A battle is a single deterministic round. Strength comparisons only:
//! the strictly stronger ant wins and feeds on half the loser's strength.
//! On a tie or a loss the defender gets that bonus instead. Nobody loses
//! health in a battle.

use serde::{Deserialize, Serialize};

use crate::ant::Ant;
use crate::core::error::Result;

/// Result of a battle, seen from the attacker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    /// Attacker was stronger and gained health
    Won { gained: i32 },
    /// Attacker was not stronger; the defender gained health
    Lost { defender_gained: i32 },
}

impl BattleOutcome {
    pub fn attacker_won(&self) -> bool {
        matches!(self, BattleOutcome::Won { .. })
    }
}

impl Ant {
    /// Fight `defender` for one round
    ///
    /// Dead or resting ants cannot fight; either one rejects the battle and
    /// leaves both ants untouched.
    pub fn battle(&mut self, defender: &mut Ant) -> Result<BattleOutcome> {
        self.ensure_able()?;
        defender.ensure_able()?;

        if self.strength() > defender.strength() {
            let gained = defender.strength() / 2;
            self.heal(gained);
            Ok(BattleOutcome::Won { gained })
        } else {
            // Ties go to the defender
            let defender_gained = self.strength() / 2;
            defender.heal(defender_gained);
            Ok(BattleOutcome::Lost { defender_gained })
        }
    }
}
