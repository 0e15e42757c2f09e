//! Colony layer - chambers, construction, and the food reserve

pub mod chamber;
pub mod farm;

pub use chamber::{Chamber, ChamberState, ConstructionProgress};
pub use farm::{AntFarm, FeedOutcome};
