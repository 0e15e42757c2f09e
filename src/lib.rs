//! Ant Farm - Tick-driven ant colony simulation
//!
//! Colonies dig chambers, feed their ants from a shared reserve, and send
//! their ants into skirmishes with rival colonies. The simulation ends once
//! at most one colony remains active.

pub mod ant;
pub mod colony;
pub mod core;
pub mod simulation;
