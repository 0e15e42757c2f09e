//! Integration tests for the colony layer
//!
//! These tests drive colonies through the public API only:
//! - Chamber construction from first contribution to completion
//! - Feeding against a shrinking food reserve
//! - Species rules for chamber membership

use ant_farm::ant::Ant;
use ant_farm::colony::{AntFarm, ChamberState, ConstructionProgress, FeedOutcome};
use ant_farm::core::error::FarmError;
use ant_farm::core::types::Species;

// ============================================================================
// Construction and Feeding
// ============================================================================

/// Integration test: one worker colony over five manual ticks
///
/// Each tick feeds the colony and advances Room1 once. Room1 needs five
/// contributions, so it must be complete after the fifth tick and the
/// colony must have eaten one unit per tick.
#[test]
fn test_red_ants_build_room_in_five_ticks() {
    let mut farm = AntFarm::new("RedAnts");
    farm.add_chamber("Room1", 5).unwrap();
    let worker = farm.add_member("Room1", Ant::worker()).unwrap();

    let ant = farm.ant(worker).unwrap();
    assert_eq!(ant.health(), 50);
    assert_eq!(ant.strength(), 10);

    let mut completions = 0;
    for tick in 1..=5 {
        assert!(matches!(farm.feed(), FeedOutcome::Fed { .. }));
        match farm.advance_chamber("Room1").unwrap() {
            ConstructionProgress::Completed { progress } => {
                completions += 1;
                assert_eq!(tick, 5);
                assert_eq!(progress, 5);
            }
            ConstructionProgress::InProgress { progress, required } => {
                assert_eq!(progress, tick);
                assert_eq!(required, 5);
            }
            ConstructionProgress::AlreadyComplete => panic!("completed too early"),
        }
    }

    assert_eq!(completions, 1);
    let room = farm.chamber("Room1").unwrap();
    assert!(room.is_complete());
    assert_eq!(room.state(), ChamberState::Complete);
    assert_eq!(farm.food(), 95);
}

/// Integration test: completion is signalled once even when work continues
#[test]
fn test_completed_room_ignores_further_work() {
    let mut farm = AntFarm::new("RedAnts");
    farm.add_chamber("Room1", 2).unwrap();

    let results: Vec<_> = (0..6)
        .map(|_| farm.advance_chamber("Room1").unwrap())
        .collect();

    let completed = results
        .iter()
        .filter(|r| matches!(r, ConstructionProgress::Completed { .. }))
        .count();
    assert_eq!(completed, 1);
    assert_eq!(farm.chamber("Room1").unwrap().build_progress(), 2);
}

/// Integration test: a colony overdraws its reserve and then starves
///
/// Every successful feed eats the full chamber count, even when that takes
/// the reserve below zero. The next feed reports starvation and eats nothing.
#[test]
fn test_colony_runs_out_of_food() {
    let mut farm = AntFarm::with_food("BlackAnts", 10);
    for name in ["A", "B", "C", "D"] {
        farm.add_chamber(name, 5).unwrap();
    }

    assert_eq!(farm.feed(), FeedOutcome::Fed { consumed: 4, remaining: 6 });
    assert_eq!(farm.feed(), FeedOutcome::Fed { consumed: 4, remaining: 2 });
    assert_eq!(farm.feed(), FeedOutcome::Fed { consumed: 4, remaining: -2 });

    for _ in 0..3 {
        assert_eq!(farm.feed(), FeedOutcome::Starving);
        assert_eq!(farm.food(), -2);
    }
}

// ============================================================================
// Membership Rules
// ============================================================================

/// Integration test: chambers of one colony specialise independently
#[test]
fn test_each_chamber_locks_to_first_species() {
    let mut farm = AntFarm::new("RedAnts");
    farm.add_chamber("Barracks", 3).unwrap();
    farm.add_chamber("Nursery", 3).unwrap();

    farm.add_member("Barracks", Ant::soldier()).unwrap();
    farm.add_member("Nursery", Ant::worker()).unwrap();

    assert!(matches!(
        farm.add_member("Barracks", Ant::worker()),
        Err(FarmError::SpeciesMismatch { expected: Species::Soldier, found: Species::Worker, .. })
    ));
    assert!(matches!(
        farm.add_member("Nursery", Ant::queen()),
        Err(FarmError::SpeciesMismatch { expected: Species::Worker, found: Species::Queen, .. })
    ));

    farm.add_member("Barracks", Ant::soldier()).unwrap();
    assert_eq!(farm.ants_in("Barracks").unwrap().len(), 2);
    assert_eq!(farm.ants_in("Nursery").unwrap().len(), 1);
    assert_eq!(farm.ants().len(), 3);
}

/// Integration test: unknown chamber names are reported, not ignored
#[test]
fn test_unknown_chamber_reported() {
    let mut farm = AntFarm::new("RedAnts");

    assert!(matches!(
        farm.add_member("Ghost", Ant::worker()),
        Err(FarmError::ChamberNotFound(ref name)) if name == "Ghost"
    ));
    assert!(matches!(
        farm.advance_chamber("Ghost"),
        Err(FarmError::ChamberNotFound(_))
    ));
    assert!(farm.ants_in("Ghost").is_err());
}

/// Integration test: ants in a colony can be rested and recovered in place
#[test]
fn test_rest_and_recover_through_colony() {
    let mut farm = AntFarm::new("RedAnts");
    farm.add_chamber("Room1", 5).unwrap();
    let id = farm.add_member("Room1", Ant::worker()).unwrap();

    farm.ant_mut(id).unwrap().rest();
    assert!(farm.able_ants().is_empty());
    assert!(farm.advance_staffed_chambers().is_empty());

    farm.ant_mut(id).unwrap().recover();
    assert_eq!(farm.able_ants(), vec![id]);
    assert_eq!(farm.advance_staffed_chambers().len(), 1);
}
