//! Ant Farm - Entry Point
//!
//! Builds colonies from a scenario, drives the simulation tick by tick and
//! narrates what happens. Stops when the simulation terminates or the tick
//! limit is reached.

use std::path::PathBuf;
use std::time::Instant;

use ant_farm::ant::BattleOutcome;
use ant_farm::core::error::{FarmError, Result};
use ant_farm::core::types::ColonyId;
use ant_farm::core::SimulationConfig;
use ant_farm::simulation::{
    ScenarioConfig, SimulationEvent, SimulationManager, SimulationOutput,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Tick-driven ant colony simulation
#[derive(Parser, Debug)]
#[command(name = "ant_farm")]
#[command(about = "Run an ant colony simulation until one colony remains")]
struct Args {
    /// Simulation config (TOML); defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scenario describing colonies, chambers and ants (TOML)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Maximum ticks to run (overrides the config)
    #[arg(long)]
    ticks: Option<u64>,

    /// Seed for battle pairings (overrides the config)
    #[arg(long)]
    seed: Option<u64>,

    /// Write the full output as JSON to this file
    #[arg(long)]
    json: Option<PathBuf>,

    /// Only print the final summary
    #[arg(long, short = 'q')]
    quiet: bool,
}

const DEFAULT_TICKS: u64 = 10;
const DEFAULT_LOG_FILTER: &str = "ant_farm=info";

/// `RUST_LOG` directives when set and valid, otherwise this crate at info
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(ticks) = args.ticks {
        config.max_ticks = Some(ticks);
    }
    let max_ticks = config.max_ticks.unwrap_or(DEFAULT_TICKS);

    let scenario = match &args.scenario {
        Some(path) => ScenarioConfig::load(path)?,
        None => ScenarioConfig::default(),
    };

    let (mut manager, rejections) = scenario.build(config)?;
    if !args.quiet {
        for rejection in &rejections {
            narrate_rejection(rejection);
        }
    }
    tracing::info!(
        "Starting simulation: {} colonies, up to {} ticks",
        manager.active_count(),
        max_ticks
    );

    let start = Instant::now();
    for _ in 0..max_ticks {
        let report = manager.tick()?;
        if !args.quiet {
            println!("Tick: {}", report.tick);
            for event in &report.events {
                narrate(&manager, event);
            }
        }
        if report.is_terminated() {
            break;
        }
    }

    let output = SimulationOutput::new(&manager, start.elapsed());
    println!();
    println!("{}", output.summary());

    if let Some(path) = &args.json {
        std::fs::write(path, output.to_json())?;
        println!("Full output written to {}", path.display());
    }

    Ok(())
}

fn narrate_rejection(error: &FarmError) {
    match error {
        FarmError::SpeciesMismatch { chamber, expected, found } => println!(
            "Species mismatch. {} cannot join room {} of {}.",
            found.name(),
            chamber,
            expected.name()
        ),
        FarmError::DuplicateChamber(name) => println!("Room {} already exists.", name),
        FarmError::ChamberNotFound(name) => println!("Room {} not found.", name),
        other => println!("Rejected: {}", other),
    }
}

fn colony_name(manager: &SimulationManager, id: ColonyId) -> String {
    manager
        .colony(id)
        .map(|farm| farm.species().to_string())
        .unwrap_or_else(|| format!("{:?}", id))
}

/// Print a single event the way a spectator would describe it
fn narrate(manager: &SimulationManager, event: &SimulationEvent) {
    match event {
        SimulationEvent::Fed { species, remaining, .. } => {
            println!("{} have been fed. Remaining food: {}", species, remaining)
        }
        SimulationEvent::Starving { species, .. } => {
            println!("No food available. {} are starving.", species)
        }
        SimulationEvent::AntDied { colony, ant } => {
            println!("Ant {} of {} has died.", ant.0, colony_name(manager, *colony))
        }
        SimulationEvent::ChamberAdvanced { chamber, progress, required, .. } => {
            println!("Room {} construction: {}/{}", chamber, progress, required)
        }
        SimulationEvent::ChamberCompleted { chamber, .. } => {
            println!("Room {} has been completed.", chamber)
        }
        SimulationEvent::AntActed { colony, species, behavior, .. } => println!(
            "{} {} is {}.",
            colony_name(manager, *colony),
            species,
            behavior.label()
        ),
        SimulationEvent::Battle { attacker, defender, outcome } => {
            let attacker_name = colony_name(manager, attacker.0);
            let defender_name = colony_name(manager, defender.0);
            match outcome {
                BattleOutcome::Won { gained } => println!(
                    "{} ant {} beat {} ant {} and gained {} health.",
                    attacker_name, attacker.1 .0, defender_name, defender.1 .0, gained
                ),
                BattleOutcome::Lost { defender_gained } => println!(
                    "{} ant {} held off {} ant {} and gained {} health.",
                    defender_name,
                    defender.1 .0,
                    attacker_name,
                    attacker.1 .0,
                    defender_gained
                ),
            }
        }
        SimulationEvent::SimulationEnded { active_colonies } => println!(
            "Simulation ends. {} active colon{} remain{}.",
            active_colonies,
            if *active_colonies == 1 { "y" } else { "ies" },
            if *active_colonies == 1 { "s" } else { "" }
        ),
    }
}
