//! Headless Pet Simulation
//!
//! Runs one pet through a fixed care schedule and prints the outcome.
//! Useful for checking how a species tuning file plays out.

use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use virtual_pet::rules::load_species_table;
use virtual_pet::{Action, PetEvent, PetSession, PetSnapshot, Species, SpeciesTable, Tick};

/// Headless Pet Simulation - scripted care schedule, seeded randomness
#[derive(Parser, Debug)]
#[command(name = "pet_sim")]
#[command(about = "Run a pet through a care schedule and report how it fared")]
struct Args {
    /// Species to simulate (generic, fox, snake)
    #[arg(long, default_value = "generic")]
    species: Species,

    /// Maximum ticks to run
    #[arg(long, default_value_t = 100)]
    ticks: u64,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Feed after every N ticks (0 = never)
    #[arg(long, default_value_t = 0)]
    feed_every: u64,

    /// Play after every N ticks (0 = never)
    #[arg(long, default_value_t = 0)]
    play_every: u64,

    /// Clean after every N ticks (0 = never)
    #[arg(long, default_value_t = 0)]
    clean_every: u64,

    /// Put to sleep after every N ticks (0 = never)
    #[arg(long, default_value_t = 0)]
    sleep_every: u64,

    /// TOML file overriding the built-in species tuning
    #[arg(long)]
    species_file: Option<PathBuf>,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,

    /// Print every event as it happens
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct RunResult {
    seed: u64,
    ticks_requested: u64,
    died_at: Option<Tick>,
    mood_changes: usize,
    interactions: usize,
    final_state: PetSnapshot,
}

fn main() -> virtual_pet::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("virtual_pet=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    let table = match &args.species_file {
        Some(path) => load_species_table(path)?,
        None => SpeciesTable::default(),
    };
    let profile = *table.profile(args.species);

    let schedule = [
        (Action::Feed, args.feed_every),
        (Action::Play, args.play_every),
        (Action::Clean, args.clean_every),
        (Action::Sleep, args.sleep_every),
    ];

    let mut session = PetSession::with_profile(args.species, profile, seed);
    let mut died_at = None;
    let mut mood_changes = 0;
    let mut interactions = 0;

    while session.tick() < args.ticks && !session.is_dead() {
        session.step();
        let tick = session.tick();
        for (action, every) in schedule {
            if every > 0 && tick % every == 0 {
                session.interact(action);
            }
        }

        for event in session.drain_events() {
            if args.verbose {
                eprintln!("  {:?}", event);
            }
            match event {
                PetEvent::Died { tick, .. } => died_at = Some(tick),
                PetEvent::MoodChanged { .. } => mood_changes += 1,
                PetEvent::Interacted { .. } => interactions += 1,
                _ => {}
            }
        }
    }

    let result = RunResult {
        seed,
        ticks_requested: args.ticks,
        died_at,
        mood_changes,
        interactions,
        final_state: session.snapshot(),
    };

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => {
            let state = &result.final_state;
            println!("=== {} (seed {}) ===", state.species, result.seed);
            match result.died_at {
                Some(tick) => println!("Died at tick {}", tick),
                None => println!("Survived {} ticks", state.tick),
            }
            println!("Final vitals:  {}", state.health);
            println!("Final mood:    {}", state.mood);
            println!("Mood changes:  {}", result.mood_changes);
            println!("Interactions:  {}", result.interactions);
        }
    }

    Ok(())
}
