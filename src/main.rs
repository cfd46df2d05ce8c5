//! Virtual Pet - Entry Point
//!
//! Interactive terminal front end for one pet. The species comes from the
//! first command-line argument (default: generic); the game loop reads
//! commands from stdin and drives a `PetSession`.

use virtual_pet::core::error::{PetError, Result};
use virtual_pet::{Action, Mood, PetSession, Species};

use std::io::{self, Write};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

enum Command {
    Step,
    Run(u64),
    Interact(Action),
    SetMood(Mood),
    Status,
    Quit,
}

impl FromStr for Command {
    type Err = PetError;

    fn from_str(input: &str) -> Result<Self> {
        let mut parts = input.split_whitespace();
        let head = parts.next().unwrap_or_default();
        let arg = parts.next();

        match (head, arg) {
            ("step" | "t", None) => Ok(Command::Step),
            ("run", Some(n)) => n
                .parse()
                .map(Command::Run)
                .map_err(|_| PetError::UnknownCommand(input.to_string())),
            ("mood", Some(mood)) => Ok(Command::SetMood(mood.parse()?)),
            ("status" | "s", None) => Ok(Command::Status),
            ("quit" | "q", None) => Ok(Command::Quit),
            (action, None) => action
                .parse()
                .map(Command::Interact)
                .map_err(|_| PetError::UnknownCommand(input.to_string())),
            _ => Err(PetError::UnknownCommand(input.to_string())),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("virtual_pet=info")),
        )
        .init();

    let species = match std::env::args().nth(1) {
        Some(name) => name.parse::<Species>()?,
        None => Species::Generic,
    };
    let seed: u64 = rand::random();
    tracing::info!("Virtual Pet starting with a {} (seed {})", species, seed);

    let mut session = PetSession::new(species, seed);

    println!("\n=== VIRTUAL PET ===");
    println!("You are caring for a {}.", species);
    println!();
    println!("Commands:");
    println!("  step / t                  - Let one unit of time pass");
    println!("  run <n>                   - Let n units of time pass");
    println!("  feed | play | clean | sleep");
    println!("  mood <happy|sad>          - Override the current mood");
    println!("  status / s                - Show vitals and thresholds");
    println!("  quit / q                  - Exit the game");
    println!();

    loop {
        display_status(&session);

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let command = match input.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Status => display_detailed_status(&session),
            _ if session.is_dead() => {
                println!("Your {} has died. Only status and quit remain.", species);
            }
            Command::Step => {
                session.step();
                println!("Tick {} complete.", session.tick());
            }
            Command::Run(n) => {
                let applied = session.run(n);
                println!("Ran {} of {} ticks. Now at tick {}.", applied, n, session.tick());
            }
            Command::Interact(action) => {
                session.interact(action);
                println!("You {} your {}.", action, species);
            }
            Command::SetMood(mood) => {
                if session.set_mood(mood) {
                    println!("Mood set to {}.", mood);
                } else {
                    println!("Already {}.", mood);
                }
            }
        }

        for event in session.drain_events() {
            tracing::debug!("{:?}", event);
        }
    }

    println!(
        "\nGoodbye! Your {} {} after {} ticks.",
        species,
        if session.is_dead() { "died" } else { "is still alive" },
        session.tick()
    );
    Ok(())
}

fn display_status(session: &PetSession) {
    let health = session.health();
    println!();
    println!(
        "--- Tick {} | {} | {} ---",
        session.tick(),
        session.mood(),
        if session.is_dead() { "DEAD" } else { "alive" }
    );
    println!(
        "Hunger: {:>3}  Hygiene: {:>3}  Social: {:>3}  Sleep: {:>3}",
        health.hunger(),
        health.hygiene(),
        health.social(),
        health.sleep()
    );
}

fn display_detailed_status(session: &PetSession) {
    let profile = session.pet().profile();
    println!();
    println!("Species:         {}", session.species());
    println!("Vitals:          {}", session.health());
    println!("Mood:            {}", session.mood());
    println!("Strategy rates:  {:?}", session.pet().strategy().rates());
    println!("Death when:      {}", session.death_threshold());
    println!("Sad when:        {:?}", profile.mood);
    println!("Seed:            {}", session.seed());
}
