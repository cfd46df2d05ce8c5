//! Session driver - one pet, its random source, a clock and an event log
//!
//! This is the surface a front end talks to. It owns the seeded generator
//! the sad strategy draws from, so a session replays exactly from its seed.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::{Action, Mood, Species, Tick};
use crate::entity::pet::{PetState, Transition};
use crate::entity::species::SpeciesProfile;
use crate::entity::thresholds::DeathThreshold;
use crate::entity::vitals::VitalStats;

/// Events recorded by a session, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PetEvent {
    /// Time advanced by one step
    Stepped { tick: Tick, health: VitalStats },
    /// A player interaction was applied
    Interacted {
        tick: Tick,
        action: Action,
        health: VitalStats,
    },
    /// Mood changed, either re-derived from vitals or overridden
    MoodChanged { tick: Tick, from: Mood, to: Mood },
    /// The pet crossed a death limit
    Died { tick: Tick, health: VitalStats },
    /// A step (`action: None`) or interaction arrived after death
    IgnoredWhileDead { tick: Tick, action: Option<Action> },
}

/// Serializable view of a session at one moment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetSnapshot {
    pub species: Species,
    pub tick: Tick,
    pub health: VitalStats,
    pub mood: Mood,
    pub dead: bool,
}

/// One pet driven over time
///
/// Every call appends to an in-memory event log that is never trimmed.
/// Long-running callers must take it with `drain_events` as they go.
pub struct PetSession {
    pet: PetState,
    rng: ChaCha8Rng,
    seed: u64,
    tick: Tick,
    events: Vec<PetEvent>,
}

impl PetSession {
    pub fn new(species: Species, seed: u64) -> Self {
        Self::from_state(PetState::new(species), seed)
    }

    pub fn with_profile(species: Species, profile: SpeciesProfile, seed: u64) -> Self {
        Self::from_state(PetState::with_profile(species, profile), seed)
    }

    /// Wrap an existing pet, e.g. one positioned with `PetState::set_health`
    pub fn from_state(pet: PetState, seed: u64) -> Self {
        tracing::debug!("New {} session (seed {})", pet.species(), seed);
        Self {
            pet,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            tick: 0,
            events: Vec::new(),
        }
    }

    pub fn pet(&self) -> &PetState {
        &self.pet
    }

    pub fn species(&self) -> Species {
        self.pet.species()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Steps applied so far (ignored calls do not count)
    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn health(&self) -> VitalStats {
        self.pet.health()
    }

    pub fn mood(&self) -> Mood {
        self.pet.mood()
    }

    pub fn is_dead(&self) -> bool {
        self.pet.is_dead()
    }

    pub fn death_threshold(&self) -> DeathThreshold {
        self.pet.death_threshold()
    }

    pub fn step(&mut self) -> Transition {
        let transition = self.pet.step(&mut self.rng);
        if transition.applied {
            self.tick += 1;
            self.events.push(PetEvent::Stepped {
                tick: self.tick,
                health: self.pet.health(),
            });
        }
        self.record(transition, None);
        transition
    }

    pub fn interact(&mut self, action: Action) -> Transition {
        let transition = self.pet.interact_with(action);
        if transition.applied {
            self.events.push(PetEvent::Interacted {
                tick: self.tick,
                action,
                health: self.pet.health(),
            });
        }
        self.record(transition, Some(action));
        transition
    }

    /// Override the mood; see `PetState::set_mood`
    pub fn set_mood(&mut self, mood: Mood) -> bool {
        let from = self.pet.mood();
        let changed = self.pet.set_mood(mood);
        if changed {
            self.events.push(PetEvent::MoodChanged {
                tick: self.tick,
                from,
                to: mood,
            });
        }
        changed
    }

    /// Step up to `ticks` times, stopping early if the pet dies
    ///
    /// Returns the number of steps applied.
    pub fn run(&mut self, ticks: u64) -> u64 {
        let mut applied = 0;
        for _ in 0..ticks {
            if self.pet.is_dead() {
                break;
            }
            self.step();
            applied += 1;
        }
        applied
    }

    pub fn snapshot(&self) -> PetSnapshot {
        PetSnapshot {
            species: self.pet.species(),
            tick: self.tick,
            health: self.pet.health(),
            mood: self.pet.mood(),
            dead: self.pet.is_dead(),
        }
    }

    /// Events recorded since the last `drain_events`
    pub fn events(&self) -> &[PetEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the log empty
    pub fn drain_events(&mut self) -> Vec<PetEvent> {
        std::mem::take(&mut self.events)
    }

    fn record(&mut self, transition: Transition, action: Option<Action>) {
        if !transition.applied {
            self.events.push(PetEvent::IgnoredWhileDead {
                tick: self.tick,
                action,
            });
            return;
        }
        if transition.mood_changed() {
            self.events.push(PetEvent::MoodChanged {
                tick: self.tick,
                from: transition.mood_before,
                to: transition.mood_after,
            });
        }
        if transition.died {
            self.events.push(PetEvent::Died {
                tick: self.tick,
                health: self.pet.health(),
            });
        }
    }
}
