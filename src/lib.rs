//! Virtual Pet - state and mood engine
//!
//! A pet carries four bounded vitals that decay each step and respond to
//! feeding, play, cleaning and sleep. Mood (happy or sad) is derived from
//! the vitals through a per-species rule and selects which rates apply.
//! Crossing a species death limit ends the simulation for that pet.

pub mod core;
pub mod entity;
pub mod rules;
pub mod simulation;

pub use crate::core::{Action, Mood, PetError, Result, Species, Tick};
pub use crate::entity::{
    DeathThreshold, MoodThreshold, PetState, SpeciesProfile, SpeciesTable, Transition, VitalKind,
    VitalStats,
};
pub use crate::simulation::{MoodRates, MoodStrategy, PetEvent, PetSession, PetSnapshot};
