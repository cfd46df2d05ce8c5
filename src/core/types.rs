//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::PetError;

/// Simulation time unit: one `step`
pub type Tick = u64;

/// Species enumeration
///
/// A species only selects configuration (thresholds and rates); every
/// species runs the same state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Generic,
    Fox,
    Snake,
}

impl Species {
    pub fn all() -> &'static [Species] {
        &[Species::Generic, Species::Fox, Species::Snake]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Species::Generic => "generic",
            Species::Fox => "fox",
            Species::Snake => "snake",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Species {
    type Err = PetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generic" | "pet" => Ok(Species::Generic),
            "fox" => Ok(Species::Fox),
            "snake" => Ok(Species::Snake),
            _ => Err(PetError::UnknownSpecies(s.to_string())),
        }
    }
}

/// Derived emotional state of a pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Happy,
    Sad,
}

impl Mood {
    pub fn all() -> &'static [Mood] {
        &[Mood::Happy, Mood::Sad]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mood {
    type Err = PetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            _ => Err(PetError::UnknownMood(s.to_string())),
        }
    }
}

/// Player interactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Feed,
    Play,
    Clean,
    Sleep,
}

impl Action {
    pub fn all() -> &'static [Action] {
        &[Action::Feed, Action::Play, Action::Clean, Action::Sleep]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::Feed => "feed",
            Action::Play => "play",
            Action::Clean => "clean",
            Action::Sleep => "sleep",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = PetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "feed" => Ok(Action::Feed),
            "play" => Ok(Action::Play),
            "clean" => Ok(Action::Clean),
            "sleep" => Ok(Action::Sleep),
            _ => Err(PetError::UnknownAction(s.to_string())),
        }
    }
}
