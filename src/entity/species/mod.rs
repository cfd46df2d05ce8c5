//! Species-specific configuration
//!
//! Species differ only in numbers: death limits, the mood rule, and the
//! happy/sad rate bundles. Each species module exposes a `profile()`.

mod fox;
mod generic;
mod snake;

use serde::{Deserialize, Serialize};

use crate::core::config::{INITIAL_VITAL, VITAL_CEILING};
use crate::core::error::{PetError, Result};
use crate::core::types::Species;
use crate::entity::thresholds::{DeathThreshold, MoodThreshold};
use crate::entity::vitals::{VitalKind, VitalStats};
use crate::simulation::strategy::MoodRates;

/// Everything that makes one species behave differently from another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpeciesProfile {
    pub death: DeathThreshold,
    pub mood: MoodThreshold,
    pub happy: MoodRates,
    pub sad: MoodRates,
}

impl SpeciesProfile {
    /// Built-in profile for a species
    pub fn for_species(species: Species) -> Self {
        match species {
            Species::Generic => generic::profile(),
            Species::Fox => fox::profile(),
            Species::Snake => snake::profile(),
        }
    }

    /// Check the gameplay invariants a profile must hold
    ///
    /// - every rate and boost lies in `0..=VITAL_CEILING`
    /// - every mood limit the rule checks is strictly inside its death limit
    /// - a fresh pet (all vitals at the midpoint) is happy and alive
    /// - happy rates are strictly slower than sad rates
    /// - the happy boost is strictly stronger than the sad boost
    pub fn validate(&self, species: Species) -> Result<()> {
        let invalid = |reason: String| PetError::InvalidProfile { species, reason };

        for rates in [&self.happy, &self.sad] {
            for kind in VitalKind::all() {
                let rate = rates.rate(*kind);
                if !(0..=VITAL_CEILING).contains(&rate) {
                    return Err(invalid(format!(
                        "{:?} rate ({}) must be within 0..={}",
                        kind, rate, VITAL_CEILING
                    )));
                }
            }
            if !(0..=VITAL_CEILING).contains(&rates.action_boost) {
                return Err(invalid(format!(
                    "action boost ({}) must be within 0..={}",
                    rates.action_boost, VITAL_CEILING
                )));
            }
        }

        if let Some(limit) = self.mood.hunger {
            if limit >= self.death.hunger_limit() {
                return Err(invalid(format!(
                    "hunger mood limit ({}) must be below death limit ({})",
                    limit,
                    self.death.hunger_limit()
                )));
            }
        }
        let floors = [
            (VitalKind::Hygiene, self.mood.hygiene, self.death.hygiene_limit()),
            (VitalKind::Social, self.mood.social, self.death.social_limit()),
            (VitalKind::Sleep, self.mood.sleep, self.death.sleep_limit()),
        ];
        for (kind, mood_limit, death_limit) in floors {
            if let Some(limit) = mood_limit {
                if limit <= death_limit {
                    return Err(invalid(format!(
                        "{:?} mood limit ({}) must be above death limit ({})",
                        kind, limit, death_limit
                    )));
                }
            }
        }

        let fresh = VitalStats::uniform(INITIAL_VITAL);
        if self.mood.is_sad(&fresh) {
            return Err(invalid("a fresh pet must start happy".into()));
        }
        if self.death.is_dead(&fresh) {
            return Err(invalid("a fresh pet must start alive".into()));
        }

        for kind in VitalKind::all() {
            if self.happy.rate(*kind) >= self.sad.rate(*kind) {
                return Err(invalid(format!(
                    "happy {:?} rate ({}) must be below sad rate ({})",
                    kind,
                    self.happy.rate(*kind),
                    self.sad.rate(*kind)
                )));
            }
        }
        if self.happy.action_boost <= self.sad.action_boost {
            return Err(invalid(format!(
                "happy boost ({}) must exceed sad boost ({})",
                self.happy.action_boost, self.sad.action_boost
            )));
        }

        Ok(())
    }
}

/// One profile per species
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesTable {
    pub generic: SpeciesProfile,
    pub fox: SpeciesProfile,
    pub snake: SpeciesProfile,
}

impl Default for SpeciesTable {
    fn default() -> Self {
        Self {
            generic: SpeciesProfile::for_species(Species::Generic),
            fox: SpeciesProfile::for_species(Species::Fox),
            snake: SpeciesProfile::for_species(Species::Snake),
        }
    }
}

impl SpeciesTable {
    pub fn profile(&self, species: Species) -> &SpeciesProfile {
        match species {
            Species::Generic => &self.generic,
            Species::Fox => &self.fox,
            Species::Snake => &self.snake,
        }
    }

    pub fn set_profile(&mut self, species: Species, profile: SpeciesProfile) {
        match species {
            Species::Generic => self.generic = profile,
            Species::Fox => self.fox = profile,
            Species::Snake => self.snake = profile,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for species in Species::all() {
            self.profile(*species).validate(*species)?;
        }
        Ok(())
    }
}
