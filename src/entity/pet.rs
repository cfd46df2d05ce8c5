//! Pet state machine
//!
//! States: alive-happy, alive-sad, dead. Every vitals change is followed by
//! the same settle sequence: mood from the species rule, a fresh strategy
//! for that mood, then the death check. Dead is absorbing: `step` and
//! `interact_with` are silent no-ops once the pet has died.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::{Action, Mood, Species};
use crate::entity::species::SpeciesProfile;
use crate::entity::thresholds::DeathThreshold;
use crate::entity::vitals::VitalStats;
use crate::simulation::strategy::MoodStrategy;

/// What a single call did to the pet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// False when the call was ignored because the pet was already dead
    pub applied: bool,
    pub mood_before: Mood,
    pub mood_after: Mood,
    /// True only on the call that killed the pet
    pub died: bool,
}

impl Transition {
    fn ignored(mood: Mood) -> Self {
        Self {
            applied: false,
            mood_before: mood,
            mood_after: mood,
            died: false,
        }
    }

    pub fn mood_changed(&self) -> bool {
        self.mood_before != self.mood_after
    }
}

/// One pet: vitals, mood, the strategy for that mood, and the death flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetState {
    species: Species,
    profile: SpeciesProfile,
    vitals: VitalStats,
    mood: Mood,
    strategy: MoodStrategy,
    dead: bool,
}

impl PetState {
    /// Fresh pet with the built-in profile for its species
    pub fn new(species: Species) -> Self {
        Self::with_profile(species, SpeciesProfile::for_species(species))
    }

    /// Fresh pet with a caller-supplied profile
    ///
    /// The profile is taken as-is; run `SpeciesProfile::validate` first if
    /// it came from outside the crate.
    pub fn with_profile(species: Species, profile: SpeciesProfile) -> Self {
        let vitals = VitalStats::default();
        let mood = profile.mood.mood_for(&vitals);
        Self {
            species,
            profile,
            vitals,
            mood,
            strategy: MoodStrategy::for_mood(mood, &profile),
            dead: profile.death.is_dead(&vitals),
        }
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn profile(&self) -> &SpeciesProfile {
        &self.profile
    }

    pub fn strategy(&self) -> &MoodStrategy {
        &self.strategy
    }

    pub fn health(&self) -> VitalStats {
        self.vitals
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn death_threshold(&self) -> DeathThreshold {
        self.profile.death
    }

    /// Let one unit of time pass
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Transition {
        if self.dead {
            tracing::debug!("{} is dead, step ignored", self.species);
            return Transition::ignored(self.mood);
        }

        let before = self.mood;
        self.vitals = self.strategy.apply_step(&self.vitals, rng);
        tracing::trace!("{} stepped to {}", self.species, self.vitals);
        self.settle(before)
    }

    /// Apply a player interaction
    pub fn interact_with(&mut self, action: Action) -> Transition {
        if self.dead {
            tracing::debug!("{} is dead, {} ignored", self.species, action);
            return Transition::ignored(self.mood);
        }

        let before = self.mood;
        self.vitals = self.strategy.apply_interaction(&self.vitals, action);
        tracing::trace!("{} after {}: {}", self.species, action, self.vitals);
        self.settle(before)
    }

    /// Next state after one step, leaving `self` untouched
    pub fn stepped<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut next = self.clone();
        next.step(rng);
        next
    }

    /// Next state after one interaction, leaving `self` untouched
    pub fn interacted(&self, action: Action) -> Self {
        let mut next = self.clone();
        next.interact_with(action);
        next
    }

    /// Override the mood without touching vitals
    ///
    /// No-op (returns false) when the pet is dead or already in `mood`.
    /// The override holds until the next step or interaction re-derives the
    /// mood from vitals.
    pub fn set_mood(&mut self, mood: Mood) -> bool {
        if self.dead || self.mood == mood {
            return false;
        }
        self.mood = mood;
        self.strategy = MoodStrategy::for_mood(mood, &self.profile);
        true
    }

    /// Replace vitals directly and re-derive mood, strategy and death
    ///
    /// Meant for calibration and tests. Unlike `step`, this works on a dead
    /// pet and clears the death flag when the new vitals are survivable.
    pub fn set_health(&mut self, vitals: VitalStats) {
        self.vitals = vitals;
        self.mood = self.profile.mood.mood_for(&vitals);
        self.strategy = MoodStrategy::for_mood(self.mood, &self.profile);
        self.dead = self.profile.death.is_dead(&vitals);
    }

    /// Clear the death flag, keeping vitals
    ///
    /// Mood and strategy are re-derived from the current vitals. A pet
    /// revived past a death limit dies again on its next step.
    pub fn revive(&mut self) {
        if !self.dead {
            return;
        }
        self.dead = false;
        self.mood = self.profile.mood.mood_for(&self.vitals);
        self.strategy = MoodStrategy::for_mood(self.mood, &self.profile);
        tracing::debug!("{} revived at {}", self.species, self.vitals);
    }

    fn settle(&mut self, before: Mood) -> Transition {
        self.mood = self.profile.mood.mood_for(&self.vitals);
        self.strategy = MoodStrategy::for_mood(self.mood, &self.profile);
        self.dead = self.profile.death.is_dead(&self.vitals);

        if self.mood != before {
            tracing::debug!("{} mood {} -> {}", self.species, before, self.mood);
        }
        if self.dead {
            tracing::info!("{} died at {}", self.species, self.vitals);
        }

        Transition {
            applied: true,
            mood_before: before,
            mood_after: self.mood,
            died: self.dead,
        }
    }
}
