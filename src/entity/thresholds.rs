//! Death and mood thresholds
//!
//! Both predicates share one convention: a value sitting exactly on a limit
//! is still on the safe side. Hunger crosses when it rises above its limit;
//! the other fields cross when they fall below theirs.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::Mood;
use crate::entity::vitals::VitalStats;

/// Per-species limits beyond which a pet dies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeathThreshold {
    hunger_limit: i32,
    hygiene_limit: i32,
    social_limit: i32,
    sleep_limit: i32,
}

impl DeathThreshold {
    pub const fn new(
        hunger_limit: i32,
        hygiene_limit: i32,
        social_limit: i32,
        sleep_limit: i32,
    ) -> Self {
        Self {
            hunger_limit,
            hygiene_limit,
            social_limit,
            sleep_limit,
        }
    }

    /// Maximum tolerable hunger
    pub fn hunger_limit(&self) -> i32 {
        self.hunger_limit
    }

    /// Minimum tolerable hygiene
    pub fn hygiene_limit(&self) -> i32 {
        self.hygiene_limit
    }

    /// Minimum tolerable social
    pub fn social_limit(&self) -> i32 {
        self.social_limit
    }

    /// Minimum tolerable sleep
    pub fn sleep_limit(&self) -> i32 {
        self.sleep_limit
    }

    pub fn is_dead_condition(&self, hunger: i32, hygiene: i32, social: i32, sleep: i32) -> bool {
        hunger > self.hunger_limit
            || hygiene < self.hygiene_limit
            || social < self.social_limit
            || sleep < self.sleep_limit
    }

    pub fn is_dead(&self, vitals: &VitalStats) -> bool {
        self.is_dead_condition(vitals.hunger(), vitals.hygiene(), vitals.social(), vitals.sleep())
    }
}

impl fmt::Display for DeathThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hunger>{} hygiene<{} social<{} sleep<{}",
            self.hunger_limit, self.hygiene_limit, self.social_limit, self.sleep_limit
        )
    }
}

/// Species mood rule: the limits past which a pet turns sad
///
/// A `None` field is not consulted at all (snakes ignore hygiene).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoodThreshold {
    #[serde(default)]
    pub hunger: Option<i32>,
    #[serde(default)]
    pub hygiene: Option<i32>,
    #[serde(default)]
    pub social: Option<i32>,
    #[serde(default)]
    pub sleep: Option<i32>,
}

impl MoodThreshold {
    /// Rule that checks all four fields
    pub const fn new(hunger: i32, hygiene: i32, social: i32, sleep: i32) -> Self {
        Self {
            hunger: Some(hunger),
            hygiene: Some(hygiene),
            social: Some(social),
            sleep: Some(sleep),
        }
    }

    /// Copy of this rule that no longer consults hygiene
    pub const fn ignoring_hygiene(self) -> Self {
        Self {
            hygiene: None,
            ..self
        }
    }

    pub fn checks_hygiene(&self) -> bool {
        self.hygiene.is_some()
    }

    pub fn is_sad(&self, vitals: &VitalStats) -> bool {
        self.hunger.is_some_and(|limit| vitals.hunger() > limit)
            || self.hygiene.is_some_and(|limit| vitals.hygiene() < limit)
            || self.social.is_some_and(|limit| vitals.social() < limit)
            || self.sleep.is_some_and(|limit| vitals.sleep() < limit)
    }

    pub fn mood_for(&self, vitals: &VitalStats) -> Mood {
        if self.is_sad(vitals) {
            Mood::Sad
        } else {
            Mood::Happy
        }
    }
}
