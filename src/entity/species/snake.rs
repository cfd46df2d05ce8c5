//! Snake - slow metabolism, big meals, indifferent to hygiene
//!
//! The mood rule skips hygiene entirely. Hygiene still kills.

use crate::entity::species::SpeciesProfile;
use crate::entity::thresholds::{DeathThreshold, MoodThreshold};
use crate::simulation::strategy::MoodRates;

const DEATH: DeathThreshold = DeathThreshold::new(80, 15, 5, 5);

const MOOD: MoodThreshold = MoodThreshold {
    hunger: Some(60),
    hygiene: None,
    social: Some(10),
    sleep: Some(30),
};

const HAPPY: MoodRates = MoodRates::new(2, 1, 1, 1, 10);

const SAD: MoodRates = MoodRates::new(4, 2, 2, 2, 3);

pub fn profile() -> SpeciesProfile {
    SpeciesProfile {
        death: DEATH,
        mood: MOOD,
        happy: HAPPY,
        sad: SAD,
    }
}
