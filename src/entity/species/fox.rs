//! Fox - tolerates hunger well, needs company and a clean den

use crate::entity::species::SpeciesProfile;
use crate::entity::thresholds::{DeathThreshold, MoodThreshold};
use crate::simulation::strategy::MoodRates;

const DEATH: DeathThreshold = DeathThreshold::new(90, 20, 20, 10);

const MOOD: MoodThreshold = MoodThreshold::new(70, 35, 35, 25);

const HAPPY: MoodRates = MoodRates::new(3, 2, 2, 2, 8);

const SAD: MoodRates = MoodRates::new(5, 3, 3, 3, 4);

pub fn profile() -> SpeciesProfile {
    SpeciesProfile {
        death: DEATH,
        mood: MOOD,
        happy: HAPPY,
        sad: SAD,
    }
}
