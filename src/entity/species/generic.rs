//! Generic pet - the baseline every other species is tuned against

use crate::entity::species::SpeciesProfile;
use crate::entity::thresholds::{DeathThreshold, MoodThreshold};
use crate::simulation::strategy::MoodRates;

const DEATH: DeathThreshold = DeathThreshold::new(85, 15, 15, 10);

const MOOD: MoodThreshold = MoodThreshold::new(65, 30, 30, 20);

const HAPPY: MoodRates = MoodRates::new(3, 2, 2, 2, 7);

const SAD: MoodRates = MoodRates::new(5, 3, 3, 3, 4);

pub fn profile() -> SpeciesProfile {
    SpeciesProfile {
        death: DEATH,
        mood: MOOD,
        happy: HAPPY,
        sad: SAD,
    }
}
