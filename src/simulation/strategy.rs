//! Mood strategies
//!
//! A strategy maps vitals to new vitals, either for one passing time step or
//! for one player interaction. Happy pets decay slowly and respond strongly
//! to care; sad pets decay faster, with extra random loss, and respond weakly.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::{
    HAPPY_FEED_MULTIPLIER, HAPPY_PLAY_HUNGER_COST, SAD_DECAY_JITTER, SAD_PLAY_HUNGER_COST,
};
use crate::core::types::{Action, Mood};
use crate::entity::species::SpeciesProfile;
use crate::entity::vitals::{VitalKind, VitalStats};

/// Per-step decay rates and interaction boost for one (species, mood) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoodRates {
    /// Hunger gained per step
    pub hunger_rate: i32,
    /// Hygiene lost per step
    pub hygiene_rate: i32,
    /// Social lost per step
    pub social_rate: i32,
    /// Sleep lost per step
    pub sleep_rate: i32,
    /// Scale of every interaction's effect
    pub action_boost: i32,
}

impl MoodRates {
    pub const fn new(
        hunger_rate: i32,
        hygiene_rate: i32,
        social_rate: i32,
        sleep_rate: i32,
        action_boost: i32,
    ) -> Self {
        Self {
            hunger_rate,
            hygiene_rate,
            social_rate,
            sleep_rate,
            action_boost,
        }
    }

    /// Decay rate for one field
    pub fn rate(&self, kind: VitalKind) -> i32 {
        match kind {
            VitalKind::Hunger => self.hunger_rate,
            VitalKind::Hygiene => self.hygiene_rate,
            VitalKind::Social => self.social_rate,
            VitalKind::Sleep => self.sleep_rate,
        }
    }
}

/// The rate bundle in force for a pet's current mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoodStrategy {
    Happy(MoodRates),
    Sad(MoodRates),
}

impl MoodStrategy {
    /// Build the strategy a species uses for `mood`
    pub fn for_mood(mood: Mood, profile: &SpeciesProfile) -> Self {
        match mood {
            Mood::Happy => MoodStrategy::Happy(profile.happy),
            Mood::Sad => MoodStrategy::Sad(profile.sad),
        }
    }

    pub fn mood(&self) -> Mood {
        match self {
            MoodStrategy::Happy(_) => Mood::Happy,
            MoodStrategy::Sad(_) => Mood::Sad,
        }
    }

    pub fn rates(&self) -> &MoodRates {
        match self {
            MoodStrategy::Happy(rates) | MoodStrategy::Sad(rates) => rates,
        }
    }

    /// Advance vitals by one time step
    ///
    /// Only the sad strategy consumes randomness: hygiene, social and sleep
    /// each lose an extra independent draw from `0..SAD_DECAY_JITTER`.
    pub fn apply_step<R: Rng + ?Sized>(&self, vitals: &VitalStats, rng: &mut R) -> VitalStats {
        let rates = self.rates();
        let mut next = vitals.adjust(VitalKind::Hunger, rates.hunger_rate);

        for kind in [VitalKind::Hygiene, VitalKind::Social, VitalKind::Sleep] {
            let jitter = match self {
                MoodStrategy::Happy(_) => 0,
                MoodStrategy::Sad(_) => rng.gen_range(0..SAD_DECAY_JITTER),
            };
            let loss = rates.rate(kind).saturating_add(jitter);
            next = next.adjust(kind, loss.saturating_neg());
        }

        next
    }

    /// Apply one player interaction
    pub fn apply_interaction(&self, vitals: &VitalStats, action: Action) -> VitalStats {
        let boost = self.rates().action_boost;
        match (self, action) {
            (MoodStrategy::Happy(_), Action::Feed) => vitals.adjust(
                VitalKind::Hunger,
                HAPPY_FEED_MULTIPLIER.saturating_mul(boost).saturating_neg(),
            ),
            (MoodStrategy::Sad(_), Action::Feed) => {
                vitals.adjust(VitalKind::Hunger, boost.saturating_neg())
            }
            (MoodStrategy::Happy(_), Action::Play) => vitals
                .adjust(VitalKind::Social, boost)
                .adjust(VitalKind::Hunger, HAPPY_PLAY_HUNGER_COST),
            (MoodStrategy::Sad(_), Action::Play) => vitals
                .adjust(VitalKind::Social, boost / 2)
                .adjust(VitalKind::Hunger, SAD_PLAY_HUNGER_COST),
            (_, Action::Clean) => vitals.adjust(VitalKind::Hygiene, boost),
            (_, Action::Sleep) => vitals.adjust(VitalKind::Sleep, boost),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn base() -> VitalStats {
        VitalStats::uniform(50)
    }

    #[test]
    fn test_happy_step_uses_exact_rates() {
        let strategy = MoodStrategy::Happy(MoodRates::new(3, 2, 1, 2, 7));
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let next = strategy.apply_step(&base(), &mut rng);
        assert_eq!(next, VitalStats::new(53, 48, 49, 48));
    }

    #[test]
    fn test_happy_step_ignores_rng_state() {
        let strategy = MoodStrategy::Happy(MoodRates::new(3, 2, 2, 2, 7));
        let a = strategy.apply_step(&base(), &mut ChaCha8Rng::seed_from_u64(1));
        let b = strategy.apply_step(&base(), &mut ChaCha8Rng::seed_from_u64(999));
        assert_eq!(a, b);
    }

    #[test]
    fn test_happy_interactions() {
        let strategy = MoodStrategy::Happy(MoodRates::new(3, 2, 1, 2, 7));
        assert_eq!(
            strategy.apply_interaction(&base(), Action::Feed),
            VitalStats::new(36, 50, 50, 50)
        );
        assert_eq!(
            strategy.apply_interaction(&base(), Action::Play),
            VitalStats::new(51, 50, 57, 50)
        );
        assert_eq!(
            strategy.apply_interaction(&base(), Action::Clean),
            VitalStats::new(50, 57, 50, 50)
        );
        assert_eq!(
            strategy.apply_interaction(&base(), Action::Sleep),
            VitalStats::new(50, 50, 50, 57)
        );
    }

    #[test]
    fn test_sad_interactions() {
        let strategy = MoodStrategy::Sad(MoodRates::new(5, 3, 2, 3, 4));
        assert_eq!(
            strategy.apply_interaction(&base(), Action::Feed),
            VitalStats::new(46, 50, 50, 50)
        );
        assert_eq!(
            strategy.apply_interaction(&base(), Action::Play),
            VitalStats::new(52, 50, 52, 50)
        );
        assert_eq!(
            strategy.apply_interaction(&base(), Action::Clean),
            VitalStats::new(50, 54, 50, 50)
        );
        assert_eq!(
            strategy.apply_interaction(&base(), Action::Sleep),
            VitalStats::new(50, 50, 50, 54)
        );
    }

    #[test]
    fn test_sad_play_halves_odd_boost_toward_zero() {
        let strategy = MoodStrategy::Sad(MoodRates::new(4, 2, 2, 2, 3));
        let next = strategy.apply_interaction(&base(), Action::Play);
        assert_eq!(next.social(), 51);
        assert_eq!(next.hunger(), 52);
    }

    #[test]
    fn test_sad_step_stays_within_jitter_bounds() {
        let strategy = MoodStrategy::Sad(MoodRates::new(5, 3, 2, 3, 4));
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..200 {
            let next = strategy.apply_step(&base(), &mut rng);
            assert_eq!(next.hunger(), 55);
            assert!((44..=47).contains(&next.hygiene()), "hygiene {}", next.hygiene());
            assert!((45..=48).contains(&next.social()), "social {}", next.social());
            assert!((44..=47).contains(&next.sleep()), "sleep {}", next.sleep());
        }
    }

    #[test]
    fn test_sad_step_varies_across_calls() {
        let strategy = MoodStrategy::Sad(MoodRates::new(3, 2, 2, 2, 5));
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let results: Vec<VitalStats> =
            (0..16).map(|_| strategy.apply_step(&base(), &mut rng)).collect();

        assert!(results.iter().all(|r| r.hunger() == 53));
        assert!(results.iter().any(|r| *r != results[0]));
    }

    #[test]
    fn test_sad_step_is_reproducible_from_seed() {
        let strategy = MoodStrategy::Sad(MoodRates::new(3, 2, 2, 2, 5));
        let mut a = ChaCha8Rng::seed_from_u64(11);
        let mut b = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..10 {
            assert_eq!(
                strategy.apply_step(&base(), &mut a),
                strategy.apply_step(&base(), &mut b)
            );
        }
    }

    #[test]
    fn test_outputs_are_clamped() {
        let strategy = MoodStrategy::Happy(MoodRates::new(10, 10, 10, 10, 20));
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            strategy.apply_step(&VitalStats::new(95, 50, 50, 50), &mut rng).hunger(),
            100
        );
        let low = strategy.apply_step(&VitalStats::new(50, 5, 5, 5), &mut rng);
        assert_eq!((low.hygiene(), low.social(), low.sleep()), (0, 0, 0));
        assert_eq!(
            strategy
                .apply_interaction(&VitalStats::new(5, 50, 50, 50), Action::Feed)
                .hunger(),
            0
        );
    }

    #[test]
    fn test_extreme_rates_saturate_instead_of_overflowing() {
        let rates = MoodRates::new(i32::MAX, i32::MAX, i32::MAX, i32::MAX, i32::MAX);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let next = MoodStrategy::Sad(rates).apply_step(&base(), &mut rng);
        assert_eq!(next, VitalStats::new(100, 0, 0, 0));

        let happy = MoodStrategy::Happy(rates);
        assert_eq!(happy.apply_interaction(&base(), Action::Feed).hunger(), 0);
        assert_eq!(happy.apply_interaction(&base(), Action::Play).social(), 100);
        assert_eq!(happy.apply_interaction(&base(), Action::Clean).hygiene(), 100);
        assert_eq!(
            MoodStrategy::Sad(rates)
                .apply_interaction(&base(), Action::Feed)
                .hunger(),
            0
        );
    }

    #[test]
    fn test_strategy_reports_its_mood() {
        let rates = MoodRates::new(1, 1, 1, 1, 1);
        assert_eq!(MoodStrategy::Happy(rates).mood(), Mood::Happy);
        assert_eq!(MoodStrategy::Sad(rates).mood(), Mood::Sad);
        assert_eq!(MoodStrategy::Sad(rates).rates(), &rates);
    }
}
