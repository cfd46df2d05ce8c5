//! Engine constants
//!
//! The numbers every species shares. Per-species thresholds and rates live
//! in `entity::species`.

/// Lowest value any vital can hold
pub const VITAL_FLOOR: i32 = 0;

/// Highest value any vital can hold
pub const VITAL_CEILING: i32 = 100;

/// Starting value for all four vitals of a new pet
///
/// Exactly the midpoint, so every species mood rule has to admit it for a
/// pet to start out happy.
pub const INITIAL_VITAL: i32 = 50;

/// Exclusive upper bound of the extra decay a sad pet suffers per field
///
/// At 4, the jitter is one of 0, 1, 2 or 3 and is drawn independently for
/// hygiene, social and sleep. Hunger never jitters.
pub const SAD_DECAY_JITTER: i32 = 4;

/// Hunger added by PLAY for a happy pet
pub const HAPPY_PLAY_HUNGER_COST: i32 = 1;

/// Hunger added by PLAY for a sad pet
pub const SAD_PLAY_HUNGER_COST: i32 = 2;

/// Multiplier on the action boost when a happy pet is fed
pub const HAPPY_FEED_MULTIPLIER: i32 = 2;

/// Clamp a raw vital into `[VITAL_FLOOR, VITAL_CEILING]`
#[inline]
pub fn clamp_vital(value: i32) -> i32 {
    value.clamp(VITAL_FLOOR, VITAL_CEILING)
}
