//! The four vital statistics every pet carries

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::config::{clamp_vital, INITIAL_VITAL};

/// Names one of the four vital fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VitalKind {
    Hunger,
    Hygiene,
    Social,
    Sleep,
}

impl VitalKind {
    pub fn all() -> &'static [VitalKind] {
        &[
            VitalKind::Hunger,
            VitalKind::Hygiene,
            VitalKind::Social,
            VitalKind::Sleep,
        ]
    }
}

/// Immutable snapshot of a pet's vitals
///
/// Every field is kept in `[0, 100]`: the constructor clamps, and every
/// transformation goes through the constructor.
/// - hunger: 0 = full, 100 = starving
/// - hygiene, social, sleep: 100 = fully satisfied, 0 = deprived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawVitals")]
pub struct VitalStats {
    hunger: i32,
    hygiene: i32,
    social: i32,
    sleep: i32,
}

#[derive(Deserialize)]
struct RawVitals {
    hunger: i32,
    hygiene: i32,
    social: i32,
    sleep: i32,
}

impl From<RawVitals> for VitalStats {
    fn from(raw: RawVitals) -> Self {
        Self::new(raw.hunger, raw.hygiene, raw.social, raw.sleep)
    }
}

impl Default for VitalStats {
    fn default() -> Self {
        Self::uniform(INITIAL_VITAL)
    }
}

impl VitalStats {
    pub fn new(hunger: i32, hygiene: i32, social: i32, sleep: i32) -> Self {
        Self {
            hunger: clamp_vital(hunger),
            hygiene: clamp_vital(hygiene),
            social: clamp_vital(social),
            sleep: clamp_vital(sleep),
        }
    }

    /// All four fields set to the same value
    pub fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn hunger(&self) -> i32 {
        self.hunger
    }

    pub fn hygiene(&self) -> i32 {
        self.hygiene
    }

    pub fn social(&self) -> i32 {
        self.social
    }

    pub fn sleep(&self) -> i32 {
        self.sleep
    }

    pub fn get(&self, kind: VitalKind) -> i32 {
        match kind {
            VitalKind::Hunger => self.hunger,
            VitalKind::Hygiene => self.hygiene,
            VitalKind::Social => self.social,
            VitalKind::Sleep => self.sleep,
        }
    }

    /// Copy with one field replaced (clamped)
    pub fn with(&self, kind: VitalKind, value: i32) -> Self {
        let mut next = *self;
        let value = clamp_vital(value);
        match kind {
            VitalKind::Hunger => next.hunger = value,
            VitalKind::Hygiene => next.hygiene = value,
            VitalKind::Social => next.social = value,
            VitalKind::Sleep => next.sleep = value,
        }
        next
    }

    /// Copy with `delta` added to one field (clamped)
    pub fn adjust(&self, kind: VitalKind, delta: i32) -> Self {
        self.with(kind, self.get(kind).saturating_add(delta))
    }
}

impl fmt::Display for VitalStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hunger={} hygiene={} social={} sleep={}",
            self.hunger, self.hygiene, self.social, self.sleep
        )
    }
}
