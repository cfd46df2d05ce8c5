pub mod pet;
pub mod species;
pub mod thresholds;
pub mod vitals;

pub use pet::{PetState, Transition};
pub use species::{SpeciesProfile, SpeciesTable};
pub use thresholds::{DeathThreshold, MoodThreshold};
pub use vitals::{VitalKind, VitalStats};
