pub mod session;
pub mod strategy;

pub use session::{PetEvent, PetSession, PetSnapshot};
pub use strategy::{MoodRates, MoodStrategy};
