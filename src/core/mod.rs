pub mod config;
pub mod error;
pub mod types;

pub use error::{PetError, Result};
pub use types::{Action, Mood, Species, Tick};
