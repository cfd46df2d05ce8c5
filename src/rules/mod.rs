//! Runtime species tuning loaded from TOML

mod loader;

pub use loader::{load_species_table, parse_species_table};
