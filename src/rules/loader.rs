//! Load species tuning from TOML files

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::core::error::Result;
use crate::core::types::Species;
use crate::entity::species::{SpeciesProfile, SpeciesTable};

/// On-disk layout: one optional table per species
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SpeciesFile {
    generic: Option<SpeciesProfile>,
    fox: Option<SpeciesProfile>,
    snake: Option<SpeciesProfile>,
}

impl SpeciesFile {
    fn overrides(self) -> [(Species, Option<SpeciesProfile>); 3] {
        [
            (Species::Generic, self.generic),
            (Species::Fox, self.fox),
            (Species::Snake, self.snake),
        ]
    }
}

/// Load a species table, starting from the built-in profiles
///
/// Every profile present in the file replaces the built-in one for its
/// species and must pass `SpeciesProfile::validate`.
pub fn load_species_table(path: &Path) -> Result<SpeciesTable> {
    let content = fs::read_to_string(path)?;
    let table = parse_species_table(&content)?;
    tracing::info!("Loaded species tuning from {}", path.display());
    Ok(table)
}

/// Same as `load_species_table` for TOML already in memory
pub fn parse_species_table(content: &str) -> Result<SpeciesTable> {
    let file: SpeciesFile = toml::from_str(content)?;
    let mut table = SpeciesTable::default();

    for (species, profile) in file.overrides() {
        if let Some(profile) = profile {
            if let Err(e) = profile.validate(species) {
                tracing::warn!("Rejected {} profile: {}", species, e);
                return Err(e);
            }
            table.set_profile(species, profile);
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::PetError;

    #[test]
    fn test_empty_file_keeps_builtins() {
        let table = parse_species_table("").unwrap();
        assert_eq!(table, SpeciesTable::default());
    }

    #[test]
    fn test_override_replaces_one_species() {
        let content = r#"
            [fox]
            death = { hunger_limit = 95, hygiene_limit = 20, social_limit = 20, sleep_limit = 10 }
            mood = { hunger = 75, hygiene = 35, social = 35, sleep = 25 }
            happy = { hunger_rate = 2, hygiene_rate = 2, social_rate = 2, sleep_rate = 2, action_boost = 9 }
            sad = { hunger_rate = 6, hygiene_rate = 3, social_rate = 3, sleep_rate = 3, action_boost = 4 }
        "#;
        let table = parse_species_table(content).unwrap();

        let fox = table.profile(Species::Fox);
        assert_eq!(fox.death.hunger_limit(), 95);
        assert_eq!(fox.happy.action_boost, 9);
        assert_eq!(
            table.profile(Species::Snake),
            &SpeciesProfile::for_species(Species::Snake)
        );
    }

    #[test]
    fn test_missing_mood_field_is_ignored_by_rule() {
        let content = r#"
            [generic]
            death = { hunger_limit = 85, hygiene_limit = 15, social_limit = 15, sleep_limit = 10 }
            mood = { hunger = 65, social = 30, sleep = 20 }
            happy = { hunger_rate = 3, hygiene_rate = 2, social_rate = 2, sleep_rate = 2, action_boost = 7 }
            sad = { hunger_rate = 5, hygiene_rate = 3, social_rate = 3, sleep_rate = 3, action_boost = 4 }
        "#;
        let table = parse_species_table(content).unwrap();
        assert!(!table.profile(Species::Generic).mood.checks_hygiene());
    }

    #[test]
    fn test_invalid_profile_is_rejected() {
        // Sad boost above happy boost
        let content = r#"
            [snake]
            death = { hunger_limit = 80, hygiene_limit = 15, social_limit = 5, sleep_limit = 5 }
            mood = { hunger = 60, social = 10, sleep = 30 }
            happy = { hunger_rate = 2, hygiene_rate = 1, social_rate = 1, sleep_rate = 1, action_boost = 3 }
            sad = { hunger_rate = 4, hygiene_rate = 2, social_rate = 2, sleep_rate = 2, action_boost = 10 }
        "#;
        assert!(matches!(
            parse_species_table(content),
            Err(PetError::InvalidProfile { species: Species::Snake, .. })
        ));
    }

    #[test]
    fn test_oversized_rates_are_rejected() {
        let huge_boost = r#"
            [generic]
            death = { hunger_limit = 85, hygiene_limit = 15, social_limit = 15, sleep_limit = 10 }
            mood = { hunger = 65, hygiene = 30, social = 30, sleep = 20 }
            happy = { hunger_rate = 3, hygiene_rate = 2, social_rate = 2, sleep_rate = 2, action_boost = 2000000000 }
            sad = { hunger_rate = 5, hygiene_rate = 3, social_rate = 3, sleep_rate = 3, action_boost = 4 }
        "#;
        assert!(matches!(
            parse_species_table(huge_boost),
            Err(PetError::InvalidProfile { species: Species::Generic, .. })
        ));

        let huge_rate = r#"
            [generic]
            death = { hunger_limit = 85, hygiene_limit = 15, social_limit = 15, sleep_limit = 10 }
            mood = { hunger = 65, hygiene = 30, social = 30, sleep = 20 }
            happy = { hunger_rate = 3, hygiene_rate = 2, social_rate = 2, sleep_rate = 2, action_boost = 7 }
            sad = { hunger_rate = 5, hygiene_rate = 2147483647, social_rate = 3, sleep_rate = 3, action_boost = 4 }
        "#;
        assert!(matches!(
            parse_species_table(huge_rate),
            Err(PetError::InvalidProfile { species: Species::Generic, .. })
        ));
    }

    #[test]
    fn test_unknown_species_table_is_a_parse_error() {
        let content = "[dragon]\n";
        assert!(matches!(parse_species_table(content), Err(PetError::TomlError(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_species_table(Path::new("/nonexistent/species.toml"));
        assert!(matches!(result, Err(PetError::IoError(_))));
    }
}
