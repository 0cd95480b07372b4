//! Genre and theme template catalog
//!
//! Static reference data mapping genre/theme names to short lists of
//! descriptive phrases used when composing prompts. Loaded once at startup
//! and never mutated.

use crate::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const BUILT_IN_GENRES: &str = include_str!("../data/genres.json");
const BUILT_IN_THEMES: &str = include_str!("../data/themes.json");

/// Descriptive phrases for one genre.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenreProfile {
    #[serde(skip)]
    pub name: String,
    #[serde(default)]
    pub elements: Vec<String>,
    #[serde(default)]
    pub conflicts: Vec<String>,
    #[serde(default)]
    pub moods: Vec<String>,
}

/// Descriptive phrases for one theme.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeProfile {
    #[serde(skip)]
    pub name: String,
    #[serde(default)]
    pub elements: Vec<String>,
}

/// Lookup table of genre and theme profiles.
#[derive(Debug)]
pub struct TemplateCatalog {
    genres: HashMap<String, GenreProfile>,
    themes: HashMap<String, ThemeProfile>,
}

impl TemplateCatalog {
    /// Catalog parsed from the JSON files embedded in the binary.
    pub fn built_in() -> Result<Self> {
        Self::from_json(BUILT_IN_GENRES, BUILT_IN_THEMES)
    }

    /// Load `genres.json` and `themes.json` from `data_dir`, for deployments
    /// that ship their own catalogs.
    pub fn from_files(data_dir: &Path) -> Result<Self> {
        let genres = fs::read_to_string(data_dir.join("genres.json"))?;
        let themes = fs::read_to_string(data_dir.join("themes.json"))?;
        Self::from_json(&genres, &themes)
    }

    fn from_json(genres_json: &str, themes_json: &str) -> Result<Self> {
        let mut genres: HashMap<String, GenreProfile> = serde_json::from_str(genres_json)?;
        for (name, profile) in genres.iter_mut() {
            profile.name = name.clone();
        }

        let mut themes: HashMap<String, ThemeProfile> = serde_json::from_str(themes_json)?;
        for (name, profile) in themes.iter_mut() {
            profile.name = name.clone();
        }

        Ok(Self { genres, themes })
    }

    /// Profile for `name`. Unknown genres yield an empty profile so the
    /// prompt simply carries no extra descriptive phrases for that axis.
    pub fn genre(&self, name: &str) -> GenreProfile {
        self.genres.get(name).cloned().unwrap_or_else(|| GenreProfile {
            name: name.to_string(),
            ..GenreProfile::default()
        })
    }

    /// Profile for `name`, with the same lenient behavior as [`Self::genre`].
    pub fn theme(&self, name: &str) -> ThemeProfile {
        self.themes.get(name).cloned().unwrap_or_else(|| ThemeProfile {
            name: name.to_string(),
            ..ThemeProfile::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_built_in_catalog_parses() {
        let catalog = TemplateCatalog::built_in().unwrap();

        let fantasy = catalog.genre("Fantasy");
        assert_eq!(fantasy.name, "Fantasy");
        assert!(fantasy.elements.contains(&"ancient magic".to_string()));
        assert!(fantasy.conflicts.contains(&"a dark sorcerer".to_string()));
        assert!(fantasy.moods.contains(&"mysterious".to_string()));

        let redemption = catalog.theme("Redemption");
        assert!(redemption.elements.contains(&"second chances".to_string()));
    }

    #[test]
    fn test_unknown_genre_yields_empty_profile() {
        let catalog = TemplateCatalog::built_in().unwrap();

        let profile = catalog.genre("Biography");
        assert_eq!(profile.name, "Biography");
        assert!(profile.elements.is_empty());
        assert!(profile.conflicts.is_empty());
        assert!(profile.moods.is_empty());
    }

    #[test]
    fn test_unknown_theme_yields_empty_profile() {
        let catalog = TemplateCatalog::built_in().unwrap();

        let profile = catalog.theme("Bureaucracy");
        assert!(profile.elements.is_empty());
    }

    #[test]
    fn test_from_files_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("genres.json"),
            r#"{"Western": {"elements": ["dusty towns"], "conflicts": ["cattle rustlers"], "moods": ["gritty"]}}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("themes.json"),
            r#"{"Justice": {"elements": ["retribution"]}}"#,
        )
        .unwrap();

        let catalog = TemplateCatalog::from_files(dir.path()).unwrap();
        assert_eq!(catalog.genre("Western").elements, vec!["dusty towns"]);
        assert_eq!(catalog.theme("Justice").elements, vec!["retribution"]);
    }

    #[test]
    fn test_from_files_missing_dir_errors() {
        let err = TemplateCatalog::from_files(Path::new("/nonexistent/path")).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
