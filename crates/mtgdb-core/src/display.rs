//! Default visible columns per entity.
//!
//! Used only to decide what to show; never consulted for query correctness.

use crate::catalog::Entity;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Mapping from entity name to its ordered default-visible columns
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisplayColumns {
    #[serde(default)]
    columns: HashMap<String, Vec<String>>,
}

impl Default for DisplayColumns {
    fn default() -> Self {
        let mut columns = HashMap::new();
        columns.insert(
            "cards".to_string(),
            to_strings(&[
                "id", "name", "setCode", "power", "toughness", "manaCost", "type", "text",
            ]),
        );
        columns.insert(
            "sets".to_string(),
            to_strings(&["id", "code", "block", "name", "releaseDate"]),
        );
        Self { columns }
    }
}

impl DisplayColumns {
    /// No entity has a configured subset
    pub fn empty() -> Self {
        Self {
            columns: HashMap::new(),
        }
    }

    /// Parse a TOML document of the form `[columns] cards = ["id", "name"]`
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load the defaults, overridden per entity by the given TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let overrides = Self::from_toml_str(&text)?;
        let mut loaded = Self::default();
        loaded.columns.extend(overrides.columns);
        tracing::debug!(path = %path.display(), entities = loaded.columns.len(), "loaded display columns");
        Ok(loaded)
    }

    /// Replace the configured subset for one entity
    pub fn set(&mut self, entity: impl Into<String>, columns: Vec<String>) {
        self.columns.insert(entity.into(), columns);
    }

    /// Configured subset, if any
    pub fn configured(&self, entity: &str) -> Option<&[String]> {
        self.columns.get(entity).map(Vec::as_slice)
    }

    /// Configured subset, or every column of the entity
    pub fn columns_for<'a>(&'a self, entity: &'a Entity) -> &'a [String] {
        self.configured(entity.name())
            .unwrap_or_else(|| entity.columns())
    }

    /// Whether `column` is shown for `entity`
    pub fn is_visible(&self, entity: &str, column: &str) -> bool {
        match self.configured(entity) {
            Some(cols) => cols.iter().any(|c| c == column),
            None => true,
        }
    }
}

fn to_strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_cover_cards_and_sets() {
        let display = DisplayColumns::default();
        assert_eq!(display.configured("cards").map(|c| c.len()), Some(8));
        assert_eq!(display.configured("sets").map(|c| c[1].as_str()), Some("code"));
        assert!(display.configured("rulings").is_none());
    }

    #[test]
    fn test_unconfigured_entity_shows_everything() {
        let display = DisplayColumns::default();
        let entity = Entity::new("rulings", vec!["uuid".into(), "text".into()]);

        assert_eq!(display.columns_for(&entity), entity.columns());
        assert!(display.is_visible("rulings", "anything"));
    }

    #[test]
    fn test_load_overrides_per_entity() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[columns]\nrulings = [\"date\", \"text\"]\ncards = [\"name\"]").unwrap();

        let display = DisplayColumns::load(file.path()).unwrap();
        assert_eq!(display.configured("cards"), Some(&["name".to_string()][..]));
        assert_eq!(display.configured("rulings").map(|c| c.len()), Some(2));
        assert!(display.configured("sets").is_some());
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = DisplayColumns::from_toml_str("columns = 3").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
