//! Connection settings.
//!
//! Each database URI can be overridden through the environment and then
//! again from the command line.

use std::path::PathBuf;

use mtgdb_core::Result;
use mtgdb_storage::DatabaseLocation;

/// Environment variable overriding the card-catalog database URI
pub const CARD_CATALOG_URI_ENV: &str = "MTG_JSON_SQLITE_URI";
/// Environment variable overriding the inventory database URI
pub const INVENTORY_URI_ENV: &str = "INVENTORY_SQLITE_URI";
/// Environment variable pointing at a display-columns TOML file
pub const DISPLAY_CONFIG_ENV: &str = "MTGDB_DISPLAY_CONFIG";

/// Default card-catalog database URI
pub const DEFAULT_CARD_CATALOG_URI: &str = "sqlite:///data/mtgjson/AllPrintings.sqlite";
/// Default inventory database URI
pub const DEFAULT_INVENTORY_URI: &str = "sqlite:///data/inventory.sqlite";

/// Session settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// URI of the card-catalog database
    pub card_catalog_uri: String,
    /// URI of the inventory database
    pub inventory_uri: String,
    /// Optional TOML file overriding the default display columns
    pub display_config: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            card_catalog_uri: DEFAULT_CARD_CATALOG_URI.to_string(),
            inventory_uri: DEFAULT_INVENTORY_URI.to_string(),
            display_config: None,
        }
    }
}

impl Settings {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            card_catalog_uri: lookup(CARD_CATALOG_URI_ENV).unwrap_or(defaults.card_catalog_uri),
            inventory_uri: lookup(INVENTORY_URI_ENV).unwrap_or(defaults.inventory_uri),
            display_config: lookup(DISPLAY_CONFIG_ENV).map(PathBuf::from),
        }
    }

    /// Set the card-catalog URI
    pub fn with_card_catalog_uri<S: Into<String>>(mut self, uri: S) -> Self {
        self.card_catalog_uri = uri.into();
        self
    }

    /// Set the inventory URI
    pub fn with_inventory_uri<S: Into<String>>(mut self, uri: S) -> Self {
        self.inventory_uri = uri.into();
        self
    }

    /// Set the display-columns file
    pub fn with_display_config<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.display_config = Some(path.into());
        self
    }

    /// Location of the card-catalog database
    pub fn card_catalog_location(&self) -> Result<DatabaseLocation> {
        DatabaseLocation::from_uri(&self.card_catalog_uri)
    }

    /// Location of the inventory database
    pub fn inventory_location(&self) -> Result<DatabaseLocation> {
        DatabaseLocation::from_uri(&self.inventory_uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings, Settings::default());
        assert_eq!(
            settings.card_catalog_location().unwrap(),
            DatabaseLocation::File(PathBuf::from("data/mtgjson/AllPrintings.sqlite"))
        );
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (INVENTORY_URI_ENV, "sqlite:////tmp/inv.sqlite"),
            (DISPLAY_CONFIG_ENV, "cols.toml"),
        ]
        .into_iter()
        .collect();
        let settings = Settings::from_lookup(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(settings.card_catalog_uri, DEFAULT_CARD_CATALOG_URI);
        assert_eq!(settings.inventory_uri, "sqlite:////tmp/inv.sqlite");
        assert_eq!(settings.display_config, Some(PathBuf::from("cols.toml")));
    }

    #[test]
    fn test_builders() {
        let settings = Settings::default()
            .with_card_catalog_uri(":memory:")
            .with_inventory_uri("inv.db");
        assert_eq!(settings.card_catalog_location().unwrap(), DatabaseLocation::Memory);
        assert_eq!(
            settings.inventory_location().unwrap(),
            DatabaseLocation::File(PathBuf::from("inv.db"))
        );
    }
}
