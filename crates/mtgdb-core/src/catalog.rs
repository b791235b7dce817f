//! Entity catalog.
//!
//! Entities are the record kinds an instruction can name. Each one belongs
//! to exactly one [`LogicalDatabase`], decided by membership in the closed
//! [`CatalogEntity`] set rather than by anything about the entity's shape.

use std::collections::BTreeMap;
use std::fmt;

/// One of the two independently owned data stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalDatabase {
    /// Card and set reference data
    Primary,
    /// Local inventory data
    Secondary,
}

impl LogicalDatabase {
    /// Static entity-name to database mapping.
    ///
    /// Names outside the card-catalog set fall through to `Secondary`.
    pub fn for_entity_name(name: &str) -> Self {
        if CatalogEntity::from_table_name(name).is_some() {
            LogicalDatabase::Primary
        } else {
            LogicalDatabase::Secondary
        }
    }

    /// Short identifier used in logs and listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalDatabase::Primary => "primary",
            LogicalDatabase::Secondary => "secondary",
        }
    }
}

impl fmt::Display for LogicalDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed set of card-catalog entity types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CatalogEntity {
    Card,
    Set,
    Legality,
    Ruling,
    ForeignData,
    Meta,
    SetTranslation,
    Token,
}

impl CatalogEntity {
    /// Every member of the card catalog.
    pub const ALL: [CatalogEntity; 8] = [
        CatalogEntity::Card,
        CatalogEntity::Set,
        CatalogEntity::Legality,
        CatalogEntity::Ruling,
        CatalogEntity::ForeignData,
        CatalogEntity::Meta,
        CatalogEntity::SetTranslation,
        CatalogEntity::Token,
    ];

    /// Table name in the card-catalog database.
    pub fn table_name(&self) -> &'static str {
        match self {
            CatalogEntity::Card => "cards",
            CatalogEntity::Set => "sets",
            CatalogEntity::Legality => "legalities",
            CatalogEntity::Ruling => "rulings",
            CatalogEntity::ForeignData => "foreign_data",
            CatalogEntity::Meta => "meta",
            CatalogEntity::SetTranslation => "set_translations",
            CatalogEntity::Token => "tokens",
        }
    }

    /// Model-style alias accepted in instructions (`Card` for `cards`).
    pub fn alias(&self) -> &'static str {
        match self {
            CatalogEntity::Card => "Card",
            CatalogEntity::Set => "Set",
            CatalogEntity::Legality => "Legality",
            CatalogEntity::Ruling => "Ruling",
            CatalogEntity::ForeignData => "ForeignData",
            CatalogEntity::Meta => "Meta",
            CatalogEntity::SetTranslation => "SetTranslation",
            CatalogEntity::Token => "Token",
        }
    }

    pub fn from_table_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.table_name() == name)
    }

    pub fn from_alias(alias: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.alias() == alias)
    }
}

/// A named, schema-bearing record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    name: String,
    columns: Vec<String>,
    database: LogicalDatabase,
}

impl Entity {
    /// Creates an entity; its owning database follows from the name.
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        let name = name.into();
        let database = LogicalDatabase::for_entity_name(&name);
        Self {
            name,
            columns,
            database,
        }
    }

    /// Table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column names in table order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn database(&self) -> LogicalDatabase {
        self.database
    }

    /// The catalog tag, if this is a card-catalog entity.
    pub fn catalog_entity(&self) -> Option<CatalogEntity> {
        CatalogEntity::from_table_name(&self.name)
    }
}

/// Read-only mapping from entity name to [`Entity`].
#[derive(Debug, Clone, Default)]
pub struct EntityCatalog {
    entities: BTreeMap<String, Entity>,
}

impl EntityCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from already-known entities.
    ///
    /// A later entity with the same name replaces an earlier one.
    pub fn from_entities<I>(entities: I) -> Self
    where
        I: IntoIterator<Item = Entity>,
    {
        let mut catalog = Self::new();
        for entity in entities {
            catalog.insert(entity);
        }
        catalog
    }

    pub fn insert(&mut self, entity: Entity) -> Option<Entity> {
        self.entities.insert(entity.name.clone(), entity)
    }

    /// Looks up an entity by table name or by catalog alias.
    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name).or_else(|| {
            CatalogEntity::from_alias(name).and_then(|e| self.entities.get(e.table_name()))
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Entity names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
