//! Interactive inspection session.
//!
//! A session owns both connections, the reflected catalog, the display
//! columns and the result cursor. The cursor is only touched after a query
//! has executed successfully, so a failed instruction leaves the previous
//! result set available for `show`.

use std::path::PathBuf;

use mtgdb_core::query::parse;
use mtgdb_core::{
    DisplayColumns, Entity, EntityCatalog, Error, LogicalDatabase, QueryBuilder, Result,
    ResultCursor, Row, RowDetail,
};
use mtgdb_storage::{reflect_catalog, Connections, DatabaseLocation, Executor, Router};

use crate::config::Settings;

/// Aliases accepted for the card-catalog database file
pub const CARD_CATALOG_ALIASES: [&str; 4] = ["m", "mj", "mtgjson", "mtg-json"];
/// Aliases accepted for the inventory database file
pub const INVENTORY_ALIASES: [&str; 4] = ["i", "in", "inv", "inventory"];

/// Result of a successful query, borrowed from the session's cursor
#[derive(Debug)]
pub struct QueryOutput<'s> {
    /// Entity the rows belong to
    pub entity: &'s Entity,
    /// Database the query ran against
    pub database: LogicalDatabase,
    /// Columns to display in the result table
    pub columns: &'s [String],
    /// Every returned row
    pub rows: &'s [Row],
}

/// Available and configured columns of one entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnListing {
    /// Entity table name
    pub entity: String,
    /// All columns in table order
    pub available: Vec<String>,
    /// Configured display subset, `None` when every column is shown
    pub shown: Option<Vec<String>>,
}

/// An open inspection session
pub struct Session {
    connections: Connections,
    catalog: EntityCatalog,
    display: DisplayColumns,
    cursor: ResultCursor,
    card_catalog: DatabaseLocation,
    inventory: DatabaseLocation,
}

impl Session {
    /// Open both databases and reflect the catalog
    pub fn open(settings: &Settings) -> Result<Self> {
        let card_catalog = settings.card_catalog_location()?;
        let inventory = settings.inventory_location()?;
        let connections = Connections::open(&card_catalog, &inventory)?;

        let display = match &settings.display_config {
            Some(path) => DisplayColumns::load(path)?,
            None => DisplayColumns::default(),
        };

        let mut session = Self::with_connections(connections, display)?;
        session.card_catalog = card_catalog;
        session.inventory = inventory;
        Ok(session)
    }

    /// Build a session over already open connections
    pub fn with_connections(connections: Connections, display: DisplayColumns) -> Result<Self> {
        let catalog = reflect_catalog(&connections)?;
        Ok(Self {
            connections,
            catalog,
            display,
            cursor: ResultCursor::new(),
            card_catalog: DatabaseLocation::Memory,
            inventory: DatabaseLocation::Memory,
        })
    }

    /// Parse, build, route and execute one instruction
    ///
    /// On success the result replaces the cursor's state.
    pub fn query(&mut self, instruction: &str) -> Result<QueryOutput<'_>> {
        let instruction = parse(instruction)?;
        let query = QueryBuilder::new(&self.catalog).build_instruction(&instruction)?;

        let entity = query.entity.clone();
        let bound = Executor::new(Router::new(&self.connections)).bind(query);
        let database = bound.database();
        let rows = bound.execute()?;

        tracing::info!(entity = entity.name(), %database, rows = rows.len(), "query complete");
        self.cursor.record(entity, rows);

        let entity = self.cursor.entity().ok_or(Error::NoResults)?;
        Ok(QueryOutput {
            entity,
            database,
            columns: self.display.columns_for(entity),
            rows: self.cursor.rows(),
        })
    }

    /// Inspect a row of the last result set by its textual row number
    pub fn show(&self, row: &str) -> Result<RowDetail> {
        let text = row.trim();
        let index = text
            .parse::<i64>()
            .map_err(|_| Error::InvalidRowNumber(text.to_string()))?;
        self.show_index(index)
    }

    /// Inspect a row of the last result set
    pub fn show_index(&self, index: i64) -> Result<RowDetail> {
        self.cursor.inspect(index, &self.display)
    }

    /// Available and configured display columns for an entity
    pub fn columns(&self, entity: &str) -> Result<ColumnListing> {
        let entity = self
            .catalog
            .get(entity.trim())
            .ok_or_else(|| Error::EntityNotFound(entity.trim().to_string()))?;
        Ok(ColumnListing {
            entity: entity.name().to_string(),
            available: entity.columns().to_vec(),
            shown: self.display.configured(entity.name()).map(<[String]>::to_vec),
        })
    }

    /// File path of the database named by `alias`
    pub fn database_path(&self, alias: &str) -> Result<PathBuf> {
        let alias = alias.trim();
        let location = if CARD_CATALOG_ALIASES.contains(&alias) {
            &self.card_catalog
        } else if INVENTORY_ALIASES.contains(&alias) {
            &self.inventory
        } else {
            return Err(Error::UnknownDatabaseAlias(alias.to_string()));
        };
        location
            .path()
            .map(PathBuf::from)
            .ok_or_else(|| Error::Config(format!("database [{}] is in memory", alias)))
    }

    /// Entities known to this session
    pub fn catalog(&self) -> &EntityCatalog {
        &self.catalog
    }

    /// The last successful result set
    pub fn cursor(&self) -> &ResultCursor {
        &self.cursor
    }

    /// Display columns in effect
    pub fn display(&self) -> &DisplayColumns {
        &self.display
    }

    /// Mutable display columns, to change what result tables show
    pub fn display_mut(&mut self) -> &mut DisplayColumns {
        &mut self.display
    }
}
