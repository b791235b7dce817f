//! Database router.
//!
//! Picks which of the two connections a query for a given entity runs
//! against. The decision is the entity's catalog tag; an entity outside the
//! card-catalog set always lands on the secondary database.

use mtgdb_core::{Entity, LogicalDatabase};
use rusqlite::Connection;

use crate::connection::Connections;

/// Resolves entities to connection handles.
#[derive(Clone, Copy)]
pub struct Router<'c> {
    connections: &'c Connections,
}

impl<'c> Router<'c> {
    pub fn new(connections: &'c Connections) -> Self {
        Self { connections }
    }

    /// The logical database an entity belongs to.
    pub fn route(&self, entity: &Entity) -> LogicalDatabase {
        entity.database()
    }

    /// The live connection a query for `entity` must execute against.
    pub fn resolve(&self, entity: &Entity) -> &'c Connection {
        let database = self.route(entity);
        tracing::debug!(entity = entity.name(), %database, "routed entity");
        self.connections.get(database)
    }
}
