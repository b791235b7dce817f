//! Query execution.
//!
//! Binds a [`SelectQuery`] to the connection chosen by the router and runs
//! it. Building stays pure; executing is the only I/O.

use mtgdb_core::{LogicalDatabase, Result, Row, SelectQuery, Value};
use rusqlite::types::ValueRef;
use rusqlite::Connection;

use crate::router::Router;
use crate::storage_err;

/// Executes queries through a router.
pub struct Executor<'c> {
    router: Router<'c>,
}

impl<'c> Executor<'c> {
    pub fn new(router: Router<'c>) -> Self {
        Self { router }
    }

    /// Attach `query` to the connection owning its entity.
    pub fn bind(&self, query: SelectQuery) -> BoundQuery<'c> {
        let database = self.router.route(&query.entity);
        let connection = self.router.resolve(&query.entity);
        BoundQuery {
            query,
            database,
            connection,
        }
    }
}

/// A query bound to one live connection.
pub struct BoundQuery<'c> {
    query: SelectQuery,
    database: LogicalDatabase,
    connection: &'c Connection,
}

impl BoundQuery<'_> {
    pub fn query(&self) -> &SelectQuery {
        &self.query
    }

    pub fn database(&self) -> LogicalDatabase {
        self.database
    }

    /// Run the query and collect every row in result order.
    ///
    /// Storage errors are returned as they came from SQLite.
    pub fn execute(&self) -> Result<Vec<Row>> {
        let sql = self.query.to_sql();
        tracing::debug!(database = %self.database, %sql, "executing query");

        let mut stmt = self.connection.prepare(&sql).map_err(storage_err)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let mut rows = stmt.query([]).map_err(storage_err)?;
        let mut result = Vec::new();
        while let Some(row) = rows.next().map_err(storage_err)? {
            let mut values = Vec::with_capacity(columns.len());
            for i in 0..columns.len() {
                values.push(to_value(row.get_ref(i).map_err(storage_err)?));
            }
            result.push(Row::new(columns.clone(), values));
        }

        tracing::debug!(database = %self.database, rows = result.len(), "query finished");
        Ok(result)
    }
}

fn to_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(f) => Value::Float(f),
        ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Value::Blob(b.to_vec()),
    }
}
