//! Schema reflection into an [`EntityCatalog`].

use mtgdb_core::{CatalogEntity, Entity, EntityCatalog, LogicalDatabase, Result};
use rusqlite::Connection;

use crate::connection::Connections;
use crate::storage_err;

/// Names of user tables, sorted.
pub fn list_tables(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare(
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
             ORDER BY name",
        )
        .map_err(storage_err)?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(storage_err)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(storage_err)?;
    Ok(names)
}

/// Column names of `table` in declaration order.
pub fn table_columns(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT name FROM pragma_table_info(?1) ORDER BY cid")
        .map_err(storage_err)?;
    let columns = stmt
        .query_map([table], |row| row.get::<_, String>(0))
        .map_err(storage_err)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(storage_err)?;
    Ok(columns)
}

/// Build the catalog from both databases.
///
/// Only the fixed card-catalog tables are taken from the primary database;
/// every other table there would route to the secondary database and fail.
/// Inventory tables whose names collide with a card-catalog entity are
/// skipped.
pub fn reflect_catalog(connections: &Connections) -> Result<EntityCatalog> {
    let mut catalog = EntityCatalog::new();

    let primary = connections.get(LogicalDatabase::Primary);
    for table in list_tables(primary)? {
        if CatalogEntity::from_table_name(&table).is_none() {
            tracing::warn!(table = %table, "skipping primary table outside the card catalog");
            continue;
        }
        let columns = table_columns(primary, &table)?;
        catalog.insert(Entity::new(table, columns));
    }

    let secondary = connections.get(LogicalDatabase::Secondary);
    for table in list_tables(secondary)? {
        if CatalogEntity::from_table_name(&table).is_some() {
            tracing::warn!(table = %table, "skipping inventory table shadowing a card-catalog entity");
            continue;
        }
        let columns = table_columns(secondary, &table)?;
        catalog.insert(Entity::new(table, columns));
    }

    tracing::info!(entities = catalog.len(), "reflected entity catalog");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> Connections {
        let primary = Connection::open_in_memory().unwrap();
        primary
            .execute_batch(
                "CREATE TABLE cards (id INTEGER PRIMARY KEY, name TEXT, power TEXT);
                 CREATE TABLE sets (id INTEGER PRIMARY KEY, code TEXT);
                 CREATE TABLE card_identifiers (uuid TEXT);",
            )
            .unwrap();
        let secondary = Connection::open_in_memory().unwrap();
        secondary
            .execute_batch(
                "CREATE TABLE copies (id INTEGER PRIMARY KEY, card_id INTEGER, foil INTEGER);
                 CREATE TABLE cards (bogus TEXT);",
            )
            .unwrap();
        Connections::new(primary, secondary).unwrap()
    }

    #[test]
    fn test_reflect_both_databases() {
        let connections = populated();
        let catalog = reflect_catalog(&connections).unwrap();

        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["cards", "copies", "sets"]);

        let cards = catalog.get("cards").unwrap();
        assert_eq!(cards.columns(), &["id", "name", "power"]);
        assert_eq!(cards.database(), LogicalDatabase::Primary);

        let copies = catalog.get("copies").unwrap();
        assert_eq!(copies.columns(), &["id", "card_id", "foil"]);
        assert_eq!(copies.database(), LogicalDatabase::Secondary);
    }

    #[test]
    fn test_list_tables_skips_internal() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE b (x); CREATE TABLE a (y);").unwrap();
        assert_eq!(list_tables(&conn).unwrap(), vec!["a", "b"]);
    }
}
