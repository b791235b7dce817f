use mtgdb_core::query::parse;
use mtgdb_core::{CatalogEntity, LogicalDatabase, QueryBuilder, Value};
use mtgdb_storage::{reflect_catalog, Connections, DatabaseLocation, Executor, Router};
use rusqlite::Connection;
use tempfile::tempdir;

#[test]
fn test_file_databases_route_by_catalog_membership() {
    let dir = tempdir().unwrap();
    let catalog_path = dir.path().join("AllPrintings.sqlite");
    let inventory_path = dir.path().join("inventory.sqlite");

    {
        let conn = Connection::open(&catalog_path).unwrap();
        conn.execute_batch(
            "CREATE TABLE cards (id INTEGER PRIMARY KEY, name TEXT);
             INSERT INTO cards VALUES (1, 'Black Lotus');
             CREATE TABLE tokens (id INTEGER PRIMARY KEY, name TEXT);
             INSERT INTO tokens VALUES (1, 'Soldier');",
        )
        .unwrap();
        let conn = Connection::open(&inventory_path).unwrap();
        conn.execute_batch(
            "CREATE TABLE decks (id INTEGER PRIMARY KEY, name TEXT);
             INSERT INTO decks VALUES (1, 'Mono Green');",
        )
        .unwrap();
    }

    let connections = Connections::open(
        &DatabaseLocation::File(catalog_path),
        &DatabaseLocation::File(inventory_path),
    )
    .unwrap();
    let catalog = reflect_catalog(&connections).unwrap();
    let executor = Executor::new(Router::new(&connections));

    for (input, database, expected) in [
        ("Card", LogicalDatabase::Primary, "Black Lotus"),
        ("tokens", LogicalDatabase::Primary, "Soldier"),
        ("decks", LogicalDatabase::Secondary, "Mono Green"),
    ] {
        let instruction = parse(input).unwrap();
        let query = QueryBuilder::new(&catalog).build_instruction(&instruction).unwrap();
        let bound = executor.bind(query);

        assert_eq!(bound.database(), database);
        let rows = bound.execute().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("name"), Some(&Value::from(expected)));
    }
}

#[test]
fn test_missing_inventory_file_is_created() {
    let dir = tempdir().unwrap();
    let inventory_path = dir.path().join("inventory.sqlite");

    let connections =
        Connections::open(&DatabaseLocation::Memory, &DatabaseLocation::File(inventory_path.clone()))
            .unwrap();

    assert!(inventory_path.exists());
    assert!(reflect_catalog(&connections).unwrap().is_empty());
}

#[test]
fn test_every_catalog_entity_is_primary() {
    let connections = Connections::open_in_memory().unwrap();
    let router = Router::new(&connections);

    for tag in CatalogEntity::ALL {
        let entity = mtgdb_core::Entity::new(tag.table_name(), Vec::new());
        assert_eq!(router.route(&entity), LogicalDatabase::Primary);
    }
}
