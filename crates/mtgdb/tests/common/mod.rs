// Common test utilities for session integration tests

use std::path::PathBuf;

use mtgdb::Settings;
use rusqlite::Connection;
use tempfile::TempDir;

/// Test fixture with a small card catalog and inventory on disk
pub struct DatabaseFixture {
    #[allow(dead_code)]
    pub temp_dir: TempDir,
    pub catalog_path: PathBuf,
    pub inventory_path: PathBuf,
}

impl DatabaseFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let catalog_path = temp_dir.path().join("AllPrintings.sqlite");
        let inventory_path = temp_dir.path().join("inventory.sqlite");

        let catalog = Connection::open(&catalog_path).expect("Failed to create catalog db");
        catalog
            .execute_batch(
                "CREATE TABLE cards (
                     id INTEGER PRIMARY KEY, name TEXT, setCode TEXT, power TEXT,
                     toughness TEXT, manaCost TEXT, type TEXT, text TEXT, artist TEXT
                 );
                 INSERT INTO cards VALUES (1, 'Grizzly Bears', 'LEA', '2', '2', '{1}{G}', 'Creature - Bear', NULL, 'Jeff A. Menges');
                 INSERT INTO cards VALUES (2, 'Craw Wurm', 'LEA', '6', '4', '{4}{G}{G}', 'Creature - Wurm', NULL, 'Richard Thomas');
                 INSERT INTO cards VALUES (3, 'Shivan Dragon', 'LEB', '5', '5', '{4}{R}{R}', 'Creature - Dragon', 'Flying', 'Melissa A. Benson');
                 INSERT INTO cards VALUES (4, 'Llanowar Elves', 'LEB', '1', '1', '{G}', 'Creature - Elf Druid', '{T}: Add {G}.', 'Anson Maddocks');
                 CREATE TABLE sets (id INTEGER PRIMARY KEY, code TEXT, block TEXT, name TEXT, releaseDate TEXT, totalSetSize INTEGER);
                 INSERT INTO sets VALUES (1, 'LEA', 'Core Set', 'Limited Edition Alpha', '1993-08-05', 295);
                 INSERT INTO sets VALUES (2, 'LEB', 'Core Set', 'Limited Edition Beta', '1993-10-04', 302);
                 CREATE TABLE rulings (id INTEGER PRIMARY KEY, uuid TEXT, date TEXT, text TEXT);
                 INSERT INTO rulings VALUES (1, 'abc', '2004-10-04', 'Flying: can block fliers.');",
            )
            .expect("Failed to populate catalog db");

        let inventory = Connection::open(&inventory_path).expect("Failed to create inventory db");
        inventory
            .execute_batch(
                "CREATE TABLE copies (id INTEGER PRIMARY KEY, card_id INTEGER, foil INTEGER, location TEXT);
                 INSERT INTO copies VALUES (1, 3, 0, 'binder');
                 INSERT INTO copies VALUES (2, 3, 1, 'deck box');
                 INSERT INTO copies VALUES (3, 4, 0, 'binder');",
            )
            .expect("Failed to populate inventory db");

        Self {
            temp_dir,
            catalog_path,
            inventory_path,
        }
    }

    pub fn settings(&self) -> Settings {
        Settings::default()
            .with_card_catalog_uri(format!("sqlite:///{}", self.catalog_path.display()))
            .with_inventory_uri(self.inventory_path.display().to_string())
    }
}

impl Default for DatabaseFixture {
    fn default() -> Self {
        Self::new()
    }
}
