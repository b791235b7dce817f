//! The two long-lived database connections.
//!
//! Both handles are opened once at startup and held for the life of the
//! session. Every core operation is a read, so both connections run with
//! `query_only` set.

use std::path::{Path, PathBuf};

use mtgdb_core::{Error, LogicalDatabase, Result};
use rusqlite::{Connection, OpenFlags};

use crate::storage_err;

/// Busy timeout applied to both connections.
const BUSY_TIMEOUT_MS: u32 = 5000;

/// Where a logical database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    /// A SQLite file on disk
    File(PathBuf),
    /// A private in-memory database
    Memory,
}

impl DatabaseLocation {
    /// Interpret a `sqlite:///<path>` style URI.
    ///
    /// `sqlite:///data/x.sqlite` is the relative path `data/x.sqlite`,
    /// `sqlite:////abs/x.sqlite` the absolute path `/abs/x.sqlite`.
    /// `sqlite://` and `:memory:` select an in-memory database; text
    /// without a scheme is taken as a path.
    pub fn from_uri(uri: &str) -> Result<Self> {
        let uri = uri.trim();
        if uri == ":memory:" || uri == "sqlite://" || uri == "sqlite:///:memory:" {
            return Ok(DatabaseLocation::Memory);
        }
        if let Some(path) = uri.strip_prefix("sqlite:///") {
            if path.is_empty() {
                return Err(Error::Config(format!("missing path in database URI: {}", uri)));
            }
            return Ok(DatabaseLocation::File(PathBuf::from(path)));
        }
        if uri.contains("://") {
            return Err(Error::Config(format!("unsupported database URI: {}", uri)));
        }
        if uri.is_empty() {
            return Err(Error::Config("empty database URI".to_string()));
        }
        Ok(DatabaseLocation::File(PathBuf::from(uri)))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            DatabaseLocation::File(path) => Some(path),
            DatabaseLocation::Memory => None,
        }
    }
}

/// Context object holding both connection handles.
pub struct Connections {
    primary: Connection,
    secondary: Connection,
}

impl Connections {
    /// Open the card-catalog database read-only and the inventory database
    /// read-write-create.
    pub fn open(primary: &DatabaseLocation, secondary: &DatabaseLocation) -> Result<Self> {
        let primary_conn = match primary {
            DatabaseLocation::File(path) => Connection::open_with_flags(
                path,
                OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )
            .map_err(storage_err)?,
            DatabaseLocation::Memory => Connection::open_in_memory().map_err(storage_err)?,
        };
        tracing::info!(database = %LogicalDatabase::Primary, location = ?primary, "opened database");

        let secondary_conn = match secondary {
            DatabaseLocation::File(path) => Connection::open(path).map_err(storage_err)?,
            DatabaseLocation::Memory => Connection::open_in_memory().map_err(storage_err)?,
        };
        tracing::info!(database = %LogicalDatabase::Secondary, location = ?secondary, "opened database");

        Self::new(primary_conn, secondary_conn)
    }

    /// Wrap two already-open connections.
    pub fn new(primary: Connection, secondary: Connection) -> Result<Self> {
        apply_read_pragmas(&primary)?;
        apply_read_pragmas(&secondary)?;
        Ok(Self { primary, secondary })
    }

    /// Open two empty in-memory databases (for testing).
    pub fn open_in_memory() -> Result<Self> {
        Self::open(&DatabaseLocation::Memory, &DatabaseLocation::Memory)
    }

    /// The handle for a logical database.
    pub fn get(&self, database: LogicalDatabase) -> &Connection {
        match database {
            LogicalDatabase::Primary => &self.primary,
            LogicalDatabase::Secondary => &self.secondary,
        }
    }

    pub fn primary(&self) -> &Connection {
        &self.primary
    }

    pub fn secondary(&self) -> &Connection {
        &self.secondary
    }
}

/// Read-side pragmas applied to every connection.
fn apply_read_pragmas(conn: &Connection) -> Result<()> {
    conn.busy_timeout(std::time::Duration::from_millis(BUSY_TIMEOUT_MS.into()))
        .map_err(storage_err)?;
    conn.execute_batch("PRAGMA query_only = ON;")
        .map_err(storage_err)?;
    Ok(())
}
