//! # mtgdb Storage
//!
//! SQLite plumbing for mtgdb: the two-connection context, the database
//! router, schema reflection and query execution.

#![warn(clippy::all)]

pub mod connection;
pub mod executor;
pub mod reflect;
pub mod router;

pub use connection::{Connections, DatabaseLocation};
pub use executor::{BoundQuery, Executor};
pub use reflect::{list_tables, reflect_catalog, table_columns};
pub use router::Router;

use mtgdb_core::Error;

/// Carry a SQLite error through unchanged.
pub(crate) fn storage_err(err: rusqlite::Error) -> Error {
    Error::Storage(Box::new(err))
}
