//! # mtgdb
//!
//! Interactive inspection of a card-catalog database and a separate local
//! inventory database.
//!
//! Instructions name an entity and an optional list of clauses:
//!
//! ```text
//! cards w:power>3|w:setCode='LEA'|o:name|l:10
//! ```
//!
//! `w:` adds a filter (filters are ANDed), `l:` caps the row count (the last
//! one wins), `g:` and `o:` add grouping and ordering keys. Each query runs
//! against whichever database owns the entity, and its rows stay available
//! for `show <n>` until the next query succeeds.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mtgdb::{Session, Settings};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut session = Session::open(&Settings::from_env())?;
//!
//!     let output = session.query("cards w:power>3|l:5")?;
//!     println!("{} rows from {}", output.rows.len(), output.entity.name());
//!
//!     let detail = session.show("0")?;
//!     for (column, value) in &detail.entries {
//!         println!("{column}: {value}");
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod format;
pub mod logging;
pub mod session;
/// Interactive shell and command dispatch
#[allow(missing_docs)]
pub mod shell;

// Re-export core types
pub use mtgdb_core::{
    CatalogEntity, Clause, DisplayColumns, Entity, EntityCatalog, Error, Instruction,
    LogicalDatabase, ParseError, Predicate, Result, ResultCursor, Row, RowDetail, Value,
};

// Storage components
pub use mtgdb_storage::{Connections, DatabaseLocation, Router};

pub use config::Settings;
pub use session::{ColumnListing, QueryOutput, Session};
pub use shell::{Command, Control, Shell};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
