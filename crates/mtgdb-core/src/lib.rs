//! # mtgdb Core
//!
//! Core types for the mtgdb inspection tool: the entity catalog, the
//! instruction parser and query builder, and the result cursor.
//! Nothing in this crate performs I/O against the databases.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Entity catalog and logical databases
#[allow(missing_docs)]
pub mod catalog;
#[allow(missing_docs)]
pub mod cursor;
pub mod display;
pub mod error;
pub mod query;
#[allow(missing_docs)]
pub mod row;

pub use catalog::{CatalogEntity, Entity, EntityCatalog, LogicalDatabase};
pub use cursor::{ResultCursor, RowDetail};
pub use display::DisplayColumns;
pub use error::{Error, Result};
pub use query::{Clause, Instruction, ParseError, Predicate, QueryBuilder, SelectQuery};
pub use row::{Row, Value};
