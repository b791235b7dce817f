/// Instruction language module
///
/// Parsing of `<entity> w:..|l:..|g:..|o:..` instructions and building
/// of entity-scoped select queries from them.
/// Clause types
#[allow(missing_docs)]
pub mod ast;
/// Query builder
#[allow(missing_docs)]
pub mod builder;
/// Instruction parser
#[allow(missing_docs)]
pub mod parser;

// Re-export main types
pub use ast::*;
pub use builder::{quote_identifier, QueryBuilder, SelectQuery};
pub use parser::{parse, ParseError, Parser};
