/// Clause types for the instruction language
///
/// An instruction names an entity and carries an ordered list of clauses,
/// each written as `<tag>:<content>` and separated by `|`.
use std::fmt;

/// Raw boolean filter expression, passed through to SQLite unparsed.
///
/// The text is interpolated into the generated `WHERE` clause, so it must
/// come from the trusted operator at the prompt and never from unvalidated
/// external input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate(String);

impl Predicate {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One parsed unit of query modification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// `w:<predicate>`
    Filter(Predicate),
    /// `l:<n>`, never above `i64::MAX`
    Limit(u64),
    /// `g:<expr>`
    GroupBy(String),
    /// `o:<expr>`
    OrderBy(String),
}

impl Clause {
    /// The one-letter discriminator for this clause kind.
    pub fn tag(&self) -> char {
        match self {
            Clause::Filter(_) => 'w',
            Clause::Limit(_) => 'l',
            Clause::GroupBy(_) => 'g',
            Clause::OrderBy(_) => 'o',
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::Filter(p) => write!(f, "w:{}", p),
            Clause::Limit(n) => write!(f, "l:{}", n),
            Clause::GroupBy(expr) => write!(f, "g:{}", expr),
            Clause::OrderBy(expr) => write!(f, "o:{}", expr),
        }
    }
}

/// A parsed instruction: entity name plus clauses in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub entity: String,
    pub clauses: Vec<Clause>,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entity)?;
        for (i, clause) in self.clauses.iter().enumerate() {
            let sep = if i == 0 { " " } else { "|" };
            write!(f, "{}{}", sep, clause)?;
        }
        Ok(())
    }
}
