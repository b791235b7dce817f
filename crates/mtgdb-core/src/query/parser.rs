/// Parser for the instruction language
///
/// Grammar: `<entity> [<tag>:<content> ('|' <tag>:<content>)*]`.
/// The parser has no catalog dependency; unknown entities are reported
/// by the query builder.
use super::ast::*;
use std::fmt;

/// Parser for instruction strings
pub struct Parser<'a> {
    input: &'a str,
}

impl<'a> Parser<'a> {
    /// Create a new parser over an instruction string
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Parse the instruction into an entity name and its clauses
    pub fn parse(&self) -> Result<Instruction, ParseError> {
        let trimmed = self.input.trim();
        let (entity, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((entity, rest)) => (entity, rest.trim()),
            None => (trimmed, ""),
        };

        if entity.is_empty() || !entity.chars().all(is_entity_char) {
            return Err(ParseError::InvalidInstruction);
        }

        let clauses = if rest.is_empty() {
            Vec::new()
        } else {
            self.parse_clauses(rest)?
        };

        Ok(Instruction {
            entity: entity.to_string(),
            clauses,
        })
    }

    fn parse_clauses(&self, section: &str) -> Result<Vec<Clause>, ParseError> {
        let mut clauses = Vec::new();

        for segment in section.split('|') {
            let segment = segment.trim();
            let (tag, content) = segment
                .split_once(':')
                .ok_or_else(|| ParseError::MalformedClause(segment.to_string()))?;
            let content = content.trim();

            match tag.trim() {
                "w" => clauses.push(Clause::Filter(Predicate::new(content))),
                "l" => {
                    // SQLite binds LIMIT as a signed 64-bit integer
                    let count = content
                        .parse::<i64>()
                        .ok()
                        .and_then(|n| u64::try_from(n).ok())
                        .ok_or_else(|| ParseError::InvalidLimit(content.to_string()))?;
                    clauses.push(Clause::Limit(count));
                }
                "g" => clauses.push(Clause::GroupBy(content.to_string())),
                "o" => clauses.push(Clause::OrderBy(content.to_string())),
                other => {
                    tracing::warn!(tag = other, clause = segment, "ignoring clause with unknown tag");
                }
            }
        }

        Ok(clauses)
    }
}

fn is_entity_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Parse an instruction string in one call
pub fn parse(input: &str) -> Result<Instruction, ParseError> {
    Parser::new(input).parse()
}

/// Parser errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No entity name token could be found
    InvalidInstruction,
    /// A clause segment without a `tag:content` split
    MalformedClause(String),
    /// Limit content that is not an integer in `0..=i64::MAX`
    InvalidLimit(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidInstruction => write!(f, "invalid instruction"),
            ParseError::MalformedClause(segment) => {
                write!(f, "malformed clause: [{}]", segment)
            }
            ParseError::InvalidLimit(content) => {
                write!(f, "invalid limit: [{}] (must be a non-negative integer)", content)
            }
        }
    }
}

impl std::error::Error for ParseError {}
