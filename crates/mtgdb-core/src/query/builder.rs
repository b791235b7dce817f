/// Query builder
///
/// Applies parsed clauses, left to right, to a base "select all rows of
/// entity" query.
use super::ast::*;
use crate::catalog::{Entity, EntityCatalog};
use crate::error::{Error, Result};
use std::fmt;

/// A select over one entity, ready to be bound to a connection
#[derive(Debug, Clone, PartialEq)]
pub struct SelectQuery {
    pub entity: Entity,
    /// ANDed together in the order given
    pub filters: Vec<Predicate>,
    pub group_by: Vec<String>,
    pub order_by: Vec<String>,
    pub limit: Option<u64>,
}

impl SelectQuery {
    /// Select every row of `entity`
    pub fn all(entity: Entity) -> Self {
        Self {
            entity,
            filters: Vec::new(),
            group_by: Vec::new(),
            order_by: Vec::new(),
            limit: None,
        }
    }

    /// Apply one clause on top of the current query
    pub fn apply(mut self, clause: &Clause) -> Self {
        match clause {
            Clause::Filter(predicate) => self.filters.push(predicate.clone()),
            Clause::Limit(count) => self.limit = Some(*count),
            Clause::GroupBy(expr) => self.group_by.push(expr.clone()),
            Clause::OrderBy(expr) => self.order_by.push(expr.clone()),
        }
        self
    }

    /// Render as SQLite SQL.
    ///
    /// Each predicate is scoped to the entity's table by prefixing it with
    /// the quoted table name, then parenthesised.
    pub fn to_sql(&self) -> String {
        let table = quote_identifier(self.entity.name());
        let mut sql = format!("SELECT * FROM {}", table);

        if !self.filters.is_empty() {
            let conditions: Vec<String> = self
                .filters
                .iter()
                .map(|p| format!("({}.{})", table, p.as_str()))
                .collect();
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }

        if !self.group_by.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&self.group_by.join(", "));
        }

        if !self.order_by.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.order_by.join(", "));
        }

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        sql
    }
}

impl fmt::Display for SelectQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

/// Quote an SQL identifier with double quotes
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Builds [`SelectQuery`] values against a catalog
pub struct QueryBuilder<'a> {
    catalog: &'a EntityCatalog,
}

impl<'a> QueryBuilder<'a> {
    /// Create a builder over the given catalog
    pub fn new(catalog: &'a EntityCatalog) -> Self {
        Self { catalog }
    }

    /// Resolve `entity_name` and apply `clauses` in order
    pub fn build(&self, entity_name: &str, clauses: &[Clause]) -> Result<SelectQuery> {
        let entity = self
            .catalog
            .get(entity_name)
            .ok_or_else(|| Error::EntityNotFound(entity_name.to_string()))?;

        let query = clauses
            .iter()
            .fold(SelectQuery::all(entity.clone()), |query, clause| query.apply(clause));

        tracing::debug!(entity = entity.name(), database = %entity.database(), sql = %query, "built query");
        Ok(query)
    }

    /// Build from an already parsed instruction
    pub fn build_instruction(&self, instruction: &Instruction) -> Result<SelectQuery> {
        self.build(&instruction.entity, &instruction.clauses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::parser::parse;

    fn catalog() -> EntityCatalog {
        EntityCatalog::from_entities([
            Entity::new("cards", vec!["id".into(), "name".into(), "power".into()]),
            Entity::new("copies", vec!["id".into(), "card_id".into()]),
        ])
    }

    fn build(input: &str) -> Result<SelectQuery> {
        let catalog = catalog();
        let instruction = parse(input)?;
        QueryBuilder::new(&catalog).build_instruction(&instruction)
    }

    #[test]
    fn test_select_all() {
        let query = build("cards").unwrap();
        assert_eq!(query.to_sql(), "SELECT * FROM \"cards\"");
    }

    #[test]
    fn test_last_limit_wins() {
        let query = build("cards l:5|l:2").unwrap();
        assert_eq!(query.limit, Some(2));
        assert!(query.to_sql().ends_with("LIMIT 2"));
    }

    #[test]
    fn test_filters_are_anded() {
        let query = build("cards w:power>3|w:name like 'A%'").unwrap();

        assert_eq!(query.filters.len(), 2);
        assert_eq!(
            query.to_sql(),
            "SELECT * FROM \"cards\" WHERE (\"cards\".power>3) AND (\"cards\".name like 'A%')"
        );
    }

    #[test]
    fn test_grouping_and_ordering_accumulate() {
        let query = build("cards g:power|o:power|g:name|o:name desc|l:3").unwrap();
        assert_eq!(
            query.to_sql(),
            "SELECT * FROM \"cards\" GROUP BY power, name ORDER BY power, name desc LIMIT 3"
        );
    }

    #[test]
    fn test_unknown_entity() {
        let catalog = catalog();
        let err = QueryBuilder::new(&catalog).build("unknown_entity", &[]).unwrap_err();
        assert!(matches!(err, Error::EntityNotFound(name) if name == "unknown_entity"));
    }

    #[test]
    fn test_alias_resolves_to_table() {
        let query = build("Card l:1").unwrap();
        assert_eq!(query.entity.name(), "cards");
    }

    #[test]
    fn test_quote_identifier_escapes_quotes() {
        assert_eq!(quote_identifier("we\"ird"), "\"we\"\"ird\"");
    }
}
