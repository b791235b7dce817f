//! Result cursor.
//!
//! Holds the most recent result set and the entity that produced it, so a
//! later command can drill into a single row. State is replaced wholesale by
//! [`ResultCursor::record`] and only read by [`ResultCursor::inspect`].

use crate::catalog::Entity;
use crate::display::DisplayColumns;
use crate::error::{Error, Result};
use crate::row::{Row, Value};

/// Ordered column to value mapping for one inspected row
#[derive(Debug, Clone, PartialEq)]
pub struct RowDetail {
    pub entries: Vec<(String, Value)>,
}

impl RowDetail {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The last result set and its entity type
#[derive(Debug, Clone, Default)]
pub struct ResultCursor {
    entity: Option<Entity>,
    rows: Vec<Row>,
}

impl ResultCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cursor's state unconditionally
    pub fn record(&mut self, entity: Entity, rows: Vec<Row>) {
        tracing::debug!(entity = entity.name(), rows = rows.len(), "recorded result set");
        self.entity = Some(entity);
        self.rows = rows;
    }

    /// Column mapping of row `index`, filtered to the entity's display columns
    pub fn inspect(&self, index: i64, display: &DisplayColumns) -> Result<RowDetail> {
        let entity = self.entity.as_ref().ok_or(Error::NoResults)?;

        let row = usize::try_from(index)
            .ok()
            .and_then(|i| self.rows.get(i))
            .ok_or(Error::OutOfRange {
                index,
                len: self.rows.len(),
            })?;

        let entries = row
            .iter()
            .filter(|(column, _)| display.is_visible(entity.name(), column))
            .map(|(column, value)| (column.to_string(), value.clone()))
            .collect();

        Ok(RowDetail { entries })
    }

    pub fn entity(&self) -> Option<&Entity> {
        self.entity.as_ref()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
