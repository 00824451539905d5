use thiserror::Error;

use crate::model::Record;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableError {
    #[error("row {row} has {found} cells but the header has {expected}")]
    WidthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Header plus rows of raw string cells, as loaded from a category file.
///
/// An empty table (no columns, no rows) stands for "no data yet".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table, checking every row against the header width.
    ///
    /// # Errors
    ///
    /// Returns `TableError::WidthMismatch` for the first row of a different width.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, TableError> {
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(TableError::WidthMismatch {
                    row: index,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Append a record; the first record on an empty table fixes the header.
    ///
    /// Field names of later records are assumed to match the header, only the
    /// width is checked.
    ///
    /// # Errors
    ///
    /// Returns `TableError::WidthMismatch` if the record width differs from the header.
    pub fn push_record(&mut self, record: &Record) -> Result<(), TableError> {
        if self.columns.is_empty() && self.rows.is_empty() {
            self.columns = record.field_names().map(str::to_owned).collect();
        }
        if record.len() != self.columns.len() {
            return Err(TableError::WidthMismatch {
                row: self.rows.len(),
                expected: self.columns.len(),
                found: record.len(),
            });
        }
        self.rows.push(record.values().map(str::to_owned).collect());
        Ok(())
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Cells of one column, top to bottom. `None` if the column is absent.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[index].as_str()).collect())
    }
}
