use std::collections::HashSet;
use std::path::Path;
use super::error::DatabaseError;
use super::row::Row;
use crate::storage::text_file;

pub const TABLE_MAX_ROWS: usize = 100;

/// What `Table::insert_row` did with the row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// A row with the same id already exists; nothing was inserted.
    Duplicate,
}

/// Ordered in-memory rows of one table. Insertion order is preserved and
/// ids are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn insert_row(&mut self, row: Row) -> Result<InsertOutcome, DatabaseError> {
        if self.rows.len() >= TABLE_MAX_ROWS {
            return Err(DatabaseError::TableFull);
        }
        if self.rows.iter().any(|existing| existing.id == row.id) {
            return Ok(InsertOutcome::Duplicate);
        }
        self.rows.push(row);
        Ok(InsertOutcome::Inserted)
    }

    /// Formatted `(id, username, email)` lines in insertion order.
    /// Call again to restart.
    pub fn select_rows(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(ToString::to_string)
    }

    /// Clears every row, then truncates the backing file.
    /// Memory is cleared even if the file cannot be opened.
    pub fn delete_rows(&mut self, path: &Path) -> Result<usize, DatabaseError> {
        let removed = self.rows.len();
        self.rows.clear();
        text_file::truncate(path)?;
        tracing::debug!(path = %path.display(), removed, "table rows deleted");
        Ok(removed)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), DatabaseError> {
        text_file::overwrite(path, self.rows.iter().map(Row::serialize))?;
        tracing::debug!(path = %path.display(), rows = self.rows.len(), "table saved");
        Ok(())
    }

    /// Appends every row stored in `path`. A missing file loads nothing.
    /// Loaded rows follow the same rules as `insert_row`: a malformed line or
    /// a repeated id is a `MalformedRow`, more rows than fit is `TableFull`.
    /// On any error nothing is appended.
    pub fn load_from_file(&mut self, path: &Path) -> Result<usize, DatabaseError> {
        let Some(lines) = text_file::read_lines(path)? else {
            tracing::info!(path = %path.display(), "file not found, starting with an empty table");
            return Ok(0);
        };

        let malformed = |line: usize, reason: String| DatabaseError::MalformedRow {
            path: path.to_path_buf(),
            line,
            reason,
        };

        let mut seen: HashSet<u32> = self.rows.iter().map(|r| r.id).collect();
        let mut loaded = Vec::new();
        for (idx, line) in lines.iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let row = Row::deserialize(line).map_err(|e| malformed(idx + 1, e.to_string()))?;
            if !seen.insert(row.id) {
                return Err(malformed(idx + 1, format!("duplicate id {}", row.id)));
            }
            if self.rows.len() + loaded.len() >= TABLE_MAX_ROWS {
                return Err(DatabaseError::TableFull);
            }
            loaded.push(row);
        }

        let count = loaded.len();
        self.rows.extend(loaded);
        tracing::debug!(path = %path.display(), rows = count, "table loaded");
        Ok(count)
    }
}
