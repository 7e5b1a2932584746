use std::collections::BTreeMap;
use std::path::Path;
use super::error::DatabaseError;
use super::table::Table;
use crate::parser::is_table_name;
use crate::storage::text_file;

/// Whether a table's rows are loaded and available to row-level commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableEntry {
    pub table: Table,
    pub state: TableState,
}

/// All known tables keyed by name. Each entry carries its own open/closed
/// state, so dropping a table drops its state with it.
///
/// Names iterate in lexicographic order, which is also the order written
/// to the metadata file.
#[derive(Debug, Clone, Default)]
pub struct Database {
    tables: BTreeMap<String, TableEntry>,
}

impl Database {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tables: BTreeMap::new(),
        }
    }

    /// Registers every name listed in the metadata file as an empty, closed
    /// table. Row data is not read here. Lines that are not valid table names
    /// are skipped. A missing file leaves the database as is.
    pub fn load_tables(&mut self, path: &Path) -> Result<usize, DatabaseError> {
        let Some(lines) = text_file::read_lines(path)? else {
            tracing::info!(path = %path.display(), "no metadata file found, starting with an empty database");
            return Ok(0);
        };

        let mut loaded = 0;
        for name in lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
            if !is_table_name(name) {
                tracing::warn!(path = %path.display(), table = name, "skipping invalid table name in metadata");
                continue;
            }
            self.tables.insert(name.to_string(), TableEntry::default());
            loaded += 1;
        }
        tracing::debug!(path = %path.display(), tables = loaded, "metadata loaded");
        Ok(loaded)
    }

    /// Writes one table name per line. Row data is not written here.
    pub fn save_tables(&self, path: &Path) -> Result<(), DatabaseError> {
        text_file::overwrite(path, self.tables.keys().map(|name| format!("{name}\n")))?;
        tracing::debug!(path = %path.display(), tables = self.tables.len(), "metadata saved");
        Ok(())
    }

    pub fn create_table(&mut self, name: &str) -> Result<(), DatabaseError> {
        if self.tables.contains_key(name) {
            return Err(DatabaseError::TableAlreadyExists(name.to_string()));
        }
        self.tables.insert(name.to_string(), TableEntry::default());
        Ok(())
    }

    /// Removes the table and its state. The data file is left on disk.
    pub fn drop_table(&mut self, name: &str) -> Result<(), DatabaseError> {
        self.tables
            .remove(name)
            .map(drop)
            .ok_or_else(|| DatabaseError::TableNotFound(name.to_string()))
    }

    pub fn list_tables(&self) -> impl Iterator<Item = &str> + '_ {
        self.tables.keys().map(String::as_str)
    }

    /// Loads `path` into a closed table and marks it open. In-memory rows
    /// are cleared first so reopening never duplicates rows. If the load
    /// fails the table stays closed and empty.
    pub fn open_table(&mut self, name: &str, path: &Path) -> Result<usize, DatabaseError> {
        let entry = self
            .tables
            .get_mut(name)
            .ok_or_else(|| DatabaseError::TableNotFound(name.to_string()))?;
        if entry.state == TableState::Open {
            return Err(DatabaseError::TableAlreadyOpen(name.to_string()));
        }

        entry.table.clear();
        let loaded = entry.table.load_from_file(path)?;
        entry.state = TableState::Open;
        Ok(loaded)
    }

    /// Saves an open table to `path` and marks it closed. If the save fails
    /// the table stays open.
    pub fn close_table(&mut self, name: &str, path: &Path) -> Result<usize, DatabaseError> {
        let entry = self
            .tables
            .get_mut(name)
            .ok_or_else(|| DatabaseError::TableNotFound(name.to_string()))?;
        if entry.state != TableState::Open {
            return Err(DatabaseError::TableNotOpen(name.to_string()));
        }

        entry.table.save_to_file(path)?;
        entry.state = TableState::Closed;
        Ok(entry.table.len())
    }

    /// The table, only while it is open.
    #[must_use]
    pub fn get_table(&self, name: &str) -> Option<&Table> {
        self.tables
            .get(name)
            .filter(|entry| entry.state == TableState::Open)
            .map(|entry| &entry.table)
    }

    pub fn get_table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables
            .get_mut(name)
            .filter(|entry| entry.state == TableState::Open)
            .map(|entry| &mut entry.table)
    }

    #[must_use]
    pub fn table_state(&self, name: &str) -> Option<TableState> {
        self.tables.get(name).map(|entry| entry.state)
    }

    #[must_use]
    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
