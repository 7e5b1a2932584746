/// Row-level operations on open tables
///
/// INSERT, SELECT, DELETE

use crate::storage::StorageLayout;
use crate::types::{Database, DatabaseError, InsertOutcome, Row, Table};
use super::QueryResult;

pub struct DmlExecutor;

impl DmlExecutor {
    pub fn insert(db: &mut Database, table: &str, row: Row) -> Result<QueryResult, DatabaseError> {
        let id = row.id;
        match open_table_mut(db, table)?.insert_row(row)? {
            InsertOutcome::Inserted => Ok(QueryResult::Inserted),
            InsertOutcome::Duplicate => Ok(QueryResult::DuplicateId(id)),
        }
    }

    pub fn select(db: &Database, table: &str) -> Result<QueryResult, DatabaseError> {
        let table = db
            .get_table(table)
            .ok_or_else(|| DatabaseError::TableNotOpen(table.to_string()))?;
        Ok(QueryResult::Rows(table.select_rows().collect()))
    }

    /// Clears the table and truncates its data file
    pub fn delete(
        db: &mut Database,
        layout: &StorageLayout,
        table: &str,
    ) -> Result<QueryResult, DatabaseError> {
        let path = layout.table_path(table);
        let removed = open_table_mut(db, table)?.delete_rows(&path)?;
        Ok(QueryResult::Deleted(removed))
    }
}

fn open_table_mut<'a>(db: &'a mut Database, table: &str) -> Result<&'a mut Table, DatabaseError> {
    db.get_table_mut(table)
        .ok_or_else(|| DatabaseError::TableNotOpen(table.to_string()))
}
