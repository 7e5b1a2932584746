/// Table-level operations
///
/// CREATE TABLE, DROP TABLE, LIST TABLES, OPEN TABLE, CLOSE TABLE

use crate::storage::StorageLayout;
use crate::types::{Database, DatabaseError};
use super::QueryResult;

pub struct DdlExecutor;

impl DdlExecutor {
    pub fn create_table(db: &mut Database, name: &str) -> Result<QueryResult, DatabaseError> {
        db.create_table(name)?;
        Ok(QueryResult::Created(name.to_string()))
    }

    pub fn drop_table(db: &mut Database, name: &str) -> Result<QueryResult, DatabaseError> {
        db.drop_table(name)?;
        Ok(QueryResult::Dropped(name.to_string()))
    }

    #[must_use]
    pub fn list_tables(db: &Database) -> QueryResult {
        QueryResult::Tables(db.list_tables().map(str::to_string).collect())
    }

    pub fn open_table(
        db: &mut Database,
        layout: &StorageLayout,
        name: &str,
    ) -> Result<QueryResult, DatabaseError> {
        let rows = db.open_table(name, &layout.table_path(name))?;
        Ok(QueryResult::Opened {
            name: name.to_string(),
            rows,
        })
    }

    pub fn close_table(
        db: &mut Database,
        layout: &StorageLayout,
        name: &str,
    ) -> Result<QueryResult, DatabaseError> {
        let rows = db.close_table(name, &layout.table_path(name))?;
        Ok(QueryResult::Closed {
            name: name.to_string(),
            rows,
        })
    }
}
