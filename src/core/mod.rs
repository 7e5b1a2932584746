// Module declarations
pub mod error;
pub mod row;
pub mod table;
pub mod database;

// Re-exports for convenience
pub use error::DatabaseError;
pub use row::{Row, COLUMN_EMAIL_SIZE, COLUMN_USERNAME_SIZE};
pub use table::{InsertOutcome, Table, TABLE_MAX_ROWS};
pub use database::{Database, TableEntry, TableState};
