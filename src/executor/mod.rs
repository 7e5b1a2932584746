//! Executor module - runs parsed statements against the database
//!
//! Structure:
//! - ddl: table-level commands (create, drop, list, open, close)
//! - dml: row-level commands on open tables (insert, select, delete)
//!
//! Operational failures (unknown table, table not open, unwritable file...)
//! are rendered as `Error:` lines and never change the `ExecuteResult`;
//! only a full table does.

pub mod ddl;
pub mod dml;

pub use ddl::DdlExecutor;
pub use dml::DmlExecutor;

use crate::parser::Statement;
use crate::storage::StorageLayout;
use crate::types::{Database, DatabaseError};
use std::io::{self, Write};

/// Outcome reported back to the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteResult {
    Success,
    TableFull,
}

/// What a statement produced, before rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    Created(String),
    Dropped(String),
    Tables(Vec<String>),
    Opened { name: String, rows: usize },
    Closed { name: String, rows: usize },
    Inserted,
    /// Insert skipped because the id is already taken
    DuplicateId(u32),
    Rows(Vec<String>),
    Deleted(usize),
}

impl QueryResult {
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Self::Created(name) => writeln!(out, "Table {name} created."),
            Self::Dropped(name) => writeln!(out, "Table {name} deleted successfully."),
            Self::Tables(names) if names.is_empty() => writeln!(out, "No tables found."),
            Self::Tables(names) => {
                writeln!(out, "Tables:")?;
                for name in names {
                    writeln!(out, "-{name}")?;
                }
                Ok(())
            }
            Self::Opened { name, rows } => {
                tracing::debug!(table = %name, rows, "table opened");
                writeln!(out, "Table {name} opened.")
            }
            Self::Closed { name, rows } => {
                tracing::debug!(table = %name, rows, "table closed");
                writeln!(out, "Saving to file.")?;
                writeln!(out, "Table {name} closed.")
            }
            Self::Inserted => Ok(()),
            Self::DuplicateId(id) => writeln!(out, "Error: Duplicate ID {id} not allowed."),
            Self::Rows(lines) => {
                for line in lines {
                    writeln!(out, "{line}")?;
                }
                Ok(())
            }
            Self::Deleted(rows) => {
                tracing::debug!(rows, "rows deleted");
                writeln!(out, "All rows deleted.")
            }
        }
    }
}

/// Dispatches `statement` to the matching executor. Per-table files live at
/// `layout.table_path(name)`.
pub fn run_statement(
    statement: Statement,
    layout: &StorageLayout,
    db: &mut Database,
) -> Result<QueryResult, DatabaseError> {
    match statement {
        Statement::CreateTable { name } => DdlExecutor::create_table(db, &name),
        Statement::DropTable { name } => DdlExecutor::drop_table(db, &name),
        Statement::ListTables => Ok(DdlExecutor::list_tables(db)),
        Statement::OpenTable { name } => DdlExecutor::open_table(db, layout, &name),
        Statement::CloseTable { name } => DdlExecutor::close_table(db, layout, &name),
        Statement::Insert { table, row } => DmlExecutor::insert(db, &table, row),
        Statement::Select { table } => DmlExecutor::select(db, &table),
        Statement::Delete { table } => DmlExecutor::delete(db, layout, &table),
    }
}

/// Runs `statement` and writes its output and diagnostics to `out`.
/// Only writing to `out` can fail.
pub fn execute_statement<W: Write + ?Sized>(
    statement: Statement,
    layout: &StorageLayout,
    db: &mut Database,
    out: &mut W,
) -> io::Result<ExecuteResult> {
    match run_statement(statement, layout, db) {
        Ok(result) => {
            result.render(out)?;
            Ok(ExecuteResult::Success)
        }
        Err(DatabaseError::TableFull) => Ok(ExecuteResult::TableFull),
        Err(e) => {
            tracing::warn!(error = %e, "statement failed");
            writeln!(out, "Error: {e}.")?;
            Ok(ExecuteResult::Success)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_statement;
    use tempfile::TempDir;

    struct Fixture {
        _dir: TempDir,
        layout: StorageLayout,
        db: Database,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let layout = StorageLayout::in_dir(dir.path());
            Self {
                _dir: dir,
                layout,
                db: Database::new(),
            }
        }

        fn exec(&mut self, sql: &str) -> (ExecuteResult, String) {
            let stmt = parse_statement(sql).unwrap();
            let mut out = Vec::new();
            let result = execute_statement(stmt, &self.layout, &mut self.db, &mut out).unwrap();
            (result, String::from_utf8(out).unwrap())
        }
    }

    #[test]
    fn test_create_and_list() {
        let mut fx = Fixture::new();
        assert_eq!(fx.exec("list tables").1, "No tables found.\n");
        assert_eq!(fx.exec("create table users").1, "Table users created.\n");
        fx.exec("create table accounts");
        assert_eq!(fx.exec("list tables").1, "Tables:\n-accounts\n-users\n");
    }

    #[test]
    fn test_operational_error_is_success() {
        let mut fx = Fixture::new();
        let (result, out) = fx.exec("drop table ghost");
        assert_eq!(result, ExecuteResult::Success);
        assert_eq!(out, "Error: Table 'ghost' not found.\n");
        assert!(fx.db.is_empty());
    }

    #[test]
    fn test_insert_requires_open_table() {
        let mut fx = Fixture::new();
        fx.exec("create table users");
        let (result, out) = fx.exec("insert users 1 alice alice@x.com");
        assert_eq!(result, ExecuteResult::Success);
        assert_eq!(out, "Error: Table 'users' is not open.\n");
    }

    #[test]
    fn test_insert_select_close() {
        let mut fx = Fixture::new();
        fx.exec("create table users");
        assert_eq!(fx.exec("open table users").1, "Table users opened.\n");
        assert_eq!(fx.exec("insert users 1 alice alice@x.com"), (ExecuteResult::Success, String::new()));
        assert_eq!(fx.exec("select users").1, "(1, alice, alice@x.com)\n");
        assert_eq!(fx.exec("close table users").1, "Saving to file.\nTable users closed.\n");

        let saved = std::fs::read_to_string(fx.layout.table_path("users")).unwrap();
        assert_eq!(saved, "1,alice,alice@x.com\n");
    }

    #[test]
    fn test_duplicate_insert() {
        let mut fx = Fixture::new();
        fx.exec("create table users");
        fx.exec("open table users");
        fx.exec("insert users 1 alice alice@x.com");
        let (result, out) = fx.exec("insert users 1 bob bob@x.com");
        assert_eq!(result, ExecuteResult::Success);
        assert_eq!(out, "Error: Duplicate ID 1 not allowed.\n");
        assert_eq!(fx.db.get_table("users").unwrap().len(), 1);
    }

    #[test]
    fn test_table_full() {
        let mut fx = Fixture::new();
        fx.exec("create table t");
        fx.exec("open table t");
        for id in 0..100 {
            assert_eq!(fx.exec(&format!("insert t {id} u{id} e{id}")).0, ExecuteResult::Success);
        }
        let (result, out) = fx.exec("insert t 100 u e");
        assert_eq!(result, ExecuteResult::TableFull);
        assert!(out.is_empty());
        assert_eq!(fx.db.get_table("t").unwrap().len(), 100);
    }

    #[test]
    fn test_delete_truncates_file() {
        let mut fx = Fixture::new();
        fx.exec("create table users");
        fx.exec("open table users");
        fx.exec("insert users 1 alice alice@x.com");
        fx.exec("close table users");
        fx.exec("open table users");
        assert_eq!(fx.exec("delete users").1, "All rows deleted.\n");
        assert_eq!(fx.exec("select users").1, "");
        assert_eq!(std::fs::read_to_string(fx.layout.table_path("users")).unwrap(), "");
    }

    #[test]
    fn test_results_carry_row_counts() {
        let mut fx = Fixture::new();
        std::fs::write(fx.layout.table_path("users"), "1,a,a@x\n2,b,b@x\n").unwrap();
        fx.db.create_table("users").unwrap();

        let mut run = |sql: &str| run_statement(parse_statement(sql).unwrap(), &fx.layout, &mut fx.db).unwrap();
        assert_eq!(
            run("open table users"),
            QueryResult::Opened { name: "users".to_string(), rows: 2 }
        );
        assert_eq!(run("insert users 3 c c@x"), QueryResult::Inserted);
        assert_eq!(
            run("close table users"),
            QueryResult::Closed { name: "users".to_string(), rows: 3 }
        );
        run("open table users");
        assert_eq!(run("delete users"), QueryResult::Deleted(3));
    }

    #[test]
    fn test_run_statement_reports_table_full_as_error() {
        let mut fx = Fixture::new();
        fx.db.create_table("t").unwrap();
        fx.db.open_table("t", &fx.layout.table_path("t")).unwrap();
        for id in 0..100 {
            fx.db.get_table_mut("t").unwrap().insert_row(crate::types::Row::new(id, "u", "e")).unwrap();
        }
        let stmt = parse_statement("insert t 500 u e").unwrap();
        assert!(matches!(
            run_statement(stmt, &fx.layout, &mut fx.db),
            Err(DatabaseError::TableFull)
        ));
    }
}
