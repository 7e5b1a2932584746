//! Command pipeline for one input line: meta-command check, statement
//! parsing, execution. Each line is handled completely before the next.

use crate::executor::{execute_statement, ExecuteResult};
use crate::parser::{parse_meta_command, parse_statement, MetaCommand};
use crate::storage::StorageLayout;
use crate::types::{Database, DatabaseError};
use std::io::{self, Write};

pub const HELP_TEXT: &str = "\
SQLite Help Guide:
==================
Meta-Commands:
  .exit           - Exit the program and save the database.
  .help           - Show this help guide.

Commands:
  create table <table_name>   - Create a new table.
  drop table <table_name>     - Delete an existing table.
  list tables                 - List all tables in the database.
  open table <table_name>     - Open a table to perform operations.
  close table <table_name>    - Close a table after operations.
  insert <table_name> <id> <username> <email> - Insert a new row into the table.
  select <table_name>         - Display all rows in the table.
  delete <table_name>         - Delete all rows in the table.

Notes:
  - Primary Key (id) must be unique in a table.
  - Tables are stored in files named 'database_<table_name>.txt'.
  - Row data is only written by 'close table'; close tables before .exit.
  - Use valid syntax for commands to avoid errors.
";

/// Whether the session continues after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Exit,
}

/// Owns the database for one session and writes all user-facing output to `out`.
pub struct Shell<W: Write> {
    db: Database,
    layout: StorageLayout,
    out: W,
}

impl<W: Write> Shell<W> {
    /// Creates the data directory if needed and registers the tables listed
    /// in the metadata file.
    pub fn open(layout: StorageLayout, out: W) -> Result<Self, DatabaseError> {
        layout.ensure_data_dir()?;
        let mut db = Database::new();
        let count = db.load_tables(&layout.metadata_path())?;
        tracing::debug!(data_dir = %layout.data_dir().display(), tables = count, "session opened");
        Ok(Self { db, layout, out })
    }

    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.db
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn handle_line(&mut self, line: &str) -> io::Result<LineOutcome> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(LineOutcome::Continue);
        }

        if let Some(meta) = parse_meta_command(line) {
            return self.do_meta_command(meta);
        }

        let statement = match parse_statement(line) {
            Ok(stmt) => stmt,
            Err(e) => {
                writeln!(self.out, "{e}")?;
                return Ok(LineOutcome::Continue);
            }
        };

        match execute_statement(statement, &self.layout, &mut self.db, &mut self.out)? {
            ExecuteResult::Success => writeln!(self.out, "Executed.")?,
            ExecuteResult::TableFull => writeln!(self.out, "Error: Table full.")?,
        }
        Ok(LineOutcome::Continue)
    }

    /// Writes the metadata file. Row data of open tables is not flushed.
    pub fn save_and_exit(&mut self) -> io::Result<LineOutcome> {
        writeln!(self.out, "Saving tables to file.")?;
        if let Err(e) = self.db.save_tables(&self.layout.metadata_path()) {
            tracing::warn!(error = %e, "failed to save metadata");
            writeln!(self.out, "Error: {e}.")?;
        }
        self.out.flush()?;
        Ok(LineOutcome::Exit)
    }

    fn do_meta_command(&mut self, meta: MetaCommand) -> io::Result<LineOutcome> {
        match meta {
            MetaCommand::Exit => self.save_and_exit(),
            MetaCommand::Help => {
                writeln!(self.out, "\n{HELP_TEXT}")?;
                Ok(LineOutcome::Continue)
            }
            MetaCommand::Unrecognized(input) => {
                writeln!(self.out, "Unrecognized command '{input}'")?;
                Ok(LineOutcome::Continue)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn shell(dir: &TempDir) -> Shell<Vec<u8>> {
        Shell::open(StorageLayout::in_dir(dir.path()), Vec::new()).unwrap()
    }

    fn take_output(shell: &mut Shell<Vec<u8>>) -> String {
        String::from_utf8(std::mem::take(shell.output_mut())).unwrap()
    }

    #[test]
    fn test_empty_line_is_ignored() {
        let dir = TempDir::new().unwrap();
        let mut sh = shell(&dir);
        assert_eq!(sh.handle_line("   ").unwrap(), LineOutcome::Continue);
        assert_eq!(take_output(&mut sh), "");
    }

    #[test]
    fn test_executed_after_statement() {
        let dir = TempDir::new().unwrap();
        let mut sh = shell(&dir);
        sh.handle_line("create table users").unwrap();
        assert_eq!(take_output(&mut sh), "Table users created.\nExecuted.\n");
    }

    #[test]
    fn test_parse_errors() {
        let dir = TempDir::new().unwrap();
        let mut sh = shell(&dir);
        sh.handle_line("insert users one alice alice@x.com").unwrap();
        assert_eq!(take_output(&mut sh), "Syntax error. Could not parse statement.\n");
        sh.handle_line("update users").unwrap();
        assert_eq!(take_output(&mut sh), "Unrecognized keyword at start of 'update users'.\n");
    }

    #[test]
    fn test_meta_commands() {
        let dir = TempDir::new().unwrap();
        let mut sh = shell(&dir);
        assert_eq!(sh.handle_line(".help").unwrap(), LineOutcome::Continue);
        assert!(take_output(&mut sh).contains("SQLite Help Guide:"));
        assert_eq!(sh.handle_line(".quit").unwrap(), LineOutcome::Continue);
        assert_eq!(take_output(&mut sh), "Unrecognized command '.quit'\n");
    }

    #[test]
    fn test_exit_writes_metadata() {
        let dir = TempDir::new().unwrap();
        let mut sh = shell(&dir);
        sh.handle_line("create table users").unwrap();
        assert_eq!(sh.handle_line(".exit").unwrap(), LineOutcome::Exit);
        let meta = std::fs::read_to_string(dir.path().join("listoftables.txt")).unwrap();
        assert_eq!(meta, "users\n");
    }

    #[test]
    fn test_table_full_message() {
        let dir = TempDir::new().unwrap();
        let mut sh = shell(&dir);
        sh.handle_line("create table t").unwrap();
        sh.handle_line("open table t").unwrap();
        for id in 0..100 {
            sh.handle_line(&format!("insert t {id} u e")).unwrap();
        }
        take_output(&mut sh);
        sh.handle_line("insert t 100 u e").unwrap();
        assert_eq!(take_output(&mut sh), "Error: Table full.\n");
    }
}
