// Module declarations
mod statement;
mod common;
mod ddl;
mod dml;
mod meta;

pub use statement::{MetaCommand, Statement};
pub use meta::parse_meta_command;
pub use common::is_table_name;

use nom::branch::alt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrepareError {
    /// A verb matched but its arguments did not
    #[error("Syntax error. Could not parse statement.")]
    SyntaxError,
    #[error("Unrecognized keyword at start of '{0}'.")]
    Unrecognized(String),
}

/// Parses one input line into a `Statement`. Verbs are case-sensitive.
pub fn parse_statement(input: &str) -> Result<Statement, PrepareError> {
    let input = input.trim();

    let result = alt((
        ddl::create_table,
        ddl::drop_table,
        ddl::list_tables,
        ddl::open_table,
        ddl::close_table,
        dml::insert,
        dml::select,
        dml::delete,
    ))(input);

    match result {
        Ok((_, stmt)) => Ok(stmt),
        Err(nom::Err::Failure(_)) => Err(PrepareError::SyntaxError),
        Err(_) => Err(PrepareError::Unrecognized(input.to_string())),
    }
}
