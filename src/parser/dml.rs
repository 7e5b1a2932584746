use super::common::{arguments, field, keyword, row_id, table_name};
use super::statement::Statement;
use crate::types::Row;
use nom::{
    character::complete::multispace1,
    sequence::{preceded, tuple},
    IResult,
};

/// `insert <table> <id> <username> <email>`
pub fn insert(input: &str) -> IResult<&str, Statement> {
    let (input, _) = keyword("insert")(input)?;
    let (input, (table, id, username, email)) = arguments(tuple((
        table_name,
        preceded(multispace1, row_id),
        preceded(multispace1, field),
        preceded(multispace1, field),
    )))(input)?;

    Ok((
        input,
        Statement::Insert {
            table,
            row: Row::new(id, username, email),
        },
    ))
}

pub fn select(input: &str) -> IResult<&str, Statement> {
    let (input, _) = keyword("select")(input)?;
    let (input, table) = arguments(table_name)(input)?;
    Ok((input, Statement::Select { table }))
}

pub fn delete(input: &str) -> IResult<&str, Statement> {
    let (input, _) = keyword("delete")(input)?;
    let (input, table) = arguments(table_name)(input)?;
    Ok((input, Statement::Delete { table }))
}
