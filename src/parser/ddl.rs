use super::common::{arguments, keywords, table_name};
use super::statement::Statement;
use nom::{combinator::success, IResult};

pub fn create_table(input: &str) -> IResult<&str, Statement> {
    let (input, _) = keywords("create", "table")(input)?;
    let (input, name) = arguments(table_name)(input)?;
    Ok((input, Statement::CreateTable { name }))
}

pub fn drop_table(input: &str) -> IResult<&str, Statement> {
    let (input, _) = keywords("drop", "table")(input)?;
    let (input, name) = arguments(table_name)(input)?;
    Ok((input, Statement::DropTable { name }))
}

pub fn list_tables(input: &str) -> IResult<&str, Statement> {
    let (input, _) = keywords("list", "tables")(input)?;
    let (input, ()) = arguments(success(()))(input)?;
    Ok((input, Statement::ListTables))
}

pub fn open_table(input: &str) -> IResult<&str, Statement> {
    let (input, _) = keywords("open", "table")(input)?;
    let (input, name) = arguments(table_name)(input)?;
    Ok((input, Statement::OpenTable { name }))
}

pub fn close_table(input: &str) -> IResult<&str, Statement> {
    let (input, _) = keywords("close", "table")(input)?;
    let (input, name) = arguments(table_name)(input)?;
    Ok((input, Statement::CloseTable { name }))
}
