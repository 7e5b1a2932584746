use nom::{
    branch::alt,
    bytes::complete::{tag, take_till1, take_while},
    character::complete::{alpha1, digit1, multispace0, multispace1, satisfy},
    combinator::{all_consuming, cut, eof, map, map_res, not, recognize, value, verify},
    sequence::{pair, preceded, terminated, tuple},
    IResult,
};

const fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Case-sensitive keyword that must end at a word boundary
pub fn keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    terminated(tag(word), not(satisfy(is_identifier_char)))
}

/// Two keywords separated by whitespace, e.g. `create table`
pub fn keywords<'a>(
    first: &'static str,
    second: &'static str,
) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    recognize(tuple((keyword(first), multispace1, keyword(second))))
}

pub fn identifier(input: &str) -> IResult<&str, String> {
    map(
        recognize(pair(
            alt((alpha1, tag("_"))),
            take_while(is_identifier_char),
        )),
        |s: &str| s.to_string(),
    )(input)
}

/// Whether `name` is usable as a table name in commands
pub fn is_table_name(name: &str) -> bool {
    all_consuming(identifier)(name).is_ok()
}

/// Whitespace followed by a table name
pub fn table_name(input: &str) -> IResult<&str, String> {
    preceded(multispace1, terminated(identifier, not(satisfy(|c: char| !c.is_whitespace()))))(input)
}

pub fn row_id(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |s: &str| s.parse::<u32>())(input)
}

/// A whitespace-free, non-empty column value that cannot contain the
/// file delimiter
pub fn field(input: &str) -> IResult<&str, String> {
    map(
        verify(take_till1(char::is_whitespace), |s: &str| !s.contains(',')),
        str::to_string,
    )(input)
}

pub fn end_of_statement(input: &str) -> IResult<&str, ()> {
    value((), pair(multispace0, eof))(input)
}

/// Runs `args` after a recognized verb. Any failure from here on is a
/// syntax error rather than an unrecognized statement.
pub fn arguments<'a, F, O>(args: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    cut(terminated(args, end_of_statement))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_boundary() {
        assert!(keyword("insert")("insert users").is_ok());
        assert!(keyword("insert")("insert").is_ok());
        assert!(keyword("insert")("insertx users").is_err());
        assert!(keyword("insert")("INSERT users").is_err());
    }

    #[test]
    fn test_keywords_allow_extra_space() {
        assert_eq!(keywords("create", "table")("create   table x").unwrap().0, " x");
        assert!(keywords("create", "table")("create tables").is_err());
    }

    #[test]
    fn test_table_name() {
        assert_eq!(table_name(" users").unwrap(), ("", "users".to_string()));
        assert_eq!(table_name("  _t1 rest").unwrap().1, "_t1");
        assert!(table_name("users").is_err());
        assert!(table_name(" 1users").is_err());
        assert!(table_name(" my-table").is_err());
    }

    #[test]
    fn test_is_table_name() {
        assert!(is_table_name("users"));
        assert!(is_table_name("_t1"));
        assert!(!is_table_name("my table"));
        assert!(!is_table_name("1users"));
        assert!(!is_table_name(""));
    }

    #[test]
    fn test_field_rejects_commas() {
        assert_eq!(field("alice@x.com rest").unwrap().1, "alice@x.com");
        assert!(field("a,b").is_err());
        assert!(field("").is_err());
    }

    #[test]
    fn test_row_id() {
        assert_eq!(row_id("42").unwrap().1, 42);
        assert!(row_id("-1").is_err());
        assert!(row_id("99999999999").is_err());
    }
}
