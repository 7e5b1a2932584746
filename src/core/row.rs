use std::fmt;
use super::error::DatabaseError;

/// Semantic cap on `username`; not enforced.
pub const COLUMN_USERNAME_SIZE: usize = 32;
/// Semantic cap on `email`; not enforced.
pub const COLUMN_EMAIL_SIZE: usize = 255;

/// A fixed-schema record. Serialized as `<id>,<username>,<email>\n`.
///
/// Fields are written without escaping, so `username` and `email` must not
/// contain `,` or a newline. The statement parser rejects such values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: u32,
    pub username: String,
    pub email: String,
}

impl Row {
    pub fn new(id: u32, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }

    #[must_use]
    pub fn serialize(&self) -> String {
        format!("{},{},{}\n", self.id, self.username, self.email)
    }

    /// Parses one data line. Splits on the first two commas, so anything
    /// after the second comma belongs to `email`.
    pub fn deserialize(line: &str) -> Result<Self, DatabaseError> {
        let line = line.trim_end_matches(['\n', '\r']);
        let mut fields = line.splitn(3, ',');

        let (Some(id), Some(username), Some(email)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(DatabaseError::ParseError(format!(
                "expected 3 comma-separated fields in '{line}'"
            )));
        };

        if username.is_empty() || email.is_empty() {
            return Err(DatabaseError::ParseError(format!(
                "username and email must be non-empty in '{line}'"
            )));
        }

        let id = id
            .parse::<u32>()
            .map_err(|e| DatabaseError::ParseError(format!("invalid id '{id}': {e}")))?;

        Ok(Self::new(id, username, email))
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username, self.email)
    }
}
