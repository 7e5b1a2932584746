//! Line-oriented text file access
//!
//! Every call opens its own handle and drops it before returning. Nothing
//! is held open between commands.

use crate::types::DatabaseError;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

/// Reads every line of `path`. Returns `Ok(None)` when the file does not exist.
pub fn read_lines(path: &Path) -> Result<Option<Vec<String>>, DatabaseError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(DatabaseError::FileAccess {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let lines = BufReader::new(file).lines().collect::<Result<Vec<_>, _>>()?;
    Ok(Some(lines))
}

/// Replaces the contents of `path` with `chunks`, written back to back.
pub fn overwrite<I, S>(path: &Path, chunks: I) -> Result<(), DatabaseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let file = create_truncated(path)?;
    let mut writer = BufWriter::new(file);
    for chunk in chunks {
        writer.write_all(chunk.as_ref().as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Empties `path`, creating it if needed.
pub fn truncate(path: &Path) -> Result<(), DatabaseError> {
    create_truncated(path).map(drop)
}

fn create_truncated(path: &Path) -> Result<File, DatabaseError> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|source| DatabaseError::FileAccess {
            path: path.to_path_buf(),
            source,
        })
}
