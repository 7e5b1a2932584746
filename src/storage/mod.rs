// Storage layer: where files live and how they are read and written
pub mod text_file;

use crate::types::DatabaseError;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_NAME: &str = "database";
pub const DEFAULT_METADATA_FILE: &str = "listoftables.txt";

/// Resolves the metadata file and per-table data files under one data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    data_dir: PathBuf,
    base_name: String,
    metadata_file: String,
}

impl StorageLayout {
    pub fn new<P: AsRef<Path>>(data_dir: P, base_name: &str, metadata_file: &str) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            base_name: base_name.to_string(),
            metadata_file: metadata_file.to_string(),
        }
    }

    /// Layout with the default file names under `data_dir`.
    pub fn in_dir<P: AsRef<Path>>(data_dir: P) -> Self {
        Self::new(data_dir, DEFAULT_BASE_NAME, DEFAULT_METADATA_FILE)
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn metadata_path(&self) -> PathBuf {
        self.data_dir.join(&self.metadata_file)
    }

    /// `<data_dir>/<base>_<table>.txt`
    #[must_use]
    pub fn table_path(&self, table_name: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}_{}.txt", self.base_name, table_name))
    }

    pub fn ensure_data_dir(&self) -> Result<(), DatabaseError> {
        fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }
}

impl Default for StorageLayout {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let layout = StorageLayout::default();
        assert_eq!(layout.metadata_path(), Path::new("./listoftables.txt"));
        assert_eq!(layout.table_path("users"), Path::new("./database_users.txt"));
    }

    #[test]
    fn test_custom_base_name() {
        let layout = StorageLayout::new("/var/lib/flat", "shop", "tables.meta");
        assert_eq!(layout.metadata_path(), Path::new("/var/lib/flat/tables.meta"));
        assert_eq!(layout.table_path("orders"), Path::new("/var/lib/flat/shop_orders.txt"));
    }

    #[test]
    fn test_ensure_data_dir_creates_nested() {
        let dir = tempfile::TempDir::new().unwrap();
        let layout = StorageLayout::in_dir(dir.path().join("a").join("b"));
        layout.ensure_data_dir().unwrap();
        assert!(layout.data_dir().is_dir());
    }
}
