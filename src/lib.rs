// flatsql - interactive record-store shell over flat text files
// Modular architecture: core model, storage, parser, executor, shell

// Clippy configuration - allow non-critical warnings
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

// Core database structures (Row, Table, Database, errors)
pub mod core;

// Re-export all core types as types module
pub mod types {
    pub use crate::core::*;
}

// Storage layer (file layout, text file access)
pub mod storage;

// Statement and meta-command parser
pub mod parser;

// Statement executor (table-level and row-level commands)
pub mod executor;

// Per-line command pipeline
pub mod shell;

// Command-line arguments and layered configuration
pub mod config;

// Re-export commonly used types for convenience
pub use crate::core::{Database, DatabaseError, InsertOutcome, Row, Table, TableState};
pub use crate::parser::{parse_statement, MetaCommand, PrepareError, Statement};
pub use crate::executor::{execute_statement, ExecuteResult, QueryResult};
pub use crate::storage::StorageLayout;
pub use crate::shell::{LineOutcome, Shell};
pub use crate::config::{Args, ShellConfig};
