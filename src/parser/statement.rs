use crate::types::Row;

/// One parsed command, ready for execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    CreateTable {
        name: String,
    },
    DropTable {
        name: String,
    },
    ListTables,
    OpenTable {
        name: String,
    },
    CloseTable {
        name: String,
    },
    Insert {
        table: String,
        row: Row,
    },
    Select {
        table: String,
    },
    Delete {
        table: String,
    },
}

/// Meta-commands start with `.` and are handled before statement parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaCommand {
    Exit,
    Help,
    Unrecognized(String),
}
