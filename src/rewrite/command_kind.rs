use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of statement a target list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandKind {
    Select,
    Insert,
    Update,
    Delete,
    Utility,
}

impl CommandKind {
    /// Commands whose execution must locate an existing row.
    pub fn needs_row_locator(&self) -> bool {
        matches!(self, CommandKind::Update | CommandKind::Delete)
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommandKind::Select => "SELECT",
            CommandKind::Insert => "INSERT",
            CommandKind::Update => "UPDATE",
            CommandKind::Delete => "DELETE",
            CommandKind::Utility => "UTILITY",
        };
        f.write_str(name)
    }
}
