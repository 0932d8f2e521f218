use std::fmt;

use crate::rewrite::CommandKind;
use crate::schema::TypeId;

/// Failure of one target-list normalization pass.
///
/// Every variant is fatal to the current statement compile; nothing is
/// retried and no partial list is ever returned.
#[derive(Debug, Clone, PartialEq)]
pub enum RewriteError {
    /// The modification target is not a plain base relation.
    InvalidTargetRelation(String),
    UnsupportedCommand(CommandKind),
    /// Two or more non-composable assignments to the same column.
    DuplicateAssignment(String),
    /// An assignment matched no physical column and was not marked junk.
    UnexpectedAssignment(String),
    /// A stored column default cannot be coerced to the declared type.
    DefaultTypeMismatch { column: String, declared: TypeId, actual: TypeId },
}

impl fmt::Display for RewriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewriteError::InvalidTargetRelation(target) => {
                write!(f, "target \"{target}\" is not a base relation")
            }
            RewriteError::UnsupportedCommand(command) => {
                write!(f, "cannot normalize the target list of a {command} statement")
            }
            RewriteError::DuplicateAssignment(column) => {
                write!(f, "multiple assignments to column \"{column}\"")
            }
            RewriteError::UnexpectedAssignment(column) => {
                write!(f, "unexpected assignment to column \"{column}\"")
            }
            RewriteError::DefaultTypeMismatch { column, declared, actual } => {
                write!(
                    f,
                    "column \"{column}\" is of {declared} but its default expression is of {actual}"
                )
            }
        }
    }
}

impl std::error::Error for RewriteError {}
