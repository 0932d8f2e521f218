use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a type in the external type catalog.
///
/// The rewrite stage never interprets type ids beyond comparing them and
/// handing them to the `TypeServices` implementation; the only id it knows
/// by name is the one carried by row-locator entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeId(pub u32);

impl TypeId {
    /// Type of the physical row identifier attached to UPDATE/DELETE lists.
    pub const ROW_LOCATOR: TypeId = TypeId(0);
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type#{}", self.0)
    }
}

/// Physical layout of a type, as reported by the type catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeLayout {
    /// Storage width in bytes; negative for variable-length types.
    pub width: i32,
    pub is_by_value: bool,
}
