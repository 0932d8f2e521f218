use crate::schema::TypeId;

/// Metadata for one physical column of a relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub ty: TypeId,
    /// Type modifier (length/precision); -1 when the type takes none.
    pub typmod: i32,
    /// Stored text form of the column's default expression, if any.
    pub default_source: Option<String>,
}

impl ColumnInfo {
    pub fn new(ty: TypeId, typmod: i32) -> Self {
        Self { ty, typmod, default_source: None }
    }

    pub fn with_default(mut self, source: impl Into<String>) -> Self {
        self.default_source = Some(source.into());
        self
    }
}
