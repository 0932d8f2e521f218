use indexmap::IndexMap;

use crate::schema::ColumnInfo;

/// Ordered description of a relation's physical columns.
///
/// The `columns` map stores `ColumnInfo` entries keyed by column name, in
/// physical column order. Attribute numbers are the 1-based positions in
/// this map; the rewrite stage reads schemas, it never changes them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationSchema {
    pub name: String,
    /// Map of column name -> column metadata, in physical order.
    pub columns: IndexMap<String, ColumnInfo>,
}

impl RelationSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), columns: IndexMap::new() }
    }

    pub fn with_column(mut self, name: impl Into<String>, info: ColumnInfo) -> Self {
        self.columns.insert(name.into(), info);
        self
    }

    /// Number of physical columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column name and metadata at a 1-based attribute number.
    pub fn attribute(&self, attrno: u32) -> Option<(&str, &ColumnInfo)> {
        if attrno == 0 {
            return None;
        }
        self.columns
            .get_index(attrno as usize - 1)
            .map(|(name, info)| (name.as_str(), info))
    }
}
