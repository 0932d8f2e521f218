/// One source a statement reads from or writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeTableEntry {
    /// A named base relation.
    Relation { name: String },
    /// A derived source; never a valid modification target.
    Subquery { alias: String },
}

impl RangeTableEntry {
    pub fn relation(name: impl Into<String>) -> Self {
        RangeTableEntry::Relation { name: name.into() }
    }

    pub fn subquery(alias: impl Into<String>) -> Self {
        RangeTableEntry::Subquery { alias: alias.into() }
    }
}

/// Range table of a statement; entries are designated by 1-based index.
pub type RangeTable = Vec<RangeTableEntry>;
