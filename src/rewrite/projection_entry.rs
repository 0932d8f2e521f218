use crate::expr::Expression;
use crate::schema::TypeId;

/// One item of a target list.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionEntry {
    /// 1-based output position. Non-junk entries occupy `1..=N` in physical
    /// column order; junk entries follow.
    pub resno: u32,
    pub ty: TypeId,
    pub typmod: i32,
    /// Column name for non-junk entries; a diagnostic label for junk ones.
    pub name: String,
    /// Junk entries travel through execution for bookkeeping but are never
    /// stored back into the row.
    pub is_junk: bool,
    pub expr: Expression,
}

/// Ordered target list; insertion order is the physical tuple layout for
/// non-junk entries.
pub type TargetList = Vec<ProjectionEntry>;

impl ProjectionEntry {
    /// Copy of this entry with its position corrected. The original stays
    /// untouched since the caller may still hold the list it came from.
    pub fn with_resno(&self, resno: u32) -> Self {
        Self { resno, ..self.clone() }
    }
}
