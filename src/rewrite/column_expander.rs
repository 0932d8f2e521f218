use tracing::{debug, trace};

use crate::expr::{AttrRef, Expression};
use crate::rewrite::{
    AssignmentMerger, CommandKind, DefaultValueResolver, ProjectionEntry, RewriteError, TargetList,
};
use crate::schema::{RelationSchema, TypeServices};

pub struct ColumnExpander;

impl ColumnExpander {
    /// Rebuild `tlist` with exactly one non-junk entry per physical column
    /// of the relation, in declared column order, followed by the input's
    /// junk entries in their original relative order.
    ///
    /// Matching is by exact, case-sensitive column name; junk entries are
    /// never candidates. A column the statement did not mention gets a
    /// default expression (INSERT) or a reference to its current value
    /// (UPDATE).
    pub fn expand(
        tlist: &TargetList,
        command: CommandKind,
        target_index: u32,
        schema: &RelationSchema,
        types: &dyn TypeServices,
    ) -> Result<TargetList, RewriteError> {
        // Map of which input entries we have transferred to the new list.
        let mut consumed = vec![false; tlist.len()];
        let mut output: TargetList = Vec::with_capacity(schema.len().max(tlist.len()));

        for (index0, (attrname, column)) in schema.columns.iter().enumerate() {
            let attrno = index0 as u32 + 1;

            let mut merged: Option<ProjectionEntry> = None;
            for (i, entry) in tlist.iter().enumerate() {
                if consumed[i] || entry.is_junk || entry.name != *attrname {
                    continue;
                }
                trace!(column = %attrname, input_position = i, "folding matched entry");
                merged = Some(AssignmentMerger::merge(entry, merged, attrno)?);
                consumed[i] = true;
                // keep scanning: further assignments to this column must
                // fold in or be rejected
            }

            let entry = match merged {
                Some(entry) => entry,
                None => {
                    let expr = match command {
                        CommandKind::Insert => {
                            DefaultValueResolver::resolve(attrname, column, types)?
                        }
                        CommandKind::Update => Expression::AttrRef(AttrRef {
                            relation: target_index,
                            attrno,
                            ty: column.ty,
                            typmod: column.typmod,
                        }),
                        other => return Err(RewriteError::UnsupportedCommand(other)),
                    };
                    debug!(column = %attrname, %command, "synthesized entry for omitted column");
                    ProjectionEntry {
                        resno: attrno,
                        ty: column.ty,
                        typmod: column.typmod,
                        name: attrname.clone(),
                        is_junk: false,
                        expr,
                    }
                }
            };
            output.push(entry);
        }

        // Whatever the column scan left behind must be junk; it follows the
        // column block, renumbered to stay contiguous.
        let mut next_resno = schema.len() as u32 + 1;
        for (i, entry) in tlist.iter().enumerate() {
            if consumed[i] {
                continue;
            }
            if !entry.is_junk {
                return Err(RewriteError::UnexpectedAssignment(entry.name.clone()));
            }
            // Get the resno right, but don't copy unnecessarily.
            if entry.resno == next_resno {
                output.push(entry.clone());
            } else {
                output.push(entry.with_resno(next_resno));
            }
            next_resno += 1;
        }

        Ok(output)
    }
}
