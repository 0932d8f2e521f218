use crate::expr::{ArrayAssign, Expression};
use crate::rewrite::{ProjectionEntry, RewriteError};

pub struct AssignmentMerger;

impl AssignmentMerger {
    /// Fold one matched input entry into the accumulated entry for `attrno`.
    ///
    /// A column may be assigned more than once only when every assignment is
    /// an element assignment on the same underlying value. Those are merged
    /// by nesting, so earlier elements apply first:
    /// `SET foo[2] = 42, foo[4] = 43` becomes
    /// `foo = set(set(foo, 2, 42), 4, 43)`.
    pub fn merge(
        candidate: &ProjectionEntry,
        accumulator: Option<ProjectionEntry>,
        attrno: u32,
    ) -> Result<ProjectionEntry, RewriteError> {
        let Some(prior) = accumulator else {
            // First assignment to the attribute. Reuse the entry when its
            // resno is already right; otherwise copy with the position
            // corrected so the caller's list stays intact.
            if candidate.resno == attrno {
                return Ok(candidate.clone());
            }
            return Ok(candidate.with_resno(attrno));
        };

        match (candidate.expr.as_assignment(), prior.expr.as_assignment()) {
            (Some(src), Some(pri))
                if src.element_type == pri.element_type
                    && pri.bottom_base() == &src.base =>
            {
                // The prior expression may already be a nest of element
                // assignments; slide it under the new one.
                let merged = ArrayAssign {
                    base: prior.expr.clone(),
                    index: src.index.clone(),
                    value: src.value.clone(),
                    element_type: src.element_type,
                };
                Ok(ProjectionEntry {
                    resno: attrno,
                    ty: candidate.ty,
                    typmod: candidate.typmod,
                    name: candidate.name.clone(),
                    is_junk: false,
                    expr: Expression::ArrayAssign(Box::new(merged)),
                })
            }
            _ => Err(RewriteError::DuplicateAssignment(candidate.name.clone())),
        }
    }
}
