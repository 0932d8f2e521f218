use tracing::debug;

use crate::expr::{AttrRef, Expression, ROW_LOCATOR_ATTNO};
use crate::rewrite::{
    ColumnExpander, CommandKind, ProjectionEntry, RangeTable, RangeTableEntry, RewriteError,
    TargetList,
};
use crate::schema::{Catalog, TypeId, TypeServices};

/// Diagnostic label of the row-locator junk entry.
pub const ROW_LOCATOR_NAME: &str = "<locator>";

pub struct TargetListNormalizer;

impl TargetListNormalizer {
    /// Driver for normalizing a data-modification statement's target list.
    ///
    /// INSERT/UPDATE lists are rebuilt with exactly one entry per physical
    /// column, in declared column order; UPDATE/DELETE lists get one
    /// trailing junk entry carrying the row locator so execution can find
    /// the row to replace or delete. The input list is never mutated; the
    /// caller always gets a fresh list back.
    pub fn preprocess(
        tlist: &TargetList,
        command: CommandKind,
        target: Option<u32>,
        range_table: &RangeTable,
        catalog: &dyn Catalog,
        types: &dyn TypeServices,
    ) -> Result<TargetList, RewriteError> {
        // Sanity check up front: a derived source can never be stored into.
        if let Some(index) = target {
            Self::target_relation_name(index, range_table)?;
        }

        debug!(%command, entries = tlist.len(), "preprocessing target list");

        let mut result = match command {
            CommandKind::Insert | CommandKind::Update => {
                let index = Self::require_target(target)?;
                let name = Self::target_relation_name(index, range_table)?;
                // the schema handle is held for the column scan only
                let handle = catalog
                    .open(name)
                    .ok_or_else(|| RewriteError::InvalidTargetRelation(name.to_string()))?;
                ColumnExpander::expand(tlist, command, index, handle.schema(), types)?
            }
            // No expansion for DELETE, but the locator below must go onto a
            // copy so the caller's list survives unmodified.
            CommandKind::Delete => tlist.clone(),
            other => return Err(RewriteError::UnsupportedCommand(other)),
        };

        if command.needs_row_locator() {
            let index = Self::require_target(target)?;
            let resno = result.len() as u32 + 1;
            result.push(ProjectionEntry {
                resno,
                ty: TypeId::ROW_LOCATOR,
                typmod: -1,
                name: ROW_LOCATOR_NAME.to_string(),
                is_junk: true,
                expr: Expression::AttrRef(AttrRef {
                    relation: index,
                    attrno: ROW_LOCATOR_ATTNO,
                    ty: TypeId::ROW_LOCATOR,
                    typmod: -1,
                }),
            });
        }

        Ok(result)
    }

    fn require_target(target: Option<u32>) -> Result<u32, RewriteError> {
        target.ok_or_else(|| RewriteError::InvalidTargetRelation("<none>".to_string()))
    }

    /// Resolve a 1-based range-table index to the name of a base relation.
    fn target_relation_name(
        index: u32,
        range_table: &RangeTable,
    ) -> Result<&str, RewriteError> {
        let entry = index
            .checked_sub(1)
            .and_then(|i| range_table.get(i as usize))
            .ok_or_else(|| RewriteError::InvalidTargetRelation(format!("entry {index}")))?;
        match entry {
            RangeTableEntry::Relation { name } => Ok(name),
            RangeTableEntry::Subquery { alias } => {
                Err(RewriteError::InvalidTargetRelation(alias.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::_tests::fixtures::{
        int_const, items_catalog, junk_entry, plain_entry, text_const, DummyTypes,
    };

    fn preprocess(
        tlist: &TargetList,
        command: CommandKind,
        target: Option<u32>,
        range_table: &RangeTable,
    ) -> Result<TargetList, RewriteError> {
        let catalog = items_catalog();
        TargetListNormalizer::preprocess(tlist, command, target, range_table, &catalog, &DummyTypes)
    }

    fn items_range_table() -> RangeTable {
        vec![RangeTableEntry::relation("items")]
    }

    fn locator_checks(entry: &ProjectionEntry, expected_resno: u32) {
        assert_eq!(entry.resno, expected_resno);
        assert_eq!(entry.ty, TypeId::ROW_LOCATOR);
        assert_eq!(entry.typmod, -1);
        assert_eq!(entry.name, ROW_LOCATOR_NAME);
        assert!(entry.is_junk);
        match &entry.expr {
            Expression::AttrRef(a) => {
                assert_eq!(a.relation, 1);
                assert_eq!(a.attrno, ROW_LOCATOR_ATTNO);
                assert_eq!(a.ty, TypeId::ROW_LOCATOR);
            }
            other => panic!("expected locator reference, got {other:?}"),
        }
    }

    #[test]
    fn insert_expands_without_locator() {
        let tlist = vec![plain_entry(1, "name", text_const("x"))];
        let out = preprocess(&tlist, CommandKind::Insert, Some(1), &items_range_table()).unwrap();

        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|e| !e.is_junk));
    }

    #[test]
    fn update_expands_and_appends_locator() {
        let tlist = vec![plain_entry(1, "qty", int_const(7))];
        let out = preprocess(&tlist, CommandKind::Update, Some(1), &items_range_table()).unwrap();

        assert_eq!(out.len(), 5);
        locator_checks(&out[4], 5);
    }

    #[test]
    fn update_locator_lands_after_carried_junk() {
        let tlist = vec![
            plain_entry(1, "qty", int_const(7)),
            junk_entry(2, "sort-key", int_const(3)),
        ];
        let out = preprocess(&tlist, CommandKind::Update, Some(1), &items_range_table()).unwrap();

        assert_eq!(out.len(), 6);
        assert_eq!(out[4].name, "sort-key");
        assert_eq!(out[4].resno, 5);
        locator_checks(&out[5], 6);
    }

    #[test]
    fn delete_appends_locator_to_a_copy() {
        let tlist = vec![junk_entry(1, "filter", int_const(1))];
        let before = tlist.clone();
        let out = preprocess(&tlist, CommandKind::Delete, Some(1), &items_range_table()).unwrap();

        // caller's list untouched, result has exactly one more entry
        assert_eq!(tlist, before);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], tlist[0]);
        locator_checks(&out[1], 2);
    }

    #[test]
    fn delete_of_empty_list_yields_only_the_locator() {
        let tlist: TargetList = vec![];
        let out = preprocess(&tlist, CommandKind::Delete, Some(1), &items_range_table()).unwrap();
        assert_eq!(out.len(), 1);
        locator_checks(&out[0], 1);
    }

    #[test]
    fn select_and_utility_are_unsupported() {
        let tlist: TargetList = vec![];
        for command in [CommandKind::Select, CommandKind::Utility] {
            let err = preprocess(&tlist, command, None, &items_range_table()).unwrap_err();
            assert_eq!(err, RewriteError::UnsupportedCommand(command));
        }
    }

    #[test]
    fn subquery_target_is_rejected_before_any_work() {
        let range_table = vec![RangeTableEntry::subquery("sub")];
        let tlist = vec![plain_entry(1, "qty", int_const(7))];
        let err = preprocess(&tlist, CommandKind::Update, Some(1), &range_table).unwrap_err();
        assert_eq!(err, RewriteError::InvalidTargetRelation("sub".into()));
    }

    #[test]
    fn unknown_relation_is_rejected() {
        let range_table = vec![RangeTableEntry::relation("ghost")];
        let tlist: TargetList = vec![];
        let err = preprocess(&tlist, CommandKind::Insert, Some(1), &range_table).unwrap_err();
        assert_eq!(err, RewriteError::InvalidTargetRelation("ghost".into()));
    }

    #[test]
    fn out_of_range_target_index_is_rejected() {
        let tlist: TargetList = vec![];
        let err = preprocess(&tlist, CommandKind::Update, Some(9), &items_range_table()).unwrap_err();
        assert_eq!(err, RewriteError::InvalidTargetRelation("entry 9".into()));
    }

    #[test]
    fn insert_without_target_is_rejected() {
        let tlist: TargetList = vec![];
        let err = preprocess(&tlist, CommandKind::Insert, None, &items_range_table()).unwrap_err();
        assert_eq!(err, RewriteError::InvalidTargetRelation("<none>".into()));
    }
}
