use tracing::debug;

use crate::expr::{Constant, Expression};
use crate::rewrite::RewriteError;
use crate::schema::{ColumnInfo, TypeServices};

pub struct DefaultValueResolver;

impl DefaultValueResolver {
    /// Expression to store into a column an INSERT did not mention.
    ///
    /// A stored per-column default wins; otherwise the type's own default;
    /// otherwise a typed NULL. Whatever is produced goes through the
    /// type-modifier coercion, so fixed-length columns pick up their length
    /// adjustment.
    pub fn resolve(
        column_name: &str,
        column: &ColumnInfo,
        types: &dyn TypeServices,
    ) -> Result<Expression, RewriteError> {
        if let Some(source) = &column.default_source {
            debug!(column = %column_name, "materializing stored column default");
            let expr = types.parse_stored_expression(source);

            // A stored default is not necessarily of the column type yet
            // (it was stored as written, not as coerced). Failure to coerce
            // means the default was broken at creation time.
            let actual = types.infer_type(&expr);
            let expr = if actual == column.ty {
                expr
            } else {
                let base = types.base_type(column.ty);
                types.coerce_to_type(expr, base, column.typmod).ok_or_else(|| {
                    RewriteError::DefaultTypeMismatch {
                        column: column_name.to_string(),
                        declared: column.ty,
                        actual,
                    }
                })?
            };
            return Ok(types.coerce_typmod(expr, column.ty, column.typmod));
        }

        let expr = match types.type_default(column.ty, column.typmod) {
            Some(expr) => expr,
            None => Expression::Constant(Constant::null(column.ty, types.type_layout(column.ty))),
        };
        Ok(types.coerce_typmod(expr, column.ty, column.typmod))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::_tests::fixtures::{
        int_const, DummyTypes, COUNTER, INT, NUMERIC, TEXT,
    };
    use crate::schema::ColumnInfo;

    #[test]
    fn stored_default_parses_to_typed_constant() {
        let column = ColumnInfo::new(INT, -1).with_default("42");
        let expr = DefaultValueResolver::resolve("qty", &column, &DummyTypes).unwrap();
        assert_eq!(expr, int_const(42));
    }

    #[test]
    fn stored_default_of_other_type_is_coerced() {
        // an integer default on a numeric column goes through a cast
        let column = ColumnInfo::new(NUMERIC, -1).with_default("42");
        let expr = DefaultValueResolver::resolve("price", &column, &DummyTypes).unwrap();
        match expr {
            Expression::Opaque(cast) => {
                assert_eq!(cast.tag, "cast");
                assert_eq!(cast.ty, NUMERIC);
                assert_eq!(cast.children, vec![int_const(42)]);
            }
            other => panic!("expected cast around the default, got {other:?}"),
        }
    }

    #[test]
    fn uncoercible_stored_default_is_fatal() {
        let column = ColumnInfo::new(INT, -1).with_default("'oops'");
        let err = DefaultValueResolver::resolve("qty", &column, &DummyTypes).unwrap_err();
        assert_eq!(
            err,
            RewriteError::DefaultTypeMismatch { column: "qty".into(), declared: INT, actual: TEXT }
        );
    }

    #[test]
    fn type_level_default_is_used_when_column_has_none() {
        let column = ColumnInfo::new(COUNTER, -1);
        let expr = DefaultValueResolver::resolve("seq", &column, &DummyTypes).unwrap();
        match expr {
            Expression::Constant(c) => {
                assert_eq!(c.ty, COUNTER);
                assert!(!c.is_null);
                assert_eq!(c.value, serde_json::json!(0));
            }
            other => panic!("expected the counter type default, got {other:?}"),
        }
    }

    #[test]
    fn no_default_anywhere_yields_typed_null() {
        let column = ColumnInfo::new(TEXT, -1);
        let expr = DefaultValueResolver::resolve("name", &column, &DummyTypes).unwrap();
        match expr {
            Expression::Constant(c) => {
                assert!(c.is_null);
                assert_eq!(c.ty, TEXT);
                assert_eq!(c.width, -1);
                assert!(!c.is_by_value);
            }
            other => panic!("expected a typed NULL, got {other:?}"),
        }
    }

    #[test]
    fn typmod_coercion_wraps_the_result() {
        // TEXT with a declared length gets the length adjustment even for
        // the synthesized NULL
        let column = ColumnInfo::new(TEXT, 12);
        let expr = DefaultValueResolver::resolve("code", &column, &DummyTypes).unwrap();
        match expr {
            Expression::Opaque(adj) => {
                assert_eq!(adj.tag, "typmod");
                assert_eq!(adj.ty, TEXT);
            }
            other => panic!("expected a typmod adjustment, got {other:?}"),
        }
    }
}
