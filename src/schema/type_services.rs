use crate::expr::Expression;
use crate::schema::{TypeId, TypeLayout};

/// Type inference, coercion and stored-expression parsing, provided by the
/// surrounding system. The rewrite stage treats all of these as opaque.
pub trait TypeServices {
    /// Static result type of an expression.
    fn infer_type(&self, expr: &Expression) -> TypeId;

    /// Coerce `expr` to `target`; `None` when no coercion path exists.
    fn coerce_to_type(&self, expr: Expression, target: TypeId, typmod: i32) -> Option<Expression>;

    /// Apply a type-modifier (length/precision) coercion. Identity for
    /// types without modifier semantics.
    fn coerce_typmod(&self, expr: Expression, ty: TypeId, typmod: i32) -> Expression;

    /// Type-level default value, if the type declares one.
    fn type_default(&self, ty: TypeId, typmod: i32) -> Option<Expression>;

    /// Width and pass-by-value layout of a type.
    fn type_layout(&self, ty: TypeId) -> TypeLayout;

    /// Resolve a domain type to its underlying base type; identity for
    /// plain types.
    fn base_type(&self, ty: TypeId) -> TypeId;

    /// Parse the stored text form of a column default into an expression.
    fn parse_stored_expression(&self, source: &str) -> Expression;
}
