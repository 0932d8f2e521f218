use std::fmt;

use serde_json::Value;

use crate::schema::{TypeId, TypeLayout};

/// Pseudo attribute number of the physical row identifier. It lives outside
/// the 1-based physical attribute space, so it can never collide with a
/// schema column.
pub const ROW_LOCATOR_ATTNO: u32 = 0;

/// One node of an expression tree.
///
/// The rewrite stage only ever inspects attribute references, element
/// assignments and constants; every other node reaches it as `Opaque` and
/// flows through untouched. Structural equality is plain `==`.
#[derive(Clone, PartialEq)]
pub enum Expression {
    AttrRef(AttrRef),
    ArrayAssign(Box<ArrayAssign>),
    Constant(Constant),
    Opaque(OpaqueExpr),
}

/// Reference to one attribute of a range-table relation.
#[derive(Debug, Clone, PartialEq)]
pub struct AttrRef {
    /// 1-based range-table index of the referenced relation.
    pub relation: u32,
    /// 1-based attribute number, or `ROW_LOCATOR_ATTNO`.
    pub attrno: u32,
    pub ty: TypeId,
    pub typmod: i32,
}

/// "Take `base`, set the element at `index` to `value`."
///
/// With `value == None` the node is a plain element fetch; only nodes
/// carrying a value are composable write operations.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayAssign {
    pub base: Expression,
    pub index: Expression,
    pub value: Option<Expression>,
    pub element_type: TypeId,
}

impl ArrayAssign {
    pub fn is_assignment(&self) -> bool {
        self.value.is_some()
    }

    /// Bottom of a nest of element assignments: follow `base` while it is
    /// itself an element assignment carrying a value.
    pub fn bottom_base(&self) -> &Expression {
        let mut bottom = &self.base;
        while let Expression::ArrayAssign(inner) = bottom {
            if !inner.is_assignment() {
                break;
            }
            bottom = &inner.base;
        }
        bottom
    }
}

/// A literal value, typed and sized by the type catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    pub ty: TypeId,
    /// Storage width in bytes; negative for variable-length types.
    pub width: i32,
    pub is_by_value: bool,
    pub value: Value,
    pub is_null: bool,
}

impl Constant {
    /// SQL NULL of the given type.
    pub fn null(ty: TypeId, layout: TypeLayout) -> Self {
        Self {
            ty,
            width: layout.width,
            is_by_value: layout.is_by_value,
            value: Value::Null,
            is_null: true,
        }
    }
}

/// Any expression node the rewrite stage has no business interpreting.
#[derive(Debug, Clone, PartialEq)]
pub struct OpaqueExpr {
    pub tag: String,
    pub ty: TypeId,
    pub children: Vec<Expression>,
}

impl Expression {
    /// The node as a composable element assignment, if it is one.
    pub fn as_assignment(&self) -> Option<&ArrayAssign> {
        match self {
            Expression::ArrayAssign(a) if a.is_assignment() => Some(a),
            _ => None,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::AttrRef(a) => write!(f, "attr {}.{}", a.relation, a.attrno),
            Expression::ArrayAssign(a) => {
                if a.is_assignment() {
                    write!(f, "set({}, {}, ..)", a.base, a.index)
                } else {
                    write!(f, "fetch({}, {})", a.base, a.index)
                }
            }
            Expression::Constant(c) if c.is_null => write!(f, "null::{}", c.ty),
            Expression::Constant(c) => write!(f, "{}::{}", c.value, c.ty),
            Expression::Opaque(o) => write!(f, "{}::{}", o.tag, o.ty),
        }
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::AttrRef(a) => write!(f, "AttrRef({self}, {}, {})", a.ty, a.typmod),
            Expression::ArrayAssign(_) => write!(f, "ArrayAssign({self})"),
            Expression::Constant(_) => write!(f, "Constant({self})"),
            Expression::Opaque(_) => write!(f, "Opaque({self})"),
        }
    }
}
