pub mod schema;
pub use schema::{Catalog, ColumnInfo, RelationSchema, SchemaHandle, TypeId, TypeServices};

pub mod expr;
pub use expr::Expression;

pub mod rewrite;
pub use rewrite::{
    CommandKind, ProjectionEntry, RangeTableEntry, RewriteError, TargetList, TargetListNormalizer,
};
