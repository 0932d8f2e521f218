use std::ops::Deref;
use std::sync::Arc;

use crate::schema::RelationSchema;

/// Scoped read acquisition of a relation's schema.
///
/// Holding the handle keeps the schema stable for the duration of one
/// normalization pass; concurrent DDL is serialized by the providing
/// catalog, not here. Dropping the handle releases the hold, so every exit
/// path of a pass, error paths included, releases it.
pub struct SchemaHandle {
    schema: Arc<RelationSchema>,
}

impl SchemaHandle {
    pub fn new(schema: Arc<RelationSchema>) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &RelationSchema {
        &self.schema
    }
}

impl Deref for SchemaHandle {
    type Target = RelationSchema;

    fn deref(&self) -> &Self::Target {
        &self.schema
    }
}

/// Access to relation schemas, provided by the surrounding storage layer.
pub trait Catalog {
    /// Given a relation name, return a scoped handle on its schema if the
    /// relation exists.
    fn open(&self, relation: &str) -> Option<SchemaHandle>;
}
