pub mod type_id;
pub use type_id::*;

pub mod column_info;
pub use column_info::*;

pub mod relation_schema;
pub use relation_schema::*;

pub mod catalog;
pub use catalog::*;

pub mod type_services;
pub use type_services::*;
