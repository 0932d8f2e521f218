pub mod command_kind;
pub use command_kind::*;

pub mod range_table;
pub use range_table::*;

pub mod projection_entry;
pub use projection_entry::*;

pub mod rewrite_error;
pub use rewrite_error::*;

pub mod assignment_merger;
pub use assignment_merger::*;

pub mod default_resolver;
pub use default_resolver::*;

pub mod column_expander;
pub use column_expander::*;

pub mod normalizer;
pub use normalizer::*;
