//! Recast Registry
//!
//! Per-record schema lookup. Single source of truth for which fields a record
//! type has, how to read and write them, and which of them are required.
//! A schema is immutable after construction via SchemaBuilder.

mod builder;
mod schema;
mod types;

#[cfg(test)]
mod test_support;

pub use builder::{SchemaBuilder, SchemaError};
pub use schema::Schema;
pub use types::*;
