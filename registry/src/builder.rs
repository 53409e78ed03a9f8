//! SchemaBuilder for constructing an immutable Schema.

use crate::{FieldDef, Record, Schema};
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during schema construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Record type name must not be empty")]
    EmptyName,

    #[error("Duplicate field key {key} on record {record}")]
    DuplicateField { record: String, key: String },

    #[error("Duplicate field name: {field} on record {record}")]
    DuplicateFieldName { record: String, field: String },

    #[error("Required field cannot be nullable: {field} on record {record}")]
    RequiredNullable { record: String, field: String },
}

/// Builder for constructing an immutable Schema.
pub struct SchemaBuilder<R: Record> {
    /// Record type name.
    name: &'static str,
    /// Fields being built, in declaration order.
    fields: Vec<FieldDef<R>>,
}

impl<R: Record> SchemaBuilder<R> {
    /// Create a new builder.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    /// Add a field definition.
    pub fn field(mut self, def: FieldDef<R>) -> Self {
        self.fields.push(def);
        self
    }

    /// Build the immutable Schema.
    pub fn build(self) -> Result<Schema<R>, SchemaError> {
        if self.name.is_empty() {
            return Err(SchemaError::EmptyName);
        }

        let mut keys = HashSet::new();
        let mut names = HashSet::new();
        for def in &self.fields {
            if !keys.insert(def.key()) {
                return Err(SchemaError::DuplicateField {
                    record: self.name.to_string(),
                    key: format!("{:?}", def.key()),
                });
            }
            if !names.insert(def.name()) {
                return Err(SchemaError::DuplicateFieldName {
                    record: self.name.to_string(),
                    field: def.name().to_string(),
                });
            }
            // A required field must be satisfiable by an explicit, non-null value
            if def.is_required() && def.is_nullable() {
                return Err(SchemaError::RequiredNullable {
                    record: self.name.to_string(),
                    field: def.name().to_string(),
                });
            }
        }

        let schema = Schema::new(self.name, self.fields);
        debug!(
            target: "recast::registry",
            record = schema.name(),
            fields = schema.len(),
            required = schema.required_fields().len(),
            "schema built"
        );
        Ok(schema)
    }
}
