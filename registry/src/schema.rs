//! The Schema - immutable per-record field lookup.

use crate::{FieldDef, Record, SchemaBuilder};
use std::collections::HashMap;
use std::fmt;

/// The Schema provides lookup of a record type's field definitions.
/// It is immutable after construction.
pub struct Schema<R: Record> {
    /// Record type name, used in error messages.
    name: &'static str,
    /// Field definitions in declaration order.
    fields: Vec<FieldDef<R>>,
    /// Field index by key.
    by_key: HashMap<R::Key, usize>,
    /// Field index by name.
    by_name: HashMap<&'static str, usize>,
    /// Required field keys in declaration order.
    required: Vec<R::Key>,
}

impl<R: Record> Schema<R> {
    /// Create a schema from validated definitions (use SchemaBuilder for construction).
    pub(crate) fn new(name: &'static str, fields: Vec<FieldDef<R>>) -> Self {
        let by_key = fields
            .iter()
            .enumerate()
            .map(|(i, def)| (def.key(), i))
            .collect();
        let by_name = fields
            .iter()
            .enumerate()
            .map(|(i, def)| (def.name(), i))
            .collect();
        let required = fields
            .iter()
            .filter(|def| def.is_required())
            .map(|def| def.key())
            .collect();

        Self {
            name,
            fields,
            by_key,
            by_name,
            required,
        }
    }

    /// Start building a schema for the record type called `name`.
    pub fn builder(name: &'static str) -> SchemaBuilder<R> {
        SchemaBuilder::new(name)
    }

    /// Get the record type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    // ==================== Field Lookups ====================

    /// Get a field definition by key.
    pub fn get(&self, key: R::Key) -> Option<&FieldDef<R>> {
        self.by_key.get(&key).map(|&i| &self.fields[i])
    }

    /// Get a field definition by name.
    pub fn get_by_name(&self, name: &str) -> Option<&FieldDef<R>> {
        self.by_name.get(name).map(|&i| &self.fields[i])
    }

    /// Get a field key by name.
    pub fn key_of(&self, name: &str) -> Option<R::Key> {
        self.get_by_name(name).map(|def| def.key())
    }

    /// Get the field name for a key.
    pub fn name_of(&self, key: R::Key) -> Option<&'static str> {
        self.get(key).map(|def| def.name())
    }

    /// Get all field definitions in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDef<R>> {
        self.fields.iter()
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // ==================== Requirements ====================

    /// Get the required field keys in declaration order.
    pub fn required_fields(&self) -> &[R::Key] {
        &self.required
    }

    /// Check if a field is required. Unknown keys are not required.
    pub fn is_required(&self, key: R::Key) -> bool {
        self.get(key).is_some_and(|def| def.is_required())
    }

    /// Get the names of all required fields in declaration order.
    pub fn required_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .filter(|def| def.is_required())
            .map(|def| def.name())
    }
}

impl<R: Record> fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish()
    }
}
