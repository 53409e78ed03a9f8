//! PropertyList - fluent construction of ordered property lists.

use recast_core::{FieldValue, Value};
use recast_registry::{Field, Record};
use std::fmt;

use crate::composer::Composer;
use crate::error::ComposeResult;
use crate::property::{PartialProperty, Property};

/// An ordered list of properties for record `R`.
///
/// ```ignore
/// let customer = PropertyList::new()
///     .with(Customer::NAME, "Steve Jobs")
///     .with(Customer::ZIPCODE, 97202)
///     .construct()?;
/// ```
pub struct PropertyList<R: Record> {
    properties: Vec<PartialProperty<R>>,
}

impl<R: Record> PropertyList<R> {
    pub fn new() -> Self {
        Self {
            properties: Vec::new(),
        }
    }

    /// Append "set `field` to `value`".
    pub fn with<V: FieldValue>(mut self, field: Field<R, V>, value: impl Into<V>) -> Self {
        self.properties
            .push(Property::new(field, value.into()).erase());
        self
    }

    /// Append "set optional `field` to `Some(value)`".
    pub fn with_some<T: FieldValue>(self, field: Field<R, Option<T>>, value: impl Into<T>) -> Self {
        self.with(field, Some(value.into()))
    }

    /// Append an explicit "set `field` to absent".
    pub fn unset<T: FieldValue>(mut self, field: Field<R, Option<T>>) -> Self {
        self.properties
            .push(PartialProperty::from_parts(field.key(), Value::Null));
        self
    }

    /// Append an already erased property.
    pub fn push(mut self, property: impl Into<PartialProperty<R>>) -> Self {
        self.properties.push(property.into());
        self
    }

    /// One property per schema field, holding the record's current values.
    pub fn from_record(record: &R) -> Self {
        R::schema()
            .fields()
            .map(|def| PartialProperty::from_parts(def.key(), def.read(record)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PartialProperty<R>> {
        self.properties.iter()
    }

    pub fn as_slice(&self) -> &[PartialProperty<R>] {
        &self.properties
    }

    pub fn into_vec(self) -> Vec<PartialProperty<R>> {
        self.properties
    }

    /// Build a fresh record with the default composer.
    pub fn construct(self) -> ComposeResult<R> {
        Composer::new().construct(self)
    }

    /// Copy `base` with these properties applied, using the default composer.
    pub fn apply_to(self, base: &R) -> R {
        Composer::new().clone_with(base, self)
    }
}

impl<R: Record> Default for PropertyList<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Clone for PropertyList<R> {
    fn clone(&self) -> Self {
        Self {
            properties: self.properties.clone(),
        }
    }
}

impl<R: Record> fmt::Debug for PropertyList<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.properties).finish()
    }
}

impl<R: Record> IntoIterator for PropertyList<R> {
    type Item = PartialProperty<R>;
    type IntoIter = std::vec::IntoIter<PartialProperty<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.into_iter()
    }
}

impl<'a, R: Record> IntoIterator for &'a PropertyList<R> {
    type Item = &'a PartialProperty<R>;
    type IntoIter = std::slice::Iter<'a, PartialProperty<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

impl<R: Record> FromIterator<PartialProperty<R>> for PropertyList<R> {
    fn from_iter<I: IntoIterator<Item = PartialProperty<R>>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}

impl<R: Record> Extend<PartialProperty<R>> for PropertyList<R> {
    fn extend<I: IntoIterator<Item = PartialProperty<R>>>(&mut self, iter: I) {
        self.properties.extend(iter);
    }
}

impl<R: Record> From<Vec<PartialProperty<R>>> for PropertyList<R> {
    fn from(properties: Vec<PartialProperty<R>>) -> Self {
        Self { properties }
    }
}
