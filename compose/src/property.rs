//! Typed and type-erased properties.
//!
//! A [`Property`] pairs a typed field selector with a value of the field's
//! type. Erasing it yields a [`PartialProperty`], which keeps the field key
//! and carries the value as a dynamic [`Value`] so that properties of
//! different value types can share one list. Neither holds an applicator:
//! application is dispatched through the record's schema.

use recast_core::{FieldValue, Value};
use recast_registry::{Field, Record};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// "Set field F of record R to a value of type V".
pub struct Property<R: Record, V> {
    field: Field<R, V>,
    value: V,
}

impl<R: Record, V: FieldValue> Property<R, V> {
    pub fn new(field: Field<R, V>, value: V) -> Self {
        Self { field, value }
    }

    pub fn field(&self) -> Field<R, V> {
        self.field
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// Erase the value type.
    pub fn erase(self) -> PartialProperty<R> {
        PartialProperty::from_parts(self.field.key(), self.value.into_value())
    }

    /// Return a copy of `record` with this property applied.
    pub fn apply(&self, record: &R) -> R
    where
        V: Clone,
    {
        let partial =
            PartialProperty::from_parts(self.field.key(), self.value.clone().into_value());
        partial.apply(record).record
    }
}

impl<R: Record, V: Clone> Clone for Property<R, V> {
    fn clone(&self) -> Self {
        Self {
            field: self.field,
            value: self.value.clone(),
        }
    }
}

impl<R: Record, V: fmt::Debug> fmt::Debug for Property<R, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("field", &self.field)
            .field("value", &self.value)
            .finish()
    }
}

impl<R: Record, V: FieldValue> From<Property<R, V>> for PartialProperty<R> {
    fn from(property: Property<R, V>) -> Self {
        property.erase()
    }
}

/// Outcome of applying one property to a record.
#[derive(Debug, Clone, PartialEq)]
pub struct Applied<R> {
    /// The resulting record.
    pub record: R,
    /// Whether the value was accepted by the field.
    pub changed: bool,
}

/// A property with its value type erased.
#[derive(Serialize, Deserialize)]
#[serde(bound(
    serialize = "R::Key: Serialize",
    deserialize = "R::Key: Deserialize<'de>"
))]
pub struct PartialProperty<R: Record> {
    key: R::Key,
    value: Value,
    #[serde(skip)]
    _marker: PhantomData<fn() -> R>,
}

impl<R: Record> PartialProperty<R> {
    /// Build a property from a raw key and value.
    ///
    /// Nothing is checked here; a value that does not fit the field is
    /// skipped when the property is applied.
    pub fn from_parts(key: R::Key, value: Value) -> Self {
        Self {
            key,
            value,
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> R::Key {
        self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The target field's name, if the schema declares it.
    pub fn field_name(&self) -> Option<&'static str> {
        R::schema().name_of(self.key)
    }

    /// Apply this property to a copy of `record`.
    ///
    /// When the value's dynamic type does not match the field (or the field is
    /// unknown to the schema), the copy is returned unchanged with
    /// `changed = false`. `record` itself is never mutated.
    pub fn apply(&self, record: &R) -> Applied<R> {
        let mut next = record.clone();
        let changed = self.assign_to(&mut next);
        Applied {
            record: next,
            changed,
        }
    }

    /// Assign in place; used by the composer on its own working copy.
    pub(crate) fn assign_to(&self, record: &mut R) -> bool {
        R::schema()
            .get(self.key)
            .is_some_and(|def| def.assign(record, &self.value))
    }
}

impl<R: Record> Clone for PartialProperty<R> {
    fn clone(&self) -> Self {
        Self::from_parts(self.key, self.value.clone())
    }
}

impl<R: Record> PartialEq for PartialProperty<R> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}

impl<R: Record> fmt::Debug for PartialProperty<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialProperty")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}
