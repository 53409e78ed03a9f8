//! Record, field selector and field definition types.

use crate::Schema;
use recast_core::{FieldValue, Value, ValueKind};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A record type that can be built and cloned from properties.
///
/// Implementors supply a canonical blank instance and a statically declared
/// schema. Required-ness comes only from the schema, never from inspecting
/// field values.
pub trait Record: Clone + 'static {
    /// Identifies one field of this record, usually a fieldless enum.
    type Key: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static;

    /// The blank instance every construction starts from.
    fn blank() -> Self;

    /// The record's schema, built once per type.
    fn schema() -> &'static Schema<Self>;
}

/// Typed selector for one field of record `R` holding values of type `V`.
///
/// Two selectors are equal iff they carry the same key.
pub struct Field<R: Record, V> {
    key: R::Key,
    _marker: PhantomData<fn() -> (R, V)>,
}

impl<R: Record, V> Field<R, V> {
    /// Create a selector for `key`.
    pub const fn new(key: R::Key) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }

    /// Get the underlying field key.
    pub fn key(&self) -> R::Key {
        self.key
    }
}

impl<R: Record, V> Clone for Field<R, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Record, V> Copy for Field<R, V> {}

impl<R: Record, V> PartialEq for Field<R, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<R: Record, V> Eq for Field<R, V> {}

impl<R: Record, V> Hash for Field<R, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<R: Record, V> fmt::Debug for Field<R, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field({:?})", self.key)
    }
}

type Getter<R> = Box<dyn Fn(&R) -> Value + Send + Sync>;
type Setter<R> = Box<dyn Fn(&mut R, &Value) -> bool + Send + Sync>;

/// Field definition within a record schema.
///
/// Holds the field's accessors with the value type erased. The setter
/// performs the one checked cast from [`Value`] to the field's real type.
pub struct FieldDef<R: Record> {
    key: R::Key,
    name: &'static str,
    kind: ValueKind,
    nullable: bool,
    required: bool,
    getter: Getter<R>,
    setter: Setter<R>,
    check: fn(&Value) -> bool,
}

impl<R: Record> FieldDef<R> {
    /// Define a field from its selector and typed accessors.
    pub fn new<V: FieldValue>(
        field: Field<R, V>,
        name: &'static str,
        get: fn(&R) -> V,
        set: fn(&mut R, V),
    ) -> Self {
        Self {
            key: field.key(),
            name,
            kind: V::KIND,
            nullable: V::NULLABLE,
            required: false,
            getter: Box::new(move |record: &R| get(record).into_value()),
            setter: Box::new(move |record: &mut R, value: &Value| {
                match V::from_value(value) {
                    Some(v) => {
                        set(record, v);
                        true
                    }
                    None => false,
                }
            }),
            check: V::accepts,
        }
    }

    /// Mark this field as required for construction.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn key(&self) -> R::Key {
        self.key
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The declared kind of non-null values.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Whether `Value::Null` is accepted.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Read this field from a record as a dynamic value.
    pub fn read(&self, record: &R) -> Value {
        (self.getter)(record)
    }

    /// Assign `value` to this field of `record`.
    ///
    /// Returns false, leaving `record` untouched, if `value` does not cast to
    /// the field's type.
    pub fn assign(&self, record: &mut R, value: &Value) -> bool {
        (self.setter)(record, value)
    }

    /// Whether `value` casts to this field's type, without assigning it.
    pub fn accepts(&self, value: &Value) -> bool {
        (self.check)(value)
    }

    /// Human-readable declared type, e.g. `String` or `Int?`.
    pub fn type_label(&self) -> String {
        if self.nullable {
            format!("{}?", self.kind)
        } else {
            self.kind.to_string()
        }
    }
}

impl<R: Record> fmt::Debug for FieldDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDef")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("nullable", &self.nullable)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}
