//! Checked conversions between typed field values and [`Value`].
//!
//! `FieldValue` is the single boundary where an erased value is cast back
//! into a field's real type. Conversions are exact: an `Int` never becomes a
//! `Float`, and integers outside the target range are rejected.

use crate::{Value, ValueKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A Rust type that can be stored in a record field and carried as a [`Value`].
pub trait FieldValue: Sized + 'static {
    /// The kind of non-null value this type converts to.
    const KIND: ValueKind;

    /// Whether `Value::Null` is a valid value for this type.
    const NULLABLE: bool = false;

    /// Erase into a dynamic value.
    fn into_value(self) -> Value;

    /// Checked cast from a dynamic value. Returns `None` on type mismatch.
    fn from_value(value: &Value) -> Option<Self>;

    /// Returns true if `value` would be accepted by [`FieldValue::from_value`].
    fn accepts(value: &Value) -> bool {
        Self::from_value(value).is_some()
    }
}

/// Timestamp in milliseconds since Unix epoch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Create a timestamp from raw milliseconds.
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Get the raw milliseconds.
    pub fn millis(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ts:{}", self.0)
    }
}

impl FieldValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FieldValue for i64 {
    const KIND: ValueKind = ValueKind::Int;

    fn into_value(self) -> Value {
        Value::Int(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_int()
    }
}

impl FieldValue for i32 {
    const KIND: ValueKind = ValueKind::Int;

    fn into_value(self) -> Value {
        Value::Int(self as i64)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_int().and_then(|i| i32::try_from(i).ok())
    }
}

impl FieldValue for u32 {
    const KIND: ValueKind = ValueKind::Int;

    fn into_value(self) -> Value {
        Value::Int(self as i64)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_int().and_then(|i| u32::try_from(i).ok())
    }
}

impl FieldValue for f64 {
    const KIND: ValueKind = ValueKind::Float;

    fn into_value(self) -> Value {
        Value::Float(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_float()
    }
}

impl FieldValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn into_value(self) -> Value {
        Value::String(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FieldValue for Timestamp {
    const KIND: ValueKind = ValueKind::Timestamp;

    fn into_value(self) -> Value {
        Value::Timestamp(self.0)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_timestamp().map(Timestamp)
    }
}

impl FieldValue for Duration {
    const KIND: ValueKind = ValueKind::Duration;

    fn into_value(self) -> Value {
        Value::Duration(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_duration()
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    const KIND: ValueKind = ValueKind::List;

    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(FieldValue::into_value).collect())
    }

    fn from_value(value: &Value) -> Option<Self> {
        value
            .as_list()?
            .iter()
            .map(T::from_value)
            .collect::<Option<Vec<_>>>()
    }
}

/// `None` erases to `Value::Null`.
///
/// Nested options collapse: `Some(None)` and `None` both erase to `Null` and
/// both come back as `None`, so an `Option<Option<T>>` field cannot tell them
/// apart.
impl<T: FieldValue> FieldValue for Option<T> {
    const KIND: ValueKind = T::KIND;
    const NULLABLE: bool = true;

    fn into_value(self) -> Value {
        match self {
            Some(v) => v.into_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}
