//! Required-field validation helpers.

use recast_registry::{Record, Schema};
use std::collections::HashSet;

/// Names of required fields not present in `set`, in declaration order.
pub fn missing_required<R: Record>(
    schema: &Schema<R>,
    set: &HashSet<R::Key>,
) -> Vec<&'static str> {
    schema
        .fields()
        .filter(|def| def.is_required() && !set.contains(&def.key()))
        .map(|def| def.name())
        .collect()
}
