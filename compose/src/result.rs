//! Composition result types.

use recast_registry::Record;

/// Result of a tracked clone.
#[derive(Debug, Clone)]
pub struct Cloned<R: Record> {
    /// The cloned record with mutations applied.
    pub record: R,
    /// Fields that accepted at least one mutation, in first-touch order.
    pub touched: Vec<R::Key>,
    /// Fields of mutations that were skipped, one entry per skipped mutation.
    pub skipped: Vec<R::Key>,
}

impl<R: Record> Cloned<R> {
    /// Returns true if no mutation was applied.
    pub fn is_unchanged(&self) -> bool {
        self.touched.is_empty()
    }

    /// Returns true if the field accepted a mutation.
    pub fn was_touched(&self, key: R::Key) -> bool {
        self.touched.contains(&key)
    }

    /// Discard the tracking information.
    pub fn into_record(self) -> R {
        self.record
    }
}
