//! Composer - folds properties onto a blank or existing record.

use std::collections::HashSet;
use std::marker::PhantomData;

use recast_registry::Record;
use tracing::{debug, trace};

use crate::config::{ComposeConfig, MismatchPolicy};
use crate::error::{ComposeError, ComposeResult};
use crate::property::PartialProperty;
use crate::result::Cloned;
use crate::validation;

/// Builds and clones records of type `R` from ordered property lists.
///
/// Properties are applied strictly left to right, so a later property for
/// the same field overrides an earlier one.
pub struct Composer<R: Record> {
    config: ComposeConfig,
    _marker: PhantomData<fn() -> R>,
}

/// Internal fold state.
struct Folded<R: Record> {
    record: R,
    set: HashSet<R::Key>,
    touched: Vec<R::Key>,
    skipped: Vec<R::Key>,
    /// First mismatch under `MismatchPolicy::Reject`; folding stops there.
    rejected: Option<ComposeError>,
}

impl<R: Record> Folded<R> {
    fn into_result(mut self) -> ComposeResult<Self> {
        match self.rejected.take() {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }
}

impl<R: Record> Composer<R> {
    /// Create a composer with the default (lenient) configuration.
    pub fn new() -> Self {
        Self::with_config(ComposeConfig::default())
    }

    pub fn with_config(config: ComposeConfig) -> Self {
        Self {
            config,
            _marker: PhantomData,
        }
    }

    pub fn config(&self) -> &ComposeConfig {
        &self.config
    }

    /// Build a fresh record from the blank instance.
    ///
    /// Every required field must be explicitly set by an accepted property;
    /// values already present in the blank instance do not count. Fails with
    /// `MissingRequiredFields` naming every missing field, or with
    /// `TypeMismatch` under `MismatchPolicy::Reject`.
    pub fn construct<I>(&self, properties: I) -> ComposeResult<R>
    where
        I: IntoIterator<Item = PartialProperty<R>>,
    {
        let schema = R::schema();
        let folded = self
            .fold(R::blank(), properties, self.config.on_mismatch)
            .into_result()?;

        let missing = validation::missing_required(schema, &folded.set);
        if !missing.is_empty() {
            debug!(
                target: "recast::compose",
                record = schema.name(),
                missing = ?missing,
                "construct failed: required fields not set"
            );
            return Err(ComposeError::missing_required(schema.name(), missing));
        }

        Ok(folded.record)
    }

    /// Copy `base` and apply `mutations` to the copy.
    ///
    /// Never fails: mismatched mutations are skipped regardless of the
    /// configured policy, and no required-field check is made.
    pub fn clone_with<I>(&self, base: &R, mutations: I) -> R
    where
        I: IntoIterator<Item = PartialProperty<R>>,
    {
        self.clone_tracked(base, mutations).record
    }

    /// Like [`Composer::clone_with`], but honours the configured mismatch policy.
    pub fn try_clone_with<I>(&self, base: &R, mutations: I) -> ComposeResult<R>
    where
        I: IntoIterator<Item = PartialProperty<R>>,
    {
        self.fold(base.clone(), mutations, self.config.on_mismatch)
            .into_result()
            .map(|folded| folded.record)
    }

    /// Clone with overrides, reporting which fields were touched or skipped.
    pub fn clone_tracked<I>(&self, base: &R, mutations: I) -> Cloned<R>
    where
        I: IntoIterator<Item = PartialProperty<R>>,
    {
        let folded = self.fold(base.clone(), mutations, MismatchPolicy::Skip);
        Cloned {
            record: folded.record,
            touched: folded.touched,
            skipped: folded.skipped,
        }
    }

    /// Names of the required fields `properties` would leave unset.
    ///
    /// Mismatched properties do not count as setting their field.
    pub fn missing_required(&self, properties: &[PartialProperty<R>]) -> Vec<&'static str> {
        let schema = R::schema();
        let set: HashSet<R::Key> = properties
            .iter()
            .filter(|p| schema.get(p.key()).map_or(false, |def| def.accepts(p.value())))
            .map(|p| p.key())
            .collect();
        validation::missing_required(schema, &set)
    }

    fn fold<I>(&self, mut record: R, properties: I, policy: MismatchPolicy) -> Folded<R>
    where
        I: IntoIterator<Item = PartialProperty<R>>,
    {
        let schema = R::schema();
        let mut set = HashSet::new();
        let mut touched = Vec::new();
        let mut skipped = Vec::new();
        let mut rejected = None;

        for property in properties {
            let key = property.key();
            let def = schema.get(key);

            if property.assign_to(&mut record) {
                if self.config.log_applications {
                    trace!(
                        target: "recast::compose",
                        record = schema.name(),
                        field = def.map(|d| d.name()).unwrap_or("?"),
                        value = %property.value(),
                        "property applied"
                    );
                }
                if set.insert(key) {
                    touched.push(key);
                }
                continue;
            }

            let field = def
                .map(|d| d.name().to_string())
                .unwrap_or_else(|| format!("{:?}", key));
            let expected = def
                .map(|d| d.type_label())
                .unwrap_or_else(|| "unknown field".to_string());
            let actual = property.value().type_name();

            match policy {
                MismatchPolicy::Reject => {
                    rejected = Some(ComposeError::type_mismatch(
                        schema.name(),
                        field,
                        expected,
                        actual,
                    ));
                    break;
                }
                MismatchPolicy::Skip => {
                    debug!(
                        target: "recast::compose",
                        record = schema.name(),
                        field = %field,
                        expected = %expected,
                        actual = actual,
                        "property skipped: value does not fit field"
                    );
                    skipped.push(key);
                }
            }
        }

        Folded {
            record,
            set,
            touched,
            skipped,
            rejected,
        }
    }
}

impl<R: Record> Default for Composer<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a fresh `R` with the default configuration.
pub fn construct<R: Record>(
    properties: impl IntoIterator<Item = PartialProperty<R>>,
) -> ComposeResult<R> {
    Composer::new().construct(properties)
}

/// Copy `base` with `mutations` applied, using the default configuration.
pub fn clone_with<R: Record>(
    base: &R,
    mutations: impl IntoIterator<Item = PartialProperty<R>>,
) -> R {
    Composer::new().clone_with(base, mutations)
}
