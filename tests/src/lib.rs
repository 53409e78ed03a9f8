//! Recast integration test support.
//!
//! Fixture records shared by the integration tests under `tests/`, plus a
//! prelude that pulls in everything a test needs.


use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per process.
///
/// Filtering follows `RUST_LOG`; output goes through the test writer so it
/// is only shown for failing tests.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub mod prelude {
    pub use crate::fixtures::{Customer, CustomerField, Settings, SettingsField};
    pub use crate::init_tracing;
    pub use recast_compose::{
        clone_with, construct, Applied, Cloned, ComposeConfig, ComposeError, Composer,
        MismatchPolicy, PartialProperty, Property, PropertyList,
    };
    pub use recast_core::{FieldValue, Timestamp, Value, ValueKind};
    pub use recast_registry::{Field, FieldDef, Record, Schema};
}
