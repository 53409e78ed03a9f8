//! Recast Compose
//!
//! Build and clone immutable records from ordered lists of typed properties.
//!
//! Responsibilities:
//! - Represent "set field F to value V" as a typed `Property` and erase it
//!   into a `PartialProperty` for heterogeneous lists
//! - Construct fresh records from the blank instance, failing when required
//!   fields were never explicitly set
//! - Clone existing records with overrides (functional record update)
//!
//! # Module Structure
//!
//! - `property` - Typed and erased properties, single-property application
//! - `list` - Fluent `PropertyList` builder
//! - `composer` - The `Composer` fold and the `construct` / `clone_with` shortcuts
//! - `config` - Composer configuration and mismatch policy
//! - `validation` - Required-field checks
//! - `error` - Error types for composition failures
//! - `result` - Result types for tracked clones

mod composer;
mod config;
mod error;
mod list;
mod property;
mod result;
mod validation;


pub use composer::{clone_with, construct, Composer};
pub use config::{ComposeConfig, MismatchPolicy};
pub use error::{ComposeError, ComposeResult};
pub use list::PropertyList;
pub use property::{Applied, PartialProperty, Property};
pub use result::Cloned;
