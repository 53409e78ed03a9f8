//! Recast Core Types
//!
//! This crate provides the foundational types used throughout Recast:
//! - Value types (the dynamically typed `Value` enum and its `ValueKind`)
//! - Checked conversions between field types and values (`FieldValue`)
//! - Scalar newtypes with no std counterpart (`Timestamp`)

mod convert;
mod value;

pub use convert::*;
pub use value::*;
