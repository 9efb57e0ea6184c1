//! Error types for validation failures and schema-authoring mistakes.
//!
//! The two kinds are deliberately disjoint: a [`FailureMap`] is an expected,
//! data-dependent outcome describing where and why the input failed, while a
//! [`SchemaError`] means the schema itself is broken and is raised from the
//! fallible constructors before any validation runs.

mod failure_map;
mod schema_error;

pub use failure_map::FailureMap;
pub use schema_error::SchemaError;
