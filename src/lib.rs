//! # Rulemap
//!
//! A recursive rule-tree validation library. A schema is a tree of
//! [`RuleSegment`]s describing expected shape and per-field predicates;
//! validating a value against it either returns the value untouched or
//! produces a [`FailureMap`] that mirrors the shape of the input, so every
//! failure can be located without re-deriving which part of the schema
//! rejected it.
//!
//! ## Overview
//!
//! Validation never stops at the first problem. A ruleset runs every
//! predicate, an array rule evaluates every element, and an object rule
//! evaluates every declared field, so one pass reports everything found:
//! a leaf failure is a single token, an array failure keeps one slot per
//! element (`null` where the element passed), and an object failure lists
//! the failing fields.
//!
//! ## Core Types
//!
//! - [`RuleSegment`]: a node of the schema tree (rule, ruleset, array rule, or object rule)
//! - [`Verdict`]: the outcome of one leaf predicate
//! - [`FailureMap`]: the shape-mirroring failure structure
//! - [`SchemaError`]: a schema-authoring mistake, distinct from any validation failure
//!
//! ## Example
//!
//! ```rust
//! use rulemap::{validate, RuleSegment};
//! use rulemap::predicate::{is_string, min_len};
//! use serde_json::json;
//!
//! let schema = RuleSegment::object([
//!     ("name", RuleSegment::rule(is_string())),
//!     ("tags", RuleSegment::array(RuleSegment::ruleset(vec![is_string(), min_len(3)]))),
//! ]).unwrap();
//!
//! let value = json!({"name": "ada", "tags": ["rust"]});
//! assert!(validate(&value, &schema).is_success());
//!
//! let value = json!({"name": 1, "tags": ["rust", 2]});
//! let failure = validate(&value, &schema).into_result().unwrap_err();
//! assert_eq!(failure.to_value(), json!({
//!     "name": "is not a string",
//!     "tags": [null, ["is not a string", "is shorter than 3 characters"]],
//! }));
//! ```

pub mod error;
pub mod predicate;
pub mod rule;

pub use error::{FailureMap, SchemaError};
pub use predicate::{Predicate, Verdict};
pub use rule::{validate, FieldRules, RuleSegment};

use serde_json::Value;

/// Type alias for validation outcomes: the borrowed input on success, the
/// failure map on failure.
pub type ValidationResult<'a> = stillwater::Validation<&'a Value, FailureMap>;
