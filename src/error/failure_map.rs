//! The shape-mirroring failure structure.
//!
//! This module provides [`FailureMap`], the recursive description of where
//! and why validation failed. Its shape follows the shape of the input, so a
//! caller can walk it directly (e.g. into per-field UI messages) instead of
//! re-deriving which part of the schema rejected the value.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde_json::Value;
use stillwater::prelude::*;

/// Where and why validation failed, in the shape of the input.
///
/// Failure maps compose recursively: an object rule whose field `x` is an
/// array rule that failed reports `{"x": [null, "token"]}`, never a flattened
/// string. The map is the authoritative error artifact; the `Display`
/// rendering is derived from it, not the other way around.
///
/// # Example
///
/// ```rust
/// use rulemap::{validate, RuleSegment};
/// use rulemap::predicate::is_string;
/// use serde_json::json;
///
/// let schema = RuleSegment::array(RuleSegment::rule(is_string()));
/// let value = json!(["hai", 123]);
///
/// let failure = validate(&value, &schema).into_result().unwrap_err();
/// assert_eq!(failure.to_value(), json!([null, "is not a string"]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FailureMap {
    /// A single predicate failure: the predicate's token, not wrapped further.
    Token(String),
    /// A ruleset failure: every failing token, in predicate order.
    Tokens(NonEmptyVec<String>),
    /// An array failure: one slot per input element, in index order.
    /// `None` marks an element that passed.
    Items(Vec<Option<FailureMap>>),
    /// An object failure: the failing fields only, in declaration order.
    Fields(IndexMap<String, FailureMap>),
}

impl FailureMap {
    /// Creates a leaf failure from a single token.
    pub fn token(token: impl Into<String>) -> Self {
        FailureMap::Token(token.into())
    }

    /// Creates a ruleset failure from the failing tokens, preserving order.
    ///
    /// # Panics
    ///
    /// Panics if `tokens` is empty. A ruleset that produced no failing
    /// tokens succeeded and has no failure map.
    pub fn tokens(tokens: Vec<String>) -> Self {
        FailureMap::Tokens(
            NonEmptyVec::from_vec(tokens).expect("a ruleset failure carries at least one token"),
        )
    }

    /// Returns the token if this is a leaf failure.
    pub fn as_token(&self) -> Option<&str> {
        match self {
            FailureMap::Token(token) => Some(token),
            _ => None,
        }
    }

    /// Renders the map as a `serde_json::Value` with the same shape.
    ///
    /// The rendering is lossless: tokens become strings, ruleset failures
    /// become arrays of strings, array failures become arrays with `null`
    /// at the positions that passed, and object failures become objects.
    pub fn to_value(&self) -> Value {
        match self {
            FailureMap::Token(token) => Value::String(token.clone()),
            FailureMap::Tokens(tokens) => {
                Value::Array(tokens.iter().map(|t| Value::String(t.clone())).collect())
            }
            FailureMap::Items(items) => Value::Array(
                items
                    .iter()
                    .map(|slot| match slot {
                        Some(map) => map.to_value(),
                        None => Value::Null,
                    })
                    .collect(),
            ),
            FailureMap::Fields(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(name, map)| (name.clone(), map.to_value()))
                    .collect(),
            ),
        }
    }
}

impl Display for FailureMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Leaf failures read best bare; composite ones as their JSON shape.
        match self {
            FailureMap::Token(token) => write!(f, "{}", token),
            other => write!(f, "{}", other.to_value()),
        }
    }
}

impl std::error::Error for FailureMap {}

// FailureMap is Send + Sync since all fields are owned types. This is
// automatically derived, but we add these assertions to ensure it remains
// true if the types change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<FailureMap>();
    assert_sync::<FailureMap>();
};
