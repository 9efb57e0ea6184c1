//! Leaf predicates and their verdicts.
//!
//! A leaf predicate is the atomic, user-supplied validation function and the
//! sole extension point for custom logic: it receives the candidate value and
//! returns a [`Verdict`]. Predicates must be pure, with no side effects and
//! the same verdict for the same input every time.
//!
//! Custom predicates are closures wrapped with [`from_fn`]; the common type,
//! length, range, and pattern checks ship ready-made in this module.
//!
//! # Example
//!
//! ```rust
//! use rulemap::predicate::{check, from_fn};
//! use rulemap::{validate, RuleSegment};
//! use serde_json::json;
//!
//! let schema = RuleSegment::rule(from_fn(|v| check(v.is_string(), "no string")));
//!
//! assert!(validate(&json!("lol"), &schema).is_success());
//! assert!(validate(&json!(123), &schema).is_failure());
//! ```

mod builtin;

pub use builtin::{
    is_array, is_boolean, is_integer, is_number, is_object, is_string, max, max_len, min, min_len,
    non_empty, one_of, pattern, positive, required,
};

use std::sync::Arc;

use serde_json::Value;

/// The outcome of a single leaf predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The value satisfies the predicate.
    Valid,
    /// The value violates the predicate; the token says how.
    Invalid(String),
}

impl Verdict {
    /// Creates a failing verdict from a token.
    pub fn invalid(token: impl Into<String>) -> Self {
        Verdict::Invalid(token.into())
    }

    /// Returns true if the value satisfied the predicate.
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

/// A leaf predicate over a candidate value.
pub type Predicate = Arc<dyn Fn(&Value) -> Verdict + Send + Sync>;

/// Wraps a closure into a [`Predicate`].
pub fn from_fn<F>(predicate: F) -> Predicate
where
    F: Fn(&Value) -> Verdict + Send + Sync + 'static,
{
    Arc::new(predicate)
}

/// Builds a [`Verdict`] from a condition and the token reported when the
/// condition does not hold.
pub fn check(ok: bool, token: impl Into<String>) -> Verdict {
    if ok {
        Verdict::Valid
    } else {
        Verdict::Invalid(token.into())
    }
}
