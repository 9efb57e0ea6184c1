//! The rule tree and its dispatcher.
//!
//! A schema is a tree of [`RuleSegment`]s. Leaves hold predicates; array and
//! object segments hold nested segments and apply them recursively through
//! [`validate`]. Segments are immutable once constructed and are meant to be
//! built once (commonly as a schema literal in one place) and shared by
//! reference across any number of validation calls.

mod array;
mod leaf;
mod object;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::SchemaError;
use crate::predicate::Predicate;
use crate::ValidationResult;

/// Field rules of an object segment, keyed by field name in declaration order.
pub type FieldRules = IndexMap<String, RuleSegment>;

/// A node of the schema tree.
///
/// The four kinds compose freely: an array segment's element rule and an
/// object segment's field rules are themselves segments of any kind. The
/// enum is closed, so a malformed schema shape is not representable; the
/// schema-authoring mistakes that remain (duplicate field names, malformed
/// patterns) are caught at construction time as [`SchemaError`].
///
/// # Example
///
/// ```rust
/// use rulemap::RuleSegment;
/// use rulemap::predicate::{is_number, is_string, min_len};
///
/// let schema = RuleSegment::object([
///     ("id", RuleSegment::rule(is_number())),
///     ("tags", RuleSegment::array(RuleSegment::ruleset(vec![is_string(), min_len(3)]))),
/// ]).unwrap();
/// ```
pub enum RuleSegment {
    /// One leaf predicate.
    Rule(Predicate),
    /// An ordered predicate sequence; the value must satisfy all of them.
    Ruleset(Vec<Predicate>),
    /// An element rule applied to every element of an input array.
    Array(Box<RuleSegment>),
    /// Field rules applied to the correspondingly named fields of an input
    /// object.
    Object(FieldRules),
}

impl RuleSegment {
    /// Creates a segment holding one leaf predicate.
    pub fn rule(predicate: Predicate) -> Self {
        RuleSegment::Rule(predicate)
    }

    /// Creates a segment holding an ordered sequence of leaf predicates.
    ///
    /// Every predicate runs on every validation, so the failure map lists
    /// every violated constraint rather than only the first. An empty
    /// ruleset accepts any value.
    pub fn ruleset(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        RuleSegment::Ruleset(predicates.into_iter().collect())
    }

    /// Creates a segment applying `element` to every element of an array.
    pub fn array(element: RuleSegment) -> Self {
        RuleSegment::Array(Box::new(element))
    }

    /// Creates an object segment from `(field name, segment)` pairs.
    ///
    /// Field order is preserved and becomes the evaluation and reporting
    /// order. Returns [`SchemaError::DuplicateField`] if a field name is
    /// declared twice.
    pub fn object<K, I>(fields: I) -> Result<Self, SchemaError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, RuleSegment)>,
    {
        let mut rules = FieldRules::new();
        for (name, segment) in fields {
            let name = name.into();
            if rules.insert(name.clone(), segment).is_some() {
                return Err(SchemaError::DuplicateField(name));
            }
        }
        Ok(RuleSegment::Object(rules))
    }

    /// Validates a value against this segment.
    ///
    /// Dispatches on the segment kind and recurses into nested segments. On
    /// success the input value is returned unchanged, by reference; on
    /// failure the result carries a [`FailureMap`](crate::FailureMap) whose
    /// shape mirrors the input.
    pub fn validate<'a>(&self, value: &'a Value) -> ValidationResult<'a> {
        match self {
            RuleSegment::Rule(predicate) => leaf::validate_rule(predicate, value),
            RuleSegment::Ruleset(predicates) => leaf::validate_ruleset(predicates, value),
            RuleSegment::Array(element) => array::validate(element, value),
            RuleSegment::Object(fields) => object::validate(fields, value),
        }
    }
}

/// A plain field mapping is shorthand for an object segment. The conversion
/// happens at construction time, so the dispatcher only ever sees the closed
/// variant set.
impl From<FieldRules> for RuleSegment {
    fn from(fields: FieldRules) -> Self {
        RuleSegment::Object(fields)
    }
}

/// Validates a value against a rule segment.
///
/// This is the crate entry point; it delegates to
/// [`RuleSegment::validate`]. Success returns the input value by reference,
/// untouched; failure carries a [`FailureMap`](crate::FailureMap) mirroring
/// the shape of the input.
///
/// # Example
///
/// ```rust
/// use rulemap::{validate, RuleSegment};
/// use rulemap::predicate::is_string;
/// use serde_json::json;
///
/// let schema = RuleSegment::rule(is_string());
///
/// let value = json!("lol");
/// assert!(validate(&value, &schema).is_success());
///
/// let failure = validate(&json!(123), &schema).into_result().unwrap_err();
/// assert_eq!(failure.to_value(), json!("is not a string"));
/// ```
pub fn validate<'a>(value: &'a Value, segment: &RuleSegment) -> ValidationResult<'a> {
    segment.validate(value)
}

// Segments hold only Arc'd predicates and owned data, so a schema built once
// can be shared across threads without locking. Asserted here so it remains
// true if the types change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<RuleSegment>();
    assert_sync::<RuleSegment>();
};
