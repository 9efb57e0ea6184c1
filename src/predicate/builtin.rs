//! Ready-made leaf predicates.
//!
//! These cover the usual type, presence, length, range, and pattern checks so
//! schemas do not have to hand-roll them. Every function returns a
//! [`Predicate`] with a short fixed failure token; predicates that constrain
//! strings or numbers also fail values of the wrong type, so pairing them
//! with a type check in a ruleset reports both violations at once.

use regex::Regex;
use serde_json::Value;

use crate::error::SchemaError;

use super::{check, from_fn, Predicate, Verdict};

/// Accepts only strings.
pub fn is_string() -> Predicate {
    from_fn(|v| check(v.is_string(), "is not a string"))
}

/// Accepts any JSON number, integer or float.
pub fn is_number() -> Predicate {
    from_fn(|v| check(v.is_number(), "is not a number"))
}

/// Accepts only integers (floats are rejected).
pub fn is_integer() -> Predicate {
    from_fn(|v| check(v.as_i64().is_some() || v.as_u64().is_some(), "is not an integer"))
}

/// Accepts only booleans.
pub fn is_boolean() -> Predicate {
    from_fn(|v| check(v.is_boolean(), "is not a boolean"))
}

/// Accepts only arrays.
pub fn is_array() -> Predicate {
    from_fn(|v| check(v.is_array(), "is not an array"))
}

/// Accepts only objects.
pub fn is_object() -> Predicate {
    from_fn(|v| check(v.is_object(), "is not an object"))
}

/// Rejects null. An absent object field is validated as null, so this is the
/// explicit presence check for required fields.
pub fn required() -> Predicate {
    from_fn(|v| check(!v.is_null(), "is required"))
}

/// Accepts strings with at least `min` characters (Unicode scalar values).
pub fn min_len(min: usize) -> Predicate {
    from_fn(move |v| match v.as_str() {
        Some(s) if s.chars().count() >= min => Verdict::Valid,
        _ => Verdict::invalid(format!("is shorter than {} characters", min)),
    })
}

/// Accepts strings with at most `max` characters (Unicode scalar values).
pub fn max_len(max: usize) -> Predicate {
    from_fn(move |v| match v.as_str() {
        Some(s) if s.chars().count() <= max => Verdict::Valid,
        _ => Verdict::invalid(format!("is longer than {} characters", max)),
    })
}

/// Accepts non-empty strings.
pub fn non_empty() -> Predicate {
    from_fn(|v| check(v.as_str().is_some_and(|s| !s.is_empty()), "is empty"))
}

/// Accepts strings matching the given regex pattern.
///
/// Returns [`SchemaError::InvalidPattern`] if the pattern itself is
/// malformed; a broken pattern is a schema bug, not a data failure.
///
/// # Example
///
/// ```rust
/// use rulemap::predicate::pattern;
/// use rulemap::{validate, RuleSegment};
/// use serde_json::json;
///
/// let schema = RuleSegment::rule(pattern(r"^\d+$").unwrap());
/// assert!(validate(&json!("12345"), &schema).is_success());
/// assert!(validate(&json!("abc"), &schema).is_failure());
/// ```
pub fn pattern(pattern: &str) -> Result<Predicate, SchemaError> {
    let regex = Regex::new(pattern)?;
    let token = format!("does not match pattern '{}'", pattern);
    Ok(from_fn(move |v| match v.as_str() {
        Some(s) if regex.is_match(s) => Verdict::Valid,
        _ => Verdict::invalid(token.clone()),
    }))
}

/// Accepts numbers greater than or equal to `min`.
pub fn min(min: f64) -> Predicate {
    from_fn(move |v| match v.as_f64() {
        Some(n) if n >= min => Verdict::Valid,
        _ => Verdict::invalid(format!("is less than {}", min)),
    })
}

/// Accepts numbers less than or equal to `max`.
pub fn max(max: f64) -> Predicate {
    from_fn(move |v| match v.as_f64() {
        Some(n) if n <= max => Verdict::Valid,
        _ => Verdict::invalid(format!("is greater than {}", max)),
    })
}

/// Accepts numbers strictly greater than zero.
pub fn positive() -> Predicate {
    from_fn(|v| check(v.as_f64().is_some_and(|n| n > 0.0), "is not positive"))
}

/// Accepts values equal to one of the allowed values.
pub fn one_of(allowed: Vec<Value>) -> Predicate {
    from_fn(move |v| check(allowed.contains(v), "is not an allowed value"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_checks() {
        assert!(is_string()(&json!("hai")).is_valid());
        assert!(!is_string()(&json!(1)).is_valid());

        assert!(is_number()(&json!(1.5)).is_valid());
        assert!(!is_number()(&json!("1")).is_valid());

        assert!(is_integer()(&json!(42)).is_valid());
        assert!(!is_integer()(&json!(1.5)).is_valid());

        assert!(is_boolean()(&json!(true)).is_valid());
        assert!(is_array()(&json!([])).is_valid());
        assert!(is_object()(&json!({})).is_valid());
    }

    #[test]
    fn test_required_rejects_null_only() {
        assert!(!required()(&json!(null)).is_valid());
        assert!(required()(&json!(0)).is_valid());
        assert!(required()(&json!("")).is_valid());
        assert!(required()(&json!(false)).is_valid());
    }

    #[test]
    fn test_min_len_counts_chars() {
        let predicate = min_len(5);
        assert!(predicate(&json!("héllo")).is_valid());
        assert_eq!(
            predicate(&json!("hé")),
            Verdict::invalid("is shorter than 5 characters")
        );
    }

    #[test]
    fn test_length_predicates_reject_non_strings() {
        assert!(!min_len(1)(&json!(123)).is_valid());
        assert!(!max_len(10)(&json!(null)).is_valid());
        assert!(!non_empty()(&json!([])).is_valid());
    }

    #[test]
    fn test_pattern_rejects_malformed_regex() {
        assert!(matches!(pattern("["), Err(SchemaError::InvalidPattern(_))));
    }

    #[test]
    fn test_numeric_bounds() {
        assert!(min(0.0)(&json!(0)).is_valid());
        assert!(!min(0.0)(&json!(-1)).is_valid());
        assert!(max(10.0)(&json!(10)).is_valid());
        assert!(!max(10.0)(&json!(11)).is_valid());
        assert!(positive()(&json!(0.5)).is_valid());
        assert!(!positive()(&json!(0)).is_valid());
        assert!(!positive()(&json!("5")).is_valid());
    }

    #[test]
    fn test_one_of() {
        let predicate = one_of(vec![json!("a"), json!(1)]);
        assert!(predicate(&json!("a")).is_valid());
        assert!(predicate(&json!(1)).is_valid());
        assert_eq!(predicate(&json!("b")), Verdict::invalid("is not an allowed value"));
    }
}
