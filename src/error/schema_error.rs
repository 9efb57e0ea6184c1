//! Schema-authoring error types.
//!
//! This module provides [`SchemaError`] for mistakes made while constructing
//! a rule tree. These are programming errors in the schema, not properties of
//! the data being validated.

/// A mistake caught while constructing a rule tree.
///
/// `SchemaError` is raised by the fallible constructors
/// ([`RuleSegment::object`](crate::RuleSegment::object),
/// [`pattern`](crate::predicate::pattern)) before any validation runs. It is
/// a distinct type from [`FailureMap`](crate::FailureMap), so callers cannot
/// accidentally handle a broken schema as if it were invalid data.
///
/// # Example
///
/// ```rust
/// use rulemap::{RuleSegment, SchemaError};
/// use rulemap::predicate::is_string;
///
/// let result = RuleSegment::object([
///     ("name", RuleSegment::rule(is_string())),
///     ("name", RuleSegment::rule(is_string())),
/// ]);
///
/// assert!(matches!(result, Err(SchemaError::DuplicateField(_))));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// An object rule was declared with the same field name twice.
    #[error("duplicate field '{0}' in object rule")]
    DuplicateField(String),

    /// The `pattern` predicate was given a malformed regular expression.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_field_message() {
        let error = SchemaError::DuplicateField("name".to_string());
        assert_eq!(error.to_string(), "duplicate field 'name' in object rule");
    }

    #[test]
    fn test_invalid_pattern_from_regex_error() {
        let error: SchemaError = regex::Regex::new("[").unwrap_err().into();
        assert!(error.to_string().starts_with("invalid pattern:"));
    }
}
