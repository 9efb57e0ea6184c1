//! Object rule evaluation.

use indexmap::IndexMap;
use serde_json::Value;
use stillwater::Validation;

use crate::error::FailureMap;
use crate::ValidationResult;

use super::FieldRules;

/// Applies each field rule to the correspondingly named field, in declaration
/// order, unconditionally.
///
/// A field missing from the input is validated as `Null`; whether that fails
/// is up to the field's own rule, so presence checks stay explicit in the
/// schema. Passing fields are omitted from the failure map entirely, unlike
/// array failures which keep positional placeholders.
pub(crate) fn validate<'a>(fields: &FieldRules, value: &'a Value) -> ValidationResult<'a> {
    let object = match value.as_object() {
        Some(object) => object,
        None => return Validation::Failure(FailureMap::token("is not an object")),
    };

    let mut failures = IndexMap::new();
    for (name, segment) in fields {
        let field_value = object.get(name).unwrap_or(&Value::Null);
        if let Validation::Failure(map) = segment.validate(field_value) {
            failures.insert(name.clone(), map);
        }
    }

    if failures.is_empty() {
        Validation::Success(value)
    } else {
        Validation::Failure(FailureMap::Fields(failures))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{is_number, is_string, required};
    use crate::rule::RuleSegment;
    use serde_json::json;

    fn person() -> RuleSegment {
        RuleSegment::object([
            ("name", RuleSegment::rule(is_string())),
            ("age", RuleSegment::rule(is_number())),
        ])
        .unwrap()
    }

    #[test]
    fn test_accepts_object_with_valid_fields() {
        let value = json!({"name": "ada", "age": 36});
        let result = person().validate(&value);
        assert_eq!(result.into_result().unwrap(), &value);
    }

    #[test]
    fn test_rejects_non_objects() {
        for value in [json!("hai"), json!(123), json!(null), json!([1, 2])] {
            let map = person().validate(&value).into_result().unwrap_err();
            assert_eq!(map, FailureMap::token("is not an object"));
        }
    }

    #[test]
    fn test_failure_map_omits_passing_fields() {
        let value = json!({"name": "ada", "age": "old"});
        let map = person().validate(&value).into_result().unwrap_err();
        assert_eq!(map.to_value(), json!({"age": "is not a number"}));
    }

    #[test]
    fn test_failing_fields_keep_declaration_order() {
        let schema = RuleSegment::object([
            ("zeta", RuleSegment::rule(is_string())),
            ("alpha", RuleSegment::rule(is_string())),
        ])
        .unwrap();

        let map = schema
            .validate(&json!({"zeta": 1, "alpha": 2}))
            .into_result()
            .unwrap_err();

        match map {
            FailureMap::Fields(fields) => {
                let names: Vec<&str> = fields.keys().map(String::as_str).collect();
                assert_eq!(names, ["zeta", "alpha"]);
            }
            other => panic!("expected a fields map, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_field_is_validated_as_null() {
        let map = person()
            .validate(&json!({"age": 36}))
            .into_result()
            .unwrap_err();
        assert_eq!(map.to_value(), json!({"name": "is not a string"}));
    }

    #[test]
    fn test_required_makes_presence_explicit() {
        let schema = RuleSegment::object([("name", RuleSegment::rule(required()))]).unwrap();

        assert!(schema.validate(&json!({"name": "ada"})).is_success());

        let map = schema.validate(&json!({})).into_result().unwrap_err();
        assert_eq!(map.to_value(), json!({"name": "is required"}));
    }

    #[test]
    fn test_undeclared_fields_are_ignored() {
        let value = json!({"name": "ada", "age": 36, "extra": false});
        assert!(person().validate(&value).is_success());
    }
}
