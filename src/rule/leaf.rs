//! Rule and ruleset evaluation.

use serde_json::Value;
use stillwater::Validation;

use crate::error::FailureMap;
use crate::predicate::{Predicate, Verdict};
use crate::ValidationResult;

/// Applies one predicate. The failure map is the predicate's token exactly,
/// not wrapped further.
pub(crate) fn validate_rule<'a>(predicate: &Predicate, value: &'a Value) -> ValidationResult<'a> {
    match predicate(value) {
        Verdict::Valid => Validation::Success(value),
        Verdict::Invalid(token) => Validation::Failure(FailureMap::Token(token)),
    }
}

/// Applies every predicate in order, unconditionally. There is no
/// short-circuit: a failure in an early predicate does not stop the later
/// ones, so the failure map lists every violated constraint in predicate
/// order.
pub(crate) fn validate_ruleset<'a>(
    predicates: &[Predicate],
    value: &'a Value,
) -> ValidationResult<'a> {
    let tokens: Vec<String> = predicates
        .iter()
        .filter_map(|predicate| match predicate(value) {
            Verdict::Valid => None,
            Verdict::Invalid(token) => Some(token),
        })
        .collect();

    if tokens.is_empty() {
        Validation::Success(value)
    } else {
        Validation::Failure(FailureMap::tokens(tokens))
    }
}
