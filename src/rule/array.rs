//! Array rule evaluation.

use serde_json::Value;
use stillwater::Validation;

use crate::error::FailureMap;
use crate::ValidationResult;

use super::RuleSegment;

/// Applies the element rule to every element in index order, unconditionally.
///
/// The failure map keeps one slot per element so failures stay aligned with
/// the input: `None` where the element passed, the element's own failure map
/// where it did not. The map always has the same length as the input array.
pub(crate) fn validate<'a>(element: &RuleSegment, value: &'a Value) -> ValidationResult<'a> {
    let items = match value.as_array() {
        Some(items) => items,
        None => return Validation::Failure(FailureMap::token("is not an array")),
    };

    let mut failed = false;
    let results: Vec<Option<FailureMap>> = items
        .iter()
        .map(|item| match element.validate(item) {
            Validation::Success(_) => None,
            Validation::Failure(map) => {
                failed = true;
                Some(map)
            }
        })
        .collect();

    if failed {
        Validation::Failure(FailureMap::Items(results))
    } else {
        Validation::Success(value)
    }
}
