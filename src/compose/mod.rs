//! Validating a collection of values against a collection of schemas.
//!
//! A dictionary pairs named schemas with the members of an object; a tuple
//! pairs positional schemas with the elements of an array. Every entry is
//! validated, never short-circuiting on the first failure, and each entry's
//! issues are prefixed with its key or index before being merged in entry
//! order.
//!
//! The async helpers start every entry before awaiting any of them. The sync
//! helpers fail fast with
//! [`AsynchronousValidationError`](crate::AsynchronousValidationError) as
//! soon as one entry's schema defers.

mod dictionary;
mod tuple;

pub use dictionary::{
    parse_dictionary, parse_dictionary_sync, safe_parse_dictionary, safe_parse_dictionary_sync,
};
pub use tuple::{parse_tuple, parse_tuple_sync, safe_parse_tuple, safe_parse_tuple_sync};

use serde_json::Value;
use stillwater::prelude::*;
use stillwater::Validation;

use crate::error::Issues;
use crate::path::PathSegment;
use crate::ValidationResult;

/// Stands in for entries missing from the input.
static MISSING: Value = Value::Null;

/// Merges per-entry results in entry order.
///
/// Each failed entry's issues are prefixed with the entry's segment. The
/// merged result fails if any entry failed; otherwise it collects every
/// entry's output.
fn merge<T, C>(entries: Vec<(PathSegment, ValidationResult<T>)>) -> ValidationResult<C>
where
    C: FromIterator<T>,
{
    let total = entries.len();
    let mut issues: Option<Issues> = None;
    let mut values = Vec::with_capacity(total);

    for (segment, result) in entries {
        match result {
            Validation::Success(value) => {
                tracing::trace!(entry = %segment.key(), "entry passed");
                values.push(value);
            }
            Validation::Failure(entry_issues) => {
                tracing::trace!(entry = %segment.key(), issues = entry_issues.len(), "entry failed");
                let entry_issues = entry_issues.prefixed(segment);
                issues = Some(match issues {
                    Some(merged) => merged.combine(entry_issues),
                    None => entry_issues,
                });
            }
        }
    }

    match issues {
        Some(issues) => {
            tracing::debug!(entries = total, issues = issues.len(), "composed validation failed");
            Validation::Failure(issues)
        }
        None => {
            tracing::debug!(entries = total, "composed validation passed");
            Validation::Success(values.into_iter().collect())
        }
    }
}
