//! Validating object members against named schemas.

use futures::future::join_all;
use indexmap::IndexMap;
use serde_json::Value;

use super::{merge, MISSING};
use crate::error::{AsynchronousValidationError, ParseError, SchemaValidationError};
use crate::path::PathSegment;
use crate::schema::StandardSchema;
use crate::validation::{into_output, safe_parse, safe_parse_sync};
use crate::ValidationResult;

/// Validates each member of `data` against the schema of the same name.
///
/// All entries are validated concurrently. A member missing from `data` (or a
/// `data` that is not an object) is validated as `null`. Issues are prefixed
/// with their entry's key and ordered by the iteration order of `schemas`.
pub async fn safe_parse_dictionary<S>(
    schemas: &IndexMap<String, S>,
    data: &Value,
) -> ValidationResult<IndexMap<String, S::Output>>
where
    S: StandardSchema,
{
    let results = join_all(schemas.iter().map(|(key, schema)| async move {
        let result = safe_parse(schema, data.get(key).unwrap_or(&MISSING)).await;
        (key, result)
    }))
    .await;

    merge(
        results
            .into_iter()
            .map(|(key, result)| (PathSegment::field(key.as_str()), result.map(|v| (key.clone(), v))))
            .collect(),
    )
}

/// Validates each member of `data` synchronously.
///
/// # Errors
///
/// Returns `AsynchronousValidationError` as soon as any entry's schema defers;
/// no partial result is produced.
pub fn safe_parse_dictionary_sync<S>(
    schemas: &IndexMap<String, S>,
    data: &Value,
) -> Result<ValidationResult<IndexMap<String, S::Output>>, AsynchronousValidationError>
where
    S: StandardSchema,
{
    let mut entries = Vec::with_capacity(schemas.len());
    for (key, schema) in schemas {
        let result = safe_parse_sync(schema, data.get(key).unwrap_or(&MISSING))?;
        entries.push((PathSegment::field(key.as_str()), result.map(|v| (key.clone(), v))));
    }
    Ok(merge(entries))
}

/// Validates each member of `data` and returns the outputs by key.
///
/// # Errors
///
/// Returns `SchemaValidationError` carrying every entry's issues.
pub async fn parse_dictionary<S>(
    schemas: &IndexMap<String, S>,
    data: &Value,
) -> Result<IndexMap<String, S::Output>, SchemaValidationError>
where
    S: StandardSchema,
{
    into_output(safe_parse_dictionary(schemas, data).await)
}

/// Validates each member of `data` synchronously and returns the outputs by key.
///
/// # Errors
///
/// Returns `ParseError::Asynchronous` if any entry's schema defers, or
/// `ParseError::Invalid` carrying every entry's issues.
pub fn parse_dictionary_sync<S>(
    schemas: &IndexMap<String, S>,
    data: &Value,
) -> Result<IndexMap<String, S::Output>, ParseError>
where
    S: StandardSchema,
{
    let result = safe_parse_dictionary_sync(schemas, data)?;
    Ok(into_output(result)?)
}
