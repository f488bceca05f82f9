//! Validating array elements against positional schemas.

use futures::future::join_all;
use serde_json::Value;

use super::{merge, MISSING};
use crate::error::{AsynchronousValidationError, ParseError, SchemaValidationError};
use crate::path::PathSegment;
use crate::schema::StandardSchema;
use crate::validation::{into_output, safe_parse, safe_parse_sync};
use crate::ValidationResult;

/// Validates each element of `data` against the schema at the same index.
///
/// All entries are validated concurrently. An element missing from `data`
/// (or a `data` that is not an array) is validated as `null`. Elements beyond
/// the last schema are ignored.
pub async fn safe_parse_tuple<S>(schemas: &[S], data: &Value) -> ValidationResult<Vec<S::Output>>
where
    S: StandardSchema,
{
    let results = join_all(
        schemas
            .iter()
            .enumerate()
            .map(|(index, schema)| safe_parse(schema, data.get(index).unwrap_or(&MISSING))),
    )
    .await;

    merge(
        results
            .into_iter()
            .enumerate()
            .map(|(index, result)| (PathSegment::index(index), result))
            .collect(),
    )
}

/// Validates each element of `data` synchronously.
///
/// # Errors
///
/// Returns `AsynchronousValidationError` as soon as any entry's schema defers;
/// no partial result is produced.
pub fn safe_parse_tuple_sync<S>(
    schemas: &[S],
    data: &Value,
) -> Result<ValidationResult<Vec<S::Output>>, AsynchronousValidationError>
where
    S: StandardSchema,
{
    let mut entries = Vec::with_capacity(schemas.len());
    for (index, schema) in schemas.iter().enumerate() {
        let result = safe_parse_sync(schema, data.get(index).unwrap_or(&MISSING))?;
        entries.push((PathSegment::index(index), result));
    }
    Ok(merge(entries))
}

/// Validates each element of `data` and returns the outputs in order.
///
/// # Errors
///
/// Returns `SchemaValidationError` carrying every entry's issues.
pub async fn parse_tuple<S>(schemas: &[S], data: &Value) -> Result<Vec<S::Output>, SchemaValidationError>
where
    S: StandardSchema,
{
    into_output(safe_parse_tuple(schemas, data).await)
}

/// Validates each element of `data` synchronously and returns the outputs in order.
///
/// # Errors
///
/// Returns `ParseError::Asynchronous` if any entry's schema defers, or
/// `ParseError::Invalid` carrying every entry's issues.
pub fn parse_tuple_sync<S>(schemas: &[S], data: &Value) -> Result<Vec<S::Output>, ParseError>
where
    S: StandardSchema,
{
    let result = safe_parse_tuple_sync(schemas, data)?;
    Ok(into_output(result)?)
}
