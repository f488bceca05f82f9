//! Invoking a schema's validate capability.
//!
//! Two invocation styles share a single call to the capability:
//!
//! - [`safe_parse`] tolerates deferred results and awaits them.
//! - [`safe_parse_sync`] never suspends. If the schema defers, it fails with
//!   [`AsynchronousValidationError`] before the future is ever polled.
//!
//! The `parse` variants turn a failed result into a [`SchemaValidationError`]
//! for callers who prefer errors over matching on
//! [`ValidationResult`](crate::ValidationResult).

use serde_json::Value;
use stillwater::Validation;

use crate::error::{AsynchronousValidationError, ParseError, SchemaValidationError};
use crate::schema::{MaybeAsync, StandardSchema};
use crate::ValidationResult;

/// Validates a value, awaiting the result if the schema defers it.
///
/// Invalid input is reported as `Validation::Failure`, never as an error.
///
/// # Example
///
/// ```rust,ignore
/// let result = safe_parse(&schema, &json!("hello")).await;
/// assert!(result.is_success());
/// ```
pub async fn safe_parse<S>(schema: &S, value: &Value) -> ValidationResult<S::Output>
where
    S: StandardSchema + ?Sized,
{
    match schema.validate(value) {
        MaybeAsync::Ready(result) => result,
        MaybeAsync::Deferred(future) => {
            tracing::debug!(vendor = %schema.standard().vendor, "awaiting deferred validation");
            future.await
        }
    }
}

/// Validates a value without ever suspending.
///
/// # Errors
///
/// Returns `AsynchronousValidationError` if the schema defers its result. The
/// deferred future is dropped without being polled.
pub fn safe_parse_sync<S>(
    schema: &S,
    value: &Value,
) -> Result<ValidationResult<S::Output>, AsynchronousValidationError>
where
    S: StandardSchema + ?Sized,
{
    match schema.validate(value) {
        MaybeAsync::Ready(result) => Ok(result),
        MaybeAsync::Deferred(_) => {
            tracing::warn!(
                vendor = %schema.standard().vendor,
                "schema deferred its result during synchronous validation"
            );
            Err(AsynchronousValidationError)
        }
    }
}

/// Validates a value and returns the output, awaiting deferred results.
///
/// # Errors
///
/// Returns `SchemaValidationError` carrying every issue if the value is invalid.
pub async fn parse<S>(schema: &S, value: &Value) -> Result<S::Output, SchemaValidationError>
where
    S: StandardSchema + ?Sized,
{
    into_output(safe_parse(schema, value).await)
}

/// Validates a value synchronously and returns the output.
///
/// # Errors
///
/// Returns `ParseError::Asynchronous` if the schema defers, or
/// `ParseError::Invalid` carrying every issue if the value is invalid.
pub fn parse_sync<S>(schema: &S, value: &Value) -> Result<S::Output, ParseError>
where
    S: StandardSchema + ?Sized,
{
    let result = safe_parse_sync(schema, value)?;
    Ok(into_output(result)?)
}

/// Returns true if the schema accepts the value.
///
/// # Errors
///
/// Returns `AsynchronousValidationError` if the schema defers its result.
pub fn is_valid<S>(schema: &S, value: &Value) -> Result<bool, AsynchronousValidationError>
where
    S: StandardSchema + ?Sized,
{
    Ok(safe_parse_sync(schema, value)?.is_success())
}

/// Asserts that the schema accepts the value.
///
/// # Errors
///
/// Same as [`parse_sync`]; the validated output is discarded.
pub fn assert_valid<S>(schema: &S, value: &Value) -> Result<(), ParseError>
where
    S: StandardSchema + ?Sized,
{
    parse_sync(schema, value).map(|_| ())
}

/// Converts a failed result into the error raised by the parse helpers.
pub(crate) fn into_output<T>(result: ValidationResult<T>) -> Result<T, SchemaValidationError> {
    match result {
        Validation::Success(value) => Ok(value),
        Validation::Failure(issues) => Err(SchemaValidationError::new(issues)),
    }
}
