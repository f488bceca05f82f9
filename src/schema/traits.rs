//! Capability traits a compliant schema implements.
//!
//! Schemas come from unrelated validation libraries, so the contract is a set
//! of traits rather than a base type. [`Standard`] is the namespaced property
//! bundle every compliant value exposes; [`StandardSchema`] adds the validate
//! capability; [`Validator`] is the same capability with the output type
//! erased.

use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use serde_json::Value;
use stillwater::Validation;

use crate::interop::JsonSchemaConverter;
use crate::ValidationResult;

/// The version and vendor every compliant schema declares.
///
/// # Example
///
/// ```rust
/// use standard_schema::StandardProps;
///
/// let props = StandardProps::new("acme");
/// assert_eq!(props.version, 1);
///
/// let props = StandardProps::new("acme").with_version(2);
/// assert_eq!(props.version, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StandardProps {
    /// The version of the interface the schema implements.
    pub version: u32,
    /// The name of the schema library.
    pub vendor: String,
}

impl StandardProps {
    /// Creates a version 1 bundle for the given vendor.
    pub fn new(vendor: impl Into<String>) -> Self {
        Self {
            version: 1,
            vendor: vendor.into(),
        }
    }

    /// Sets the interface version and returns self for chaining.
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }
}

/// The namespaced property bundle of a compliant value.
///
/// Beyond version and vendor, a value advertises its capabilities through
/// capability methods. Every implementor states whether it validates: a
/// [`StandardSchema`] returns `Some(self)` from
/// [`validator`](Standard::validator), whatever its output type, and a bare
/// bundle returns `None`. The JSON Schema method defaults to `None`.
pub trait Standard: Send + Sync {
    /// Returns the version and vendor of this value.
    fn standard(&self) -> &StandardProps;

    /// Returns the validate capability, if this value exposes one.
    fn validator(&self) -> Option<&dyn Validator>;

    /// Returns the JSON Schema converter, if this value exposes one.
    fn json_schema(&self) -> Option<&dyn JsonSchemaConverter> {
        None
    }
}

/// A schema that validates `serde_json::Value` input.
///
/// `validate` may answer immediately or defer its result to a future. Callers
/// normally go through [`safe_parse`](crate::safe_parse) or
/// [`safe_parse_sync`](crate::safe_parse_sync) rather than matching on
/// [`MaybeAsync`] themselves.
///
/// # Example
///
/// ```rust
/// use serde_json::{json, Value};
/// use standard_schema::{
///     Issue, Issues, MaybeAsync, Standard, StandardProps, StandardSchema, Validator,
/// };
/// use stillwater::Validation;
///
/// struct Text(StandardProps);
///
/// impl Standard for Text {
///     fn standard(&self) -> &StandardProps {
///         &self.0
///     }
///
///     fn validator(&self) -> Option<&dyn Validator> {
///         Some(self)
///     }
/// }
///
/// impl StandardSchema for Text {
///     type Output = String;
///
///     fn validate<'a>(&'a self, value: &'a Value) -> MaybeAsync<'a, String> {
///         MaybeAsync::Ready(match value {
///             Value::String(s) => Validation::Success(s.clone()),
///             _ => Validation::Failure(Issues::single(Issue::new("Expected string"))),
///         })
///     }
/// }
///
/// let schema = Text(StandardProps::new("example"));
/// assert!(!schema.validate(&json!("hi")).is_deferred());
/// ```
pub trait StandardSchema: Standard {
    /// The value produced by successful validation.
    type Output;

    /// Validates a value, immediately or via a deferred result.
    fn validate<'a>(&'a self, value: &'a Value) -> MaybeAsync<'a, Self::Output>;
}

/// The result of a validate call: ready now, or deferred to a future.
pub enum MaybeAsync<'a, T> {
    /// The result is available immediately.
    Ready(ValidationResult<T>),
    /// The result arrives when the future completes.
    Deferred(BoxFuture<'a, ValidationResult<T>>),
}

impl<'a, T> MaybeAsync<'a, T> {
    /// Wraps an immediate result.
    pub fn ready(result: ValidationResult<T>) -> Self {
        MaybeAsync::Ready(result)
    }

    /// Boxes a future producing the result.
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = ValidationResult<T>> + Send + 'a,
    {
        MaybeAsync::Deferred(future.boxed())
    }

    /// Returns true if the result has been deferred.
    pub fn is_deferred(&self) -> bool {
        matches!(self, MaybeAsync::Deferred(_))
    }

    /// Waits for the result, passing an immediate one straight through.
    pub async fn resolve(self) -> ValidationResult<T> {
        match self {
            MaybeAsync::Ready(result) => result,
            MaybeAsync::Deferred(future) => future.await,
        }
    }

    /// Maps the success value without resolving a deferred result.
    pub fn map<U, F>(self, f: F) -> MaybeAsync<'a, U>
    where
        F: FnOnce(T) -> U + Send + 'a,
        T: 'a,
    {
        match self {
            MaybeAsync::Ready(result) => MaybeAsync::Ready(map_success(result, f)),
            MaybeAsync::Deferred(future) => {
                MaybeAsync::Deferred(future.map(move |result| map_success(result, f)).boxed())
            }
        }
    }
}

impl<T> From<ValidationResult<T>> for MaybeAsync<'_, T> {
    fn from(result: ValidationResult<T>) -> Self {
        MaybeAsync::Ready(result)
    }
}

fn map_success<T, U>(result: ValidationResult<T>, f: impl FnOnce(T) -> U) -> ValidationResult<U> {
    match result {
        Validation::Success(value) => Validation::Success(f(value)),
        Validation::Failure(issues) => Validation::Failure(issues),
    }
}

/// The validate capability with its output type erased.
///
/// Every [`StandardSchema`] with a `Send + 'static` output implements
/// `Validator` automatically. The output can be recovered with
/// `Box::<dyn Any>::downcast`.
pub trait Validator: Send + Sync {
    /// Validates a value and returns the output as a boxed `Any`.
    fn validate_any<'a>(&'a self, value: &'a Value) -> MaybeAsync<'a, Box<dyn Any + Send>>;
}

impl<S> Validator for S
where
    S: StandardSchema + ?Sized,
    S::Output: Send + 'static,
{
    fn validate_any<'a>(&'a self, value: &'a Value) -> MaybeAsync<'a, Box<dyn Any + Send>> {
        self.validate(value)
            .map(|output| Box::new(output) as Box<dyn Any + Send>)
    }
}

impl<S: Standard + ?Sized> Standard for Box<S> {
    fn standard(&self) -> &StandardProps {
        (**self).standard()
    }

    fn validator(&self) -> Option<&dyn Validator> {
        (**self).validator()
    }

    fn json_schema(&self) -> Option<&dyn JsonSchemaConverter> {
        (**self).json_schema()
    }
}

impl<S: StandardSchema + ?Sized> StandardSchema for Box<S> {
    type Output = S::Output;

    fn validate<'a>(&'a self, value: &'a Value) -> MaybeAsync<'a, Self::Output> {
        (**self).validate(value)
    }
}

impl<S: Standard + ?Sized> Standard for Arc<S> {
    fn standard(&self) -> &StandardProps {
        (**self).standard()
    }

    fn validator(&self) -> Option<&dyn Validator> {
        (**self).validator()
    }

    fn json_schema(&self) -> Option<&dyn JsonSchemaConverter> {
        (**self).json_schema()
    }
}

impl<S: StandardSchema + ?Sized> StandardSchema for Arc<S> {
    type Output = S::Output;

    fn validate<'a>(&'a self, value: &'a Value) -> MaybeAsync<'a, Self::Output> {
        (**self).validate(value)
    }
}

impl<S: Standard + ?Sized> Standard for &S {
    fn standard(&self) -> &StandardProps {
        (**self).standard()
    }

    fn validator(&self) -> Option<&dyn Validator> {
        (**self).validator()
    }

    fn json_schema(&self) -> Option<&dyn JsonSchemaConverter> {
        (**self).json_schema()
    }
}

impl<S: StandardSchema + ?Sized> StandardSchema for &S {
    type Output = S::Output;

    fn validate<'a>(&'a self, value: &'a Value) -> MaybeAsync<'a, Self::Output> {
        (**self).validate(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Issue, Issues};
    use futures::executor::block_on;

    #[test]
    fn test_map_ready() {
        let mapped = MaybeAsync::ready(Validation::Success(2)).map(|x| x * 10);
        assert!(!mapped.is_deferred());
        match block_on(mapped.resolve()) {
            Validation::Success(v) => assert_eq!(v, 20),
            Validation::Failure(_) => panic!("Expected success"),
        }
    }

    #[test]
    fn test_map_deferred_keeps_deferral() {
        let deferred: MaybeAsync<'_, i32> = MaybeAsync::deferred(async { Validation::Success(4) });
        let mapped = deferred.map(|x| x + 1);
        assert!(mapped.is_deferred());
        match block_on(mapped.resolve()) {
            Validation::Success(v) => assert_eq!(v, 5),
            Validation::Failure(_) => panic!("Expected success"),
        }
    }

    #[test]
    fn test_map_leaves_failure_untouched() {
        let failed: MaybeAsync<'_, i32> =
            MaybeAsync::ready(Validation::Failure(Issues::single(Issue::new("bad"))));
        match block_on(failed.map(|x| x + 1).resolve()) {
            Validation::Failure(issues) => assert_eq!(issues.first().message, "bad"),
            Validation::Success(_) => panic!("Expected failure"),
        }
    }

    #[derive(Debug, PartialEq)]
    struct Point {
        x: i64,
        y: i64,
    }

    struct PointSchema(StandardProps);

    impl Standard for PointSchema {
        fn standard(&self) -> &StandardProps {
            &self.0
        }

        fn validator(&self) -> Option<&dyn Validator> {
            Some(self)
        }
    }

    impl StandardSchema for PointSchema {
        type Output = Point;

        fn validate<'a>(&'a self, value: &'a Value) -> MaybeAsync<'a, Point> {
            MaybeAsync::ready(match (value.get("x"), value.get("y")) {
                (Some(x), Some(y)) => Validation::Success(Point {
                    x: x.as_i64().unwrap_or_default(),
                    y: y.as_i64().unwrap_or_default(),
                }),
                _ => Validation::Failure(Issues::single(Issue::new("Expected point"))),
            })
        }
    }

    #[test]
    fn test_struct_output_erases_through_validator() {
        let schema = PointSchema(StandardProps::new("geo"));
        let validator = schema.validator().unwrap();

        let value = serde_json::json!({"x": 1, "y": 2});
        match block_on(validator.validate_any(&value).resolve()) {
            Validation::Success(output) => {
                assert_eq!(output.downcast::<Point>().ok().map(|p| *p), Some(Point { x: 1, y: 2 }));
            }
            Validation::Failure(_) => panic!("Expected success"),
        }
    }
}
