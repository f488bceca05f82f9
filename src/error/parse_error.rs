//! Errors raised by the invocation helpers.

use crate::error::Issues;
use crate::interop::JsonSchemaTarget;

/// Raised when strict synchronous invocation meets a schema that defers.
///
/// The deferred result is dropped without being awaited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Schema validation must be synchronous")]
pub struct AsynchronousValidationError;

/// Raised by the parse-style helpers when validation fails.
///
/// The message is the multi-line summary of every issue, and the issues
/// themselves are kept verbatim for programmatic inspection.
///
/// # Example
///
/// ```rust
/// use standard_schema::{Issue, IssuePath, Issues, SchemaValidationError};
///
/// let error = SchemaValidationError::new(Issues::single(
///     Issue::at(IssuePath::root().push_field("key1"), "m"),
/// ));
///
/// assert_eq!(error.to_string(), "× m\n  → at key1");
/// assert_eq!(error.issues().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{issues}")]
pub struct SchemaValidationError {
    issues: Issues,
}

impl SchemaValidationError {
    /// Creates an error carrying the given issues.
    pub fn new(issues: Issues) -> Self {
        Self { issues }
    }

    /// Returns the issues that caused the failure.
    pub fn issues(&self) -> &Issues {
        &self.issues
    }

    /// Consumes the error and returns its issues.
    pub fn into_issues(self) -> Issues {
        self.issues
    }
}

impl From<Issues> for SchemaValidationError {
    fn from(issues: Issues) -> Self {
        Self::new(issues)
    }
}

/// Errors returned by the strict synchronous parse helpers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The schema deferred its result.
    #[error(transparent)]
    Asynchronous(#[from] AsynchronousValidationError),

    /// The input was rejected.
    #[error(transparent)]
    Invalid(#[from] SchemaValidationError),
}

impl ParseError {
    /// Returns the reported issues when the input was rejected.
    pub fn issues(&self) -> Option<&Issues> {
        match self {
            ParseError::Invalid(error) => Some(error.issues()),
            ParseError::Asynchronous(_) => None,
        }
    }
}

/// Errors from a JSON Schema conversion capability.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The converter does not support the requested target.
    #[error("{vendor} cannot generate JSON Schema for target '{target}'")]
    UnsupportedTarget {
        /// Vendor of the schema library.
        vendor: String,
        /// The requested target.
        target: JsonSchemaTarget,
    },

    /// The value exposes no JSON Schema converter.
    #[error("{vendor} schema does not support JSON Schema conversion")]
    NotSupported {
        /// Vendor of the schema library.
        vendor: String,
    },

    /// Conversion failed for a vendor-specific reason.
    #[error("JSON Schema conversion failed: {0}")]
    Failed(String),
}
