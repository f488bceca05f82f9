//! Issue and error types.
//!
//! [`Issue`] and [`Issues`] are the structured diagnostics carried by a failed
//! [`ValidationResult`](crate::ValidationResult). The remaining types are the
//! errors raised at the crate's two explicit failure boundaries: strict
//! synchronous invocation and the parse-style helpers.

mod issue;
mod parse_error;

pub use issue::{Issue, Issues};
pub use parse_error::{AsynchronousValidationError, ConversionError, ParseError, SchemaValidationError};
