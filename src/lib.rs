//! # Standard Schema
//!
//! Validate data against any schema that implements a small, library-neutral
//! interface, and work with the issues it reports.
//!
//! ## Overview
//!
//! A framework that accepts schemas from arbitrary validation libraries only
//! needs those libraries to implement [`Standard`] and [`StandardSchema`].
//! This crate then provides, without depending on any particular library:
//!
//! - Invocation that handles immediate and deferred results alike
//!   ([`safe_parse`], [`parse`]) or insists on immediate ones
//!   ([`safe_parse_sync`], [`parse_sync`]).
//! - Composition of named or positional schema collections
//!   ([`safe_parse_dictionary`], [`safe_parse_tuple`]) that reports every
//!   entry's issues, prefixed with the entry's key.
//! - Issue aggregation into flat ([`flatten_issues`]) or nested
//!   ([`format_issues`]) structures, and a text report ([`summarize`]).
//! - Detection predicates ([`is_schema`], [`is_json_schema`]) and the JSON
//!   Schema conversion calling convention ([`input_json_schema`]).
//!
//! ## Core Types
//!
//! - [`ValidationResult`]: success with an output value, or failure with [`Issues`]
//! - [`Issue`]: a message plus the [`IssuePath`] it applies to
//! - [`MaybeAsync`]: a validate call's result, ready now or deferred
//!
//! ## Example
//!
//! ```rust
//! use serde_json::{json, Value};
//! use standard_schema::{
//!     safe_parse_sync, summarize, Issue, Issues, MaybeAsync, Standard, StandardProps,
//!     StandardSchema, Validator,
//! };
//! use stillwater::Validation;
//!
//! struct Text(StandardProps);
//!
//! impl Standard for Text {
//!     fn standard(&self) -> &StandardProps {
//!         &self.0
//!     }
//!
//!     fn validator(&self) -> Option<&dyn Validator> {
//!         Some(self)
//!     }
//! }
//!
//! impl StandardSchema for Text {
//!     type Output = String;
//!
//!     fn validate<'a>(&'a self, value: &'a Value) -> MaybeAsync<'a, String> {
//!         MaybeAsync::ready(match value {
//!             Value::String(s) => Validation::Success(s.clone()),
//!             _ => Validation::Failure(Issues::single(Issue::new("Expected string"))),
//!         })
//!     }
//! }
//!
//! let schema = Text(StandardProps::new("example"));
//!
//! let result = safe_parse_sync(&schema, &json!("hello")).unwrap();
//! assert!(result.is_success());
//!
//! match safe_parse_sync(&schema, &json!(42)).unwrap() {
//!     Validation::Failure(issues) => assert_eq!(summarize(&issues), "× Expected string"),
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

pub mod compose;
pub mod error;
pub mod interop;
pub mod path;
pub mod report;
pub mod schema;
pub mod validation;

pub use compose::{
    parse_dictionary, parse_dictionary_sync, parse_tuple, parse_tuple_sync, safe_parse_dictionary,
    safe_parse_dictionary_sync, safe_parse_tuple, safe_parse_tuple_sync,
};
pub use error::{
    AsynchronousValidationError, ConversionError, Issue, Issues, ParseError, SchemaValidationError,
};
pub use interop::{
    input_json_schema, output_json_schema, JsonSchemaConverter, JsonSchemaOptions,
    JsonSchemaTarget,
};
pub use path::{dot_path, resolve_key, IssuePath, PathSegment, PropertyKey, Symbol};
pub use report::{
    flatten_issues, flatten_issues_for, flatten_issues_for_with, flatten_issues_with,
    format_issues, format_issues_for, format_issues_for_with, format_issues_with, summarize,
    FlattenedIssues, FormattedIssues,
};
pub use schema::{
    is_json_schema, is_json_schema_version, is_schema, is_schema_version, MaybeAsync, Standard,
    StandardProps, StandardSchema, Validator,
};
pub use validation::{assert_valid, is_valid, parse, parse_sync, safe_parse, safe_parse_sync};

/// The outcome of validating a value: its output, or the issues found.
pub type ValidationResult<T> = stillwater::Validation<T, Issues>;
