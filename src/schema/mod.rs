//! The schema contract.
//!
//! Any validation library can take part by implementing [`Standard`] and
//! [`StandardSchema`] for its schema types. This crate never inspects how a
//! schema validates; it only calls the capability and consumes the
//! [`ValidationResult`](crate::ValidationResult) it reports.
//!
//! # Example
//!
//! ```rust
//! use serde_json::{json, Value};
//! use standard_schema::{
//!     is_schema, Issue, Issues, MaybeAsync, Standard, StandardProps, StandardSchema, Validator,
//! };
//! use stillwater::Validation;
//!
//! struct Positive(StandardProps);
//!
//! impl Standard for Positive {
//!     fn standard(&self) -> &StandardProps {
//!         &self.0
//!     }
//!
//!     fn validator(&self) -> Option<&dyn Validator> {
//!         Some(self)
//!     }
//! }
//!
//! impl StandardSchema for Positive {
//!     type Output = u64;
//!
//!     fn validate<'a>(&'a self, value: &'a Value) -> MaybeAsync<'a, u64> {
//!         MaybeAsync::ready(match value.as_u64() {
//!             Some(n) if n > 0 => Validation::Success(n),
//!             _ => Validation::Failure(Issues::single(Issue::new("Expected positive integer"))),
//!         })
//!     }
//! }
//!
//! let schema = Positive(StandardProps::new("example"));
//! assert!(is_schema(Some(&schema)));
//! ```

mod detect;
mod traits;

pub use detect::{is_json_schema, is_json_schema_version, is_schema, is_schema_version};
pub use traits::{MaybeAsync, Standard, StandardProps, StandardSchema, Validator};
