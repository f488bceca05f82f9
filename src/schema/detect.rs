//! Runtime detection of schema capabilities.
//!
//! Integrators that receive arbitrary values use these predicates to decide
//! whether a value can be validated against or converted to JSON Schema. A
//! missing value (`None`) never qualifies.

use crate::schema::Standard;

/// Returns true if the value exposes the validate capability.
///
/// # Example
///
/// ```rust
/// use standard_schema::is_schema;
///
/// assert!(!is_schema(None));
/// ```
pub fn is_schema(value: Option<&dyn Standard>) -> bool {
    value.is_some_and(|value| value.validator().is_some())
}

/// Returns true if the value exposes the validate capability and declares
/// exactly the given interface version.
pub fn is_schema_version(value: Option<&dyn Standard>, version: u32) -> bool {
    value.is_some_and(|value| value.validator().is_some() && value.standard().version == version)
}

/// Returns true if the value exposes a JSON Schema converter.
pub fn is_json_schema(value: Option<&dyn Standard>) -> bool {
    value.is_some_and(|value| value.json_schema().is_some())
}

/// Returns true if the value exposes a JSON Schema converter and declares
/// exactly the given interface version.
pub fn is_json_schema_version(value: Option<&dyn Standard>, version: u32) -> bool {
    value.is_some_and(|value| value.json_schema().is_some() && value.standard().version == version)
}
