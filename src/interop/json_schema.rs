//! JSON Schema interoperability.
//!
//! A schema library may expose a JSON Schema converter alongside its validate
//! capability. This module defines that converter's calling convention: the
//! target version, the options passed to it, and helpers that invoke it on any
//! [`Standard`] value. Generating JSON Schema is the converter's job; failures
//! it reports are propagated unchanged.

use std::fmt::{self, Display};

use serde_json::{Map, Value};

use crate::error::ConversionError;
use crate::schema::Standard;

/// The JSON Schema dialect a converter is asked to produce.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum JsonSchemaTarget {
    /// JSON Schema draft-04
    Draft04,
    /// JSON Schema draft-07
    Draft07,
    /// JSON Schema draft 2020-12
    #[default]
    Draft2020_12,
    /// OpenAPI 3.0 schema objects
    OpenApi30,
    /// Any other target, named as the converter expects
    Other(String),
}

impl JsonSchemaTarget {
    /// Returns the target's wire name (e.g. `draft-2020-12`).
    pub fn as_str(&self) -> &str {
        match self {
            JsonSchemaTarget::Draft04 => "draft-04",
            JsonSchemaTarget::Draft07 => "draft-07",
            JsonSchemaTarget::Draft2020_12 => "draft-2020-12",
            JsonSchemaTarget::OpenApi30 => "openapi-3.0",
            JsonSchemaTarget::Other(name) => name,
        }
    }
}

impl Display for JsonSchemaTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for JsonSchemaTarget {
    fn from(name: &str) -> Self {
        match name {
            "draft-04" => JsonSchemaTarget::Draft04,
            "draft-07" => JsonSchemaTarget::Draft07,
            "draft-2020-12" => JsonSchemaTarget::Draft2020_12,
            "openapi-3.0" => JsonSchemaTarget::OpenApi30,
            other => JsonSchemaTarget::Other(other.to_string()),
        }
    }
}

/// Options passed to a JSON Schema converter.
///
/// Besides the target, vendors may accept their own parameters through
/// [`with_param`](JsonSchemaOptions::with_param).
///
/// # Example
///
/// ```rust
/// use standard_schema::{JsonSchemaOptions, JsonSchemaTarget};
/// use serde_json::json;
///
/// let options = JsonSchemaOptions::new(JsonSchemaTarget::Draft07)
///     .with_param("unrepresentable", json!("any"));
///
/// assert_eq!(options.target.as_str(), "draft-07");
/// assert_eq!(options.param("unrepresentable"), Some(&json!("any")));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonSchemaOptions {
    /// The requested JSON Schema dialect.
    pub target: JsonSchemaTarget,
    /// Vendor-specific parameters.
    pub params: Map<String, Value>,
}

impl JsonSchemaOptions {
    /// Creates options for the given target with no extra parameters.
    pub fn new(target: impl Into<JsonSchemaTarget>) -> Self {
        Self {
            target: target.into(),
            params: Map::new(),
        }
    }

    /// Adds a vendor-specific parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: Value) -> Self {
        self.params.insert(name.into(), value);
        self
    }

    /// Returns a vendor-specific parameter by name.
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }
}

/// Generates JSON Schema documents for a schema's input and output types.
///
/// Implementations should return [`ConversionError::UnsupportedTarget`] for
/// targets they cannot produce.
pub trait JsonSchemaConverter: Send + Sync {
    /// Describes the values the schema accepts.
    fn input(&self, options: &JsonSchemaOptions) -> Result<Map<String, Value>, ConversionError>;

    /// Describes the values the schema produces.
    fn output(&self, options: &JsonSchemaOptions) -> Result<Map<String, Value>, ConversionError>;
}

/// Generates the input JSON Schema of any value exposing a converter.
///
/// # Errors
///
/// Returns `ConversionError::NotSupported` when the value has no converter,
/// or whatever error the converter itself reports.
pub fn input_json_schema(
    schema: &dyn Standard,
    options: &JsonSchemaOptions,
) -> Result<Map<String, Value>, ConversionError> {
    converter(schema)?.input(options)
}

/// Generates the output JSON Schema of any value exposing a converter.
///
/// # Errors
///
/// Returns `ConversionError::NotSupported` when the value has no converter,
/// or whatever error the converter itself reports.
pub fn output_json_schema(
    schema: &dyn Standard,
    options: &JsonSchemaOptions,
) -> Result<Map<String, Value>, ConversionError> {
    converter(schema)?.output(options)
}

fn converter(schema: &dyn Standard) -> Result<&dyn JsonSchemaConverter, ConversionError> {
    schema.json_schema().ok_or_else(|| {
        tracing::debug!(vendor = %schema.standard().vendor, "schema exposes no JSON Schema converter");
        ConversionError::NotSupported {
            vendor: schema.standard().vendor.clone(),
        }
    })
}
