//! Interoperability with other schema formats.
//!
//! This module provides the calling convention for schemas that can describe
//! themselves as JSON Schema.

pub mod json_schema;

pub use json_schema::{
    input_json_schema, output_json_schema, JsonSchemaConverter, JsonSchemaOptions,
    JsonSchemaTarget,
};
