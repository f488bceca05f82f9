//! Integration tests for the JSON Schema conversion convention.

mod common;

use common::{JsonOnlySchema, StringSchema};
use serde_json::json;
use standard_schema::{
    input_json_schema, output_json_schema, ConversionError, JsonSchemaOptions, JsonSchemaTarget,
};

#[test]
fn test_input_schema_for_default_target() {
    let schema = JsonOnlySchema::new();
    let generated = input_json_schema(&schema, &JsonSchemaOptions::default()).unwrap();

    assert_eq!(generated.get("type"), Some(&json!("string")));
    assert_eq!(
        generated.get("$schema"),
        Some(&json!("https://json-schema.org/draft/2020-12/schema"))
    );
}

#[test]
fn test_output_schema_for_draft_07() {
    let schema = JsonOnlySchema::new();
    let options = JsonSchemaOptions::new("draft-07");
    let generated = output_json_schema(&schema, &options).unwrap();

    assert_eq!(
        generated.get("$schema"),
        Some(&json!("http://json-schema.org/draft-07/schema#"))
    );
}

#[test]
fn test_unsupported_target_propagates() {
    let schema = JsonOnlySchema::new();

    for target in [
        JsonSchemaTarget::Draft04,
        JsonSchemaTarget::OpenApi30,
        JsonSchemaTarget::Other("draft-next".to_string()),
    ] {
        let options = JsonSchemaOptions::new(target.clone());
        let error = input_json_schema(&schema, &options).unwrap_err();
        assert_eq!(
            error,
            ConversionError::UnsupportedTarget {
                vendor: "custom".to_string(),
                target,
            }
        );
    }
}

#[test]
fn test_schema_without_converter() {
    let schema = StringSchema::new();
    let error = output_json_schema(&schema, &JsonSchemaOptions::default()).unwrap_err();

    assert!(matches!(error, ConversionError::NotSupported { ref vendor } if vendor == "custom"));
}

#[test]
fn test_vendor_params_reach_converter() {
    let options = JsonSchemaOptions::new(JsonSchemaTarget::Draft07)
        .with_param("libraryOptions", json!({"strict": true}));

    assert_eq!(options.param("libraryOptions"), Some(&json!({"strict": true})));
    assert!(input_json_schema(&JsonOnlySchema::new(), &options).is_ok());
}
