//! Schemas shared by the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use serde_json::{json, Map, Value};
use standard_schema::{
    ConversionError, Issue, IssuePath, Issues, JsonSchemaConverter, JsonSchemaOptions,
    JsonSchemaTarget, MaybeAsync, Standard, StandardProps, StandardSchema, Validator,
};
use stillwater::Validation;

/// Returns the JavaScript-style type name used in fixture messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn check_string(value: &Value) -> Validation<String, Issues> {
    match value {
        Value::String(s) => Validation::Success(s.clone()),
        other => Validation::Failure(Issues::single(Issue::new(format!(
            "Expected string, got {}",
            type_name(other)
        )))),
    }
}

/// Accepts strings, answering immediately.
pub struct StringSchema {
    props: StandardProps,
}

impl StringSchema {
    pub fn new() -> Self {
        Self {
            props: StandardProps::new("custom"),
        }
    }
}

impl Standard for StringSchema {
    fn standard(&self) -> &StandardProps {
        &self.props
    }

    fn validator(&self) -> Option<&dyn Validator> {
        Some(self)
    }
}

impl StandardSchema for StringSchema {
    type Output = String;

    fn validate<'a>(&'a self, value: &'a Value) -> MaybeAsync<'a, String> {
        MaybeAsync::ready(check_string(value))
    }
}

/// Accepts strings, always deferring the answer.
pub struct AsyncStringSchema {
    props: StandardProps,
}

impl AsyncStringSchema {
    pub fn new() -> Self {
        Self {
            props: StandardProps::new("custom"),
        }
    }
}

impl Standard for AsyncStringSchema {
    fn standard(&self) -> &StandardProps {
        &self.props
    }

    fn validator(&self) -> Option<&dyn Validator> {
        Some(self)
    }
}

impl StandardSchema for AsyncStringSchema {
    type Output = String;

    fn validate<'a>(&'a self, value: &'a Value) -> MaybeAsync<'a, String> {
        MaybeAsync::deferred(async move {
            tokio::task::yield_now().await;
            check_string(value)
        })
    }
}

/// Reports a fixed set of issues for any input.
pub struct FailingSchema {
    props: StandardProps,
    issues: Vec<Issue>,
}

impl FailingSchema {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self {
            props: StandardProps::new("custom"),
            issues,
        }
    }
}

impl Standard for FailingSchema {
    fn standard(&self) -> &StandardProps {
        &self.props
    }

    fn validator(&self) -> Option<&dyn Validator> {
        Some(self)
    }
}

impl StandardSchema for FailingSchema {
    type Output = Value;

    fn validate<'a>(&'a self, _value: &'a Value) -> MaybeAsync<'a, Value> {
        MaybeAsync::ready(match Issues::from_vec(self.issues.clone()) {
            Some(issues) => Validation::Failure(issues),
            None => Validation::Success(Value::Null),
        })
    }
}

/// Fails after yielding to the runtime a set number of times, logging its
/// label when it finishes.
pub struct DelayedFailure {
    props: StandardProps,
    yields: usize,
    label: &'static str,
    finished: Arc<Mutex<Vec<&'static str>>>,
}

impl DelayedFailure {
    pub fn new(yields: usize, label: &'static str, finished: &Arc<Mutex<Vec<&'static str>>>) -> Self {
        Self {
            props: StandardProps::new("custom"),
            yields,
            label,
            finished: Arc::clone(finished),
        }
    }
}

impl Standard for DelayedFailure {
    fn standard(&self) -> &StandardProps {
        &self.props
    }

    fn validator(&self) -> Option<&dyn Validator> {
        Some(self)
    }
}

impl StandardSchema for DelayedFailure {
    type Output = Value;

    fn validate<'a>(&'a self, _value: &'a Value) -> MaybeAsync<'a, Value> {
        MaybeAsync::deferred(async move {
            for _ in 0..self.yields {
                tokio::task::yield_now().await;
            }
            if let Ok(mut finished) = self.finished.lock() {
                finished.push(self.label);
            }
            Validation::Failure(Issues::single(Issue::new(self.label)))
        })
    }
}

/// Exposes only the bundle, with no capabilities.
pub struct BundleOnly {
    props: StandardProps,
}

impl BundleOnly {
    pub fn new() -> Self {
        Self {
            props: StandardProps::new("custom"),
        }
    }
}

impl Standard for BundleOnly {
    fn standard(&self) -> &StandardProps {
        &self.props
    }

    fn validator(&self) -> Option<&dyn Validator> {
        None
    }
}

/// Converts to JSON Schema for draft-07 and draft 2020-12 only.
pub struct StringJsonConverter;

impl StringJsonConverter {
    fn convert(&self, options: &JsonSchemaOptions) -> Result<Map<String, Value>, ConversionError> {
        let mut schema = Map::new();
        match options.target {
            JsonSchemaTarget::Draft2020_12 => {
                schema.insert(
                    "$schema".to_string(),
                    json!("https://json-schema.org/draft/2020-12/schema"),
                );
            }
            JsonSchemaTarget::Draft07 => {
                schema.insert(
                    "$schema".to_string(),
                    json!("http://json-schema.org/draft-07/schema#"),
                );
            }
            ref target => {
                return Err(ConversionError::UnsupportedTarget {
                    vendor: "custom".to_string(),
                    target: target.clone(),
                })
            }
        }
        schema.insert("type".to_string(), json!("string"));
        Ok(schema)
    }
}

impl JsonSchemaConverter for StringJsonConverter {
    fn input(&self, options: &JsonSchemaOptions) -> Result<Map<String, Value>, ConversionError> {
        self.convert(options)
    }

    fn output(&self, options: &JsonSchemaOptions) -> Result<Map<String, Value>, ConversionError> {
        self.convert(options)
    }
}

/// Exposes a JSON Schema converter but no validate capability.
pub struct JsonOnlySchema {
    props: StandardProps,
    converter: StringJsonConverter,
}

impl JsonOnlySchema {
    pub fn new() -> Self {
        Self {
            props: StandardProps::new("custom"),
            converter: StringJsonConverter,
        }
    }
}

impl Standard for JsonOnlySchema {
    fn standard(&self) -> &StandardProps {
        &self.props
    }

    fn validator(&self) -> Option<&dyn Validator> {
        None
    }

    fn json_schema(&self) -> Option<&dyn JsonSchemaConverter> {
        Some(&self.converter)
    }
}

/// Builds an issue at the given field path.
pub fn issue_at(fields: &[&str], message: &str) -> Issue {
    let path = fields
        .iter()
        .fold(IssuePath::root(), |path, field| path.push_field(*field));
    Issue::at(path, message)
}
