use std::sync::LazyLock;

use anyhow::{Result, anyhow};
use jsonschema::Validator;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

/// Fallback diagnostic text when the underlying validator supplies no message.
const GENERIC_SCHEMA_ERROR: &str = "generic schema error";

/// JSON schema for the chart data input.
///
/// `datasets` is required; `labels` is optional. Each dataset must carry a
/// `data` field in one of three shapes: a flat array of numbers, an array of
/// `{x, y}` points (scatter-style charts), or an arbitrary object (escape
/// hatch for chart-library-specific formats such as keyed pie data).
pub static SCHEMA_DATA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "labels": {
                "type": "array",
                "items": { "type": "string" }
            },
            "datasets": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "label": { "type": "string" },
                        "data": {
                            "oneOf": [
                                {
                                    "type": "array",
                                    "items": { "type": "number" }
                                },
                                {
                                    "type": "array",
                                    "items": {
                                        "type": "object",
                                        "properties": {
                                            "x": { "type": "number" },
                                            "y": { "type": "number" }
                                        },
                                        "required": ["x", "y"]
                                    }
                                },
                                { "type": "object" }
                            ]
                        },
                        "backgroundColor": {
                            "oneOf": [
                                { "type": "string" },
                                {
                                    "type": "array",
                                    "items": { "type": "string" }
                                }
                            ]
                        },
                        "borderColor": {
                            "oneOf": [
                                { "type": "string" },
                                {
                                    "type": "array",
                                    "items": { "type": "string" }
                                }
                            ]
                        },
                        "borderWidth": { "type": "integer" }
                    },
                    "required": ["data"]
                }
            }
        },
        "required": ["datasets"]
    })
});

/// JSON schema for the chart options input.
///
/// `geochart` is required and its `chart` field is restricted to the
/// supported chart kinds.
pub static SCHEMA_OPTIONS: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "object",
        "properties": {
            "responsive": { "type": "boolean" },
            "plugins": {
                "type": "object",
                "properties": {
                    "legend": {
                        "type": "object",
                        "properties": {
                            "display": { "type": "boolean" }
                        }
                    }
                }
            },
            "geochart": {
                "type": "object",
                "properties": {
                    "chart": {
                        "enum": ["line", "bar", "pie", "doughnut"],
                        "default": "line",
                        "description": "Supported types of chart."
                    }
                }
            }
        },
        "required": ["geochart"]
    })
});

/// The result of one chart data or options validation call.
///
/// `errors` is `None` exactly when `valid` is true, so a serialized result
/// omits the field entirely rather than carrying an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorResult {
    pub param: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// Validates chart data and options inputs against the fixed schemas.
///
/// Both schemas are compiled once at construction; validation itself touches
/// no mutable state, so a `ChartValidator` can be shared freely across
/// threads and called repeatedly with identical outcomes.
pub struct ChartValidator {
    data_validator: Validator,
    options_validator: Validator,
}

impl ChartValidator {
    /// Create a validator with both schemas compiled.
    pub fn new() -> Result<Self> {
        let data_validator = Validator::new(&SCHEMA_DATA)
            .map_err(|e| anyhow!("Failed to compile chart data schema: {e}"))?;
        let options_validator = Validator::new(&SCHEMA_OPTIONS)
            .map_err(|e| anyhow!("Failed to compile chart options schema: {e}"))?;
        Ok(Self {
            data_validator,
            options_validator,
        })
    }

    /// Validate the data input parameter. Accepts any JSON value and never
    /// panics; malformed input yields a `valid: false` result.
    pub fn validate_data(&self, data: &Value) -> ValidatorResult {
        Self::run_validation(&self.data_validator, "data", data)
    }

    /// Validate the options input parameter. Accepts any JSON value and never
    /// panics; malformed input yields a `valid: false` result.
    pub fn validate_options(&self, options: &Value) -> ValidatorResult {
        Self::run_validation(&self.options_validator, "options", options)
    }

    fn run_validation(validator: &Validator, param: &str, input: &Value) -> ValidatorResult {
        let errors: Vec<String> = validator
            .iter_errors(input)
            .map(|e| {
                let schema_path = e.schema_path.to_string();
                // The violated keyword is the last segment of the schema path.
                let keyword = schema_path
                    .rsplit('/')
                    .next()
                    .filter(|s| !s.is_empty())
                    .unwrap_or("schema");
                let message = e.to_string();
                let message = if message.is_empty() {
                    GENERIC_SCHEMA_ERROR.to_string()
                } else {
                    message
                };
                format!("{schema_path} | {keyword} | {message}")
            })
            .collect();

        let valid = errors.is_empty();
        debug!(param, valid, error_count = errors.len(), "validated chart input");

        ValidatorResult {
            param: param.to_string(),
            valid,
            errors: if valid { None } else { Some(errors) },
        }
    }

    /// Gather the error messages of several validation results into one
    /// displayable block, in input order.
    pub fn parse_validator_results_messages(results: &[ValidatorResult]) -> String {
        let mut msg = String::new();
        for result in results {
            msg.push_str(&Self::parse_validator_result_message(result));
        }
        msg.trim_matches('\n').to_string()
    }

    /// Gather the error messages of one validation result into one
    /// displayable block. Returns an empty string when there are no errors.
    pub fn parse_validator_result_message(result: &ValidatorResult) -> String {
        let mut msg = String::new();
        if let Some(errors) = &result.errors {
            for error in errors {
                msg.push_str(error);
                msg.push('\n');
            }
        }
        msg.trim_matches('\n').to_string()
    }
}
