//! JSON output types for machine-readable CLI output.
//!
//! This module provides structured output types for the `--json` flag on the
//! `list`, `eval`, and `check` commands. These types enable scripts and other
//! tools to parse CLI output programmatically.

use reweave_expression::ExpressionError;
use serde::{Deserialize, Serialize};

/// A structured error in JSON output.
///
/// The code is the stable taxonomy kind of the underlying failure (for
/// example `"not-found"` or `"circular-reference"`), suitable for
/// programmatic error handling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "configuration", "invalid-pattern")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&ExpressionError> for JsonError {
    fn from(error: &ExpressionError) -> Self {
        Self::new(error.kind().as_str(), error.to_string())
    }
}

/// JSON output for the `list` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListOutput {
    /// Whether the dictionary was built successfully
    pub success: bool,
    /// Errors encountered while building the dictionary
    pub errors: Vec<JsonError>,
    /// Listing details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ListResult>,
}

/// Listing details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResult {
    /// Number of expressions in the dictionary
    pub count: usize,
    /// Expression names in dictionary order
    pub expressions: Vec<String>,
}

impl ListOutput {
    /// Creates a successful list output.
    pub fn success(result: ListResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed list output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// JSON output for the `eval` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalOutput {
    /// Whether the evaluation succeeded
    pub success: bool,
    /// Errors encountered while building or evaluating
    pub errors: Vec<JsonError>,
    /// Evaluation details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<EvalResult>,
}

/// Evaluation details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalResult {
    /// Name of the evaluated expression
    pub name: String,
    /// Composed regular expression source text
    pub regex: String,
    /// Named capture groups in order of first occurrence (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_groups: Option<Vec<String>>,
    /// Example text, possibly empty
    pub eg: String,
}

impl EvalOutput {
    /// Creates a successful eval output.
    pub fn success(result: EvalResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed eval output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// JSON output for the `check` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutput {
    /// Whether every expression evaluated successfully
    pub success: bool,
    /// Errors that prevented the dictionary from being built
    pub errors: Vec<JsonError>,
    /// Per-expression results (present whenever the dictionary was built)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<CheckResult>,
}

/// Check result details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Number of expressions checked
    pub total: usize,
    /// Number of expressions that evaluated successfully
    pub passed: usize,
    /// Expressions that failed to evaluate
    pub failures: Vec<CheckFailure>,
}

/// A single expression that failed to evaluate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckFailure {
    /// Expression name
    pub name: String,
    /// Stable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl CheckOutput {
    /// Creates a check output from per-expression results.
    pub fn from_result(result: CheckResult) -> Self {
        Self {
            success: result.failures.is_empty(),
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed check output for a dictionary that could not be built.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_serialization() {
        let error = JsonError::new("not-found", "expression (name=\"date\") not found");

        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"not-found\""));
        assert!(json.contains("expression (name=\\\"date\\\") not found"));
    }

    #[test]
    fn test_json_error_from_expression_error() {
        let error = reweave_expression::ExpressionError::NotFound {
            name: "date".to_string(),
        };
        let json_error = JsonError::from(&error);

        assert_eq!(json_error.code, "not-found");
        assert_eq!(json_error.message, "expression (name=\"date\") not found");
    }

    #[test]
    fn test_list_output_success() {
        let output = ListOutput::success(ListResult {
            count: 2,
            expressions: vec!["date".to_string(), "year".to_string()],
        });

        assert!(output.success);
        assert!(output.errors.is_empty());
        assert_eq!(output.result.as_ref().unwrap().count, 2);
    }

    #[test]
    fn test_list_output_failure_skips_result() {
        let output = ListOutput::failure(vec![JsonError::new("configuration", "no groups")]);
        let json = serde_json::to_string(&output).unwrap();

        assert!(!output.success);
        assert!(!json.contains("\"result\""));
    }

    #[test]
    fn test_eval_result_skips_absent_named_groups() {
        let output = EvalOutput::success(EvalResult {
            name: "digits".to_string(),
            regex: "[0-9]+".to_string(),
            named_groups: None,
            eg: "42".to_string(),
        });

        let json = serde_json::to_string(&output).unwrap();
        assert!(!json.contains("\"named_groups\""));
        assert!(json.contains("\"regex\":\"[0-9]+\""));
    }

    #[test]
    fn test_check_output_success_depends_on_failures() {
        let clean = CheckOutput::from_result(CheckResult {
            total: 3,
            passed: 3,
            failures: vec![],
        });
        assert!(clean.success);

        let broken = CheckOutput::from_result(CheckResult {
            total: 3,
            passed: 2,
            failures: vec![CheckFailure {
                name: "loop".to_string(),
                code: "circular-reference".to_string(),
                message: "circular reference detected".to_string(),
            }],
        });
        assert!(!broken.success);
    }
}
