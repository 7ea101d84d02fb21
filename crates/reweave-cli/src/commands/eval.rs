//! Eval command implementation
//!
//! Evaluates a named expression and prints its composed regular expression,
//! named capture groups, and example text.

use anyhow::Result;
use colored::Colorize;
use reweave_expression::evaluate;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{EvalOutput, EvalResult, JsonError};
use crate::input::{build_dictionary, read_config};

/// Run the eval command
///
/// # Arguments
/// * `config_path` - Path to the XML configuration file
/// * `expression` - Name of the expression to evaluate
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 if the expression cannot be evaluated
pub fn run(config_path: &str, expression: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(config_path, expression)
    } else {
        run_human(config_path, expression)
    }
}

/// Run eval with human-readable (colored) output
fn run_human(config_path: &str, expression: &str) -> Result<ExitCode> {
    let content = read_config(Path::new(config_path))?;

    println!("{} {}", "Evaluating:".cyan().bold(), expression);

    let outcome =
        build_dictionary(&content).and_then(|dictionary| evaluate(expression, &dictionary));

    let evaluation = match outcome {
        Ok(evaluation) => evaluation,
        Err(error) => {
            println!(
                "\n  {} [{}]: {}",
                "x".red(),
                error.kind().as_str().red(),
                error
            );
            println!(
                "\n{} expression could not be evaluated",
                "FAILED".red().bold()
            );
            return Ok(ExitCode::from(1));
        }
    };

    println!("{} {}", "Regex:".dimmed(), evaluation.source());
    match &evaluation.named_groups {
        Some(groups) => println!("{} {}", "Named groups:".dimmed(), groups.join(", ")),
        None => println!("{} (none)", "Named groups:".dimmed()),
    }
    println!("{} {}", "Example:".dimmed(), evaluation.eg);

    Ok(ExitCode::SUCCESS)
}

/// Run eval with machine-readable JSON output
fn run_json(config_path: &str, expression: &str) -> Result<ExitCode> {
    let content = read_config(Path::new(config_path))?;

    let outcome =
        build_dictionary(&content).and_then(|dictionary| evaluate(expression, &dictionary));

    let output = match outcome {
        Ok(evaluation) => EvalOutput::success(EvalResult {
            name: expression.to_string(),
            regex: evaluation.source().to_string(),
            named_groups: evaluation.named_groups,
            eg: evaluation.eg,
        }),
        Err(error) => EvalOutput::failure(vec![JsonError::from(&error)]),
    };

    let json =
        serde_json::to_string_pretty(&output).expect("EvalOutput serialization should not fail");
    println!("{}", json);

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
