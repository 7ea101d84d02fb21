//! Check command implementation
//!
//! Evaluates every expression in a configuration file and reports the ones
//! that fail, so a whole dictionary can be vetted in one pass.

use anyhow::Result;
use colored::Colorize;
use reweave_expression::{evaluate, ExpressionDictionary, ExpressionError};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{CheckFailure, CheckOutput, CheckResult, JsonError};
use crate::input::{build_dictionary, read_config};

/// Run the check command
///
/// # Arguments
/// * `config_path` - Path to the XML configuration file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if every expression evaluates, 1 otherwise
pub fn run(config_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(config_path)
    } else {
        run_human(config_path)
    }
}

/// Evaluates every expression in dictionary order.
fn check_all(dictionary: &ExpressionDictionary) -> Vec<(String, Result<(), ExpressionError>)> {
    dictionary
        .keys()
        .map(|name| (name.clone(), evaluate(name, dictionary).map(|_| ())))
        .collect()
}

/// Run check with human-readable (colored) output
fn run_human(config_path: &str) -> Result<ExitCode> {
    let content = read_config(Path::new(config_path))?;

    println!("{} {}", "Checking:".cyan().bold(), config_path);

    let dictionary = match build_dictionary(&content) {
        Ok(dictionary) => dictionary,
        Err(error) => {
            println!(
                "\n  {} [{}]: {}",
                "x".red(),
                error.kind().as_str().red(),
                error
            );
            println!("\n{} dictionary could not be built", "FAILED".red().bold());
            return Ok(ExitCode::from(1));
        }
    };

    let outcomes = check_all(&dictionary);
    let mut failed = 0usize;
    for (name, outcome) in &outcomes {
        match outcome {
            Ok(()) => println!("  {} {}", "ok".green(), name),
            Err(error) => {
                failed += 1;
                println!(
                    "  {} {} [{}]: {}",
                    "x".red(),
                    name,
                    error.kind().as_str().red(),
                    error
                );
            }
        }
    }

    if failed == 0 {
        println!(
            "\n{} {} expression(s) evaluate",
            "SUCCESS".green().bold(),
            outcomes.len()
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} {} of {} expression(s) failed",
            "FAILED".red().bold(),
            failed,
            outcomes.len()
        );
        Ok(ExitCode::from(1))
    }
}

/// Run check with machine-readable JSON output
fn run_json(config_path: &str) -> Result<ExitCode> {
    let content = read_config(Path::new(config_path))?;

    let output = match build_dictionary(&content) {
        Ok(dictionary) => {
            let outcomes = check_all(&dictionary);
            let failures: Vec<CheckFailure> = outcomes
                .iter()
                .filter_map(|(name, outcome)| {
                    outcome.as_ref().err().map(|error| CheckFailure {
                        name: name.clone(),
                        code: error.kind().as_str().to_string(),
                        message: error.to_string(),
                    })
                })
                .collect();
            CheckOutput::from_result(CheckResult {
                total: outcomes.len(),
                passed: outcomes.len() - failures.len(),
                failures,
            })
        }
        Err(error) => CheckOutput::failure(vec![JsonError::from(&error)]),
    };

    let json =
        serde_json::to_string_pretty(&output).expect("CheckOutput serialization should not fail");
    println!("{}", json);

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS_CONFIG: &str = r#"<Application>
  <Expressions name="fields">
    <Expression name="year">
      <Pattern eg="2026"><![CDATA[(?<year>[0-9]{4})]]></Pattern>
    </Expression>
    <Expression name="month">
      <Pattern eg="08"><![CDATA[(?<mm>[0-9]{2})]]></Pattern>
    </Expression>
    <Expression name="date">
      <Pattern link="year"/>
      <Pattern eg="-">-</Pattern>
      <Pattern link="month"/>
    </Expression>
  </Expressions>
</Application>"#;

    const CIRCULAR_CONFIG: &str = r#"<Application>
  <Expressions name="loops">
    <Expression name="a">
      <Pattern link="b"/>
    </Expression>
    <Expression name="b">
      <Pattern link="a"/>
    </Expression>
  </Expressions>
</Application>"#;

    fn write_config(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("config.xml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn check_valid_config_succeeds() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(&tmp, FIELDS_CONFIG);

        let code = run(path.to_str().unwrap(), false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn check_circular_references_fail() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(&tmp, CIRCULAR_CONFIG);

        let code = run(path.to_str().unwrap(), false).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn check_json_output_success() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(&tmp, FIELDS_CONFIG);

        let code = run(path.to_str().unwrap(), true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn check_json_output_circular_references_fail() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(&tmp, CIRCULAR_CONFIG);

        let code = run(path.to_str().unwrap(), true).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn check_nonexistent_file_fails() {
        let result = run("/nonexistent/config.xml", false);
        assert!(result.is_err());
    }

    #[test]
    fn check_all_reports_every_expression() {
        let dictionary = crate::input::build_dictionary(FIELDS_CONFIG).unwrap();
        let outcomes = check_all(&dictionary);

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(|(_, outcome)| outcome.is_ok()));
    }
}
