//! List command implementation
//!
//! Builds the expression dictionary from a configuration file and prints the
//! expression names.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{JsonError, ListOutput, ListResult};
use crate::input::{build_dictionary, read_config};

/// Run the list command
///
/// # Arguments
/// * `config_path` - Path to the XML configuration file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 if the dictionary cannot be built
pub fn run(config_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(config_path)
    } else {
        run_human(config_path)
    }
}

/// Run list with human-readable (colored) output
fn run_human(config_path: &str) -> Result<ExitCode> {
    let content = read_config(Path::new(config_path))?;

    println!("{} {}", "Configuration:".cyan().bold(), config_path);

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

    for name in dictionary.keys() {
        println!("  {}", name);
    }
    println!(
        "\n{} {} expression(s)",
        "Loaded".green().bold(),
        dictionary.len()
    );

    Ok(ExitCode::SUCCESS)
}

/// Run list with machine-readable JSON output
fn run_json(config_path: &str) -> Result<ExitCode> {
    let content = read_config(Path::new(config_path))?;

    let output = match build_dictionary(&content) {
        Ok(dictionary) => ListOutput::success(ListResult {
            count: dictionary.len(),
            expressions: dictionary.keys().cloned().collect(),
        }),
        Err(error) => ListOutput::failure(vec![JsonError::from(&error)]),
    };

    let json =
        serde_json::to_string_pretty(&output).expect("ListOutput serialization should not fail");
    println!("{}", json);

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
