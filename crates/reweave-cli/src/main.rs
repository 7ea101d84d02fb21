//! Reweave command-line interface
//!
//! Loads XML expression configuration files, builds the expression
//! dictionary, and evaluates named expressions into regular expressions.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use reweave_cli::commands;

#[derive(Parser)]
#[command(name = "reweave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the expressions defined in a configuration file
    List {
        /// Path to the XML configuration file
        #[arg(short, long)]
        config: String,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a named expression to its regular expression
    Eval {
        /// Path to the XML configuration file
        #[arg(short, long)]
        config: String,

        /// Name of the expression to evaluate
        #[arg(short, long)]
        expression: String,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate every expression and report failures
    Check {
        /// Path to the XML configuration file
        #[arg(short, long)]
        config: String,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { config, json } => commands::list::run(&config, json),
        Commands::Eval {
            config,
            expression,
            json,
        } => commands::eval::run(&config, &expression, json),
        Commands::Check { config, json } => commands::check::run(&config, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
