//! # Bestiary CLI Module
//!
//! This module implements the CLI interface for Bestiary.
//!
//! ## Available Commands
//!
//! - `threats` - Annotate every monster with difficulty and threat level
//! - `names` - List every monster name
//! - `bands` - Organize monsters into threat bands
//! - `summary` - Count monsters per threat band (default)
//! - `sum` - Add two numbers

mod commands;

use crate::config::AppConfig;
use bestiary_core::BestiaryError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Bestiary - threat analytics for monster rosters
///
/// Reads a JSON object mapping difficulty tiers to monster arrays and reports
/// threat levels (health x damage), names, and threat bands.
#[derive(Parser, Debug)]
#[command(name = "bestiary")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Monster collection file (JSON); defaults to the bundled sample
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Annotate every monster with its difficulty and threat level
    Threats,

    /// List every monster name
    Names,

    /// Organize monsters into lowThreat / mediumThreat / highThreat
    Bands,

    /// Count monsters per threat band
    Summary,

    /// Add two numbers
    Sum {
        /// First operand
        #[arg(allow_negative_numbers = true)]
        a: f64,

        /// Second operand
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Run the parsed command and return what it would print.
pub fn run(cli: &Cli, config: &AppConfig) -> Result<String, BestiaryError> {
    let json_mode = cli.json_mode;

    let load = || load_collection(&DataSource::resolve(cli.file.as_deref(), config));

    match cli.command.clone().unwrap_or(Commands::Summary) {
        Commands::Threats => cmd_threats(&load()?, json_mode),
        Commands::Names => cmd_names(&load()?, json_mode),
        Commands::Bands => cmd_bands(&load()?, json_mode),
        Commands::Summary => cmd_summary(&load()?, json_mode),
        Commands::Sum { a, b } => cmd_sum(a, b, json_mode),
    }
}

/// Execute the CLI with parsed arguments, printing the result to stdout.
pub fn execute(cli: &Cli, config: &AppConfig) -> Result<(), BestiaryError> {
    let output = run(cli, config)?;
    println!("{}", output);
    Ok(())
}
