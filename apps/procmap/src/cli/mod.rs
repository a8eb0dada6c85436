//! # procmap CLI Module
//!
//! This module implements the CLI interface for procmap.
//!
//! ## Available Commands
//!
//! - `run` - Extract the workbook and render the map (default)
//! - `extract` - Convert the workbook sheets to CSV files
//! - `render` - Render the map from existing CSV files
//! - `export` - Write the joined matrix as JSON

mod commands;

use crate::config::{Overrides, resolve_config};
use clap::{Parser, Subcommand};
use procmap_core::ProcmapError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// procmap - Process Support Map
///
/// Reads a workbook of software, processes, organizational units and links,
/// and renders which software supports which process in which unit.
#[derive(Parser, Debug)]
#[command(name = "procmap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress progress and confirmation lines
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Optional TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the input workbook
    #[arg(long, global = true)]
    pub workbook: Option<PathBuf>,

    /// Directory for the intermediate CSV files
    #[arg(long, global = true)]
    pub csv_dir: Option<PathBuf>,

    /// Path of the rendered HTML document
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract the workbook and render the map
    Run,

    /// Convert the required workbook sheets to CSV files
    Extract,

    /// Render the map from existing CSV files
    Render,

    /// Write the joined matrix as JSON
    Export {
        /// Output file path
        #[arg(short = 'o', long = "json-output")]
        json_output: PathBuf,
    },
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            workbook: self.workbook.clone(),
            csv_dir: self.csv_dir.clone(),
            output: self.output.clone(),
        }
    }
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), ProcmapError> {
    let config = resolve_config(cli.config.as_deref(), &cli.overrides())?;
    let out = Printer::new(cli.quiet);

    match cli.command {
        Some(Commands::Extract) => cmd_extract(&config, &out),
        Some(Commands::Render) => cmd_render(&config, &out),
        Some(Commands::Export { json_output }) => cmd_export(&config, &out, &json_output),
        Some(Commands::Run) | None => {
            // No subcommand - run the whole pipeline with defaults
            cmd_run(&config, &out)
        }
    }
}
