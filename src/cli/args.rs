//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. There are no subcommands:
//! invoking the binary with no arguments runs the full pre-flight.

use clap::Parser;
use std::path::PathBuf;

use crate::toolchain::Toolchain;

/// Pycheck - pre-flight installer for Python projects.
#[derive(Debug, Parser)]
#[command(name = "pycheck")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, value_name = "DIR")]
    pub project: Option<PathBuf>,

    /// Show verbose output, including the command behind each step
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Preview commands without executing
    #[arg(long)]
    pub dry_run: bool,

    /// Override the Python interpreter command
    #[arg(long, env = "PYCHECK_PYTHON", value_name = "CMD", hide = true)]
    pub python: Option<String>,

    /// Override the pip command
    #[arg(long, env = "PYCHECK_PIP", value_name = "CMD", hide = true)]
    pub pip: Option<String>,
}

impl Cli {
    /// The toolchain to probe for: host defaults plus any overrides.
    pub fn toolchain(&self) -> Toolchain {
        Toolchain::with_overrides(self.python.clone(), self.pip.clone())
    }
}
