//! The pre-flight step sequence.
//!
//! Three steps, each gated on the one before it: probe the interpreter,
//! probe pip, install from the manifest. The first failure is terminal;
//! there are no retries and no recovery.
//!
//! # Modules
//!
//! - [`probe`] - Tool availability probes
//! - [`installer`] - Dependency installation via pip
//! - [`report`] - Step outcome types

pub mod installer;
pub mod probe;
pub mod report;

pub use installer::DependencyInstaller;
pub use probe::ToolProbe;
pub use report::{PreflightReport, Step, StepOutcome};

use std::path::PathBuf;

use crate::error::{PycheckError, Result};
use crate::toolchain::{Toolchain, MANIFEST_FILE};
use crate::ui::Output;

/// Orchestrates one pre-flight run.
#[derive(Debug, Clone)]
pub struct Preflight {
    toolchain: Toolchain,
    project_root: PathBuf,
    dry_run: bool,
}

impl Preflight {
    /// Create a pre-flight run over the given project root.
    pub fn new(toolchain: Toolchain, project_root: PathBuf, dry_run: bool) -> Self {
        Self {
            toolchain,
            project_root,
            dry_run,
        }
    }

    /// Run the sequence, printing progress through `output`.
    ///
    /// Returns the report of completed steps on full success. A failed
    /// probe or install is returned as the matching [`PycheckError`]
    /// variant; steps after the failure never run.
    pub fn run(&self, output: &Output) -> Result<PreflightReport> {
        let interpreter = ToolProbe::interpreter(&self.toolchain);
        let package_manager = ToolProbe::package_manager(&self.toolchain);
        let installer = DependencyInstaller::new(&self.toolchain, &self.project_root);

        if self.dry_run {
            output.progress("Pre-flight (dry-run): commands that would run");
            output.command(&interpreter.command());
            output.command(&package_manager.command());
            output.command(&installer.command());
            return Ok(PreflightReport::new());
        }

        let mut report = PreflightReport::new();

        output.progress("Checking for the Python interpreter...");
        output.verbose_command(&interpreter.command());
        let outcome = interpreter.run()?;
        output.child_output(&outcome.output);
        if !outcome.success {
            return Err(PycheckError::ToolMissing {
                tool: "Python".to_string(),
                command: outcome.command,
            });
        }
        output.success(&found_message("Python", outcome.version.as_deref()));
        report.push(outcome);

        output.progress("Checking for pip...");
        output.verbose_command(&package_manager.command());
        let outcome = package_manager.run()?;
        output.child_output(&outcome.output);
        if !outcome.success {
            return Err(PycheckError::ToolMissing {
                tool: "pip".to_string(),
                command: outcome.command,
            });
        }
        output.success(&found_message("pip", outcome.version.as_deref()));
        report.push(outcome);

        output.progress(&format!("Installing dependencies from {}...", MANIFEST_FILE));
        output.verbose_command(&installer.command());
        let outcome = installer.run()?;
        if !outcome.success {
            return Err(PycheckError::InstallFailed {
                manifest: MANIFEST_FILE.to_string(),
                detail: PycheckError::install_exit_detail(outcome.exit_code),
            });
        }
        output.success("Dependencies installed");
        report.push(outcome);

        output.done("Pre-flight complete!");
        Ok(report)
    }
}

/// Status line for a tool that probed successfully.
fn found_message(tool: &str, version: Option<&str>) -> String {
    match version {
        Some(version) => format!("{} {} found", tool, version),
        None => format!("{} found", tool),
    }
}
