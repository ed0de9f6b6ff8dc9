//! Tool availability probes.
//!
//! A probe invokes a tool with `--version` and treats exit code 0 as
//! "installed". That is the whole check: no parsing of PATH, no guessing
//! at install locations. If the version banner yields a version number it
//! is recorded, but probe success never depends on it.

use crate::error::Result;
use crate::preflight::report::{Step, StepOutcome};
use crate::shell::{execute, format_command, CommandOptions};
use crate::toolchain::{extract_version, Toolchain, VERSION_FLAG};

/// Probe for a single tool by running `<tool> --version`.
#[derive(Debug, Clone)]
pub struct ToolProbe {
    step: Step,
    program: String,
}

impl ToolProbe {
    /// Probe for the Python interpreter.
    pub fn interpreter(toolchain: &Toolchain) -> Self {
        Self {
            step: Step::Interpreter,
            program: toolchain.python.clone(),
        }
    }

    /// Probe for pip.
    pub fn package_manager(toolchain: &Toolchain) -> Self {
        Self {
            step: Step::PackageManager,
            program: toolchain.pip.clone(),
        }
    }

    /// Which step this probe implements.
    pub fn step(&self) -> Step {
        self.step
    }

    /// The command line this probe runs.
    pub fn command(&self) -> String {
        format_command(&self.program, &[VERSION_FLAG])
    }

    /// Run the probe. Success iff the child exits with code 0.
    ///
    /// Output is captured rather than inherited so the version banner can
    /// be summarized; the orchestrator re-emits the raw output so the
    /// banner still reaches the console as if the streams were inherited.
    /// Older Pythons print `--version` to stderr, so both streams are
    /// searched for a version number.
    pub fn run(&self) -> Result<StepOutcome> {
        let options = CommandOptions {
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        };

        tracing::debug!("probing for {} with `{}`", self.step.label(), self.command());
        let result = execute(&self.program, &[VERSION_FLAG], &options)?;

        let combined = format!("{}{}", result.stdout, result.stderr);
        let version = if result.success {
            extract_version(&combined)
        } else {
            None
        };

        Ok(StepOutcome {
            step: self.step,
            command: self.command(),
            exit_code: result.exit_code,
            success: result.success,
            version,
            output: combined,
            duration: result.duration,
        })
    }
}
