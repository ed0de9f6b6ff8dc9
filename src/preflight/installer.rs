//! Dependency installation via pip.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::preflight::report::{Step, StepOutcome};
use crate::shell::{execute, format_command, CommandOptions};
use crate::toolchain::{Toolchain, MANIFEST_FILE};

/// Installs dependencies by running `pip install -r requirements.txt`.
///
/// The manifest is not read or validated here; if it is missing or
/// malformed, pip reports that itself and exits non-zero. Whatever pip
/// does internally (partial installs included) is accepted as-is.
#[derive(Debug, Clone)]
pub struct DependencyInstaller {
    pip: String,
    project_root: PathBuf,
}

impl DependencyInstaller {
    /// Create an installer running in the given project root.
    pub fn new(toolchain: &Toolchain, project_root: &Path) -> Self {
        Self {
            pip: toolchain.pip.clone(),
            project_root: project_root.to_path_buf(),
        }
    }

    /// The command line this installer runs.
    pub fn command(&self) -> String {
        format_command(&self.pip, &["install", "-r", MANIFEST_FILE])
    }

    /// Run the install. Success iff pip exits with code 0.
    ///
    /// pip's streams are inherited so resolver progress and error detail
    /// reach the user live, unfiltered.
    pub fn run(&self) -> Result<StepOutcome> {
        let options = CommandOptions {
            cwd: Some(self.project_root.clone()),
            ..Default::default()
        };

        tracing::debug!("installing dependencies with `{}`", self.command());
        let result = execute(&self.pip, &["install", "-r", MANIFEST_FILE], &options)?;

        Ok(StepOutcome {
            step: Step::Install,
            command: self.command(),
            exit_code: result.exit_code,
            success: result.success,
            version: None,
            output: String::new(),
            duration: result.duration,
        })
    }
}
