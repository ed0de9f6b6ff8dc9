//! Error types for pycheck operations.
//!
//! This module defines [`PycheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - One variant per failure cause the tool reports: a missing tool, a
//!   failed install, or a child process that could not be executed
//! - All errors should provide actionable messages for users

use thiserror::Error;

/// Core error type for pycheck operations.
#[derive(Debug, Error)]
pub enum PycheckError {
    /// A required tool was probed for and is not available.
    #[error("{tool} is not installed or not on PATH (checked with `{command}`)")]
    ToolMissing { tool: String, command: String },

    /// The package manager ran but the install did not complete.
    #[error("failed to install dependencies from {manifest} ({detail})")]
    InstallFailed { manifest: String, detail: String },

    /// A child process could not be executed at all.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },
}

impl PycheckError {
    /// Describe a non-zero install exit for [`PycheckError::InstallFailed`].
    pub fn install_exit_detail(code: Option<i32>) -> String {
        match code {
            Some(code) => format!("pip exited with code {}", code),
            None => "pip was terminated by a signal".to_string(),
        }
    }
}

/// Result type alias for pycheck operations.
pub type Result<T> = std::result::Result<T, PycheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_missing_displays_tool_and_command() {
        let err = PycheckError::ToolMissing {
            tool: "Python".into(),
            command: "python3 --version".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Python"));
        assert!(msg.contains("python3 --version"));
        assert!(msg.contains("not on PATH"));
    }

    #[test]
    fn install_failed_displays_manifest_and_detail() {
        let err = PycheckError::InstallFailed {
            manifest: "requirements.txt".into(),
            detail: PycheckError::install_exit_detail(Some(1)),
        };
        let msg = err.to_string();
        assert!(msg.contains("requirements.txt"));
        assert!(msg.contains("pip exited with code 1"));
    }

    #[test]
    fn install_exit_detail_handles_signal_death() {
        let detail = PycheckError::install_exit_detail(None);
        assert!(detail.contains("signal"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = PycheckError::CommandFailed {
            command: "pip3 install -r requirements.txt".into(),
            code: Some(2),
        };
        let msg = err.to_string();
        assert!(msg.contains("pip3 install"));
        assert!(msg.contains("2"));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(PycheckError::ToolMissing {
                tool: "pip".into(),
                command: "pip3 --version".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
