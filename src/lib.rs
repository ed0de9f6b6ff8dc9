//! Pycheck - pre-flight installer for Python projects.
//!
//! Pycheck verifies that a Python interpreter and pip are available on
//! PATH, then installs dependencies from `requirements.txt` in the
//! working directory. Each step shells out to the real tool and trusts
//! its exit code; the first failure is terminal.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`console`] - Console encoding configuration at startup
//! - [`error`] - Error types and result alias
//! - [`preflight`] - Probes, installer, and the step sequence
//! - [`shell`] - Child process execution
//! - [`toolchain`] - Platform command-name selection and version extraction
//! - [`ui`] - Terminal output and styling
//!
//! # Example
//!
//! ```no_run
//! use pycheck::preflight::Preflight;
//! use pycheck::toolchain::Toolchain;
//! use pycheck::ui::{Output, OutputMode};
//!
//! let output = Output::new(OutputMode::Normal);
//! let preflight = Preflight::new(Toolchain::host(), std::env::current_dir().unwrap(), false);
//! let report = preflight.run(&output).unwrap();
//! assert!(report.success());
//! ```

pub mod cli;
pub mod console;
pub mod error;
pub mod preflight;
pub mod shell;
pub mod toolchain;
pub mod ui;

pub use error::{PycheckError, Result};
