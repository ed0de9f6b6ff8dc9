//! Terminal output and styling.
//!
//! This module provides:
//! - [`OutputMode`] for verbosity selection
//! - [`Output`] as the single writer all status text goes through
//! - [`Theme`] and [`StatusKind`] for colors and status icons

pub mod output;
pub mod theme;

pub use output::{Output, OutputMode};
pub use theme::{StatusKind, Theme};
