//! Output mode and writer.

use std::io::Write;

use super::theme::{StatusKind, Theme};

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output plus the command line behind each step.
    Verbose,
    /// Show progress, status, and child tool output.
    #[default]
    Normal,
    /// Show only errors and the final result.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows the command line behind each step.
    pub fn shows_commands(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows progress messages and child output.
    pub fn shows_progress(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}

/// Output writer that respects output mode.
///
/// Status and confirmations go to stdout; errors always go to stderr,
/// regardless of mode. When stdout is not a terminal, status icons fall
/// back to their bracketed ASCII forms.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
    theme: Theme,
    plain: bool,
}

impl Output {
    /// Create a new output writer.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: Theme::new(),
            plain: !console::user_attended(),
        }
    }

    fn status_line(&self, kind: StatusKind, msg: &str) -> String {
        if self.plain {
            kind.format_plain(msg)
        } else {
            kind.format(&self.theme, msg)
        }
    }

    /// Write a progress line ("Checking for ...").
    pub fn progress(&self, msg: &str) {
        if self.mode.shows_progress() {
            println!("{}", self.status_line(StatusKind::Running, msg));
        }
    }

    /// Write a success line with its icon.
    pub fn success(&self, msg: &str) {
        if self.mode.shows_progress() {
            println!("{}", self.status_line(StatusKind::Success, msg));
        }
    }

    /// Write the final confirmation (shown even in quiet mode).
    pub fn done(&self, msg: &str) {
        let msg = if self.plain {
            msg.to_string()
        } else {
            self.theme.highlight.apply_to(msg).to_string()
        };
        println!("{}", self.status_line(StatusKind::Success, &msg));
    }

    /// Write an error line to stderr.
    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.status_line(StatusKind::Failed, msg));
    }

    /// Show a command line (dry-run listing).
    pub fn command(&self, command: &str) {
        if self.mode.shows_progress() {
            println!("  {}", self.theme.command.apply_to(command));
        }
    }

    /// Show the command line behind a step in verbose mode.
    pub fn verbose_command(&self, command: &str) {
        if self.mode.shows_commands() {
            println!("  {}", self.theme.command.apply_to(command));
        }
    }

    /// Echo captured child process output unless quiet.
    ///
    /// Probes capture the child's streams to extract a version number;
    /// this puts the raw output back on the console, preserving the
    /// behavior of running the tool with inherited streams.
    pub fn child_output(&self, output: &str) {
        if self.mode.shows_progress() && !output.is_empty() {
            print!("{}", output);
            let _ = std::io::stdout().flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_shows_commands() {
        assert!(OutputMode::Verbose.shows_commands());
        assert!(!OutputMode::Normal.shows_commands());
        assert!(!OutputMode::Quiet.shows_commands());
    }

    #[test]
    fn quiet_hides_progress_and_child_output() {
        assert!(OutputMode::Verbose.shows_progress());
        assert!(OutputMode::Normal.shows_progress());
        assert!(!OutputMode::Quiet.shows_progress());
    }

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }

    #[test]
    fn plain_status_line_uses_bracketed_icons() {
        let output = Output {
            mode: OutputMode::Normal,
            theme: Theme::new(),
            plain: true,
        };
        let line = output.status_line(StatusKind::Success, "Python found");
        assert!(line.starts_with("[ok]"));
        assert!(line.contains("Python found"));
    }
}
