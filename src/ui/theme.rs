//! Visual theme and status icons.

use console::Style;

/// Pycheck's visual theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for commands shown in output (dim italic).
    pub command: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            command: Style::new().dim().italic(),
            highlight: Style::new().bold(),
        }
    }
}

/// Canonical status kinds used across pycheck output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Step completed successfully.
    Success,
    /// Step failed.
    Failed,
    /// Step is currently running.
    Running,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Running => "◆",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Success => "[ok]",
            Self::Failed => "[FAIL]",
            Self::Running => "[run]",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &Theme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Running => theme.dim.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &Theme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }

    /// Format a status line for non-TTY: bracketed + message.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.bracketed(), msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_are_distinct() {
        assert_ne!(StatusKind::Success.icon(), StatusKind::Failed.icon());
        assert_ne!(StatusKind::Success.icon(), StatusKind::Running.icon());
    }

    #[test]
    fn bracketed_fallbacks_are_ascii() {
        for kind in [StatusKind::Success, StatusKind::Failed, StatusKind::Running] {
            assert!(kind.bracketed().is_ascii());
        }
    }

    #[test]
    fn format_includes_message() {
        let theme = Theme::new();
        let line = StatusKind::Success.format(&theme, "Python found");
        assert!(line.contains("Python found"));
    }

    #[test]
    fn format_plain_uses_bracketed_icon() {
        let line = StatusKind::Failed.format_plain("install failed");
        assert!(line.starts_with("[FAIL]"));
        assert!(line.contains("install failed"));
    }

    #[test]
    fn default_theme_constructs() {
        let _ = Theme::default();
    }
}
