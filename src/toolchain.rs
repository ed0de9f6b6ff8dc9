//! Platform command-name selection and version extraction.
//!
//! The interpreter and package manager go by different names depending on
//! the host: Windows installers put `python` and `pip` on PATH, while most
//! Unix distributions ship `python3` and `pip3` and reserve the bare names
//! for a legacy Python 2. Both names can be overridden for CI and tests.

/// Flag passed to a tool to request its version.
pub const VERSION_FLAG: &str = "--version";

/// Manifest file the package manager installs from, relative to the
/// working directory.
pub const MANIFEST_FILE: &str = "requirements.txt";

/// The interpreter/package-manager command pair for this run.
#[derive(Debug, Clone)]
pub struct Toolchain {
    /// Python interpreter invocation name.
    pub python: String,

    /// pip invocation name.
    pub pip: String,
}

impl Toolchain {
    /// The conventional command pair for the host platform.
    pub fn host() -> Self {
        if cfg!(target_os = "windows") {
            Self {
                python: "python".to_string(),
                pip: "pip".to_string(),
            }
        } else {
            Self {
                python: "python3".to_string(),
                pip: "pip3".to_string(),
            }
        }
    }

    /// Host toolchain with optional per-tool overrides applied.
    pub fn with_overrides(python: Option<String>, pip: Option<String>) -> Self {
        let host = Self::host();
        Self {
            python: python.unwrap_or(host.python),
            pip: pip.unwrap_or(host.pip),
        }
    }
}

impl Default for Toolchain {
    fn default() -> Self {
        Self::host()
    }
}

/// Extract a version number from `--version` output.
pub fn extract_version(output: &str) -> Option<String> {
    // Ordered most-specific first; the bare two-part pattern catches
    // pip's "pip 24.0 from ..." banner.
    let patterns = [
        r"(\d+\.\d+\.\d+)",
        r"version\s+(\d+\.\d+)",
        r"v(\d+\.\d+)",
        r"\b(\d+\.\d+)\b",
    ];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_pair_matches_platform_convention() {
        let toolchain = Toolchain::host();
        if cfg!(target_os = "windows") {
            assert_eq!(toolchain.python, "python");
            assert_eq!(toolchain.pip, "pip");
        } else {
            assert_eq!(toolchain.python, "python3");
            assert_eq!(toolchain.pip, "pip3");
        }
    }

    #[test]
    fn overrides_replace_host_names() {
        let toolchain = Toolchain::with_overrides(
            Some("python3.12".to_string()),
            Some("/opt/venv/bin/pip".to_string()),
        );
        assert_eq!(toolchain.python, "python3.12");
        assert_eq!(toolchain.pip, "/opt/venv/bin/pip");
    }

    #[test]
    fn partial_overrides_keep_host_defaults() {
        let host = Toolchain::host();
        let toolchain = Toolchain::with_overrides(Some("pypy3".to_string()), None);
        assert_eq!(toolchain.python, "pypy3");
        assert_eq!(toolchain.pip, host.pip);
    }

    #[test]
    fn extract_version_from_python_output() {
        let output = "Python 3.12.1";
        assert_eq!(extract_version(output), Some("3.12.1".to_string()));
    }

    #[test]
    fn extract_version_from_pip_output() {
        let output = "pip 24.0 from /usr/lib/python3/dist-packages/pip (python 3.12)";
        assert_eq!(extract_version(output), Some("24.0".to_string()));
    }

    #[test]
    fn extract_version_no_match() {
        assert!(extract_version("no version here").is_none());
    }
}
