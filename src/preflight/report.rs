//! Step outcome types for the pre-flight sequence.
//!
//! Each step produces a [`StepOutcome`] recording what ran and how it
//! exited. A [`PreflightReport`] collects the outcomes of one run; because
//! the sequence short-circuits, steps after the first failure are simply
//! absent from the report, not marked failed.

use std::time::Duration;

/// The three steps of a pre-flight run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Probe for the Python interpreter.
    Interpreter,
    /// Probe for pip.
    PackageManager,
    /// Install dependencies from the manifest.
    Install,
}

impl Step {
    /// Human-readable label for status output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Interpreter => "Python",
            Self::PackageManager => "pip",
            Self::Install => "dependency install",
        }
    }
}

/// The result of running a single pre-flight step.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    /// Which step this outcome belongs to.
    pub step: Step,
    /// The command line that was executed.
    pub command: String,
    /// Child exit code (None if killed by signal or not spawnable).
    pub exit_code: Option<i32>,
    /// Whether the child exited with code 0.
    pub success: bool,
    /// Version number extracted from probe output, when one was found.
    pub version: Option<String>,
    /// Captured child output (probes only; the installer inherits streams).
    pub output: String,
    /// How long the child ran.
    pub duration: Duration,
}

/// The outcomes of one pre-flight run.
#[derive(Debug, Clone, Default)]
pub struct PreflightReport {
    outcomes: Vec<StepOutcome>,
}

impl PreflightReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a step outcome.
    pub fn push(&mut self, outcome: StepOutcome) {
        self.outcomes.push(outcome);
    }

    /// The recorded outcomes, in execution order.
    pub fn outcomes(&self) -> &[StepOutcome] {
        &self.outcomes
    }

    /// Whether every recorded step succeeded.
    pub fn success(&self) -> bool {
        self.outcomes.iter().all(|o| o.success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(step: Step, success: bool) -> StepOutcome {
        StepOutcome {
            step,
            command: "fake --version".to_string(),
            exit_code: Some(if success { 0 } else { 1 }),
            success,
            version: None,
            output: String::new(),
            duration: Duration::from_millis(5),
        }
    }

    #[test]
    fn step_labels_are_distinct() {
        assert_ne!(Step::Interpreter.label(), Step::PackageManager.label());
        assert_ne!(Step::PackageManager.label(), Step::Install.label());
    }

    #[test]
    fn empty_report_is_success() {
        let report = PreflightReport::new();
        assert!(report.success());
    }

    #[test]
    fn all_passing_report_is_success() {
        let mut report = PreflightReport::new();
        report.push(outcome(Step::Interpreter, true));
        report.push(outcome(Step::PackageManager, true));
        report.push(outcome(Step::Install, true));
        assert!(report.success());
        assert_eq!(report.outcomes().len(), 3);
    }

    #[test]
    fn failed_step_fails_the_report() {
        let mut report = PreflightReport::new();
        report.push(outcome(Step::Interpreter, true));
        report.push(outcome(Step::PackageManager, false));
        assert!(!report.success());
    }

    #[test]
    fn outcome_fields_accessible() {
        let o = StepOutcome {
            step: Step::Interpreter,
            command: "python3 --version".to_string(),
            exit_code: Some(0),
            success: true,
            version: Some("3.12.1".to_string()),
            output: "Python 3.12.1\n".to_string(),
            duration: Duration::from_millis(20),
        };
        assert_eq!(o.step, Step::Interpreter);
        assert_eq!(o.version.as_deref(), Some("3.12.1"));
        assert!(o.output.contains("3.12.1"));
    }
}
