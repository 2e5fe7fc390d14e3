//! Result aggregation — folds per-check outcomes into a pass/fail verdict.

use serde::{Deserialize, Serialize};

use crate::definitions::{CheckOutcome, HookType};

/// Outcome recorded for one check, in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// The check's identity.
    pub name: String,
    /// What happened to it during the pass.
    pub outcome: CheckOutcome,
}

impl CheckReport {
    /// Creates a new check report.
    pub fn new(name: impl Into<String>, outcome: CheckOutcome) -> Self {
        Self {
            name: name.into(),
            outcome,
        }
    }
}

/// Aggregated result of one execution pass for a hook type.
///
/// Retains every per-check outcome in registration order so an external
/// reporter can surface failures and errors distinguishably.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// The hook type that was run.
    pub hook: HookType,
    /// Per-check outcomes in registration order.
    pub checks: Vec<CheckReport>,
    /// Number of checks that ran and passed.
    pub passed: usize,
    /// Number of checks that ran and failed.
    pub failed: usize,
    /// Number of checks that errored (in `run` or in their skip decision).
    pub errored: usize,
    /// Number of checks that were skipped.
    pub skipped: usize,
    /// Overall verdict: true iff no check failed or errored.
    pub success: bool,
}

impl RunReport {
    /// Creates a vacuously successful report with zero checks.
    pub fn empty(hook: HookType) -> Self {
        aggregate(hook, Vec::new())
    }
}

/// Folds an ordered list of per-check outcomes into a [`RunReport`].
///
/// Pure function: the verdict is failure iff any outcome is blocking;
/// skipped checks never affect it.
pub fn aggregate(hook: HookType, checks: Vec<CheckReport>) -> RunReport {
    let mut passed = 0;
    let mut failed = 0;
    let mut errored = 0;
    let mut skipped = 0;

    for check in &checks {
        match check.outcome {
            CheckOutcome::Passed => passed += 1,
            CheckOutcome::Failed { .. } => failed += 1,
            CheckOutcome::Errored { .. } => errored += 1,
            CheckOutcome::Skipped => skipped += 1,
        }
    }

    let success = failed == 0 && errored == 0;

    RunReport {
        hook,
        checks,
        passed,
        failed,
        errored,
        skipped,
        success,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_success() {
        let report = RunReport::empty(HookType::PreCommit);
        assert!(report.success);
        assert!(report.checks.is_empty());
        assert_eq!(report.passed, 0);
    }

    #[test]
    fn test_skipped_checks_do_not_fail_the_pass() {
        let report = aggregate(
            HookType::PreCommit,
            vec![
                CheckReport::new("lint", CheckOutcome::Passed),
                CheckReport::new("todo", CheckOutcome::Skipped),
            ],
        );
        assert!(report.success);
        assert_eq!(report.passed, 1);
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn test_failure_fails_the_pass() {
        let report = aggregate(
            HookType::PreCommit,
            vec![
                CheckReport::new("lint", CheckOutcome::Passed),
                CheckReport::new(
                    "whitespace",
                    CheckOutcome::Failed {
                        message: Some("trailing whitespace".to_string()),
                    },
                ),
            ],
        );
        assert!(!report.success);
        assert_eq!(report.failed, 1);
    }

    #[test]
    fn test_error_fails_the_pass() {
        let report = aggregate(
            HookType::CommitMsg,
            vec![CheckReport::new(
                "syntax",
                CheckOutcome::Errored {
                    message: "interpreter missing".to_string(),
                },
            )],
        );
        assert!(!report.success);
        assert_eq!(report.errored, 1);
    }

    #[test]
    fn test_report_serializes_for_reporters() {
        let report = aggregate(
            HookType::PreCommit,
            vec![CheckReport::new("lint", CheckOutcome::Skipped)],
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["hook"], "pre-commit");
        assert_eq!(json["success"], true);
        assert_eq!(json["checks"][0]["outcome"], "skipped");
    }

    #[test]
    fn test_outcomes_keep_input_order() {
        let checks = vec![
            CheckReport::new("b", CheckOutcome::Skipped),
            CheckReport::new("a", CheckOutcome::Passed),
        ];
        let report = aggregate(HookType::PrePush, checks.clone());
        assert_eq!(report.checks, checks);
    }
}
