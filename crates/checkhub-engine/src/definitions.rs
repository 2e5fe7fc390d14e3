//! Hook type and outcome definitions.

use serde::{Deserialize, Serialize};

/// Enumeration of all hook types the engine can run checks for.
///
/// Each hook type owns an ordered list of registered checks; the set of
/// types is fixed at compile time while the checks behind them are plugged
/// in at startup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HookType {
    /// Fired before a commit is recorded.
    PreCommit,
    /// Fired before the commit message editor is opened.
    PrepareCommitMsg,
    /// Fired to validate the commit message.
    CommitMsg,
    /// Fired after a commit is recorded.
    PostCommit,
    /// Fired before refs are pushed to a remote.
    PrePush,
    /// Fired after a checkout completes.
    PostCheckout,
    /// Fired after a merge completes.
    PostMerge,
    /// Fired after commits are rewritten (amend, rebase).
    PostRewrite,
}

impl HookType {
    /// Returns the conventional hook name for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PreCommit => "pre-commit",
            Self::PrepareCommitMsg => "prepare-commit-msg",
            Self::CommitMsg => "commit-msg",
            Self::PostCommit => "post-commit",
            Self::PrePush => "pre-push",
            Self::PostCheckout => "post-checkout",
            Self::PostMerge => "post-merge",
            Self::PostRewrite => "post-rewrite",
        }
    }
}

impl std::fmt::Display for HookType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status a check reports when its `run` completes normally.
///
/// `Failed` is an expected negative result (the check did its job and the
/// repository state did not pass). Abnormal conditions are reported through
/// `AppError` instead and surface as [`CheckOutcome::Errored`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// The check passed.
    Passed,
    /// The check found a problem.
    Failed {
        /// Optional detail for the reporter.
        message: Option<String>,
    },
}

/// Final outcome recorded for one check during one execution pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckOutcome {
    /// The check ran and passed.
    Passed,
    /// The check ran and found a problem.
    Failed {
        /// Optional detail for the reporter.
        message: Option<String>,
    },
    /// The check (or its skip decision) raised an abnormal condition.
    Errored {
        /// Description of the condition.
        message: String,
    },
    /// The check was skipped without running.
    Skipped,
}

impl CheckOutcome {
    /// Returns whether this outcome fails the overall pass.
    ///
    /// Skipped checks never affect the overall verdict.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Failed { .. } | Self::Errored { .. })
    }

    /// Returns the short status label for this outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed { .. } => "failed",
            Self::Errored { .. } => "errored",
            Self::Skipped => "skipped",
        }
    }
}

impl From<RunStatus> for CheckOutcome {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Passed => Self::Passed,
            RunStatus::Failed { message } => Self::Failed { message },
        }
    }
}

impl std::fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
