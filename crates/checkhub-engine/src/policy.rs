//! Skip policy — resolves whether a check runs or is skipped for one pass.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use checkhub_core::result::AppResult;

use crate::check::Check;
use crate::definitions::HookType;

/// Literal skip directive meaning "skip every non-required check".
const SKIP_ALL: &str = "all";

/// Immutable ambient skip configuration for one execution pass.
///
/// Parsed once from the raw skip input (originally the `SKIP_CHECKS`
/// environment variable, resolved by the caller) and passed into the
/// engine; the engine never reads the process environment itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipConfig {
    /// Skip nothing.
    #[default]
    None,
    /// Skip every non-required check.
    All,
    /// Skip checks whose name appears in the set.
    Names(HashSet<String>),
}

impl SkipConfig {
    /// Parses a raw skip directive.
    ///
    /// Absent or empty input skips nothing; the literal `all` skips every
    /// non-required check; anything else is a comma-separated list of check
    /// names. Whitespace around entries is ignored, as are empty entries.
    /// Names that match no registered check are a no-op.
    pub fn parse(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::None;
        };

        let value = value.trim();
        if value.is_empty() {
            return Self::None;
        }
        if value.eq_ignore_ascii_case(SKIP_ALL) {
            return Self::All;
        }

        let names: HashSet<String> = value
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        Self::Names(names)
    }

    /// Returns whether the configuration asks to skip the named check.
    pub fn skips(&self, name: &str) -> bool {
        match self {
            Self::None => false,
            Self::All => true,
            Self::Names(names) => names.contains(name),
        }
    }
}

/// Context handed to a check's skip decision for one execution pass.
///
/// Read-only; built by the controller at the start of a pass and discarded
/// at the end.
#[derive(Debug, Clone)]
pub struct SkipContext {
    /// The hook type being run.
    pub hook: HookType,
    /// The ambient skip configuration.
    pub config: SkipConfig,
}

impl SkipContext {
    /// Creates a new skip context.
    pub fn new(hook: HookType, config: SkipConfig) -> Self {
        Self { hook, config }
    }
}

/// Final decision for one check in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipDecision {
    /// Invoke the check's `run`.
    Run,
    /// Record `Skipped` without invoking `run`.
    Skip,
}

/// Resolves a check's own skip answer and the ambient configuration into a
/// final decision.
#[derive(Debug, Default)]
pub struct SkipPolicy;

impl SkipPolicy {
    /// Decides whether a check runs.
    ///
    /// The check's own `skip` is always consulted first so its error branch
    /// stays observable, but a required check runs regardless of the answer
    /// and regardless of ambient configuration. An `Err` from `skip`
    /// propagates to the caller, which records it as an errored outcome.
    pub async fn decide(&self, check: &dyn Check, ctx: &SkipContext) -> AppResult<SkipDecision> {
        let wants_skip = check.skip(ctx).await?;

        if check.required() {
            if wants_skip || ctx.config.skips(check.name()) {
                debug!(
                    hook = %ctx.hook,
                    check = %check.name(),
                    "Skip overridden for required check"
                );
            }
            return Ok(SkipDecision::Run);
        }

        if wants_skip || ctx.config.skips(check.name()) {
            return Ok(SkipDecision::Skip);
        }

        Ok(SkipDecision::Run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use checkhub_core::error::AppError;
    use crate::definitions::RunStatus;

    #[derive(Debug)]
    struct FixedCheck {
        name: &'static str,
        required: bool,
        wants_skip: bool,
        skip_errors: bool,
    }

    #[async_trait]
    impl Check for FixedCheck {
        fn name(&self) -> &str {
            self.name
        }

        fn required(&self) -> bool {
            self.required
        }

        async fn skip(&self, _ctx: &SkipContext) -> AppResult<bool> {
            if self.skip_errors {
                return Err(AppError::policy("skip decision failed"));
            }
            Ok(self.wants_skip)
        }

        async fn run(&self) -> AppResult<RunStatus> {
            Ok(RunStatus::Passed)
        }
    }

    fn ctx(config: SkipConfig) -> SkipContext {
        SkipContext::new(HookType::PreCommit, config)
    }

    #[test]
    fn test_parse_absent_and_empty() {
        assert_eq!(SkipConfig::parse(None), SkipConfig::None);
        assert_eq!(SkipConfig::parse(Some("")), SkipConfig::None);
        assert_eq!(SkipConfig::parse(Some("   ")), SkipConfig::None);
    }

    #[test]
    fn test_parse_all() {
        assert_eq!(SkipConfig::parse(Some("all")), SkipConfig::All);
        assert_eq!(SkipConfig::parse(Some("ALL")), SkipConfig::All);
    }

    #[test]
    fn test_parse_name_list() {
        let config = SkipConfig::parse(Some("whitespace, lint,,todo "));
        assert!(config.skips("whitespace"));
        assert!(config.skips("lint"));
        assert!(config.skips("todo"));
        assert!(!config.skips("syntax"));
        assert!(!config.skips(""));
    }

    #[tokio::test]
    async fn test_decide_default_is_run() {
        let check = FixedCheck {
            name: "lint",
            required: false,
            wants_skip: false,
            skip_errors: false,
        };
        let policy = SkipPolicy;
        let decision = policy.decide(&check, &ctx(SkipConfig::None)).await.unwrap();
        assert_eq!(decision, SkipDecision::Run);
    }

    #[tokio::test]
    async fn test_decide_honors_check_answer() {
        let check = FixedCheck {
            name: "lint",
            required: false,
            wants_skip: true,
            skip_errors: false,
        };
        let policy = SkipPolicy;
        let decision = policy.decide(&check, &ctx(SkipConfig::None)).await.unwrap();
        assert_eq!(decision, SkipDecision::Skip);
    }

    #[tokio::test]
    async fn test_decide_honors_skip_list() {
        let check = FixedCheck {
            name: "lint",
            required: false,
            wants_skip: false,
            skip_errors: false,
        };
        let policy = SkipPolicy;
        let config = SkipConfig::parse(Some("lint"));
        let decision = policy.decide(&check, &ctx(config)).await.unwrap();
        assert_eq!(decision, SkipDecision::Skip);
    }

    #[tokio::test]
    async fn test_decide_required_overrides_skip_all() {
        let check = FixedCheck {
            name: "secrets",
            required: true,
            wants_skip: true,
            skip_errors: false,
        };
        let policy = SkipPolicy;
        let decision = policy.decide(&check, &ctx(SkipConfig::All)).await.unwrap();
        assert_eq!(decision, SkipDecision::Run);
    }

    #[tokio::test]
    async fn test_decide_skip_error_propagates() {
        let check = FixedCheck {
            name: "lint",
            required: false,
            wants_skip: false,
            skip_errors: true,
        };
        let policy = SkipPolicy;
        let result = policy.decide(&check, &ctx(SkipConfig::None)).await;
        assert!(result.is_err());
    }
}
